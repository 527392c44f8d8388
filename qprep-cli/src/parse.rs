//! Amplitude parsing for user input

use num_complex::Complex64;
use std::str::FromStr;
use thiserror::Error;

/// Failure to read a user-supplied amplitude literal
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Invalid amplitude '{input}': expected a real or complex number such as '5', '-1.2', or '3+4i'")]
pub struct ParseAmplitudeError {
    input: String,
}

/// Parse one amplitude literal
///
/// Accepts real values ("5", "-1.2", "1e-3") and complex values in `a+bi`
/// form. The imaginary unit may be written `i` or `j`, and whitespace inside
/// the literal is ignored.
pub fn parse_amplitude(input: &str) -> Result<Complex64, ParseAmplitudeError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == 'j' || c == 'J' { 'i' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(ParseAmplitudeError {
            input: input.trim().to_string(),
        });
    }

    Complex64::from_str(&cleaned).map_err(|_| ParseAmplitudeError {
        input: input.trim().to_string(),
    })
}

/// Parse a comma-separated amplitude list
pub fn parse_amplitudes<S: AsRef<str>>(
    inputs: &[S],
) -> Result<Vec<Complex64>, ParseAmplitudeError> {
    inputs
        .iter()
        .map(|s| parse_amplitude(s.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_amplitude("5").unwrap(), Complex64::new(5.0, 0.0));
        assert_eq!(parse_amplitude("-1.2").unwrap(), Complex64::new(-1.2, 0.0));
        assert_eq!(parse_amplitude("1e-3").unwrap(), Complex64::new(1e-3, 0.0));
    }

    #[test]
    fn test_parse_complex() {
        assert_eq!(parse_amplitude("3+4i").unwrap(), Complex64::new(3.0, 4.0));
        assert_eq!(parse_amplitude("1-1i").unwrap(), Complex64::new(1.0, -1.0));
        assert_eq!(parse_amplitude("2i").unwrap(), Complex64::new(0.0, 2.0));
    }

    #[test]
    fn test_parse_j_suffix() {
        assert_eq!(parse_amplitude("3+4j").unwrap(), Complex64::new(3.0, 4.0));
        assert_eq!(parse_amplitude("1J").unwrap(), Complex64::new(0.0, 1.0));
    }

    #[test]
    fn test_parse_ignores_inner_whitespace() {
        assert_eq!(
            parse_amplitude(" 0.5 + 0.5i ").unwrap(),
            Complex64::new(0.5, 0.5)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_amplitude("").is_err());
        assert!(parse_amplitude("   ").is_err());
        assert!(parse_amplitude("abc").is_err());
        assert!(parse_amplitude("1+2k").is_err());
    }

    #[test]
    fn test_parse_list() {
        let values = parse_amplitudes(&["1", "0", "0", "1i"]).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[3], Complex64::new(0.0, 1.0));
    }

    #[test]
    fn test_parse_list_reports_first_bad_entry() {
        let err = parse_amplitudes(&["1", "oops", "0"]).unwrap_err();
        assert!(format!("{}", err).contains("oops"));
    }
}
