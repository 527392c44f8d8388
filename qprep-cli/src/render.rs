//! Result rendering for the terminal

use qprep_backend::PreparationResult;
use serde_json::json;
use std::collections::HashMap;

/// Print a preparation result as human-readable text
pub fn print_result(result: &PreparationResult) {
    let qubits = result.num_qubits();

    if result.was_rescaled() {
        println!(
            "Input was not normalized (sum of |a|^2 = {:.6}); rescaled to unit norm.",
            result.normalized.input_norm_sqr()
        );
    }

    println!("Normalized state vector ({} qubit(s)):", qubits.count());
    for (index, amplitude) in result.normalized.iter().enumerate() {
        println!(
            "  |{}⟩  {:+.6}{:+.6}i   (p = {:.6})",
            result.state.basis_label(index),
            amplitude.re,
            amplitude.im,
            amplitude.norm_sqr()
        );
    }

    println!(
        "Sum of squared magnitudes: {:.6}",
        result.normalized.norm_sqr()
    );
    println!(
        "Prepared as state {} on '{}'",
        result.state.id(),
        result.state.backend_name()
    );
}

/// Print measurement counts, most common first
pub fn print_counts(counts: &HashMap<String, usize>, shots: usize) {
    let mut entries: Vec<_> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!("Measurement counts ({} shots):", shots);
    for (bitstring, count) in entries {
        println!("  |{}⟩  {}", bitstring, count);
    }
}

/// Render a preparation result as a JSON value
pub fn to_json(
    result: &PreparationResult,
    counts: Option<&HashMap<String, usize>>,
) -> serde_json::Value {
    let amplitudes: Vec<[f64; 2]> = result
        .normalized
        .iter()
        .map(|a| [a.re, a.im])
        .collect();

    let mut value = json!({
        "qubits": result.num_qubits().count(),
        "dimension": result.normalized.dimension(),
        "was_rescaled": result.was_rescaled(),
        "input_norm_sqr": result.normalized.input_norm_sqr(),
        "norm_sqr": result.normalized.norm_sqr(),
        "amplitudes": amplitudes,
        "probabilities": result.state.probabilities(),
        "state": {
            "id": result.state.id().to_string(),
            "backend": result.state.backend_name(),
        },
    });

    if let Some(counts) = counts {
        value["counts"] = json!(counts);
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use qprep_backend::{LocalStateVectorBackend, StatePreparer};
    use qprep_core::Complex64;

    fn sample_result() -> PreparationResult {
        StatePreparer::new(LocalStateVectorBackend::new())
            .prepare_raw(vec![Complex64::new(1.0, 0.0); 4])
            .unwrap()
    }

    #[test]
    fn test_json_shape() {
        let result = sample_result();
        let value = to_json(&result, None);

        assert_eq!(value["qubits"], 2);
        assert_eq!(value["dimension"], 4);
        assert_eq!(value["was_rescaled"], true);
        assert_eq!(value["amplitudes"].as_array().unwrap().len(), 4);
        assert!(value.get("counts").is_none());
    }

    #[test]
    fn test_json_includes_counts_when_sampled() {
        let result = sample_result();
        let mut counts = HashMap::new();
        counts.insert("00".to_string(), 10usize);

        let value = to_json(&result, Some(&counts));
        assert_eq!(value["counts"]["00"], 10);
    }
}
