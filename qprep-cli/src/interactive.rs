//! Interactive prompt loop
//!
//! Collects a qubit count and one amplitude per basis state from stdin, then
//! hands the raw values to the preparation pipeline. All numeric checks live
//! in the pipeline; this layer only gathers input and reports outcomes.

use crate::parse::parse_amplitude;
use crate::render;
use anyhow::Result;
use qprep_backend::{LocalStateVectorBackend, StateBackend, StatePreparer};
use qprep_core::Complex64;
use std::io::{self, BufRead, Write};

/// Prompt for one line; returns `None` on end of input
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the interactive preparation loop until the user exits
pub fn run(preparer: &StatePreparer<LocalStateVectorBackend>) -> Result<()> {
    let max_qubits = preparer.backend().capabilities().max_qubits;

    println!("--- Interactive n-qubit state preparation ---");

    loop {
        let Some(answer) = prompt("\nEnter the number of qubits (n, empty to exit): ")? else {
            break;
        };
        if answer.is_empty() {
            println!("Exiting.");
            break;
        }

        let num_qubits: usize = match answer.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Error: please enter a non-negative integer.");
                continue;
            }
        };
        if num_qubits > max_qubits {
            println!(
                "Error: this backend supports at most {} qubits.",
                max_qubits
            );
            continue;
        }

        let dimension = 1usize << num_qubits;
        println!(
            "A {}-qubit state requires {} amplitude(s).",
            num_qubits, dimension
        );
        println!("Complex values may use 'i' or 'j' (e.g. '3+4i').");

        let Some(amplitudes) = collect_amplitudes(num_qubits, dimension)? else {
            break;
        };

        match preparer.prepare_raw(amplitudes) {
            Ok(result) => {
                println!();
                render::print_result(&result);
            }
            Err(e) => println!("\nError: {}", e),
        }

        let Some(again) = prompt("\nPrepare another state? (y/n, default y): ")? else {
            break;
        };
        if again.eq_ignore_ascii_case("n") {
            println!("Exiting.");
            break;
        }
    }

    Ok(())
}

/// Collect one amplitude per basis state, retrying on parse failure
///
/// Returns `None` when input ends before the vector is complete.
fn collect_amplitudes(num_qubits: usize, dimension: usize) -> Result<Option<Vec<Complex64>>> {
    let mut amplitudes = Vec::with_capacity(dimension);

    for index in 0..dimension {
        loop {
            let label = format!("{:0width$b}", index, width = num_qubits);
            let Some(input) = prompt(&format!("  Amplitude for |{}⟩: ", label))? else {
                return Ok(None);
            };

            match parse_amplitude(&input) {
                Ok(value) => {
                    amplitudes.push(value);
                    break;
                }
                Err(e) => println!("    {}", e),
            }
        }
    }

    Ok(Some(amplitudes))
}
