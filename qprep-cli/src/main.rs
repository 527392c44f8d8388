//! qprep command-line entry point

mod interactive;
mod parse;
mod render;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use qprep_backend::{LocalBackendConfig, LocalStateVectorBackend, StateBackend, StatePreparer};
use qprep_core::{NormalizerConfig, DEFAULT_NORM_TOLERANCE, DEFAULT_ZERO_EPSILON};

#[derive(Parser, Debug)]
#[command(
    name = "qprep",
    version,
    about = "Prepare a valid n-qubit quantum state from raw amplitudes"
)]
struct Cli {
    /// Comma-separated amplitudes in basis order, e.g. "1,0,1,0" or "0.5+0.5i,0,0,0.5-0.5i".
    /// Omit to run interactively.
    #[arg(short, long, value_delimiter = ',')]
    amplitudes: Option<Vec<String>>,

    /// Expected qubit count, cross-checked against the amplitude count
    #[arg(short = 'n', long)]
    qubits: Option<usize>,

    /// Sample this many measurement shots from the prepared state
    #[arg(long)]
    shots: Option<usize>,

    /// RNG seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Skip rescaling when |sum of squared magnitudes - 1| is at or below this
    #[arg(long, default_value_t = DEFAULT_NORM_TOLERANCE)]
    tolerance: f64,

    /// Reject the vector as zero when its squared norm is at or below this
    #[arg(long, default_value_t = DEFAULT_ZERO_EPSILON)]
    epsilon: f64,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = NormalizerConfig::new()
        .with_norm_tolerance(cli.tolerance)
        .with_zero_epsilon(cli.epsilon);
    config
        .validate()
        .map_err(|e| anyhow!("invalid tolerance settings: {}", e))?;

    let backend = LocalStateVectorBackend::with_config(LocalBackendConfig {
        seed: cli.seed,
        ..Default::default()
    });
    let preparer = StatePreparer::with_config(backend, config);

    match cli.amplitudes {
        Some(ref inputs) => run_once(&cli, inputs, &preparer),
        None => interactive::run(&preparer),
    }
}

fn run_once(
    cli: &Cli,
    inputs: &[String],
    preparer: &StatePreparer<LocalStateVectorBackend>,
) -> Result<()> {
    if let Some(n) = cli.qubits {
        let expected = u32::try_from(n)
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))
            .with_context(|| format!("qubit count {} is out of range", n))?;
        if inputs.len() != expected {
            bail!(
                "a {}-qubit state requires {} amplitude(s), got {}",
                n,
                expected,
                inputs.len()
            );
        }
    }

    let amplitudes = parse::parse_amplitudes(inputs)?;
    let result = preparer.prepare_raw(amplitudes)?;

    let counts = match cli.shots {
        Some(shots) => Some(preparer.backend().sample(&result.state, shots)?),
        None => None,
    };

    if cli.json {
        let value = render::to_json(&result, counts.as_ref());
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        render::print_result(&result);
        if let (Some(counts), Some(shots)) = (counts.as_ref(), cli.shots) {
            render::print_counts(counts, shots);
        }
    }

    Ok(())
}
