//! Benchmark binary
//!
//! Runs one batch of each benchmark and prints one JSON report per line.
//! Substring options come from `MICROBENCH_*` environment variables; the loop
//! count from `MICROBENCH_LOOPS`.

use microbench::{BenchError, FloatMaxMinBench, Harness, MicroBench, StringIndexOfBench, StringSearchConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOOPS: u64 = 1000;

fn loops_from_env() -> Result<u64, BenchError> {
    match std::env::var("MICROBENCH_LOOPS") {
        Ok(v) => v.trim().parse().map_err(|_| BenchError::InvalidOption {
            name: "MICROBENCH_LOOPS",
            value: v,
        }),
        Err(_) => Ok(DEFAULT_LOOPS),
    }
}

fn run(harness: &mut Harness, bench: &mut dyn MicroBench, loops: u64) -> Result<(), BenchError> {
    let report = harness.run(bench, loops)?;
    match serde_json::to_string(&report) {
        Ok(line) => println!("{}", line),
        Err(err) => tracing::error!(error = %err, "failed to serialize report"),
    }
    Ok(())
}

fn main() -> Result<(), BenchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // All setup happens before the first timed window.
    let config = StringSearchConfig::from_env()?;
    let loops = loops_from_env()?;
    let mut string_bench = StringIndexOfBench::from_config(&config);
    let mut float_bench = FloatMaxMinBench::new();

    let mut harness = Harness::new();
    run(&mut harness, &mut string_bench, loops)?;
    run(&mut harness, &mut float_bench, loops)?;
    Ok(())
}
