//! Benchmark runner for the naive matmul kernel.

use anyhow::{Context, Result};
use clap::Parser;

use matmul_bench::logging::init_logging;
use matmul_bench::{BenchArgs, BenchConfig, Harness};

fn main() -> Result<()> {
    let args = BenchArgs::parse();
    init_logging("info");

    let config = BenchConfig::from_args(args)?;
    let out = config.out.clone();

    println!("=== Naive Matrix Multiplication Benchmark ===\n");

    let records = Harness::new(config)
        .run()
        .with_context(|| format!("benchmark aborted, results in {}", out.display()))?;

    println!("\n{} trials appended to {}", records.len(), out.display());
    Ok(())
}
