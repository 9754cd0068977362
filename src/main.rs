//! Command-line interface for gtpc-datagen
//!
//! # Usage Examples
//!
//! ```bash
//! # One warehouse with the default seed
//! gtpc-datagen --directory ./out --warehouses 1
//!
//! # Ten warehouses, custom seed, reduced cardinalities
//! gtpc-datagen -d ./out -w 10 --seed 7 --scale small.yaml
//!
//! # Map supplier id 0 onto the last supplier
//! gtpc-datagen -d ./out -w 2 --supplier-ids one-based
//! ```
//!
//! Set `RUST_LOG=debug` for per-stream progress.

use anyhow::Context;
use clap::Parser;
use gtpc_populate_csv::{DatagenArgs, GraphPopulator};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gtpc-datagen")]
#[command(about = "Generates the GTPC graph benchmark dataset as pipe-delimited CSV files")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: DatagenArgs,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    let scale_file = cli.args.scale.clone();
    let config = cli
        .args
        .into_config()
        .with_context(|| format!("Failed to load scale from {scale_file:?}"))?;
    let output_dir = config.output_dir.clone();

    let mut populator = GraphPopulator::new(config)
        .with_context(|| format!("Invalid configuration for {}", output_dir.display()))?;
    let metrics = populator
        .run()
        .with_context(|| format!("Failed to generate dataset into {}", output_dir.display()))?;

    tracing::info!(
        "Generated {} streams ({} rows, {} bytes) in {:.2?}",
        metrics
            .entities
            .iter()
            .map(|e| e.streams.len())
            .sum::<usize>(),
        metrics.rows_written(),
        metrics.bytes_written(),
        start_time.elapsed()
    );

    Ok(())
}
