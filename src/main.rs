//! mktest CLI - writes a synthetic travel-profile dataset as CSV.

use anyhow::{Context, Result};
use clap::Parser;
use mktest::DatasetPipeline;
use mktest::models::params::DEFAULT_OUTPUT;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "mktest")]
#[command(version)]
#[command(about = "Generate random name/country/travel test data as CSV")]
struct Cli {
    /// Path to output CSV file (its directory must exist)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let pipeline = DatasetPipeline::new(cli.output);
    let stats = pipeline
        .run(&mut rand::rng())
        .with_context(|| format!("Failed to write dataset to {:?}", pipeline.output()))?;

    info!("Dataset written");

    println!("\n=== Dataset Generation Complete ===");
    println!("Rows:        {}", stats.total_rows);
    println!("Pool size:   {}", stats.pool_size);
    println!("Visited:     {} distinct", stats.distinct_visited);
    println!("Mean visits: {:.2}", stats.mean_visited);
    println!(
        "Correlated:  {} ({:.1}%)",
        stats.correlated_rows,
        stats.correlated_rate * 100.0
    );
    println!("Runtime:     {:.3}s", stats.runtime_secs);
    println!("Output:      {:?}", pipeline.output());

    Ok(())
}
