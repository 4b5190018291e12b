//! Dataset generation pipeline.
//!
//! Pipeline flow:
//! Entropy → Country Pool → 100 × Row → CSV file

use crate::generate::{CountryPool, Entropy, generate_row};
use crate::models::params::ROW_COUNT;
use crate::models::{Dataset, Result, RunStats, Row};
use crate::output::save_csv;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Build one pool and generate exactly [`ROW_COUNT`] rows against it.
pub fn generate_dataset<E: Entropy + ?Sized>(entropy: &mut E) -> Dataset {
    let pool = CountryPool::build(entropy);
    let rows: Vec<Row> = (0..ROW_COUNT)
        .map(|_| generate_row(&pool, entropy))
        .collect();

    info!(
        rows = rows.len(),
        pool_size = pool.len(),
        "Generated dataset"
    );

    Dataset {
        countries: pool.into_tokens(),
        rows,
    }
}

/// Generates a dataset and writes it to a CSV file.
pub struct DatasetPipeline {
    output: PathBuf,
}

impl DatasetPipeline {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Run the pipeline, returning statistics over what was written.
    pub fn run<E: Entropy + ?Sized>(&self, entropy: &mut E) -> Result<RunStats> {
        let start = Instant::now();
        info!(output = %self.output.display(), rows = ROW_COUNT, "Starting dataset pipeline");

        let dataset = generate_dataset(entropy);
        save_csv(&dataset, &self.output)?;

        let mut stats = RunStats::from_dataset(&dataset);
        stats.runtime_secs = start.elapsed().as_secs_f64();

        info!(
            rows = stats.total_rows,
            correlated = stats.correlated_rows,
            correlated_rate = format!("{:.1}%", stats.correlated_rate * 100.0),
            "Dataset pipeline complete"
        );

        Ok(stats)
    }
}
