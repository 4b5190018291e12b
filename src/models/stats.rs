//! Summary statistics for a generated dataset.

use super::row::{Dataset, Token};
use std::collections::BTreeSet;

/// Statistics reported at the end of a run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Rows written
    pub total_rows: usize,

    /// Tokens in the country pool (generation calls, duplicates included)
    pub pool_size: usize,

    /// Distinct countries that appear in any `Visited` set
    pub distinct_visited: usize,

    /// Mean size of the `Visited` set
    pub mean_visited: f64,

    /// Rows whose restlessness/mobility ratio lies inside the band
    pub correlated_rows: usize,

    /// `correlated_rows / total_rows`
    pub correlated_rate: f64,

    /// Wall-clock time for generation and writing
    pub runtime_secs: f64,
}

impl RunStats {
    /// Collect statistics from a finished dataset.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let visited: BTreeSet<&Token> = dataset
            .rows
            .iter()
            .flat_map(|row| row.visited.iter())
            .collect();
        let visited_total: usize = dataset.rows.iter().map(|row| row.visited.len()).sum();

        let mut stats = Self {
            total_rows: dataset.rows.len(),
            pool_size: dataset.countries.len(),
            distinct_visited: visited.len(),
            correlated_rows: dataset.rows.iter().filter(|row| row.is_correlated()).count(),
            ..Self::default()
        };
        if stats.total_rows > 0 {
            stats.mean_visited = visited_total as f64 / stats.total_rows as f64;
        }
        stats.finalize();
        stats
    }

    /// Calculate derived stats.
    pub fn finalize(&mut self) {
        if self.total_rows > 0 {
            self.correlated_rate = self.correlated_rows as f64 / self.total_rows as f64;
        }
    }
}
