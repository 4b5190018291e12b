//! mktest - synthetic travel-profile test data as CSV.
//!
//! ## Architecture
//!
//! - **Generation**: pronounceable tokens, a per-run country pool, and rows
//!   with a visited set and a loosely correlated restlessness/mobility pair
//! - **Pipeline**: pool → 100 rows → CSV file
//! - **Output**: CSV serialization with a fixed header
//!
//! All randomness flows through the [`Entropy`] trait, which every
//! `rand::Rng` implements. A seeded RNG yields byte-identical output.

pub mod generate;
pub mod models;
pub mod output;
pub mod pipeline;

// Re-exports for convenience
pub use generate::{CountryPool, Entropy, generate_row, generate_token};
pub use models::{Dataset, MktestError, Result, Row, RunStats, Token};
pub use output::{save_csv, write_csv};
pub use pipeline::{DatasetPipeline, generate_dataset};
