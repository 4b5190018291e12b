//! Core data models for mktest.

mod error;
pub mod params;
mod row;
mod stats;

pub use error::*;
pub use row::*;
pub use stats::*;
