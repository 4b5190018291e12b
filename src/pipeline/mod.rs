//! Pipeline module - dataset assembly and writing.

mod dataset;

pub use dataset::*;
