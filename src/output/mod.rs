//! Output module - CSV serialization and file writing.

mod writer;

pub use writer::*;
