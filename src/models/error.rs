//! Error types for mktest.
//!
//! Generation itself cannot fail; every error here comes from building a
//! pool out of caller-supplied tokens or from writing the dataset out.

use thiserror::Error;

/// Top-level error type for mktest.
#[derive(Debug, Error)]
pub enum MktestError {
    #[error("Country pool must contain at least one token")]
    EmptyPool,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl MktestError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Underlying IO error, if this failure came from the filesystem.
    pub fn io_source(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv(e) => match e.kind() {
                csv::ErrorKind::Io(source) => Some(source),
                _ => None,
            },
            Self::EmptyPool => None,
        }
    }
}

/// Result type alias for mktest.
pub type Result<T> = std::result::Result<T, MktestError>;
