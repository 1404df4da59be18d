//! Error types for the rsgene library.

use thiserror::Error;

/// Errors that can occur while loading identifiers or reducing the dbSNP table.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred, including a corrupt gzip stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A field that must be an unsigned integer could not be parsed.
    #[error("{0}")]
    Parse(String),

    /// A dbSNP row did not have the expected column layout.
    #[error("{0}")]
    Format(String),
}
