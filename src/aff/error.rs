//! Custom error types for the aff-parser crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum AffError {
    /// An error originating from I/O operations.
    ///
    /// A line read that fails for any reason other than end-of-stream is
    /// fatal to the `parse` call: the parser's entire index is discarded,
    /// including directives accumulated by earlier successful calls.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using the crate's `AffError` type.
pub type Result<T> = std::result::Result<T, AffError>;
