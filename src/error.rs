//! Error types for the mdhtml library.

use thiserror::Error;

/// Result type alias for mdhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a converter.
///
/// Conversion itself never fails: malformed input degrades to literal
/// text instead of producing an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A substitution rule pattern failed to compile.
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}
