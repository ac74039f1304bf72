//! Error types for the lexnorm library.

use std::io;
use thiserror::Error;

/// Result type alias for lexnorm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the lexnorm library.
///
/// The taxonomy is deliberately narrow: the normalization and highlighting
/// functions are pure, total transformations that accept any string. Errors
/// only arise at the configuration boundary and in the file-based
/// convenience API.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An unrecognized normalization level string.
    ///
    /// An absent level defaults to conservative; an invalid one is a caller
    /// bug and is rejected rather than silently remapped.
    #[error("Unknown normalization level: {0}")]
    InvalidLevel(String),

    /// An unrecognized list profile string.
    #[error("Unknown list profile: {0}")]
    InvalidProfile(String),

    /// An unrecognized risk level in an analysis payload.
    #[error("Unknown risk level: {0}")]
    InvalidRiskLevel(String),
}
