//! Error types for textstatlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or discovering text sources.
///
/// Computing statistics over an in-memory string never fails; these only
/// come from the file and stream entry points.
#[derive(Error, Debug)]
pub enum TextstatError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input was not valid UTF-8
    #[error("failed to decode '{path}' as UTF-8: {message}")]
    Decode { path: PathBuf, message: String },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
