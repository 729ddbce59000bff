//! Error types for Orbis.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Orbis operations.
pub type Result<T> = std::result::Result<T, OrbisError>;

/// Errors that can occur in Orbis.
#[derive(Debug, Error)]
pub enum OrbisError {
    /// Failed to open a dataset file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// HTTP request for the dataset failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dataset payload was not a valid country list.
    #[error("Invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrbisError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }
}
