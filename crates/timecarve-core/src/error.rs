//! Error types for timecarve-core.
//!
//! The timing model itself has no fatal error path: invalid input is
//! clamped, impossible moves are no-ops. What remains fallible is the
//! environment around it -- writing the export report, and the IO/JSON
//! plumbing of callers.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for timecarve-core and its consumers.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Export-related errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Export-specific errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The summary could not be written to its destination
    #[error("Failed to write summary to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
