//! Error types for snapshot transport.

use thiserror::Error;

/// Errors that can occur while reading or writing a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file did not contain a valid snapshot
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
