use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for protdist-io operations.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Report file could not be created or written.
    #[error("Failed to write report {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for protdist-io operations.
pub type Result<T> = std::result::Result<T, ReportError>;
