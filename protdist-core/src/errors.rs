use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProteinDataError {
    #[error("Can't read file {}: {source}", .path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {source_name}, line {line_number}: {reason}")]
    RecordParseError {
        source_name: String,
        line_number: usize,
        reason: String,
    },

    #[error("Malformed protein record: {0}")]
    MalformedRecord(String),
}
