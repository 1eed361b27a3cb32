use thiserror::Error;

use crate::models::Coordinate;

#[derive(Error, Debug)]
pub enum TnSeqError {
    #[error("Malformed table '{source_name}': {reason}")]
    MalformedTable { source_name: String, reason: String },

    #[error("Gene '{gene}': coordinate {coordinate} not found in insertion matrix")]
    CoordinateNotFound { gene: String, coordinate: Coordinate },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TnSeqError {
    /// Shorthand for a malformed-table error naming the offending source.
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        TnSeqError::MalformedTable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
