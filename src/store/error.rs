//! Ledger error types

use thiserror::Error;

use super::record::Field;

/// Everything that can go wrong while touching the ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was empty after trimming. Nothing was written.
    #[error("missing required field: {0}")]
    MissingField(Field),

    /// A field contained `\n` or `\r` and would split the stored line
    #[error("line break in field: {0}")]
    LineBreak(Field),

    /// The backing file could not be opened, written or truncated
    #[error("IO error: {0}")]
    Io(String),

    /// A stored line was not valid UTF-8
    #[error("undecodable text on line {line}")]
    Encoding { line: usize },

    /// A stored line did not split into six fields
    #[error("malformed record on line {line}: expected 6 fields, found {found}")]
    Malformed { line: usize, found: usize },
}

impl StoreError {
    /// True for input problems the user can fix in the form
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::MissingField(_) | StoreError::LineBreak(_))
    }

    /// True for filesystem failures
    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}
