use fpgen_common::{Classify, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocsError {
    #[error("'{input}' didn't match {pattern}")]
    PatternMismatch { input: String, pattern: String },

    #[error("function '{function}' has unknown category '{category}'")]
    UnknownCategory { function: String, category: String },

    #[error("function '{function}': {reason}")]
    AssertionFailed { function: String, reason: String },

    #[error("malformed doc entries: {message}")]
    Malformed { message: String },
}

impl Classify for DocsError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}
