use std::fmt;

/// Classification of a fatal generation error.
///
/// Every inconsistency the generator detects is a defect in the metadata, not
/// a runtime condition, so there is no recoverable tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or inconsistent metadata: undeclared function, arity and
    /// parameter count disagreeing, iteratee without a data argument.
    Configuration,
    /// A shape outside the closed set the generator supports: continuation
    /// beyond the fixed bound, generic alphabet exhausted, spread currying.
    UnsupportedArity,
}

impl ErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration error",
            ErrorKind::UnsupportedArity => "unsupported arity",
        }
    }

    /// Process exit status reported by the CLI for this kind of failure.
    pub const fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Configuration => 1,
            ErrorKind::UnsupportedArity => 2,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Implemented by every error enum in the pipeline so callers can tell the
/// two fatal classes apart without matching on crate-specific variants.
pub trait Classify {
    fn kind(&self) -> ErrorKind;

    fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

/// A reported failure, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    /// Function being processed when the failure was detected, if any.
    pub function: Option<String>,
    pub message_text: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            function: None,
            message_text: message.into(),
            notes: Vec::new(),
        }
    }

    pub fn from_error<E>(error: &E) -> Self
    where
        E: Classify + fmt::Display,
    {
        Self::new(error.kind(), error.to_string())
    }

    pub fn in_function(mut self, name: impl Into<String>) -> Self {
        self.function = Some(name.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
