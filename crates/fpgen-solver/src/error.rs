use fpgen_common::limits::{GENERIC_PARAM_COUNT, MAX_CONTINUATION_ARITY, MAX_ITERATEE_ARITY};
use fpgen_common::{Classify, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("iteratee-bearing function '{function}' must accept a data argument (declared arity {arity})")]
    IterateeWithoutData { function: String, arity: usize },

    #[error("function '{function}' declares iteratee arity {arity}; supported arities are 1..={max}", max = MAX_ITERATEE_ARITY)]
    UnsupportedIterateeArity { function: String, arity: u8 },

    #[error("planning '{function}' produced {planned} parameters for declared arity {arity}")]
    ParameterCountMismatch {
        function: String,
        arity: usize,
        planned: usize,
    },

    #[error("a function with no parameters cannot be curried")]
    EmptyParameterList,

    #[error("continuation over {remaining} parameters is not supported (maximum {max})", max = MAX_CONTINUATION_ARITY)]
    ContinuationTooWide { remaining: usize },

    #[error("function '{function}' needs {needed} generic parameters; only {available} are available", available = GENERIC_PARAM_COUNT)]
    GenericAlphabetExhausted { function: String, needed: usize },

    #[error("function '{function}' spreads arguments from index {start}; currying spread functions is not supported")]
    SpreadNotSupported { function: String, start: usize },
}

impl Classify for SolverError {
    fn kind(&self) -> ErrorKind {
        match self {
            SolverError::IterateeWithoutData { .. }
            | SolverError::UnsupportedIterateeArity { .. }
            | SolverError::ParameterCountMismatch { .. }
            | SolverError::EmptyParameterList => ErrorKind::Configuration,
            SolverError::ContinuationTooWide { .. }
            | SolverError::GenericAlphabetExhausted { .. }
            | SolverError::SpreadNotSupported { .. } => ErrorKind::UnsupportedArity,
        }
    }
}
