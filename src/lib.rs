//! fpgen: curried TypeScript declarations for lodash/fp-style libraries.
//!
//! The pipeline is split across the workspace crates:
//!
//! - `fpgen_metadata`: which functions exist and how they are called
//! - `fpgen_solver`: parameter planning and currying
//! - `fpgen_emitter`: the `.d.ts` text
//! - `fpgen_docs`: the doc-comment driven, non-curried declarations
//!
//! This crate ties them together behind [`Generator`].

pub use fpgen_common as common;
pub use fpgen_common::{Classify, Diagnostic, ErrorKind};

pub use fpgen_metadata as metadata;
pub use fpgen_metadata::{FunctionMetadata, MetadataError, MetadataStore};

pub use fpgen_solver as solver;
pub use fpgen_solver::{CurriedFunction, SolverError};

pub use fpgen_emitter as emitter;
pub use fpgen_emitter::{DeclarationEmitter, EmitterOptions};

pub use fpgen_docs as docs;

pub mod pipeline;
pub use pipeline::{GenerateError, GenerateReport, Generator, REPRESENTATIVE_FUNCTION, Selection};

pub mod tracing_config;
