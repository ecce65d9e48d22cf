//! Function metadata for the fpgen typings generator.
//!
//! Maps a function name to its call arity, alternate names, optional
//! spread-start index and optional iteratee arity. Pure data: the store is
//! built explicitly at start-up and passed into the pipeline.

pub mod data;

pub mod mapping;
pub use mapping::{MappingTables, SpreadInfo};

pub mod store;
pub use store::{AliasBinding, FunctionMetadata, MetadataError, MetadataStore, ReturnShape};
