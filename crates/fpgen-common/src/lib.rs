//! Common types and utilities for the fpgen typings generator.
//!
//! This crate provides the pieces shared by every stage of the pipeline:
//! - Fixed bounds of the closed-world signature model (`limits`)
//! - The fatal error taxonomy and user-facing diagnostics (`diagnostics`)

// Centralized limits and thresholds
pub mod limits;

// Error classification shared by metadata, solver and emitter errors
pub mod diagnostics;
pub use diagnostics::{Classify, Diagnostic, ErrorKind};
