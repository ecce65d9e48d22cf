//! Tracing configuration for inspecting generation runs.
//!
//! Supports three output formats controlled by `FPGEN_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`, one branch per
//!   generated function
//! - `json`: one JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Follow each function through planning and currying
//! FPGEN_LOG=debug FPGEN_LOG_FORMAT=tree fpgen --all
//!
//! # Only the solver, in full detail
//! FPGEN_LOG="fpgen_solver=trace" fpgen --function reduce
//! ```
//!
//! The subscriber is only initialised when `FPGEN_LOG` (or `RUST_LOG`) is
//! set. All output goes to stderr so it never mixes with declarations
//! written to stdout.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("FPGEN_LOG_FORMAT").unwrap_or_default())
    }
}

/// `FPGEN_LOG` takes precedence over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("FPGEN_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

fn logging_requested() -> bool {
    ["FPGEN_LOG", "RUST_LOG"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Tree output nests every event under its `function` span, so one branch
/// holds the plan, curry and emit steps of a single declaration.
fn tree_layer() -> tracing_tree::HierarchicalLayer {
    tracing_tree::HierarchicalLayer::new(2)
        .with_indent_lines(true)
        .with_bracketed_fields(true)
        .with_targets(false)
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `FPGEN_LOG` nor `RUST_LOG` is set.
pub fn init_tracing() {
    if !logging_requested() {
        return;
    }

    let registry = Registry::default().with(build_filter());
    match LogFormat::from_env() {
        LogFormat::Tree => registry.with(tree_layer()).init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
