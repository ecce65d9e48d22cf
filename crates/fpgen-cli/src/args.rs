use clap::Parser;
use std::path::PathBuf;

use fpgen::{EmitterOptions, Selection};

/// CLI arguments for the fpgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "fpgen",
    version,
    about = "Generate curried TypeScript declarations for lodash/fp-style libraries"
)]
pub struct CliArgs {
    // ==================== Selection ====================
    /// Function to generate. Repeat for several; output follows the given order.
    #[arg(short = 'f', long = "function", value_name = "NAME")]
    pub functions: Vec<String>,

    /// Generate every function that can be curried.
    #[arg(long, conflicts_with = "functions")]
    pub all: bool,

    /// Generate every iteratee-bearing function.
    #[arg(long, conflicts_with_all = ["functions", "all"])]
    pub iteratees: bool,

    // ==================== Inputs ====================
    /// Metadata JSON replacing the built-in lodash/fp tables.
    #[arg(long, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// Render non-curried declarations from doc-comment entries instead.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["functions", "all", "iteratees", "metadata", "parallel"]
    )]
    pub docs: Option<PathBuf>,

    // ==================== Output ====================
    /// Write output to this file instead of stdout.
    #[arg(short = 'o', long = "out-file", alias = "outFile", value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Module name in the `declare module` header.
    #[arg(long = "module-name", default_value = "lodash/fp")]
    pub module_name: String,

    /// Prefix of each `// <prefix><name>` marker. Defaults to the module name plus `/`.
    #[arg(long = "doc-prefix")]
    pub doc_prefix: Option<String>,

    // ==================== Run ====================
    /// Render function blocks in parallel. Output is identical.
    #[arg(long)]
    pub parallel: bool,

    /// Print generation totals to stderr.
    #[arg(long)]
    pub diagnostics: bool,

    /// Disable colored diagnostics.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl CliArgs {
    pub fn selection(&self) -> Selection {
        if self.all {
            Selection::Curriable
        } else if self.iteratees {
            Selection::Iteratee
        } else if self.functions.is_empty() {
            Selection::Representative
        } else {
            Selection::Names(self.functions.clone())
        }
    }

    pub fn emitter_options(&self) -> EmitterOptions {
        let doc_prefix = self
            .doc_prefix
            .clone()
            .unwrap_or_else(|| format!("{}/", self.module_name));
        EmitterOptions {
            module_name: self.module_name.clone(),
            doc_prefix,
        }
    }
}
