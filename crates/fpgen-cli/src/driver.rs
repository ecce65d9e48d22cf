//! Drives one fpgen run: load inputs, generate, write.
//!
//! Output is fully rendered before anything reaches the destination file, so
//! a failed run never truncates or half-writes an existing declaration file.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info_span};

use fpgen::{GenerateReport, Generator, MetadataError, MetadataStore};
use fpgen_common::limits::OUTPUT_BUFFER_CAPACITY;

use crate::args::CliArgs;

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    Declarations(GenerateReport),
    Docs { lines: usize },
}

pub fn run(args: &CliArgs) -> Result<RunSummary> {
    match &args.docs {
        Some(path) => run_docs(args, path),
        None => run_declarations(args),
    }
}

pub fn load_store(args: &CliArgs) -> Result<MetadataStore> {
    match &args.metadata {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read metadata {}", path.display()))?;
            let store = MetadataStore::from_json(&text)
                .with_context(|| format!("invalid metadata in {}", path.display()))?;
            Ok(store)
        }
        None => Ok(MetadataStore::lodash_fp().context("built-in lodash/fp metadata")?),
    }
}

/// Reject names the store does not declare, pointing aliases at their target.
pub fn check_selection(store: &MetadataStore, names: &[String]) -> Result<()> {
    for name in names {
        if store.contains(name) {
            continue;
        }
        let err = MetadataError::UndeclaredFunction { name: name.clone() };
        return Err(match store.resolve_alias(name) {
            Some(target) => anyhow::Error::new(err).context(format!(
                "'{name}' is an alias of '{target}'; aliases are emitted alongside their target"
            )),
            None => err.into(),
        });
    }
    Ok(())
}

fn run_declarations(args: &CliArgs) -> Result<RunSummary> {
    let _span = info_span!("run_declarations").entered();
    let store = load_store(args)?;
    let names = args.selection().resolve(&store);
    debug!(functions = names.len(), "selection resolved");
    check_selection(&store, &names)?;

    let generator = Generator::new(&store, args.emitter_options());
    let generate = |out: &mut dyn Write| {
        if args.parallel {
            generator.generate_parallel(&names, out)
        } else {
            generator.generate(&names, out)
        }
    };

    let report = match &args.out_file {
        Some(path) => {
            let mut buffer = Vec::with_capacity(OUTPUT_BUFFER_CAPACITY);
            let report = generate(&mut buffer)?;
            write_file(path, &buffer)?;
            report
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            generate(&mut lock)?
        }
    };
    Ok(RunSummary::Declarations(report))
}

fn run_docs(args: &CliArgs, path: &Path) -> Result<RunSummary> {
    let _span = info_span!("run_docs", path = %path.display()).entered();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read doc entries {}", path.display()))?;
    let entries = fpgen::docs::load_entries(&text)
        .with_context(|| format!("invalid doc entries in {}", path.display()))?;
    let rendered = fpgen::docs::render_entries(&entries)?;
    let lines = rendered.lines().count();

    match &args.out_file {
        Some(out) => write_file(out, rendered.as_bytes())?,
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(rendered.as_bytes())
                .context("failed to write to stdout")?;
            lock.flush().context("failed to write to stdout")?;
        }
    }
    Ok(RunSummary::Docs { lines })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
