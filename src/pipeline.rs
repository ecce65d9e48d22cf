//! Generation pipeline.
//!
//! Metadata lookup -> planning -> currying -> emission, one function at a
//! time and in caller order. Every selected function is planned and curried
//! before the first byte is written, so a fatal error never leaves partial
//! declarations behind.

use std::io::{self, Write};

use fpgen_common::{Classify, ErrorKind};
use fpgen_emitter::{DeclarationEmitter, EmitterOptions};
use fpgen_metadata::{MetadataError, MetadataStore};
use fpgen_solver::{
    ContinuationDefinition, CurriedFunction, SolverError, continuation_definitions,
    curry_function,
};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, info_span};

/// The function every run falls back to when nothing is selected.
pub const REPRESENTATIVE_FUNCTION: &str = "map";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("{source}")]
    Solver {
        function: Option<String>,
        #[source]
        source: SolverError,
    },

    #[error("failed to write declarations: {0}")]
    Io(#[from] io::Error),
}

impl GenerateError {
    fn solver(function: &str, source: SolverError) -> Self {
        GenerateError::Solver {
            function: Some(function.to_string()),
            source,
        }
    }

    /// Fatal class of the failure; `None` for output failures, which are not
    /// metadata defects.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            GenerateError::Metadata(err) => Some(err.kind()),
            GenerateError::Solver { source, .. } => Some(source.kind()),
            GenerateError::Io(_) => None,
        }
    }

    /// Function being processed when the failure was detected.
    pub fn function(&self) -> Option<&str> {
        match self {
            GenerateError::Metadata(MetadataError::UndeclaredFunction { name }) => Some(name),
            GenerateError::Solver { function, .. } => function.as_deref(),
            _ => None,
        }
    }
}

/// Which functions to generate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Only [`REPRESENTATIVE_FUNCTION`].
    #[default]
    Representative,
    /// Exactly these, in this order.
    Names(Vec<String>),
    /// Every function without a spread argument, sorted.
    Curriable,
    /// Every iteratee-bearing function, sorted.
    Iteratee,
}

impl Selection {
    pub fn resolve(&self, store: &MetadataStore) -> Vec<String> {
        match self {
            Selection::Representative => vec![REPRESENTATIVE_FUNCTION.to_string()],
            Selection::Names(names) => names.clone(),
            Selection::Curriable => store
                .curriable_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            Selection::Iteratee => store
                .iteratee_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Totals of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub functions: usize,
    pub overloads: usize,
    pub aliases: usize,
}

impl GenerateReport {
    fn record(&mut self, function: &CurriedFunction) {
        self.functions += 1;
        self.overloads += function.overloads.len();
        self.aliases += function.aliases.len();
    }
}

pub struct Generator<'a> {
    store: &'a MetadataStore,
    options: EmitterOptions,
}

impl<'a> Generator<'a> {
    pub fn new(store: &'a MetadataStore, options: EmitterOptions) -> Self {
        Generator { store, options }
    }

    /// Plan and curry every named function, stopping at the first defect.
    pub fn prepare<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<CurriedFunction>, GenerateError> {
        names
            .iter()
            .map(|name| self.prepare_one(name.as_ref()))
            .collect()
    }

    fn prepare_one(&self, name: &str) -> Result<CurriedFunction, GenerateError> {
        let _span = info_span!("function", name).entered();
        let signature = self.store.get(name)?;
        curry_function(signature).map_err(|err| GenerateError::solver(name, err))
    }

    fn continuations(&self) -> Result<Vec<ContinuationDefinition>, GenerateError> {
        continuation_definitions().map_err(|source| GenerateError::Solver {
            function: None,
            source,
        })
    }

    /// Write the module for `names` to `out`, flushing after each function.
    pub fn generate<S, W>(&self, names: &[S], out: &mut W) -> Result<GenerateReport, GenerateError>
    where
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let _span = info_span!("generate", functions = names.len()).entered();
        let continuations = self.continuations()?;
        let functions = self.prepare(names)?;

        let mut emitter = DeclarationEmitter::new(self.options.clone());
        emitter.emit_header();
        emitter.emit_helpers(&continuations);
        out.write_all(emitter.take_output().as_bytes())?;

        let mut report = GenerateReport::default();
        for function in &functions {
            emitter.emit_function(function);
            out.write_all(emitter.take_output().as_bytes())?;
            out.flush()?;
            report.record(function);
        }

        emitter.emit_footer();
        out.write_all(emitter.take_output().as_bytes())?;
        out.flush()?;

        info!(
            functions = report.functions,
            overloads = report.overloads,
            aliases = report.aliases,
            "declarations written"
        );
        Ok(report)
    }

    /// Same output as [`generate`](Self::generate), with each function block
    /// rendered on the rayon pool and written back in caller order.
    pub fn generate_parallel<S, W>(
        &self,
        names: &[S],
        out: &mut W,
    ) -> Result<GenerateReport, GenerateError>
    where
        S: AsRef<str> + Sync,
        W: Write + ?Sized,
    {
        let _span = info_span!("generate_parallel", functions = names.len()).entered();
        let continuations = self.continuations()?;

        // Results stay in input order; the first failure in that order wins,
        // matching the sequential path.
        let rendered: Vec<Result<(String, CurriedFunction), GenerateError>> = names
            .par_iter()
            .map(|name| {
                let function = self.prepare_one(name.as_ref())?;
                let block = DeclarationEmitter::function_block(&self.options, &function);
                Ok((block, function))
            })
            .collect();
        let blocks = rendered.into_iter().collect::<Result<Vec<_>, _>>()?;
        debug!(blocks = blocks.len(), "rendered function blocks");

        let mut emitter = DeclarationEmitter::new(self.options.clone());
        emitter.emit_header();
        emitter.emit_helpers(&continuations);
        out.write_all(emitter.take_output().as_bytes())?;

        let mut report = GenerateReport::default();
        for (block, function) in &blocks {
            out.write_all(block.as_bytes())?;
            report.record(function);
        }

        emitter.emit_footer();
        out.write_all(emitter.take_output().as_bytes())?;
        out.flush()?;
        Ok(report)
    }

    /// Render the module for `names` into a string.
    pub fn generate_to_string<S: AsRef<str>>(&self, names: &[S]) -> Result<String, GenerateError> {
        let mut buffer: Vec<u8> = Vec::new();
        self.generate(names, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| {
            GenerateError::Io(io::Error::new(io::ErrorKind::InvalidData, err))
        })
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod pipeline_tests;
