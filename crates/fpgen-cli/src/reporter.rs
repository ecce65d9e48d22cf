use colored::Colorize;

use fpgen::docs::DocsError;
use fpgen::{Diagnostic, ErrorKind, GenerateError, MetadataError, SolverError};

use crate::driver::RunSummary;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();
        output.push_str(&self.format_kind(diagnostic.kind));
        if let Some(function) = &diagnostic.function {
            output.push_str(" in ");
            output.push_str(&self.format_function(function));
        }
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        for note in &diagnostic.notes {
            output.push_str("\n  ");
            output.push_str(&self.paint("note", |s| s.cyan().bold().to_string()));
            output.push_str(": ");
            output.push_str(note);
        }
        output
    }

    /// Fallback for failures outside the metadata taxonomy (I/O and such).
    pub fn format_error(&self, error: &anyhow::Error) -> String {
        format!(
            "{}: {error:#}",
            self.paint("error", |s| s.red().bold().to_string())
        )
    }

    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match summary {
            RunSummary::Declarations(report) => format!(
                "{} {} functions, {} overloads, {} aliases",
                self.paint("generated", |s| s.green().bold().to_string()),
                report.functions,
                report.overloads,
                report.aliases
            ),
            RunSummary::Docs { lines } => format!(
                "{} {lines} doc declarations",
                self.paint("generated", |s| s.green().bold().to_string())
            ),
        }
    }

    fn format_kind(&self, kind: ErrorKind) -> String {
        let label = kind.label();
        if !self.color {
            return label.to_string();
        }
        match kind {
            ErrorKind::Configuration => label.red().bold().to_string(),
            ErrorKind::UnsupportedArity => label.yellow().bold().to_string(),
        }
    }

    fn format_function(&self, name: &str) -> String {
        let quoted = format!("'{name}'");
        if self.color {
            quoted.bright_blue().to_string()
        } else {
            quoted
        }
    }

    fn paint(&self, label: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.color {
            style(label)
        } else {
            label.to_string()
        }
    }
}

/// Find the classified pipeline error inside an anyhow chain.
///
/// Context messages attached above it become notes. Returns `None` when the
/// chain holds no classified error.
pub fn diagnostic_for(error: &anyhow::Error) -> Option<Diagnostic> {
    let mut notes = Vec::new();
    for cause in error.chain() {
        if let Some(diagnostic) = classify(cause) {
            return Some(notes.into_iter().fold(diagnostic, |d, note| d.with_note(note)));
        }
        notes.push(cause.to_string());
    }
    None
}

fn classify(cause: &(dyn std::error::Error + 'static)) -> Option<Diagnostic> {
    if let Some(err) = cause.downcast_ref::<GenerateError>() {
        let kind = err.kind()?;
        let diagnostic = Diagnostic::new(kind, err.to_string());
        return Some(match err.function() {
            Some(function) => diagnostic.in_function(function),
            None => diagnostic,
        });
    }
    if let Some(err) = cause.downcast_ref::<MetadataError>() {
        let diagnostic = Diagnostic::from_error(err);
        return Some(match err {
            MetadataError::UndeclaredFunction { name } => diagnostic.in_function(name),
            _ => diagnostic,
        });
    }
    if let Some(err) = cause.downcast_ref::<SolverError>() {
        return Some(Diagnostic::from_error(err));
    }
    if let Some(err) = cause.downcast_ref::<DocsError>() {
        return Some(Diagnostic::from_error(err));
    }
    None
}

/// Process exit status for a failed run.
pub fn exit_code(diagnostic: Option<&Diagnostic>) -> u8 {
    diagnostic
        .map(|d| d.kind.exit_code())
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
