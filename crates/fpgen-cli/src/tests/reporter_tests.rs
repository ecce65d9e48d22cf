use crate::driver::RunSummary;
use crate::reporter::{Reporter, diagnostic_for, exit_code};
use fpgen::{Diagnostic, ErrorKind, GenerateError, GenerateReport, SolverError};

#[test]
fn test_plain_diagnostic_format() {
    let diagnostic = Diagnostic::new(ErrorKind::Configuration, "function 'nope' is not declared")
        .in_function("nope")
        .with_note("check the --metadata file");

    let text = Reporter::new(false).format_diagnostic(&diagnostic);
    assert_eq!(
        text,
        "configuration error in 'nope': function 'nope' is not declared\n  note: check the --metadata file"
    );
}

#[test]
fn test_solver_error_in_generate_error_keeps_function() {
    let err = anyhow::Error::new(GenerateError::Solver {
        function: Some("invokeArgs".to_string()),
        source: SolverError::SpreadNotSupported {
            function: "invokeArgs".to_string(),
            start: 2,
        },
    });

    let diagnostic = diagnostic_for(&err).expect("classified");
    assert_eq!(diagnostic.kind, ErrorKind::UnsupportedArity);
    assert_eq!(diagnostic.function.as_deref(), Some("invokeArgs"));
    assert!(diagnostic.notes.is_empty());
    assert_eq!(exit_code(Some(&diagnostic)), 2);
}

#[test]
fn test_unclassified_error_exits_with_one() {
    let err = anyhow::anyhow!("disk full");
    assert!(diagnostic_for(&err).is_none());
    assert_eq!(exit_code(None), 1);
    assert_eq!(Reporter::new(false).format_error(&err), "error: disk full");
}

#[test]
fn test_summary_format() {
    let summary = RunSummary::Declarations(GenerateReport {
        functions: 3,
        overloads: 7,
        aliases: 2,
    });
    assert_eq!(
        Reporter::new(false).format_summary(&summary),
        "generated 3 functions, 7 overloads, 2 aliases"
    );
}
