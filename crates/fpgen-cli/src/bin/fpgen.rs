use clap::Parser;
use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use fpgen_cli::args::CliArgs;
use fpgen_cli::driver;
use fpgen_cli::reporter::{self, Reporter};

fn main() -> ExitCode {
    // Only active when FPGEN_LOG or RUST_LOG is set.
    fpgen::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let stderr = std::io::stderr();
    let reporter = Reporter::new(!args.no_color && stderr.is_terminal());
    let mut stderr = stderr.lock();

    match driver::run(&args) {
        Ok(summary) => {
            if args.diagnostics {
                let _ = writeln!(stderr, "{}", reporter.format_summary(&summary));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            let diagnostic = reporter::diagnostic_for(&err);
            let text = match &diagnostic {
                Some(diagnostic) => reporter.format_diagnostic(diagnostic),
                None => reporter.format_error(&err),
            };
            let _ = writeln!(stderr, "{text}");
            ExitCode::from(reporter::exit_code(diagnostic.as_ref()))
        }
    }
}
