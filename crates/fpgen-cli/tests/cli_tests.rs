//! End-to-end runs of the `fpgen` binary.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fpgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fpgen"))
        .args(args)
        .env_remove("FPGEN_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("fpgen binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf-8 stderr")
}

#[test]
fn test_default_run_emits_map() {
    let output = fpgen(&[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("declare module 'lodash/fp' {\n"));
    assert!(text.contains(
        "  export function map<A, B, Z>(iteratee: Iteratee1<A, Z>): Curry1<CollectionOf<B>, Z[]>;\n"
    ));
    assert!(text.contains("  export const pluck: typeof map;\n"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn test_undeclared_function_exits_with_configuration_status() {
    let output = fpgen(&["--no-color", "--function", "doesNotExist"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "No partial output expected");
    assert!(
        stderr(&output).starts_with("configuration error in 'doesNotExist'"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_spread_function_exits_with_unsupported_arity_status() {
    let temp = TempDir::new().unwrap();
    let metadata = temp.path().join("mapping.json");
    fs::write(
        &metadata,
        r#"{ "aryMethod": { "3": ["invokeArgs"] }, "methodSpread": { "invokeArgs": { "start": 2 } } }"#,
    )
    .unwrap();

    let output = fpgen(&[
        "--no-color",
        "--metadata",
        metadata.to_str().unwrap(),
        "--function",
        "invokeArgs",
    ]);

    assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).starts_with("unsupported arity in 'invokeArgs'"));
}

#[test]
fn test_parallel_all_matches_sequential_all() {
    let sequential = fpgen(&["--all"]);
    let parallel = fpgen(&["--all", "--parallel"]);

    assert!(sequential.status.success(), "stderr: {}", stderr(&sequential));
    assert!(parallel.status.success(), "stderr: {}", stderr(&parallel));
    assert!(sequential.stdout == parallel.stdout, "Parallel output diverged");
}

#[test]
fn test_out_file_and_diagnostics_summary() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("lodash-fp.d.ts");

    let output = fpgen(&[
        "--no-color",
        "--diagnostics",
        "-f",
        "filter",
        "-f",
        "reduce",
        "--out-file",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).starts_with("generated 2 functions, 5 overloads"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("// lodash/fp/filter"));
    assert!(written.contains("// lodash/fp/reduce"));
}
