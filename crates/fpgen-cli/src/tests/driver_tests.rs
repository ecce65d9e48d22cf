use clap::Parser;
use std::fs;
use tempfile::TempDir;

use crate::args::CliArgs;
use crate::driver::{self, RunSummary};
use crate::reporter::diagnostic_for;
use fpgen::{ErrorKind, MetadataStore};

const MAPPING: &str = r#"{
    "aryMethod": {
        "2": ["map", "add"],
        "3": ["reduce"]
    },
    "aliasToReal": { "pluck": "map" },
    "iterateeAry": { "map": 1, "reduce": 2 }
}"#;

fn parse(args: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("fpgen").chain(args.iter().copied()))
        .expect("arguments parse")
}

#[test]
fn test_writes_out_file_from_custom_metadata() {
    let temp = TempDir::new().unwrap();
    let metadata = temp.path().join("mapping.json");
    fs::write(&metadata, MAPPING).unwrap();
    let out = temp.path().join("types").join("fp.d.ts");

    let args = parse(&[
        "--metadata",
        metadata.to_str().unwrap(),
        "--function",
        "reduce",
        "--function",
        "map",
        "--out-file",
        out.to_str().unwrap(),
    ]);
    let summary = driver::run(&args).unwrap();

    match summary {
        RunSummary::Declarations(report) => {
            assert_eq!(report.functions, 2);
            assert_eq!(report.overloads, 5);
            assert_eq!(report.aliases, 1);
        }
        other => panic!("Expected declarations, got {other:?}"),
    }

    let written = fs::read_to_string(&out).unwrap();
    let reduce = written.find("// lodash/fp/reduce").unwrap();
    let map = written.find("// lodash/fp/map").unwrap();
    assert!(reduce < map, "Caller order not kept: {written}");
    assert!(written.contains("export const pluck: typeof map;"));
}

#[test]
fn test_failed_run_leaves_existing_file_untouched() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("fp.d.ts");
    fs::write(&out, "previous").unwrap();

    let args = parse(&["--function", "notAFunction", "--out-file", out.to_str().unwrap()]);
    let err = driver::run(&args).unwrap_err();

    let diagnostic = diagnostic_for(&err).expect("classified");
    assert_eq!(diagnostic.kind, ErrorKind::Configuration);
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous");
}

#[test]
fn test_alias_request_explains_target() {
    let store = MetadataStore::lodash_fp().unwrap();
    let err = driver::check_selection(&store, &["pluck".to_string()]).unwrap_err();

    let diagnostic = diagnostic_for(&err).expect("classified");
    assert_eq!(diagnostic.function.as_deref(), Some("pluck"));
    assert_eq!(diagnostic.notes.len(), 1);
    assert!(
        diagnostic.notes[0].contains("alias of 'map'"),
        "Unexpected note: {:?}",
        diagnostic.notes
    );
}

#[test]
fn test_missing_metadata_file_is_unclassified() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.json");
    let args = parse(&["--metadata", missing.to_str().unwrap()]);

    let err = driver::load_store(&args).unwrap_err();
    assert!(diagnostic_for(&err).is_none());
    assert!(format!("{err:#}").contains("failed to read metadata"));
}

#[test]
fn test_malformed_metadata_is_configuration() {
    let temp = TempDir::new().unwrap();
    let metadata = temp.path().join("mapping.json");
    fs::write(&metadata, "{ not json").unwrap();
    let args = parse(&["--metadata", metadata.to_str().unwrap()]);

    let err = driver::load_store(&args).unwrap_err();
    let diagnostic = diagnostic_for(&err).expect("classified");
    assert_eq!(diagnostic.kind, ErrorKind::Configuration);
    assert!(diagnostic.notes[0].starts_with("invalid metadata in"));
}

#[test]
fn test_docs_mode_writes_declarations() {
    let temp = TempDir::new().unwrap();
    let entries = temp.path().join("entries.json");
    fs::write(
        &entries,
        r#"[
            { "name": "compact", "category": "Array",
              "params": [["Array", "array", "The array to compact."]],
              "returns": ["Array", "Returns the new array."] },
            { "name": "each", "category": "Collection",
              "params": [["Array|Object", "collection", ""]] }
        ]"#,
    )
    .unwrap();
    let out = temp.path().join("docs.d.ts");

    let args = parse(&[
        "--docs",
        entries.to_str().unwrap(),
        "--out-file",
        out.to_str().unwrap(),
    ]);
    assert_eq!(driver::run(&args).unwrap(), RunSummary::Docs { lines: 1 });
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "compact<T>(array: T[]): T[]\n"
    );
}
