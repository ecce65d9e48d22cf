use fpgen_common::Classify;
use fpgen_metadata::{MetadataError, MetadataStore, ReturnShape};

const MAPPING: &str = r#"{
    "aryMethod": {
        "2": ["map", "filter", "without"],
        "3": ["reduce"]
    },
    "aliasToReal": {
        "pluck": "map",
        "first": "head"
    },
    "realToAlias": {
        "map": ["collect"]
    },
    "methodSpread": {
        "without": { "start": 1 }
    },
    "iterateeAry": {
        "map": 1,
        "filter": 1,
        "reduce": 2
    },
    "returnShape": {
        "filter": "result"
    }
}"#;

#[test]
fn test_store_from_mapping_json() {
    let store = MetadataStore::from_json(MAPPING).expect("valid mapping");

    assert_eq!(store.names(), ["filter", "map", "reduce", "without"]);
    assert_eq!(store.aliases("map").unwrap(), ["collect", "pluck"]);
    assert_eq!(store.spread_start("without").unwrap(), Some(1));
    assert_eq!(store.iteratee_arity("reduce").unwrap(), Some(2));
    assert_eq!(
        store.get("filter").unwrap().return_shape,
        Some(ReturnShape::Result)
    );
    assert_eq!(store.curriable_names(), ["filter", "map", "reduce"]);
}

#[test]
fn test_malformed_json_is_reported() {
    let err = MetadataStore::from_json("{ \"aryMethod\": [] }").unwrap_err();
    assert!(
        matches!(err, MetadataError::Malformed { .. }),
        "Expected malformed error, got {err:?}"
    );
}

#[test]
fn test_non_numeric_arity_key() {
    let err = MetadataStore::from_json(r#"{ "aryMethod": { "two": ["map"] } }"#).unwrap_err();
    assert_eq!(
        err,
        MetadataError::InvalidArityKey {
            key: "two".to_string()
        }
    );
}

#[test]
fn test_iteratee_entry_for_unknown_function() {
    let err = MetadataStore::from_json(
        r#"{ "aryMethod": { "2": ["map"] }, "iterateeAry": { "reduce": 2 } }"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        MetadataError::UnknownTableEntry {
            table: "iterateeAry",
            name: "reduce".to_string(),
        }
    );
}

#[test]
fn test_function_in_two_arity_groups() {
    let err = MetadataStore::from_json(r#"{ "aryMethod": { "1": ["map"], "2": ["map"] } }"#)
        .unwrap_err();
    assert!(matches!(
        err,
        MetadataError::DuplicateDeclaration {
            first: 1,
            second: 2,
            ..
        }
    ));
}

#[test]
fn test_alias_bound_to_two_functions() {
    let err = MetadataStore::from_json(
        r#"{
            "aryMethod": { "2": ["map", "filter"] },
            "aliasToReal": { "x": "map" },
            "realToAlias": { "filter": ["x"] }
        }"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        MetadataError::DuplicateAlias {
            alias: "x".to_string(),
            first: "filter".to_string(),
            second: "map".to_string(),
        }
    );
    assert!(err.is_configuration(), "Expected configuration error: {err}");
}
