use super::*;

fn create_test_store() -> MetadataStore {
    MetadataStore::from_functions([
        FunctionMetadata::new("map", 2)
            .with_iteratee_arity(1)
            .with_aliases(["collect", "pluck", "collect"]),
        FunctionMetadata::new("reduce", 3).with_iteratee_arity(2),
        FunctionMetadata::new("without", 2).with_spread_start(1),
        FunctionMetadata::new("add", 2),
    ])
    .expect("valid store")
}

#[test]
fn test_lookup_defaults() {
    let store = create_test_store();

    assert_eq!(store.arity("add").unwrap(), 2);
    assert!(store.aliases("add").unwrap().is_empty());
    assert_eq!(store.spread_start("add").unwrap(), None);
    assert_eq!(store.iteratee_arity("add").unwrap(), None);
}

#[test]
fn test_aliases_are_deduplicated_in_order() {
    let store = create_test_store();
    assert_eq!(store.aliases("map").unwrap(), ["collect", "pluck"]);
    assert_eq!(store.resolve_alias("pluck"), Some("map"));
    assert_eq!(store.resolve_alias("map"), None);
}

#[test]
fn test_undeclared_function_is_configuration_error() {
    let store = create_test_store();
    let err = store.get("zip").unwrap_err();

    assert_eq!(
        err,
        MetadataError::UndeclaredFunction {
            name: "zip".to_string()
        }
    );
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(
        err.to_string().contains("'zip'"),
        "Expected function name in message: {err}"
    );
}

#[test]
fn test_names_are_sorted() {
    let store = create_test_store();
    assert_eq!(store.names(), ["add", "map", "reduce", "without"]);
    assert_eq!(store.curriable_names(), ["add", "map", "reduce"]);
    assert_eq!(store.iteratee_names(), ["map", "reduce"]);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_zero_arity_is_rejected() {
    let err = MetadataStore::from_functions([FunctionMetadata::new("noop", 0)]).unwrap_err();
    assert!(matches!(err, MetadataError::ZeroArity { .. }));
}

#[test]
fn test_duplicate_declaration_is_rejected() {
    let err = MetadataStore::from_functions([
        FunctionMetadata::new("map", 2),
        FunctionMetadata::new("map", 3),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        MetadataError::DuplicateDeclaration {
            name: "map".to_string(),
            first: 2,
            second: 3,
        }
    );
}

#[test]
fn test_alias_shadowing_a_function_is_rejected() {
    let err = MetadataStore::from_functions([
        FunctionMetadata::new("map", 2).with_aliases(["add"]),
        FunctionMetadata::new("add", 2),
    ])
    .unwrap_err();

    assert!(matches!(err, MetadataError::AliasShadowsFunction { .. }));
}

#[test]
fn test_lodash_fp_tables() {
    let store = MetadataStore::lodash_fp().expect("built-in tables are consistent");

    let map = store.get("map").unwrap();
    assert_eq!(map.arity, 2);
    assert_eq!(map.iteratee_arity, Some(1));
    assert_eq!(map.aliases, ["pluck"]);

    let reduce = store.get("reduce").unwrap();
    assert_eq!(reduce.arity, 3);
    assert_eq!(reduce.iteratee_arity, Some(2));

    assert_eq!(store.spread_start("without").unwrap(), Some(1));
    assert_eq!(store.arity("fill").unwrap(), 4);
    assert_eq!(store.aliases("set").unwrap(), ["assoc", "assocPath"]);
    assert_eq!(store.aliases("get").unwrap(), ["property", "path", "prop"]);

    // `head` is not arity-capped, so its alias never binds.
    assert!(!store.contains("head"));
    assert_eq!(store.resolve_alias("first"), None);
}

#[test]
fn test_lodash_fp_iteratee_functions_take_data() {
    let store = MetadataStore::lodash_fp().unwrap();
    for name in store.iteratee_names() {
        let function = store.get(name).unwrap();
        assert!(
            function.arity >= 2,
            "{name} has an iteratee but arity {}",
            function.arity
        );
    }
}

#[test]
fn test_alias_bindings_point_at_real_function() {
    let store = create_test_store();
    let bindings = store.get("map").unwrap().alias_bindings();
    assert_eq!(
        bindings,
        vec![
            AliasBinding {
                alias: "collect".to_string(),
                target: "map".to_string(),
            },
            AliasBinding {
                alias: "pluck".to_string(),
                target: "map".to_string(),
            },
        ]
    );
}
