use super::*;

fn entry(name: &str, category: &str, params: &[(&str, &str)], returns: &str) -> DocEntry {
    DocEntry {
        name: name.to_string(),
        category: category.to_string(),
        params: params
            .iter()
            .map(|(ty, name)| (ty.to_string(), name.to_string(), String::new()))
            .collect(),
        returns: Some((returns.to_string(), String::new())),
        private: false,
        is_function: true,
    }
}

fn render_one(entry: DocEntry) -> String {
    render_entries(&[entry]).unwrap()
}

#[test]
fn test_array_chunk() {
    let chunk = entry(
        "chunk",
        "Array",
        &[("Array", "array"), ("number", "[size=1]")],
        "Array",
    );
    assert_eq!(render_one(chunk), "chunk<T>(array: T[], size?: number): T[]\n");
}

#[test]
fn test_array_callbacks_by_name() {
    let uniq_with = entry(
        "uniqWith",
        "Array",
        &[("Array", "array"), ("Function", "[comparator]")],
        "Array",
    );
    assert_eq!(
        render_one(uniq_with),
        "uniqWith<T>(array: T[], comparator?: (a: T, b: T) => boolean): T[]\n"
    );

    let find_index = entry(
        "findIndex",
        "Array",
        &[("Array", "array"), ("Function", "[predicate=_.identity]")],
        "number",
    );
    assert_eq!(
        render_one(find_index),
        "findIndex<T>(array: T[], predicate?: (value: T) => boolean): number\n"
    );
}

#[test]
fn test_array_spread_only_in_last_position() {
    let difference = entry(
        "difference",
        "Array",
        &[("Array", "array"), ("...Array", "[values]")],
        "Array",
    );
    assert_eq!(
        render_one(difference),
        "difference<T>(array: T[], ...values?: T[][]): T[]\n"
    );

    let pull_at = entry(
        "pullAt",
        "Array",
        &[("Array", "array"), ("...(number|number[])", "[indexes]"), ("*", "value")],
        "*",
    );
    assert_eq!(
        render_one(pull_at),
        "pullAt<T>(array: T[], indexes?: (number|number[])[], value: T): T\n"
    );
}

#[test]
fn test_array_requires_array_first_param() {
    let broken = entry("head", "Array", &[("Object", "object")], "*");
    let err = render_entries(&[broken]).unwrap_err();
    assert!(matches!(err, DocsError::AssertionFailed { .. }));
}

#[test]
fn test_collection_checked_but_not_emitted() {
    let each = entry(
        "forEach",
        "Collection",
        &[("Array|Object", "collection"), ("Function", "[iteratee]")],
        "*",
    );
    assert_eq!(render_one(each), "");

    let broken = entry("forEach", "Collection", &[("Array", "collection")], "*");
    assert!(render_entries(&[broken]).is_err());
}

#[test]
fn test_private_and_non_function_entries_skipped() {
    let mut hidden = entry("baseChunk", "Array", &[("Object", "object")], "*");
    hidden.private = true;
    let mut property = entry("VERSION", "Util", &[], "string");
    property.is_function = false;
    assert_eq!(render_entries(&[hidden, property]).unwrap(), "");
}

#[test]
fn test_unknown_category() {
    let odd = entry("odd", "Widgets", &[], "*");
    assert_eq!(
        render_entries(&[odd]).unwrap_err(),
        DocsError::UnknownCategory {
            function: "odd".to_string(),
            category: "Widgets".to_string(),
        }
    );
}

#[test]
fn test_load_entries_from_json() {
    let json = r#"[
        {
            "name": "compact",
            "category": "Array",
            "params": [["Array", "array", "The array to compact."]],
            "returns": ["Array", "Returns the new array."]
        },
        { "name": "add", "category": "Math" }
    ]"#;
    let entries = load_entries(json).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[1].is_function);
    assert_eq!(entries[1].return_type(), "void");
    assert_eq!(render_entries(&entries).unwrap(), "compact<T>(array: T[]): T[]\n");
}
