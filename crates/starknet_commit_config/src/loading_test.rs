use std::collections::BTreeMap;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;

use super::unflatten;
use crate::ConfigError;

#[test]
fn unflatten_nests_by_separator() {
    let config_map = BTreeMap::from([
        ("a.b.c".to_owned(), json!(1)),
        ("a.b.d".to_owned(), json!("two")),
        ("e".to_owned(), json!(true)),
    ]);
    assert_eq!(
        unflatten(&config_map).unwrap(),
        json!({ "a": { "b": { "c": 1, "d": "two" } }, "e": true })
    );
}

#[test]
fn unflatten_rejects_value_with_nested_params() {
    let config_map = BTreeMap::from([("a".to_owned(), json!(1)), ("a.b".to_owned(), json!(2))]);
    assert_matches!(
        unflatten(&config_map),
        Err(ConfigError::ConflictingParamPaths { param_path }) if param_path == "a.b"
    );
}
