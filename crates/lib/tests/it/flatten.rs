//! Flatten integration tests
//!
//! Covers flattened key layout, options, and the flatten/unflatten round trip.

use std::collections::BTreeMap;

use pathwise::{FlattenOptions, Value, flatten, unflatten};

use crate::helpers::{account, order, person, text_map};

fn flat(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[test]
fn test_flatten_order_lines() {
    let flattened = flatten(&order(), &FlattenOptions::default());
    assert_eq!(
        flattened,
        flat(&[
            ("test", Value::from("123")),
            ("order_lines.1.sku", Value::from("123")),
            ("order_lines.2.sku", Value::from("456")),
        ])
    );
}

#[test]
fn test_flatten_one_entry_per_leaf() {
    let flattened = flatten(&person(), &FlattenOptions::default());
    assert_eq!(flattened.len(), 7);
    assert_eq!(flattened.get("meta.skills.3.type"), Some(&Value::from("hobby")));
    assert!(!flattened.contains_key("meta"));
    assert!(!flattened.contains_key("meta.skills"));
}

#[test]
fn test_flatten_records() {
    let flattened = flatten(&account(), &FlattenOptions::default());
    assert_eq!(flattened.get("user.lock_version"), Some(&Value::Int(3)));
    assert_eq!(flattened.get("address.city"), Some(&Value::from("Amsterdam")));
    assert_eq!(flattened.get("user.inserted_at"), Some(&Value::Null));
}

#[test]
fn test_flatten_normalizes_casing() {
    let value = Value::from(serde_json::json!({"orderLines": [{"unitPrice": 5}], "Order-Id": 1}));

    let normalized = flatten(&value, &FlattenOptions::default());
    assert_eq!(normalized.get("order_lines.1.unit_price"), Some(&Value::Int(5)));
    assert_eq!(normalized.get("order_id"), Some(&Value::Int(1)));

    let raw = flatten(&value, &FlattenOptions::default().with_normalize_key_casing(false));
    assert_eq!(raw.get("orderLines.1.unitPrice"), Some(&Value::Int(5)));
}

#[test]
fn test_round_trip_textual_trees() {
    let options = FlattenOptions::default();
    for tree in [
        order(),
        Value::from(serde_json::json!({"a": {"b": [1, [2, 3], {"c": null}]}, "d": true})),
        Value::from(serde_json::json!({"matrix": [[1, 2], [3, 4]]})),
    ] {
        let rebuilt = unflatten(&flatten(&tree, &options), &options);
        assert_eq!(rebuilt, tree);
    }
}

#[test]
fn test_round_trip_with_custom_options() {
    let options = FlattenOptions::default()
        .with_key_separator("__")
        .with_list_index_start(0);
    let tree = order();

    let flattened = flatten(&tree, &options);
    assert!(flattened.contains_key("order_lines__0__sku"));
    assert_eq!(unflatten(&flattened, &options), tree);
}

#[test]
fn test_round_trip_renders_symbols_and_tuples_as_text_and_lists() {
    let options = FlattenOptions::default();
    let tree = person();
    let rebuilt = unflatten(&flatten(&tree, &options), &options);

    // Same logical content, but keys come back textual
    assert_eq!(rebuilt.to_json(), tree.to_json());
    assert_ne!(rebuilt, tree);

    let tuple = text_map([("pair", Value::tuple([1, 2]))]);
    let rebuilt = unflatten(&flatten(&tuple, &options), &options);
    assert_eq!(rebuilt, text_map([("pair", Value::list([1, 2]))]));
}

#[test]
fn test_scalar_root_round_trip() {
    let options = FlattenOptions::default();
    let rebuilt = unflatten(&flatten(&Value::from("leaf"), &options), &options);
    assert_eq!(rebuilt, Value::from("leaf"));
}
