//! Recursive walks over value trees.
//!
//! Both walks keep every node's shape: maps stay maps with the same key
//! representations, lists stay lists, tuples stay tuples and records keep
//! their type.

use crate::{
    presence::Presence,
    value::{Map, Value},
};

/// Applies `f` to every leaf of `value`.
///
/// ```
/// use pathwise::{Value, transform::map_all};
///
/// let value = Value::from(serde_json::json!({"a": [1, 2], "b": 3}));
/// let doubled = map_all(value, |leaf| match leaf {
///     Value::Int(n) => Value::Int(n * 2),
///     other => other,
/// });
/// assert_eq!(doubled.to_json(), serde_json::json!({"a": [2, 4], "b": 6}));
/// ```
pub fn map_all<F>(value: Value, mut f: F) -> Value
where
    F: FnMut(Value) -> Value,
{
    map_leaves(value, &mut f)
}

fn map_leaves<F>(value: Value, f: &mut F) -> Value
where
    F: FnMut(Value) -> Value,
{
    match value {
        Value::Map(map) => Value::Map(
            map.into_iter()
                .map(|(key, child)| (key, map_leaves(child, f)))
                .collect(),
        ),
        Value::List(items) => Value::List(items.into_iter().map(|child| map_leaves(child, f)).collect()),
        Value::Tuple(items) => Value::Tuple(items.into_iter().map(|child| map_leaves(child, f)).collect()),
        Value::Record(mut record) => {
            for slot in record.values_mut() {
                *slot = map_leaves(slot.take(), f);
            }
            Value::Record(record)
        }
        leaf => f(leaf),
    }
}

/// Prunes absent values from `value`.
///
/// Map entries and list or tuple elements whose cleaned value is absent (see
/// [`Presence`]) are dropped, and a map, list or tuple left empty collapses to
/// `Null`. Records never collapse; their absent fields become `Null`, not the
/// field's type default, so a pruned record reports absence where it found it.
/// Applying `delete_empty` twice gives the same result as applying it once.
///
/// ```
/// use pathwise::{Value, transform::delete_empty};
///
/// let person = Value::from(serde_json::json!({"name": null, "last_name": "Jansen"}));
/// assert_eq!(delete_empty(person).to_json(), serde_json::json!({"last_name": "Jansen"}));
///
/// let nobody = Value::from(serde_json::json!({"name": null, "last_name": null}));
/// assert_eq!(delete_empty(nobody), Value::Null);
/// ```
pub fn delete_empty(value: Value) -> Value {
    match value {
        Value::Map(map) => {
            let cleaned: Map = map
                .into_iter()
                .filter_map(|(key, child)| {
                    let child = delete_empty(child);
                    child.is_present().then_some((key, child))
                })
                .collect();
            if cleaned.is_empty() {
                Value::Null
            } else {
                Value::Map(cleaned)
            }
        }
        Value::List(items) => prune_items(items).map_or(Value::Null, Value::List),
        Value::Tuple(items) => prune_items(items).map_or(Value::Null, Value::Tuple),
        Value::Record(mut record) => {
            for slot in record.values_mut() {
                *slot = delete_empty(slot.take());
            }
            Value::Record(record)
        }
        leaf => leaf,
    }
}

fn prune_items(items: Vec<Value>) -> Option<Vec<Value>> {
    let cleaned: Vec<Value> = items
        .into_iter()
        .map(delete_empty)
        .filter(Presence::is_present)
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}
