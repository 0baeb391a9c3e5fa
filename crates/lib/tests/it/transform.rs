//! Tree transformer integration tests

use pathwise::{
    Presence, Value, delete_empty, map_all,
    value::{Key, Record},
};

use crate::helpers::{account, person, symbolic_map, text_map, user_type};

#[test]
fn test_delete_empty_drops_absent_fields() {
    let value = text_map([("name", Value::Null), ("last_name", Value::from("Jansen"))]);
    assert_eq!(delete_empty(value), text_map([("last_name", "Jansen")]));
}

#[test]
fn test_delete_empty_collapses_to_absence() {
    let value = text_map([("name", Value::Null), ("last_name", Value::Null)]);
    assert_eq!(delete_empty(value), Value::Null);
}

#[test]
fn test_delete_empty_never_collapses_records() {
    let empty_user = Value::from(Record::new(user_type()).with("lock_version", Value::Null));
    let cleaned = delete_empty(empty_user);
    assert!(cleaned.as_record().is_some());
    assert!(cleaned.is_present());
}

#[test]
fn test_delete_empty_collapses_fully_pruned_tuple() {
    assert_eq!(delete_empty(Value::tuple([Value::Null, Value::map()])), Value::Null);

    let nested = text_map([("pair", Value::tuple([Value::Null, Value::list([Value::Null])]))]);
    assert_eq!(delete_empty(nested), Value::Null);
}

#[test]
fn test_delete_empty_sets_absent_record_fields_to_null() {
    // lock_version defaults to 0 but an emptied value prunes to Null
    let user = Value::from(Record::new(user_type()).with("lock_version", Value::map()));
    let cleaned = delete_empty(user);
    assert_eq!(cleaned.at("lock_version"), Some(&Value::Null));
}

#[test]
fn test_delete_empty_is_idempotent() {
    let samples = [
        person(),
        account(),
        Value::from(serde_json::json!({"a": [null, {"b": []}, [[]]], "c": {"d": {}}})),
        Value::tuple([Value::Null, Value::list([Value::Null]), Value::from(0)]),
        Value::Null,
        Value::from(""),
    ];
    for sample in samples {
        let once = delete_empty(sample);
        let twice = delete_empty(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_delete_empty_keeps_key_representation() {
    let value = symbolic_map([("kept", Value::from(1)), ("dropped", Value::map())]);
    let cleaned = delete_empty(value);
    let map = cleaned.as_map().unwrap();
    assert_eq!(map.len(), 1);
    assert!(map.contains_key(&Key::symbol("kept")));
}

#[test]
fn test_map_all_preserves_shape() {
    let upper = map_all(person(), |leaf| match leaf {
        Value::Text(text) => Value::Text(text.to_uppercase()),
        other => other,
    });

    assert_eq!(upper.at("country.code"), Some(&Value::from("NL")));
    assert_eq!(upper.at("meta.skills.2.type"), Some(&Value::from("HOBBY")));
    let country = upper.at("country").and_then(Value::as_map).unwrap();
    assert!(country.contains_key(&Key::symbol("name")));
}

#[test]
fn test_map_all_reaches_record_fields() {
    let counted = map_all(account(), |leaf| match leaf {
        Value::Int(n) => Value::Int(n * 10),
        other => other,
    });
    assert_eq!(counted.at("user.lock_version"), Some(&Value::Int(30)));
    assert!(counted.at("user").and_then(Value::as_record).is_some());
}
