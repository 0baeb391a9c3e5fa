//! Record normalization integration tests

use chrono::NaiveDate;
use pathwise::{
    Transforms, Value, from_record,
    value::{Key, Record},
};
use rust_decimal::Decimal;

use crate::helpers::{account, address_type, symbolic_map, user_type};

fn contains_record(value: &Value) -> bool {
    match value {
        Value::Record(_) => true,
        Value::Map(map) => map.values().any(contains_record),
        Value::List(items) | Value::Tuple(items) => items.iter().any(contains_record),
        _ => false,
    }
}

#[test]
fn test_entity_keeps_canonical_fields_only() {
    let plain = from_record(&account(), &Transforms::new());

    let user = plain.at("user").and_then(Value::as_map).unwrap();
    let keys: Vec<&Key> = user.keys().collect();
    assert_eq!(keys, [&Key::symbol("id"), &Key::symbol("name")]);
    assert_eq!(plain.at("user.name"), Some(&Value::from("Anne")));
}

#[test]
fn test_plain_record_keeps_every_field() {
    let plain = from_record(&account(), &Transforms::new());
    assert_eq!(
        plain.at("address"),
        Some(&symbolic_map([
            ("street", Value::from("Prinsengracht 263")),
            ("city", Value::from("Amsterdam")),
        ]))
    );
}

#[test]
fn test_output_contains_no_records() {
    let nested = Value::list([account(), Value::tuple([account()])]);
    let plain = from_record(&nested, &Transforms::new());
    assert!(contains_record(&nested));
    assert!(!contains_record(&plain));
}

#[test]
fn test_structured_leaves_render_inside_records() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();
    let user = Record::new(user_type())
        .with("id", Decimal::new(42, 0))
        .with("inserted_at", date);
    let plain = from_record(&Value::from(user), &Transforms::new());

    assert_eq!(plain.at("id"), Some(&Value::from("42")));
    // inserted_at is not canonical
    assert_eq!(plain.at("inserted_at"), None);

    let with_date = Value::from(Record::new(address_type()).with("street", date));
    let plain = from_record(&with_date, &Transforms::new());
    assert_eq!(plain.at("street"), Some(&Value::from("2023-12-24")));
}

#[test]
fn test_record_transform_overrides_structure() {
    let transforms = Transforms::new().with("Address", |value| {
        let city = value.at("city").cloned().unwrap_or_default();
        Value::from(format!("somewhere in {city}"))
    });
    let plain = from_record(&account(), &transforms);
    assert_eq!(plain.at("address"), Some(&Value::from("somewhere in Amsterdam")));
    // Other record types still normalize structurally
    assert_eq!(plain.at("user.id"), Some(&Value::Int(1)));
}
