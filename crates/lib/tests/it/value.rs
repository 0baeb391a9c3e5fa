//! Value model integration tests
//!
//! Covers the serde bridge into records, the JSON bridge and the
//! process-wide symbol table.

use pathwise::{
    Value,
    value::{HasCanonicalFields, Key, SymbolTable, to_entity, to_record, to_value},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Customer {
    id: i64,
    name: String,
    country: String,
    lock_version: i64,
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            country: "NL".to_string(),
            lock_version: 0,
        }
    }
}

impl HasCanonicalFields for Customer {
    fn canonical_fields() -> &'static [&'static str] {
        &["id", "name", "country"]
    }
}

fn customer() -> Customer {
    Customer {
        id: 7,
        name: "Ada".to_string(),
        country: "BE".to_string(),
        lock_version: 2,
    }
}

#[test]
fn test_to_value_builds_records() {
    let value = to_value(&customer()).unwrap();
    assert_eq!(value.as_record().map(|r| r.type_name()), Some("Customer"));
    assert_eq!(value.at("country"), Some(&Value::from("BE")));
}

#[test]
fn test_to_record_captures_defaults() {
    let record = to_record(&customer()).unwrap();
    let mut value = Value::from(record);
    value = value.without("country");
    assert_eq!(value.at("country"), Some(&Value::from("NL")));
}

#[test]
fn test_to_entity_normalizes_to_canonical_fields() {
    let entity = to_entity(&customer()).unwrap();
    assert!(entity.record_type().is_entity());

    let plain = pathwise::from_record(&Value::from(entity), &pathwise::Transforms::new());
    assert_eq!(
        plain.to_json(),
        serde_json::json!({"id": 7, "name": "Ada", "country": "BE"})
    );
}

#[test]
fn test_json_round_trip_keeps_content() {
    let json = serde_json::json!({
        "id": 1,
        "price": 9.5,
        "tags": ["a", "b"],
        "nested": {"ok": true, "none": null}
    });
    let value = Value::from(json.clone());
    assert_eq!(value.to_json(), json);
    assert_eq!(serde_json::to_value(&value).unwrap(), json);
}

#[test]
fn test_display_marks_symbols() {
    let value = Value::from(
        pathwise::value::Map::new()
            .with(Key::symbol("id"), 1)
            .with("name", "x"),
    );
    assert_eq!(value.to_string(), "{:id: 1, \"name\": x}");
}

#[test]
fn test_global_symbol_table_installs_once() {
    let table = SymbolTable::from_names(["installed_only_here"]);
    assert!(SymbolTable::install(table).is_ok());
    assert!(SymbolTable::global().contains("installed_only_here"));

    let rejected = SymbolTable::install(SymbolTable::from_names(["second"])).unwrap_err();
    assert!(rejected.contains("second"));
    assert!(!SymbolTable::global().contains("second"));

    // Lookups never grow the installed table
    assert!(SymbolTable::global().lookup("unknown").is_none());
    assert_eq!(SymbolTable::global().len(), 1);
}
