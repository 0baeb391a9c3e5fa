use std::sync::Arc;

use pathwise::{
    Value,
    value::{Key, Map, Record, RecordType},
};

// ==========================
// FIXTURES
// ==========================

/// Builds a map whose keys are all symbols.
pub fn symbolic_map<I, V>(entries: I) -> Value
where
    I: IntoIterator<Item = (&'static str, V)>,
    V: Into<Value>,
{
    Value::Map(
        entries
            .into_iter()
            .map(|(name, value)| (Key::symbol(name), value.into()))
            .collect(),
    )
}

/// The person used across accessor scenarios, keyed by symbols throughout.
pub fn person() -> Value {
    symbolic_map([
        ("name", Value::from("Vault Dweller")),
        (
            "country",
            symbolic_map([("code", "NL"), ("name", "Netherlands")]),
        ),
        (
            "meta",
            symbolic_map([(
                "skills",
                Value::list([
                    Value::from("programmer"),
                    Value::from("manager"),
                    symbolic_map([("type", "hobby"), ("name", "painting")]),
                ]),
            )]),
        ),
    ])
}

/// A textual-keyed order with nested line items.
pub fn order() -> Value {
    Value::from(serde_json::json!({
        "test": "123",
        "order_lines": [{"sku": "123"}, {"sku": "456"}]
    }))
}

/// A persisted entity type with bookkeeping fields outside its canonical list.
pub fn user_type() -> Arc<RecordType> {
    RecordType::new("User")
        .field("id", Value::Null)
        .field("name", Value::Null)
        .field("inserted_at", Value::Null)
        .field("lock_version", 0)
        .canonical_fields(["id", "name"])
        .into_shared()
}

/// A plain record type with no canonical list.
pub fn address_type() -> Arc<RecordType> {
    RecordType::new("Address")
        .field("street", Value::Null)
        .field("city", "Amsterdam")
        .into_shared()
}

/// Builds a text-keyed map.
pub fn text_map<I, V>(entries: I) -> Value
where
    I: IntoIterator<Item = (&'static str, V)>,
    V: Into<Value>,
{
    Value::Map(entries.into_iter().collect::<Map>())
}

/// A symbolic map holding a user entity next to a plain address record.
pub fn account() -> Value {
    let user = Record::new(user_type())
        .with("id", 1)
        .with("name", "Anne")
        .with("lock_version", 3);
    let address = Record::new(address_type()).with("street", "Prinsengracht 263");
    symbolic_map([("user", Value::from(user)), ("address", Value::from(address))])
}
