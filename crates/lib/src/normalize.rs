//! Conversion of typed records into plain nested data.
//!
//! [`from_record`] walks a tree and replaces every [`Record`](crate::value::Record)
//! with a map keyed by field symbols. Structured leaves (dates, times,
//! decimals) are rendered as text by default transforms; callers can register
//! extra transforms per type name to override those or to handle particular
//! record types themselves.
//!
//! ```
//! use pathwise::{Value, normalize::{Transforms, from_record}, value::{Key, Record, RecordType}};
//!
//! let user = RecordType::new("User")
//!     .field("id", 0)
//!     .field("name", "")
//!     .field("lock_version", 0)
//!     .canonical_fields(["id", "name"])
//!     .into_shared();
//!
//! let record = Record::new(user).with("id", 7).with("name", "Ada");
//! let plain = from_record(&Value::from(record), &Transforms::new());
//!
//! let map = plain.as_map().unwrap();
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(&Key::symbol("name")), Some(&Value::from("Ada")));
//! ```

use std::{collections::HashMap, fmt, sync::Arc};

use crate::value::{Key, Map, Record, Value};

/// A leaf transform applied to values of one type.
pub type Transform = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Registry of transforms keyed by type name.
///
/// Type names are those reported by [`Value::struct_name`]: a record's type
/// name, or one of `Date`, `Time`, `NaiveDateTime`, `DateTime` and `Decimal`.
#[derive(Clone, Default)]
pub struct Transforms {
    by_type: HashMap<String, Transform>,
}

impl Transforms {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the registry holding the default leaf transforms.
    pub fn defaults() -> Self {
        Self::new()
            .with("Date", render)
            .with("Time", render)
            .with("NaiveDateTime", render)
            .with("DateTime", render)
            .with("Decimal", render)
    }

    /// Builder method to register a transform for `type_name`.
    pub fn with<F>(mut self, type_name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.insert(type_name, transform);
        self
    }

    /// Registers a transform for `type_name`, replacing any previous one.
    pub fn insert<F>(&mut self, type_name: impl Into<String>, transform: F)
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.by_type.insert(type_name.into(), Arc::new(transform));
    }

    /// Returns the transform registered for `type_name`.
    pub fn get(&self, type_name: &str) -> Option<&Transform> {
        self.by_type.get(type_name)
    }

    /// Returns a registry with `other`'s transforms layered over these.
    pub fn merged(&self, other: &Transforms) -> Transforms {
        let mut by_type = self.by_type.clone();
        by_type.extend(other.by_type.iter().map(|(k, v)| (k.clone(), Arc::clone(v))));
        Transforms { by_type }
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl fmt::Debug for Transforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.by_type.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Transforms").field("types", &names).finish()
    }
}

// Canonical text for structured leaves.
fn render(value: &Value) -> Value {
    match value {
        Value::Date(d) => Value::Text(d.to_string()),
        Value::Time(t) => Value::Text(t.to_string()),
        Value::NaiveDateTime(dt) => Value::Text(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        Value::DateTime(dt) => Value::Text(dt.to_rfc3339()),
        Value::Decimal(d) => Value::Text(d.to_string()),
        other => other.clone(),
    }
}

/// Converts `value` into plain data.
///
/// - a value whose type has a transform in `extra` or in the defaults is
///   replaced by the transform's output, without further recursion
/// - an entity record keeps exactly its canonical fields, any other record
///   keeps all of its fields; either way it becomes a map with symbol keys
/// - maps, lists and tuples are rebuilt with normalized children
/// - other leaves pass through
///
/// The output contains no records.
pub fn from_record(value: &Value, extra: &Transforms) -> Value {
    let transforms = Transforms::defaults().merged(extra);
    normalize(value, &transforms)
}

fn normalize(value: &Value, transforms: &Transforms) -> Value {
    if let Some(transform) = value.struct_name().and_then(|name| transforms.get(name)) {
        return transform(value);
    }
    match value {
        Value::Record(record) => Value::Map(record_fields(record, transforms)),
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(key, child)| (key.clone(), normalize(child, transforms)))
                .collect(),
        ),
        Value::List(items) => Value::List(items.iter().map(|child| normalize(child, transforms)).collect()),
        Value::Tuple(items) => Value::Tuple(items.iter().map(|child| normalize(child, transforms)).collect()),
        leaf => leaf.clone(),
    }
}

fn record_fields(record: &Record, transforms: &Transforms) -> Map {
    match record.record_type().canonical() {
        Some(canonical) => canonical
            .iter()
            .filter_map(|field| {
                let child = record.get(field.as_str())?;
                Some((Key::Symbol(field.clone()), normalize(child, transforms)))
            })
            .collect(),
        None => record
            .fields()
            .map(|(field, child)| (Key::Symbol(field.clone()), normalize(child, transforms)))
            .collect(),
    }
}
