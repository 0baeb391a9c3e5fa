//! Typed records: named values with a fixed field set.
//!
//! A [`RecordType`] describes the shape of a record: its name, its ordered
//! fields with their default values and, for persisted entities, the canonical
//! subset of fields that make up the entity proper. A [`Record`] pairs a shared
//! type with one value per field.
//!
//! Records never gain or lose fields. Deleting a field resets it to the type's
//! default instead.

use std::sync::Arc;

use super::{Value, key::Symbol};

/// Marks a Rust type as a persisted entity with a canonical field list.
///
/// Fields not named here (bookkeeping and metadata fields) are dropped when
/// the record is normalized to plain data.
///
/// ```
/// use pathwise::value::HasCanonicalFields;
///
/// struct User { id: i64, name: String, lock_version: i64 }
///
/// impl HasCanonicalFields for User {
///     fn canonical_fields() -> &'static [&'static str] {
///         &["id", "name"]
///     }
/// }
/// ```
pub trait HasCanonicalFields {
    /// The fields that constitute the entity, in order.
    fn canonical_fields() -> &'static [&'static str];
}

/// A single field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    name: Symbol,
    default: Value,
}

impl FieldDef {
    /// Returns the field name.
    pub fn name(&self) -> &Symbol {
        &self.name
    }

    /// Returns the value a fresh or deleted field holds.
    pub fn default(&self) -> &Value {
        &self.default
    }
}

/// The schema of a typed record.
///
/// # Examples
///
/// ```
/// use pathwise::value::{Record, RecordType};
///
/// let person = RecordType::new("Person")
///     .field("name", "")
///     .field("age", 0)
///     .into_shared();
///
/// let record = Record::new(person).with("name", "Alice");
/// assert_eq!(record.get("name"), Some(&"Alice".into()));
/// assert_eq!(record.get("age"), Some(&0.into()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    name: String,
    fields: Vec<FieldDef>,
    canonical: Option<Vec<Symbol>>,
}

impl RecordType {
    /// Creates a record type with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            canonical: None,
        }
    }

    /// Builder method to append a field with its default value.
    ///
    /// Redefining an existing field replaces its default.
    pub fn field(mut self, name: impl AsRef<str>, default: impl Into<Value>) -> Self {
        let name = name.as_ref();
        let default = default.into();
        match self.fields.iter_mut().find(|f| f.name.as_str() == name) {
            Some(existing) => existing.default = default,
            None => self.fields.push(FieldDef {
                name: Symbol::new(name),
                default,
            }),
        }
        self
    }

    /// Builder method to mark this type as a persisted entity.
    pub fn canonical_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.canonical = Some(names.into_iter().map(Symbol::new).collect());
        self
    }

    /// Wraps the type in an `Arc` for sharing between records.
    pub fn into_shared(self) -> Arc<RecordType> {
        Arc::new(self)
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field definitions in order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns the canonical field list for persisted entities.
    pub fn canonical(&self) -> Option<&[Symbol]> {
        self.canonical.as_deref()
    }

    /// Returns true if this type carries a canonical field list.
    pub fn is_entity(&self) -> bool {
        self.canonical.is_some()
    }

    /// Returns the position of the named field.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name.as_str() == name)
    }
}

/// A value of a [`RecordType`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    ty: Arc<RecordType>,
    values: Vec<Value>,
}

impl Record {
    /// Creates a record with every field at its default value.
    pub fn new(ty: Arc<RecordType>) -> Self {
        let values = ty.fields.iter().map(|f| f.default.clone()).collect();
        Self { ty, values }
    }

    /// Creates a record from explicit field values.
    ///
    /// Missing trailing values are filled with defaults, extra values are ignored.
    pub fn from_values(ty: Arc<RecordType>, values: impl IntoIterator<Item = Value>) -> Self {
        let mut record = Self::new(ty);
        for (slot, value) in record.values.iter_mut().zip(values) {
            *slot = value;
        }
        record
    }

    /// Returns the record's type.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    /// Returns the record's type name.
    pub fn type_name(&self) -> &str {
        &self.ty.name
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record type has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the record has a field named `name`.
    pub fn has_field(&self, name: &str) -> bool {
        self.ty.position(name).is_some()
    }

    /// Gets a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.ty.position(name).map(|i| &self.values[i])
    }

    /// Gets a mutable field value by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.ty.position(name).map(|i| &mut self.values[i])
    }

    /// Sets an existing field. Returns false if the field does not exist.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> bool {
        match self.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Resets a field to its type default. Returns false if the field does not exist.
    pub fn reset(&mut self, name: &str) -> bool {
        match self.ty.position(name) {
            Some(i) => {
                self.values[i] = self.ty.fields[i].default.clone();
                true
            }
            None => false,
        }
    }

    /// Builder method to set a field and return self
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Iterates over `(field, value)` pairs in definition order.
    pub fn fields(&self) -> impl Iterator<Item = (&Symbol, &Value)> {
        self.ty.fields.iter().map(|f| &f.name).zip(self.values.iter())
    }

    /// Iterates mutably over field values in definition order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.values.iter_mut()
    }

    /// Consumes the record, returning its type and field values.
    pub fn into_parts(self) -> (Arc<RecordType>, Vec<Value>) {
        (self.ty, self.values)
    }
}
