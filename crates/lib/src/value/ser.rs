//! Serde bridge: turn any `Serialize` type into a [`Value`].
//!
//! Rust structs become [`Record`]s (their field names are symbols), tuples and
//! tuple structs become positional [`Value::Tuple`]s, sequences become
//! [`Value::List`]s and maps become text-keyed [`Map`]s. Enum variants carrying
//! data are encoded as a single-key map from the variant name to the payload.
//!
//! # Examples
//!
//! ```
//! use pathwise::{Value, value::to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i64, y: i64 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! let record = value.as_record().unwrap();
//! assert_eq!(record.type_name(), "Point");
//! assert_eq!(record.get("y"), Some(&Value::Int(2)));
//! ```

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::ser::{self, Serialize};

use super::{HasCanonicalFields, Key, Map, Record, RecordType, Value, ValueError};

/// Serializes `value` into a [`Value`].
///
/// Record types built here use `Null` as the default of every field; use
/// [`to_record`] to capture real defaults.
pub fn to_value<T>(value: &T) -> Result<Value, ValueError>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serializes a struct into a [`Record`] whose field defaults come from `T::default()`.
pub fn to_record<T>(value: &T) -> Result<Record, ValueError>
where
    T: Serialize + Default,
{
    let defaults = expect_record(to_value(&T::default())?)?;
    let record = expect_record(to_value(value)?)?;

    let mut result = Record::new(defaults.record_type().clone());
    for (field, value) in record.fields() {
        result.set(field.as_str(), value.clone());
    }
    Ok(result)
}

/// Serializes a persisted entity into a [`Record`] carrying its canonical field list.
pub fn to_entity<T>(value: &T) -> Result<Record, ValueError>
where
    T: Serialize + Default + HasCanonicalFields,
{
    let record = to_record(value)?;
    let (ty, values) = record.into_parts();
    let ty = Arc::unwrap_or_clone(ty).canonical_fields(T::canonical_fields().iter().copied());
    Ok(Record::from_values(ty.into_shared(), values))
}

fn expect_record(value: Value) -> Result<Record, ValueError> {
    match value {
        Value::Record(record) => Ok(record),
        other => Err(ValueError::TypeMismatch {
            expected: "struct".to_string(),
            actual: other.type_name().to_string(),
        }),
    }
}

/// A `serde::Serializer` producing [`Value`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = ValueError;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value, ValueError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, ValueError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, ValueError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, ValueError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, ValueError> {
        Ok(Value::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, ValueError> {
        match i64::try_from(v) {
            Ok(n) => Ok(Value::Int(n)),
            Err(_) => Decimal::try_from_i128_with_scale(v, 0)
                .map(Value::Decimal)
                .map_err(|e| ValueError::SerializationFailed {
                    reason: format!("integer {v} is out of range: {e}"),
                }),
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value, ValueError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, ValueError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, ValueError> {
        Ok(Value::Int(v.into()))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, ValueError> {
        match i64::try_from(v) {
            Ok(n) => Ok(Value::Int(n)),
            Err(_) => Ok(Value::Decimal(Decimal::from(v))),
        }
    }

    fn serialize_u128(self, v: u128) -> Result<Value, ValueError> {
        match i128::try_from(v) {
            Ok(n) => self.serialize_i128(n),
            Err(_) => Err(ValueError::SerializationFailed {
                reason: format!("integer {v} is out of range"),
            }),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value, ValueError> {
        Ok(Value::Float(v.into()))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, ValueError> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, ValueError> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, ValueError> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, ValueError> {
        Ok(Value::List(v.iter().map(|b| Value::Int((*b).into())).collect()))
    }

    fn serialize_none(self) -> Result<Value, ValueError> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value, ValueError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, ValueError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, ValueError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, ValueError> {
        Ok(Value::Text(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value, ValueError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, ValueError>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(self)?;
        Ok(Value::Map(Map::new().with(variant, inner)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec, ValueError> {
        Ok(SerializeVec {
            items: Vec::with_capacity(len.unwrap_or(0)),
            positional: false,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec, ValueError> {
        Ok(SerializeVec {
            items: Vec::with_capacity(len),
            positional: true,
        })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SerializeVec, ValueError> {
        self.serialize_tuple(len)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant, ValueError> {
        Ok(SerializeTupleVariant {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap, ValueError> {
        Ok(SerializeMap {
            map: Map::new(),
            next_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeRecord, ValueError> {
        Ok(SerializeRecord {
            name,
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant, ValueError> {
        Ok(SerializeStructVariant {
            variant,
            record: SerializeRecord {
                name: variant,
                fields: Vec::with_capacity(len),
            },
        })
    }
}

/// Collects sequence and tuple elements.
pub struct SerializeVec {
    items: Vec<Value>,
    positional: bool,
}

impl SerializeVec {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ValueError> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        if self.positional {
            Value::Tuple(self.items)
        } else {
            Value::List(self.items)
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ValueError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ValueError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ValueError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(self.finish())
    }
}

/// Collects a tuple variant's payload.
pub struct SerializeTupleVariant {
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ValueError> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Map(
            Map::new().with(self.variant, Value::Tuple(self.items)),
        ))
    }
}

/// Collects map entries; keys must render as text.
pub struct SerializeMap {
    map: Map,
    next_key: Option<Key>,
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), ValueError> {
        let key = match key.serialize(ValueSerializer)? {
            Value::Text(text) => Key::Text(text),
            Value::Int(n) => Key::Text(n.to_string()),
            Value::Bool(b) => Key::Text(b.to_string()),
            other => {
                return Err(ValueError::InvalidMapKey {
                    actual: other.type_name().to_string(),
                });
            }
        };
        self.next_key = Some(key);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ValueError> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| ValueError::SerializationFailed {
                reason: "map value serialized before its key".to_string(),
            })?;
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Map(self.map))
    }
}

/// Collects struct fields into a [`Record`].
pub struct SerializeRecord {
    name: &'static str,
    fields: Vec<(&'static str, Value)>,
}

impl SerializeRecord {
    fn finish(self) -> Record {
        let (names, values): (Vec<_>, Vec<_>) = self.fields.into_iter().unzip();
        let ty = names
            .into_iter()
            .fold(RecordType::new(self.name), |ty, name| {
                ty.field(name, Value::Null)
            });
        Record::from_values(ty.into_shared(), values)
    }
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ValueError> {
        self.fields.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value, ValueError> {
        Ok(Value::Record(self.finish()))
    }
}

/// Collects a struct variant's payload.
pub struct SerializeStructVariant {
    variant: &'static str,
    record: SerializeRecord,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = ValueError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ValueError> {
        ser::SerializeStruct::serialize_field(&mut self.record, key, value)
    }

    fn end(self) -> Result<Value, ValueError> {
        let record = self.record.finish();
        Ok(Value::Map(Map::new().with(self.variant, record)))
    }
}
