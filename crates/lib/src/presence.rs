//! Present/absent classification.

use crate::value::Value;

/// Whether a value counts as "something there".
pub trait Presence {
    /// Returns true if the value carries content.
    fn is_present(&self) -> bool;

    /// Returns true if the value carries no content.
    fn is_absent(&self) -> bool {
        !self.is_present()
    }
}

/// `Null` and empty maps, lists and tuples are absent. Every other value,
/// including every record and every scalar (empty text, zero, `false`), is
/// present.
impl Presence for Value {
    fn is_present(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Map(map) => !map.is_empty(),
            Value::List(items) | Value::Tuple(items) => !items.is_empty(),
            _ => true,
        }
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}
