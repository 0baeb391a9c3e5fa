//! Mapping type with indifferent keys.

use std::collections::BTreeMap;

use super::{
    Value,
    key::{Key, KeyStyle, Symbol},
};

/// An ordered association from [`Key`] to [`Value`].
///
/// `Map` stores keys exactly as given. Lookups here are exact; indifferent
/// resolution across representations lives in
/// [`access::resolve`](crate::access::resolve).
///
/// # Examples
///
/// ```
/// use pathwise::{Value, value::{Key, Map}};
///
/// let map = Map::new()
///     .with(Key::symbol("name"), "Alice")
///     .with("age", 30);
///
/// assert_eq!(map.len(), 2);
/// assert!(map.contains_key(&Key::symbol("name")));
/// assert!(!map.contains_key(&Key::text("name")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: BTreeMap<Key, Value>,
}

impl Map {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the exact key is present.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Exact lookup.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Exact mutable lookup.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Exact lookup returning the stored key alongside the value.
    pub fn get_key_value(&self, key: &Key) -> Option<(&Key, &Value)> {
        self.entries.get_key_value(key)
    }

    /// Returns the stored symbolic key named `name`, if the map has one.
    pub fn find_symbol(&self, name: &str) -> Option<&Key> {
        self.entries
            .get_key_value(&Key::Symbol(Symbol::new(name)))
            .map(|(key, _)| key)
    }

    /// Inserts a value under the exact key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes the exact key, returning its value.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Keeps only the entries for which `f` returns true.
    pub fn retain(&mut self, f: impl FnMut(&Key, &mut Value) -> bool) {
        self.entries.retain(f);
    }

    /// Reports which key representation the map uses.
    pub fn key_style(&self) -> KeyStyle {
        let mut symbolic = false;
        let mut textual = false;
        for key in self.entries.keys() {
            match key {
                Key::Symbol(_) => symbolic = true,
                Key::Text(_) => textual = true,
            }
            if symbolic && textual {
                return KeyStyle::Mixed;
            }
        }
        match (symbolic, textual) {
            (false, false) => KeyStyle::Empty,
            (true, false) => KeyStyle::Symbolic,
            (false, true) => KeyStyle::Textual,
            (true, true) => KeyStyle::Mixed,
        }
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Iterates mutably over entries in key order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Iterates over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates over values in key order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Builder method to insert a value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = std::collections::btree_map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
