//! Path-based access to nested values.
//!
//! [`Accessor`] reads, writes and deletes inside a [`Value`] tree without the
//! caller knowing which shape each node has or which key representation a map
//! uses. Every operation is total: paths that do not resolve read as absent,
//! out-of-range positions and unsupported shapes turn writes into no-ops.
//!
//! # Usage
//!
//! ```
//! use pathwise::{Value, access, value::{Key, Map}};
//!
//! let person = Value::from(
//!     Map::new()
//!         .with(Key::symbol("name"), "Vault Dweller")
//!         .with(Key::symbol("skills"), Value::list(["programmer", "manager"])),
//! );
//!
//! // Text paths resolve against symbolic keys
//! assert_eq!(access::deep_get(&person, "skills.1"), Some(&Value::from("manager")));
//!
//! // Writes return the updated value and keep the existing key representation
//! let person = access::deep_put(person, "skills.0", "lockpicker");
//! assert_eq!(person.at("skills.0"), Some(&Value::from("lockpicker")));
//! assert!(person.as_map().unwrap().contains_key(&Key::symbol("skills")));
//! ```
//!
//! Free functions and the [`Value`] convenience methods use
//! [`Accessor::default()`], which consults the process-wide
//! [`SymbolTable`] and numbers positions from zero.

pub mod path;
pub mod resolve;
pub mod shape;

pub use path::{Path, PathSegment, parse_path, parse_path_with};
pub use resolve::{resolve_get, resolve_get_mut, resolve_key, resolve_key_for_write};
pub use shape::{merge_skeleton, shape_at, shape_skeleton};

use crate::value::{SymbolTable, Value};

static NULL: Value = Value::Null;

/// Structural accessor over [`Value`] trees.
///
/// An accessor carries the symbol table consulted when text keys are written
/// into symbolic maps, and the number that addresses the first position of a
/// list or tuple.
///
/// ```
/// use pathwise::{Value, access::Accessor, value::SymbolTable};
///
/// let symbols = SymbolTable::from_names(["code"]);
/// let accessor = Accessor::new(&symbols).with_index_base(1);
///
/// let list = Value::list(["a", "b", "c"]);
/// assert_eq!(accessor.get(&list, 1usize), Some(&Value::from("a")));
/// assert_eq!(accessor.get(&list, 0usize), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Accessor<'t> {
    symbols: &'t SymbolTable,
    index_base: usize,
}

impl Default for Accessor<'static> {
    fn default() -> Self {
        Self::new(SymbolTable::global())
    }
}

impl<'t> Accessor<'t> {
    /// Creates an accessor consulting `symbols`, with zero-based positions.
    pub fn new(symbols: &'t SymbolTable) -> Self {
        Self {
            symbols,
            index_base: 0,
        }
    }

    /// Builder method to set the number addressing the first position.
    pub fn with_index_base(mut self, index_base: usize) -> Self {
        self.index_base = index_base;
        self
    }

    /// Returns the symbol table writes consult.
    pub fn symbols(&self) -> &'t SymbolTable {
        self.symbols
    }

    /// Returns the number addressing the first position.
    pub fn index_base(&self) -> usize {
        self.index_base
    }

    fn position(&self, index: usize) -> Option<usize> {
        index.checked_sub(self.index_base)
    }

    // Single level

    /// Reads one level down.
    ///
    /// Lists and tuples take index segments, maps and records take field
    /// segments. Any other combination, an out-of-range index, or a missing
    /// key reads as `None`.
    pub fn get<'v>(&self, container: &'v Value, key: impl Into<PathSegment>) -> Option<&'v Value> {
        self.get_segment(container, &key.into())
    }

    /// Like [`get`](Self::get), substituting `default` when nothing is there.
    pub fn get_or<'v>(
        &self,
        container: &'v Value,
        key: impl Into<PathSegment>,
        default: &'v Value,
    ) -> &'v Value {
        self.get(container, key).unwrap_or(default)
    }

    /// Writes one level down and returns the updated container.
    ///
    /// Lists and tuples never grow: writing past the end is a no-op. Records
    /// only accept their own fields. Map keys go through
    /// [`resolve_key_for_write`].
    pub fn put(&self, mut container: Value, key: impl Into<PathSegment>, value: impl Into<Value>) -> Value {
        self.put_in(&mut container, &key.into(), value.into());
        container
    }

    /// Deletes one level down and returns the updated container.
    ///
    /// Map entries are removed, list and tuple elements are removed with the
    /// tail shifted down, record fields are reset to their default.
    pub fn delete(&self, mut container: Value, key: impl Into<PathSegment>) -> Value {
        self.delete_in(&mut container, &key.into());
        container
    }

    // Deep

    /// Reads at `path`, returning `None` if any segment fails to resolve.
    pub fn deep_get<'v>(&self, value: &'v Value, path: impl Into<Path>) -> Option<&'v Value> {
        let path = path.into();
        path.iter()
            .try_fold(value, |node, segment| self.get_segment(node, segment))
    }

    /// Reads at `path` with absence propagation.
    ///
    /// - an empty path yields `value` itself
    /// - a `Null` or leaf value reached before the path ends yields `Null`
    /// - a missing intermediate yields `Null`
    /// - only a missing final segment yields `default`
    ///
    /// ```
    /// use pathwise::{Value, access};
    ///
    /// let fallback = Value::from("fallback");
    /// assert_eq!(access::deep_get_or(&Value::Null, "a.b", &fallback), &Value::Null);
    ///
    /// let value = Value::from(serde_json::json!({"a": {}}));
    /// assert_eq!(access::deep_get_or(&value, "a.b", &fallback), &fallback);
    /// assert_eq!(access::deep_get_or(&value, "x.b", &fallback), &Value::Null);
    /// ```
    pub fn deep_get_or<'v>(&self, value: &'v Value, path: impl Into<Path>, default: &'v Value) -> &'v Value {
        self.deep_get_in(value, path.into().segments(), default)
    }

    fn deep_get_in<'v>(&self, value: &'v Value, segments: &[PathSegment], default: &'v Value) -> &'v Value {
        let Some((head, rest)) = segments.split_first() else {
            return value;
        };
        if !value.is_container() {
            return &NULL;
        }
        match self.get_segment(value, head) {
            Some(child) => self.deep_get_in(child, rest, default),
            None if rest.is_empty() => default,
            None => &NULL,
        }
    }

    /// Writes `new` at `path` and returns the updated value.
    ///
    /// An empty path replaces `value` wholesale. Each level must already be a
    /// container that accepts the segment: writing through a missing
    /// intermediate leaves `Null` at the first missing key. Pre-shape with
    /// [`shape_skeleton`] and [`merge_skeleton`] to write into structure that
    /// does not exist yet.
    ///
    /// ```
    /// use pathwise::{Value, path, access};
    ///
    /// let skills = Value::list(["programmer", "manager", "hobbyist"]);
    /// let skills = access::deep_put(skills, path![1], "vaultdweller");
    /// assert_eq!(skills, Value::list(["programmer", "vaultdweller", "hobbyist"]));
    /// ```
    pub fn deep_put(&self, mut value: Value, path: impl Into<Path>, new: impl Into<Value>) -> Value {
        self.deep_put_in(&mut value, path.into().segments(), new.into());
        value
    }

    fn deep_put_in(&self, value: &mut Value, segments: &[PathSegment], new: Value) {
        let Some((head, rest)) = segments.split_first() else {
            *value = new;
            return;
        };
        if let Some(child) = self.get_segment_mut(value, head) {
            self.deep_put_in(child, rest, new);
        } else {
            let mut child = Value::Null;
            self.deep_put_in(&mut child, rest, new);
            self.put_in(value, head, child);
        }
    }

    /// Deletes at `path` and returns the updated value.
    ///
    /// Siblings of the deleted entry are untouched. A path whose parent does
    /// not resolve, and the empty path, leave `value` unchanged.
    pub fn deep_delete(&self, mut value: Value, path: impl Into<Path>) -> Value {
        let path = path.into();
        let Some((last, parent)) = path.split_last() else {
            return value;
        };
        match self.walk_mut(&mut value, parent) {
            Some(container) => {
                self.delete_in(container, last);
            }
            None => tracing::trace!(%path, "Parent of deleted path does not resolve"),
        }
        value
    }

    /// Projects the values at `paths` into a sparse nested map.
    ///
    /// The output is the union of every path's skeleton, with every index
    /// segment collapsed onto the first position, filled with the value found
    /// at each original path (`Null` where nothing is found).
    ///
    /// ```
    /// use pathwise::{Value, path, access};
    ///
    /// let person = Value::from(serde_json::json!({
    ///     "name": "Vault Dweller",
    ///     "country": {"code": "NL", "name": "Netherlands"},
    ///     "meta": {"skills": ["programmer", "manager", {"type": "hobby", "name": "painting"}]}
    /// }));
    ///
    /// let picked = access::deep_get_many(&person, [path!["country", "code"], path!["meta", "skills", 2, "type"]]);
    /// assert_eq!(picked.to_json(), serde_json::json!({
    ///     "country": {"code": "NL"},
    ///     "meta": {"skills": [{"type": "hobby"}]}
    /// }));
    /// ```
    pub fn deep_get_many<I, P>(&self, value: &Value, paths: I) -> Value
    where
        I: IntoIterator<Item = P>,
        P: Into<Path>,
    {
        let paths: Vec<(Path, Path)> = paths
            .into_iter()
            .map(|path| {
                let path = path.into();
                let normalized = path
                    .iter()
                    .map(|segment| match segment {
                        PathSegment::Index(_) => PathSegment::Index(self.index_base),
                        field => field.clone(),
                    })
                    .collect();
                (path, normalized)
            })
            .collect();
        tracing::debug!(paths = paths.len(), "Projecting paths");

        let mut out = Value::map();
        for (_, normalized) in &paths {
            merge_skeleton(&mut out, shape_skeleton(normalized.segments()));
        }
        for (path, normalized) in &paths {
            let found = self.deep_get(value, path).cloned().unwrap_or_default();
            self.deep_put_in(&mut out, normalized.segments(), found);
        }
        out
    }

    // Segment primitives

    fn get_segment<'v>(&self, container: &'v Value, segment: &PathSegment) -> Option<&'v Value> {
        match (container, segment) {
            (Value::List(items) | Value::Tuple(items), PathSegment::Index(index)) => {
                items.get(self.position(*index)?)
            }
            (Value::Map(map), PathSegment::Field(key)) => resolve_get(map, key),
            (Value::Record(record), PathSegment::Field(key)) => record.get(key.name()),
            _ => None,
        }
    }

    fn get_segment_mut<'v>(&self, container: &'v mut Value, segment: &PathSegment) -> Option<&'v mut Value> {
        match (container, segment) {
            (Value::List(items) | Value::Tuple(items), PathSegment::Index(index)) => {
                items.get_mut(self.position(*index)?)
            }
            (Value::Map(map), PathSegment::Field(key)) => resolve_get_mut(map, key),
            (Value::Record(record), PathSegment::Field(key)) => record.get_mut(key.name()),
            _ => None,
        }
    }

    fn walk_mut<'v>(&self, value: &'v mut Value, segments: &[PathSegment]) -> Option<&'v mut Value> {
        segments
            .iter()
            .try_fold(value, |node, segment| self.get_segment_mut(node, segment))
    }

    fn put_in(&self, container: &mut Value, segment: &PathSegment, value: Value) {
        match (container, segment) {
            (Value::List(items) | Value::Tuple(items), PathSegment::Index(index)) => {
                match self.position(*index).and_then(|i| items.get_mut(i)) {
                    Some(slot) => *slot = value,
                    None => tracing::trace!(index, len = items.len(), "Index out of range; put ignored"),
                }
            }
            (Value::Map(map), PathSegment::Field(key)) => {
                let key = resolve_key_for_write(map, key, self.symbols);
                map.insert(key, value);
            }
            (Value::Record(record), PathSegment::Field(key)) => {
                if !record.set(key.name(), value) {
                    tracing::trace!(
                        record = record.type_name(),
                        field = key.name(),
                        "Unknown record field; put ignored"
                    );
                }
            }
            (container, segment) => tracing::debug!(
                shape = container.type_name(),
                %segment,
                "Container does not accept segment; put ignored"
            ),
        }
    }

    fn delete_in(&self, container: &mut Value, segment: &PathSegment) {
        match (container, segment) {
            (Value::List(items) | Value::Tuple(items), PathSegment::Index(index)) => {
                match self.position(*index).filter(|i| *i < items.len()) {
                    Some(i) => {
                        items.remove(i);
                    }
                    None => tracing::trace!(index, len = items.len(), "Index out of range; delete ignored"),
                }
            }
            (Value::Map(map), PathSegment::Field(key)) => {
                if let Some(stored) = resolve_key(map, key).cloned() {
                    map.remove(&stored);
                }
            }
            (Value::Record(record), PathSegment::Field(key)) => {
                record.reset(key.name());
            }
            (container, segment) => tracing::debug!(
                shape = container.type_name(),
                %segment,
                "Container does not accept segment; delete ignored"
            ),
        }
    }
}

/// Reads one level down with the default accessor. See [`Accessor::get`].
pub fn get(container: &Value, key: impl Into<PathSegment>) -> Option<&Value> {
    Accessor::default().get(container, key)
}

/// See [`Accessor::get_or`].
pub fn get_or<'v>(container: &'v Value, key: impl Into<PathSegment>, default: &'v Value) -> &'v Value {
    Accessor::default().get_or(container, key, default)
}

/// See [`Accessor::put`].
pub fn put(container: Value, key: impl Into<PathSegment>, value: impl Into<Value>) -> Value {
    Accessor::default().put(container, key, value)
}

/// See [`Accessor::delete`].
pub fn delete(container: Value, key: impl Into<PathSegment>) -> Value {
    Accessor::default().delete(container, key)
}

/// See [`Accessor::deep_get`].
pub fn deep_get(value: &Value, path: impl Into<Path>) -> Option<&Value> {
    Accessor::default().deep_get(value, path)
}

/// See [`Accessor::deep_get_or`].
pub fn deep_get_or<'v>(value: &'v Value, path: impl Into<Path>, default: &'v Value) -> &'v Value {
    Accessor::default().deep_get_or(value, path, default)
}

/// See [`Accessor::deep_put`].
pub fn deep_put(value: Value, path: impl Into<Path>, new: impl Into<Value>) -> Value {
    Accessor::default().deep_put(value, path, new)
}

/// See [`Accessor::deep_delete`].
pub fn deep_delete(value: Value, path: impl Into<Path>) -> Value {
    Accessor::default().deep_delete(value, path)
}

/// See [`Accessor::deep_get_many`].
pub fn deep_get_many<I, P>(value: &Value, paths: I) -> Value
where
    I: IntoIterator<Item = P>,
    P: Into<Path>,
{
    Accessor::default().deep_get_many(value, paths)
}

// Convenience methods on Value
impl Value {
    /// Reads at `path`. See [`Accessor::deep_get`].
    pub fn at(&self, path: impl Into<Path>) -> Option<&Value> {
        deep_get(self, path)
    }

    /// Reads at `path` with a default. See [`Accessor::deep_get_or`].
    pub fn at_or<'v>(&'v self, path: impl Into<Path>, default: &'v Value) -> &'v Value {
        deep_get_or(self, path, default)
    }

    /// Returns the value with `new` written at `path`. See [`Accessor::deep_put`].
    pub fn with_at(self, path: impl Into<Path>, new: impl Into<Value>) -> Value {
        deep_put(self, path, new)
    }

    /// Returns the value with `path` deleted. See [`Accessor::deep_delete`].
    pub fn without(self, path: impl Into<Path>) -> Value {
        deep_delete(self, path)
    }

    /// Projects `paths` into a sparse map. See [`Accessor::deep_get_many`].
    pub fn pick<I, P>(&self, paths: I) -> Value
    where
        I: IntoIterator<Item = P>,
        P: Into<Path>,
    {
        deep_get_many(self, paths)
    }
}
