//! Single-level views of nested values.
//!
//! [`flatten`] turns a tree into a map from composite textual keys to leaves;
//! [`unflatten`] rebuilds the tree from such a map.
//!
//! ```
//! use pathwise::{Value, flatten::{FlattenOptions, flatten, unflatten}};
//!
//! let order = Value::from(serde_json::json!({
//!     "test": "123",
//!     "orderLines": [{"sku": "123"}, {"sku": "456"}]
//! }));
//!
//! let options = FlattenOptions::default();
//! let flat = flatten(&order, &options);
//! let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["order_lines.1.sku", "order_lines.2.sku", "test"]);
//!
//! let rebuilt = unflatten(&flat, &options);
//! assert_eq!(rebuilt.at("order_lines.1.sku"), Some(&Value::from("456")));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    access::{Accessor, Path, PathSegment, merge_skeleton, parse_path_with, shape_at},
    constants::{DEFAULT_KEY_SEPARATOR, DEFAULT_LIST_INDEX_START},
    value::{Key, Value},
};

/// Options for [`flatten`] and [`unflatten`].
///
/// Deserializes from a partial document, with missing fields at their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
    /// Text placed between key components
    pub key_separator: String,
    /// Render field names in snake_case
    pub normalize_key_casing: bool,
    /// Number given to the first element of a list or tuple
    pub list_index_start: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
            normalize_key_casing: true,
            list_index_start: DEFAULT_LIST_INDEX_START,
        }
    }
}

impl FlattenOptions {
    /// Builder method to set the key separator.
    pub fn with_key_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_separator = separator.into();
        self
    }

    /// Builder method to enable or disable snake_case field names.
    pub fn with_normalize_key_casing(mut self, normalize: bool) -> Self {
        self.normalize_key_casing = normalize;
        self
    }

    /// Builder method to set the number given to the first element.
    pub fn with_list_index_start(mut self, start: usize) -> Self {
        self.list_index_start = start;
        self
    }

    fn field_name(&self, name: &str) -> String {
        if self.normalize_key_casing {
            to_snake_case(name)
        } else {
            name.to_string()
        }
    }

    fn join(&self, prefix: Option<&str>, part: &str) -> String {
        match prefix {
            Some(prefix) => format!("{prefix}{}{part}", self.key_separator),
            None => part.to_string(),
        }
    }
}

/// Flattens `value` into one entry per reachable leaf.
///
/// Map keys and record fields become key components, list and tuple elements
/// are numbered from [`FlattenOptions::list_index_start`]. Containers never
/// appear as entries, so empty containers contribute nothing. A leaf at the
/// root is stored under the empty key.
pub fn flatten(value: &Value, options: &FlattenOptions) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    flatten_into(value, None, options, &mut out);
    out
}

fn flatten_into(
    value: &Value,
    prefix: Option<&str>,
    options: &FlattenOptions,
    out: &mut BTreeMap<String, Value>,
) {
    match value {
        Value::Map(map) => {
            for (key, child) in map {
                let key = options.join(prefix, &options.field_name(key.name()));
                flatten_into(child, Some(&key), options, out);
            }
        }
        Value::Record(record) => {
            for (field, child) in record.fields() {
                let key = options.join(prefix, &options.field_name(field.as_str()));
                flatten_into(child, Some(&key), options, out);
            }
        }
        Value::List(items) | Value::Tuple(items) => {
            for (i, child) in items.iter().enumerate() {
                let number = i as u128 + options.list_index_start as u128;
                let key = options.join(prefix, &number.to_string());
                flatten_into(child, Some(&key), options, out);
            }
        }
        leaf => {
            out.insert(prefix.unwrap_or_default().to_string(), leaf.clone());
        }
    }
}

/// Rebuilds a tree from the output of [`flatten`].
///
/// Keys are split on the separator and numeric components become list
/// positions counted from [`FlattenOptions::list_index_start`]. A number below
/// the start is kept as a text key, and so is a position at or beyond the
/// total length of all keys, which bounds list padding by the input size.
/// Every map comes back with text keys and every sequence comes back as a
/// list. Positions missing from the input are filled with `Null`. An empty
/// input yields an empty map.
///
/// When keys disagree on the shape of a node (`x.1` next to `x.y`), the shape
/// of the first key in order wins and entries that do not fit it are dropped.
pub fn unflatten(flat: &BTreeMap<String, Value>, options: &FlattenOptions) -> Value {
    if flat.is_empty() {
        return Value::map();
    }
    tracing::debug!(entries = flat.len(), "Unflattening");

    let position_limit: usize = flat.keys().map(String::len).sum();
    let entries: Vec<(Path, &Value)> = flat
        .iter()
        .map(|(key, value)| (key_to_path(key, options, position_limit), value))
        .collect();

    let mut out = Value::Null;
    for (path, _) in &entries {
        merge_skeleton(&mut out, shape_at(path.segments()));
    }

    let accessor = Accessor::default();
    entries.into_iter().fold(out, |out, (path, value)| {
        let out = accessor.deep_put(out, &path, value.clone());
        if accessor.deep_get(&out, &path).is_none() {
            tracing::debug!(%path, "Entry conflicts with the shape of an earlier key; dropped");
        }
        out
    })
}

fn key_to_path(key: &str, options: &FlattenOptions, position_limit: usize) -> Path {
    parse_path_with(key, &options.key_separator)
        .into_iter()
        .map(|segment| match segment {
            PathSegment::Index(n) => match n
                .checked_sub(options.list_index_start)
                .filter(|position| *position < position_limit)
            {
                Some(position) => PathSegment::Index(position),
                None => PathSegment::Field(Key::Text(n.to_string())),
            },
            field => field,
        })
        .collect()
}

/// Renders a field name in snake_case.
///
/// Word boundaries are case changes and the characters `-`, space and `_`.
///
/// ```
/// use pathwise::flatten::to_snake_case;
///
/// assert_eq!(to_snake_case("orderLines"), "order_lines");
/// assert_eq!(to_snake_case("Order-Lines"), "order_lines");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '-' | ' ' | '_') {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
