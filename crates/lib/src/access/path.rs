//! Paths into nested values.
//!
//! A [`Path`] is an ordered list of [`PathSegment`]s. Each segment either names
//! a field (a mapping key or record field) or addresses a position in a list
//! or tuple.
//!
//! # Usage
//!
//! ```rust
//! use pathwise::{path, access::{Path, PathSegment}};
//!
//! // Parse from text; all-digit components become indices
//! let path = Path::from("meta.skills.2.type");
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.segments()[2], PathSegment::Index(2));
//!
//! // Build incrementally
//! let built = Path::new().field("meta").field("skills").index(2).field("type");
//! assert_eq!(built, path);
//!
//! // Or with the macro, mixing fields and indices
//! assert_eq!(path!["meta", "skills", 2, "type"], path);
//! ```
//!
//! A component made only of ASCII digits is always an index. Mapping fields
//! whose names are digit strings cannot be addressed through text paths; build
//! the path from [`PathSegment::Field`] directly instead.

use std::{convert::Infallible, fmt, str::FromStr};

use crate::{constants::PATH_SEPARATOR, value::Key};

/// One step in a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A mapping key or record field
    Field(Key),
    /// A list or tuple position
    Index(usize),
}

impl PathSegment {
    /// Parses a single textual component.
    pub fn parse(component: &str) -> Self {
        if !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit()) {
            // Digit strings too long for usize can never be a valid position.
            match component.parse() {
                Ok(index) => PathSegment::Index(index),
                Err(_) => PathSegment::Field(Key::text(component)),
            }
        } else {
            PathSegment::Field(Key::text(component))
        }
    }

    /// Returns the key if this is a field segment.
    pub fn as_key(&self) -> Option<&Key> {
        match self {
            PathSegment::Field(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }

    /// Returns the position if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Field(_) => None,
            PathSegment::Index(index) => Some(*index),
        }
    }

    /// Returns true for [`PathSegment::Index`].
    pub fn is_index(&self) -> bool {
        matches!(self, PathSegment::Index(_))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(key) => write!(f, "{key}"),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&PathSegment> for PathSegment {
    fn from(segment: &PathSegment) -> Self {
        segment.clone()
    }
}

impl From<Key> for PathSegment {
    fn from(key: Key) -> Self {
        PathSegment::Field(key)
    }
}

impl From<&str> for PathSegment {
    fn from(component: &str) -> Self {
        PathSegment::Field(Key::text(component))
    }
}

impl From<String> for PathSegment {
    fn from(component: String) -> Self {
        PathSegment::Field(Key::Text(component))
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl From<i32> for PathSegment {
    /// Negative literals are not positions and become (unresolvable) fields.
    fn from(index: i32) -> Self {
        match usize::try_from(index) {
            Ok(index) => PathSegment::Index(index),
            Err(_) => PathSegment::Field(Key::Text(index.to_string())),
        }
    }
}

/// An owned path into a nested value.
///
/// Paths are cheap to build and are never validated: a segment that does not
/// resolve against a value simply reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty path, which addresses the root value itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a field segment.
    pub fn field(mut self, key: impl Into<Key>) -> Self {
        self.segments.push(PathSegment::Field(key.into()));
        self
    }

    /// Builder method to append an index segment.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// Appends a segment in place.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    /// Returns the segments in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits off the last segment, returning the parent path and the last segment.
    pub fn split_last(&self) -> Option<(&PathSegment, &[PathSegment])> {
        self.segments.split_last()
    }

    /// Iterates over segments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    /// Consumes the path, returning its segments.
    pub fn into_segments(self) -> Vec<PathSegment> {
        self.segments
    }
}

/// Parses a dotted path. Total: every input yields a path.
///
/// ```rust
/// use pathwise::access::{parse_path, PathSegment};
///
/// assert!(parse_path("").is_empty());
/// assert_eq!(parse_path("a..b").len(), 3); // empty components are kept
/// assert_eq!(parse_path("list.0").segments()[1], PathSegment::Index(0));
/// ```
pub fn parse_path(text: &str) -> Path {
    let mut buf = [0u8; 4];
    parse_path_with(text, PATH_SEPARATOR.encode_utf8(&mut buf))
}

/// Parses a path using a custom separator.
///
/// An empty separator treats the whole text as one component.
pub fn parse_path_with(text: &str, separator: &str) -> Path {
    if text.is_empty() {
        return Path::new();
    }
    if separator.is_empty() {
        return std::iter::once(PathSegment::parse(text)).collect();
    }
    text.split(separator).map(PathSegment::parse).collect()
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_path(s))
    }
}

impl From<&str> for Path {
    fn from(text: &str) -> Self {
        parse_path(text)
    }
}

impl From<&String> for Path {
    fn from(text: &String) -> Self {
        parse_path(text)
    }
}

impl From<String> for Path {
    fn from(text: String) -> Self {
        parse_path(&text)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<PathSegment> for Path {
    fn from(segment: PathSegment) -> Self {
        Self {
            segments: vec![segment],
        }
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        PathSegment::Field(key).into()
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        PathSegment::Index(index).into()
    }
}

impl From<i32> for Path {
    fn from(index: i32) -> Self {
        PathSegment::from(index).into()
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

impl From<&[PathSegment]> for Path {
    fn from(segments: &[PathSegment]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<T: IntoIterator<Item = PathSegment>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathSegment> for Path {
    fn extend<T: IntoIterator<Item = PathSegment>>(&mut self, iter: T) {
        self.segments.extend(iter);
    }
}

impl IntoIterator for Path {
    type Item = PathSegment;
    type IntoIter = std::vec::IntoIter<PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Builds a [`Path`].
///
/// A single string literal is parsed as a dotted path and a single integer
/// literal is one index. Several arguments each
/// become one segment: string-like arguments are fields, integers are indices.
///
/// ```rust
/// use pathwise::{path, access::Path};
///
/// assert!(path!().is_empty());
/// assert_eq!(path!("user.name"), Path::new().field("user").field("name"));
/// assert_eq!(path!["skills", 0], Path::new().field("skills").index(0));
/// // Dots inside a multi-argument segment are not split
/// assert_eq!(path!["a.b", "c"].len(), 2);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::access::Path::new()
    };

    ($single:literal) => {
        $crate::access::Path::from($single)
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let mut path = $crate::access::Path::new();
        path.push($crate::access::PathSegment::from($first));
        $(
            path.push($crate::access::PathSegment::from($rest));
        )*
        path
    }};
}
