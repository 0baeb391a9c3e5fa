//! Skeleton construction for writes through missing structure.
//!
//! A skeleton is the minimal nesting of empty-ish containers that can hold a
//! value at a given path: a one-element list for every index segment and a
//! one-key map for every field segment, with `Null` at the bottom. Batch
//! writers merge the skeletons of all their paths first, then `deep_put`
//! each leaf into the result.

use super::{path::PathSegment, resolve::resolve_get_mut};
use crate::value::{Key, Value};

/// Builds the skeleton for `segments`, placing every index at position 0.
///
/// ```
/// use pathwise::{Value, access::{parse_path, shape_skeleton}, value::Map};
///
/// let skeleton = shape_skeleton(parse_path("meta.skills.2.type").segments());
/// let expected = Value::from(Map::new().with(
///     "meta",
///     Map::new().with("skills", Value::list([Map::new().with("type", Value::Null)])),
/// ));
/// assert_eq!(skeleton, expected);
/// ```
pub fn shape_skeleton(segments: &[PathSegment]) -> Value {
    segments.iter().rev().fold(Value::Null, |inner, segment| match segment {
        PathSegment::Index(_) => Value::List(vec![inner]),
        PathSegment::Field(key) => Value::Map(std::iter::once((key.to_text(), inner)).collect()),
    })
}

/// Builds the skeleton for `segments` with indices at their real position.
///
/// Positions before an index are padded with `Null`, so `[Index(2)]` yields
/// `[null, null, null]`. The padding is allocated up front: callers shaping
/// untrusted paths bound their indices first. An index whose list cannot be
/// allocated at all is shaped as a text field instead.
pub fn shape_at(segments: &[PathSegment]) -> Value {
    segments.iter().rev().fold(Value::Null, |inner, segment| match segment {
        PathSegment::Index(index) => {
            let mut items = Vec::new();
            if items.try_reserve_exact(index.saturating_add(1)).is_err() {
                tracing::debug!(index, "Position too large to shape; using a field");
                return Value::Map(std::iter::once((Key::Text(index.to_string()), inner)).collect());
            }
            items.resize(*index, Value::Null);
            items.push(inner);
            Value::List(items)
        }
        PathSegment::Field(key) => Value::Map(std::iter::once((key.to_text(), inner)).collect()),
    })
}

/// Merges `skeleton` into `target`.
///
/// Maps merge key by key (keys resolve indifferently), lists merge element by
/// element and grow to the longer length, and a `Null` target is replaced.
/// Wherever `target` already holds anything else it is kept as is.
pub fn merge_skeleton(target: &mut Value, skeleton: Value) {
    if target.is_null() {
        *target = skeleton;
        return;
    }
    match (target, skeleton) {
        (Value::Map(target), Value::Map(skeleton)) => {
            for (key, child) in skeleton {
                match resolve_get_mut(target, &key) {
                    Some(existing) => merge_skeleton(existing, child),
                    None => {
                        target.insert(key, child);
                    }
                }
            }
        }
        (Value::List(target), Value::List(skeleton)) => {
            for (i, child) in skeleton.into_iter().enumerate() {
                match target.get_mut(i) {
                    Some(existing) => merge_skeleton(existing, child),
                    None => target.push(child),
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        access::{Path, parse_path},
        value::Map,
    };

    #[test]
    fn test_empty_path_is_null() {
        assert_eq!(shape_skeleton(&[]), Value::Null);
        assert_eq!(shape_at(&[]), Value::Null);
    }

    #[test]
    fn test_fields_use_text_keys() {
        let path = Path::new().field(Key::symbol("a"));
        let skeleton = shape_skeleton(path.segments());
        assert_eq!(skeleton, Value::from(Map::new().with("a", Value::Null)));
    }

    #[test]
    fn test_shape_at_pads_lists() {
        let skeleton = shape_at(parse_path("2").segments());
        assert_eq!(skeleton, Value::list([Value::Null, Value::Null, Value::Null]));
    }

    #[test]
    fn test_shape_at_unallocatable_index_is_a_field() {
        let skeleton = shape_at(&[PathSegment::Index(usize::MAX)]);
        let expected = Value::from(Map::new().with(usize::MAX.to_string(), Value::Null));
        assert_eq!(skeleton, expected);
    }

    #[test]
    fn test_merge_unions_maps_and_lists() {
        let mut target = Value::Null;
        merge_skeleton(&mut target, shape_at(parse_path("a.0.x").segments()));
        merge_skeleton(&mut target, shape_at(parse_path("a.1.y").segments()));
        merge_skeleton(&mut target, shape_at(parse_path("a.0.z").segments()));
        merge_skeleton(&mut target, shape_at(parse_path("b").segments()));

        let expected = Value::from(
            Map::new()
                .with(
                    "a",
                    Value::list([
                        Map::new().with("x", Value::Null).with("z", Value::Null),
                        Map::new().with("y", Value::Null),
                    ]),
                )
                .with("b", Value::Null),
        );
        assert_eq!(target, expected);
    }

    #[test]
    fn test_merge_keeps_existing_leaves() {
        let mut target = Value::from(Map::new().with(Key::symbol("a"), 1));
        merge_skeleton(&mut target, shape_skeleton(parse_path("a.b").segments()));
        assert_eq!(target, Value::from(Map::new().with(Key::symbol("a"), 1)));
    }
}
