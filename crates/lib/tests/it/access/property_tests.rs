//! Properties checked over hand-picked families of inputs.

use pathwise::{
    Value,
    access::{self, Path},
    value::{Key, Map},
};

use crate::helpers::person;

fn maps() -> Vec<Value> {
    vec![
        Value::map(),
        Value::from(Map::new().with(Key::symbol("k"), 1)),
        Value::from(Map::new().with("k", 1)),
        Value::from(Map::new().with(Key::symbol("other"), 1)),
        Value::from(Map::new().with("other", 1)),
        Value::from(Map::new().with(Key::symbol("a"), 1).with("b", 2)),
    ]
}

#[test]
fn test_indifferent_key_idempotence() {
    let representations = [Key::symbol("k"), Key::text("k")];
    for map in maps() {
        for write_key in &representations {
            for read_key in &representations {
                let written = access::put(map.clone(), write_key.clone(), "v");
                assert_eq!(
                    access::get(&written, read_key.clone()),
                    Some(&Value::from("v")),
                    "write {write_key:?} then read {read_key:?} in {map}"
                );
            }
        }
    }
}

#[test]
fn test_put_never_duplicates_logical_key() {
    for map in maps() {
        let before = map.as_map().map(Map::len).unwrap_or_default();
        let had_k = access::get(&map, "k").is_some();
        let written = access::put(access::put(map, Key::symbol("k"), 1), Key::text("k"), 2);
        let after = written.as_map().map(Map::len).unwrap_or_default();
        assert_eq!(after, before + usize::from(!had_k));
    }
}

#[test]
fn test_bounds_safety() {
    let default = Value::from("default");
    for n in 0..4usize {
        let items: Vec<Value> = (0..n).map(Value::from).collect();
        for container in [Value::List(items.clone()), Value::Tuple(items)] {
            for i in n..n + 3 {
                assert_eq!(access::get_or(&container, i, &default), &default);
                assert_eq!(access::put(container.clone(), i, "x"), container);
                assert_eq!(access::delete(container.clone(), i), container);
            }
        }
    }
}

#[test]
fn test_deep_get_absence_propagation() {
    let default = Value::from("default");
    for path in ["a", "a.b", "0", "0.a.1", "meta.skills.2.type"] {
        assert_eq!(access::deep_get_or(&Value::Null, path, &default), &Value::Null);
        assert_eq!(access::deep_get(&Value::Null, path), None);
    }
}

#[test]
fn test_default_only_applies_to_final_segment() {
    let default = Value::from("default");
    let person = person();
    assert_eq!(access::deep_get_or(&person, "country.capital", &default), &default);
    assert_eq!(access::deep_get_or(&person, "planet.capital", &default), &Value::Null);
    assert_eq!(access::deep_get_or(&person, "name.first", &default), &Value::Null);
    assert_eq!(access::deep_get_or(&person, Path::new(), &default), &person);
}
