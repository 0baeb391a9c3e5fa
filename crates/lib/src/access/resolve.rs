//! Indifferent key resolution.
//!
//! A logical key may be stored in a [`Map`] as a symbol or as text. Reads try
//! the exact representation first, then the other one. Writes reuse whatever
//! representation an entry already has and otherwise follow the map's
//! dominant style. No function here ever creates a new symbol: text only
//! becomes a symbol when the map already holds that symbol or the supplied
//! [`SymbolTable`] knows the name.

use crate::value::{Key, KeyStyle, Map, SymbolTable, Value};

/// Finds the stored key that `key` denotes in `map`.
///
/// ```
/// use pathwise::{access::resolve_key, value::{Key, Map}};
///
/// let map = Map::new().with(Key::symbol("value"), 20);
/// assert_eq!(resolve_key(&map, &Key::text("value")), Some(&Key::symbol("value")));
/// assert_eq!(resolve_key(&map, &Key::text("other")), None);
/// ```
pub fn resolve_key<'m>(map: &'m Map, key: &Key) -> Option<&'m Key> {
    if let Some((stored, _)) = map.get_key_value(key) {
        return Some(stored);
    }
    match key {
        Key::Text(name) => map.find_symbol(name),
        Key::Symbol(symbol) => map
            .get_key_value(&Key::text(symbol.as_str()))
            .map(|(stored, _)| stored),
    }
}

/// Reads the value `key` denotes in `map`.
pub fn resolve_get<'m>(map: &'m Map, key: &Key) -> Option<&'m Value> {
    let stored = resolve_key(map, key)?;
    map.get(stored)
}

/// Mutable counterpart of [`resolve_get`].
pub fn resolve_get_mut<'m>(map: &'m mut Map, key: &Key) -> Option<&'m mut Value> {
    let stored = resolve_key(map, key)?.clone();
    map.get_mut(&stored)
}

/// Chooses the concrete key a write of `key` into `map` should use.
///
/// 1. An existing entry for the logical key keeps its representation.
/// 2. In an exclusively symbolic map, text becomes a symbol if `symbols` knows
///    the name; otherwise it is written as text.
/// 3. In an exclusively textual map, a symbol is written as text.
/// 4. Otherwise (empty or mixed map) the key is used as given.
pub fn resolve_key_for_write(map: &Map, key: &Key, symbols: &SymbolTable) -> Key {
    if let Some(stored) = resolve_key(map, key) {
        return stored.clone();
    }

    match (map.key_style(), key) {
        (KeyStyle::Symbolic, Key::Text(name)) => match symbols.lookup(name) {
            Some(symbol) => Key::Symbol(symbol),
            None => {
                tracing::trace!(key = %name, "No known symbol; writing text key into symbolic map");
                key.clone()
            }
        },
        (KeyStyle::Textual, Key::Symbol(_)) => key.to_text(),
        _ => key.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_resolves_to_existing_symbol() {
        let map = Map::new().with(Key::symbol("value"), 20);
        assert_eq!(resolve_get(&map, &Key::text("value")), Some(&Value::Int(20)));
    }

    #[test]
    fn test_symbol_resolves_to_text() {
        let map = Map::new().with("value", 20);
        assert_eq!(resolve_get(&map, &Key::symbol("value")), Some(&Value::Int(20)));
    }

    #[test]
    fn test_exact_representation_wins() {
        let map = Map::new().with(Key::symbol("a"), 1).with("a", 2);
        assert_eq!(resolve_get(&map, &Key::text("a")), Some(&Value::Int(2)));
        assert_eq!(resolve_get(&map, &Key::symbol("a")), Some(&Value::Int(1)));
    }

    #[test]
    fn test_write_reuses_existing_representation() {
        let map = Map::new().with(Key::symbol("name"), "x");
        let key = resolve_key_for_write(&map, &Key::text("name"), &SymbolTable::new());
        assert_eq!(key, Key::symbol("name"));
    }

    #[test]
    fn test_write_into_symbolic_map_uses_known_symbols_only() {
        let map = Map::new().with(Key::symbol("id"), 1);
        let symbols = SymbolTable::from_names(["email"]);

        let known = resolve_key_for_write(&map, &Key::text("email"), &symbols);
        assert_eq!(known, Key::symbol("email"));

        let unknown = resolve_key_for_write(&map, &Key::text("phone"), &symbols);
        assert_eq!(unknown, Key::text("phone"));
        assert!(!symbols.contains("phone"));
    }

    #[test]
    fn test_write_into_textual_map_renders_symbols() {
        let map = Map::new().with("id", 1);
        let key = resolve_key_for_write(&map, &Key::symbol("name"), &SymbolTable::new());
        assert_eq!(key, Key::text("name"));
    }

    #[test]
    fn test_write_into_empty_map_keeps_key() {
        let symbols = SymbolTable::from_names(["a"]);
        assert_eq!(
            resolve_key_for_write(&Map::new(), &Key::text("a"), &symbols),
            Key::text("a")
        );
        assert_eq!(
            resolve_key_for_write(&Map::new(), &Key::symbol("a"), &symbols),
            Key::symbol("a")
        );
    }
}
