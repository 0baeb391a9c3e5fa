//! Loading documents, symbol tables and command-line values.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use pathwise::value::{Key, SymbolTable, Value};

/// Read a JSON document from `path`, or from stdin when no path is given.
pub fn read_document(path: Option<&Path>) -> pathwise::Result<Value> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let json: serde_json::Value = serde_json::from_str(&text)?;
    Ok(Value::from(json))
}

/// Load a symbol table from a file with one name per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_symbols(path: &Path) -> pathwise::Result<SymbolTable> {
    Ok(parse_symbols(&fs::read_to_string(path)?))
}

fn parse_symbols(text: &str) -> SymbolTable {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Turn text keys that name a known symbol into symbol keys, at every depth.
pub fn symbolize(value: Value, symbols: &SymbolTable) -> Value {
    match value {
        Value::Map(map) => Value::Map(
            map.into_iter()
                .map(|(key, child)| {
                    let key = match key {
                        Key::Text(name) => symbols.lookup(&name).map_or(Key::Text(name), Key::Symbol),
                        symbol => symbol,
                    };
                    (key, symbolize(child, symbols))
                })
                .collect(),
        ),
        Value::List(items) => Value::List(items.into_iter().map(|child| symbolize(child, symbols)).collect()),
        other => other,
    }
}

/// Interpret a command-line argument as JSON, falling back to plain text.
pub fn parse_value_arg(text: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) => Value::from(json),
        Err(_) => Value::from(text),
    }
}
