//! Flatten and unflatten commands.

use std::collections::BTreeMap;

use pathwise::{FlattenOptions, Value, flatten, unflatten};

use crate::cli::FlattenArgs;

fn options(args: &FlattenArgs) -> FlattenOptions {
    FlattenOptions::default()
        .with_key_separator(args.separator.as_str())
        .with_normalize_key_casing(!args.no_normalize)
        .with_list_index_start(args.index_start)
}

/// Run the flatten command
pub fn run_flatten(document: &Value, args: &FlattenArgs) -> Value {
    let flat = flatten(document, &options(args));
    tracing::debug!(entries = flat.len(), "Flattened document");
    Value::Map(flat.into_iter().collect())
}

/// Run the unflatten command
///
/// The document must be an object of flattened entries.
pub fn run_unflatten(document: Value, args: &FlattenArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let found = document.type_name();
    let Value::Map(entries) = document else {
        return Err(format!("unflatten expects an object of flattened entries, found {found}").into());
    };
    let flat: BTreeMap<String, Value> = entries
        .into_iter()
        .map(|(key, value)| (key.name().to_string(), value))
        .collect();
    Ok(unflatten(&flat, &options(args)))
}
