//! Path commands: get, put, delete and pick.

use pathwise::{Value, access};

use crate::cli::{GetArgs, PathArgs, PickArgs, PutArgs};
use crate::input::parse_value_arg;

/// Run the get command
pub fn get(document: &Value, args: &GetArgs) -> Value {
    let default = args.default.as_deref().map(parse_value_arg).unwrap_or_default();
    access::deep_get_or(document, args.path.as_str(), &default).clone()
}

/// Run the put command
pub fn put(document: Value, args: &PutArgs) -> Value {
    let value = parse_value_arg(&args.value);
    tracing::debug!(path = %args.path, "Writing value");
    access::deep_put(document, args.path.as_str(), value)
}

/// Run the delete command
pub fn delete(document: Value, args: &PathArgs) -> Value {
    tracing::debug!(path = %args.path, "Deleting value");
    access::deep_delete(document, args.path.as_str())
}

/// Run the pick command
pub fn pick(document: &Value, args: &PickArgs) -> Value {
    access::deep_get_many(document, args.paths.iter())
}
