//! Prune command.

use pathwise::{Value, delete_empty};

/// Run the prune command
///
/// A document that prunes away entirely prints as `null`.
pub fn run(document: Value) -> Value {
    delete_empty(document)
}
