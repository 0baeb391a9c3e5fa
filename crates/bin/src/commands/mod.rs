//! Subcommand implementations.
//!
//! Each command takes the loaded document and returns the value to print.

pub mod access;
pub mod flatten;
pub mod prune;
