//! Constants used throughout the pathwise library.
//!
//! Central definitions for separators and numbering defaults shared by path
//! parsing and flattening.

/// Separator between components of a textual path.
pub const PATH_SEPARATOR: char = '.';

/// Default separator between key components in flattened output.
pub const DEFAULT_KEY_SEPARATOR: &str = ".";

/// Default number given to the first list element in flattened output.
pub const DEFAULT_LIST_INDEX_START: usize = 1;
