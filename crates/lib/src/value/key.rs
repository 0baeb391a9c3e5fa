//! Key representations for mappings.
//!
//! A mapping key is either symbolic ([`Key::Symbol`]) or textual ([`Key::Text`]).
//! Both render to the same logical name, and the accessor treats them as the
//! same identifier. Symbols never come into existence as a side effect of a
//! lookup: text is only coerced to a symbol when the read-only [`SymbolTable`]
//! already knows the name.

use std::{
    borrow::Borrow,
    collections::HashSet,
    fmt,
    sync::{Arc, OnceLock},
};

/// An interned identifier used as a symbolic mapping key or record field name.
///
/// Cloning a `Symbol` is cheap. Two symbols are equal when their names are equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    ///
    /// This does not register the name anywhere; see [`SymbolTable`] for the
    /// set of names the process treats as known.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Creates a symbol from a static name, such as a struct field name.
    pub fn from_static(name: &'static str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the symbol's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

static GLOBAL_SYMBOLS: OnceLock<SymbolTable> = OnceLock::new();
static EMPTY_SYMBOLS: OnceLock<SymbolTable> = OnceLock::new();

/// A read-only set of known symbol names.
///
/// The table is populated up front (from a static list, a config file, or the
/// field names of known record types) and is never grown by lookups. One
/// table can be installed process-wide with [`SymbolTable::install`]; callers
/// may also hand a table to an [`Accessor`](crate::access::Accessor) directly.
///
/// # Examples
///
/// ```
/// use pathwise::value::SymbolTable;
///
/// let table = SymbolTable::from_names(["name", "email"]);
/// assert!(table.lookup("name").is_some());
/// assert!(table.lookup("unknown").is_none());
/// assert_eq!(table.len(), 2); // lookups never insert
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    names: HashSet<Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table containing the given names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(Symbol::new).collect(),
        }
    }

    /// Returns the known symbol for `name`, if any. Never inserts.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.names.get(name).cloned()
    }

    /// Returns true if `name` is a known symbol.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the number of known symbols.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no symbols are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the known symbols in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.names.iter()
    }

    /// Installs `table` as the process-wide symbol table.
    ///
    /// The table can only be installed once. If one is already installed the
    /// rejected table is handed back.
    pub fn install(table: SymbolTable) -> Result<(), SymbolTable> {
        let count = table.len();
        GLOBAL_SYMBOLS.set(table)?;
        tracing::debug!(symbols = count, "Installed global symbol table");
        Ok(())
    }

    /// Returns the installed process-wide table, or an empty table if none was installed.
    pub fn global() -> &'static SymbolTable {
        GLOBAL_SYMBOLS
            .get()
            .unwrap_or_else(|| EMPTY_SYMBOLS.get_or_init(SymbolTable::new))
    }
}

impl<S: AsRef<str>> FromIterator<S> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_names(iter)
    }
}

/// A concrete mapping key.
///
/// Ordering puts all symbolic keys before all textual keys, each group sorted
/// by name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Symbolic (atom-like) key
    Symbol(Symbol),
    /// Textual key
    Text(String),
}

impl Key {
    /// Creates a symbolic key. Does not register the symbol anywhere.
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Key::Symbol(Symbol::new(name))
    }

    /// Creates a textual key.
    pub fn text(name: impl Into<String>) -> Self {
        Key::Text(name.into())
    }

    /// Returns the logical name shared by both representations.
    pub fn name(&self) -> &str {
        match self {
            Key::Symbol(symbol) => symbol.as_str(),
            Key::Text(text) => text,
        }
    }

    /// Returns true for [`Key::Symbol`].
    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    /// Returns true for [`Key::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Key::Text(_))
    }

    /// Returns true if both keys denote the same logical identifier.
    pub fn same_name(&self, other: &Key) -> bool {
        self.name() == other.name()
    }

    /// Returns the textual rendering of this key.
    pub fn to_text(&self) -> Key {
        Key::Text(self.name().to_string())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Symbol(symbol) => write!(f, "{symbol:?}"),
            Key::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Symbol> for Key {
    fn from(symbol: Symbol) -> Self {
        Key::Symbol(symbol)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::Text(text.to_string())
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Key::Text(text)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

/// Which key representation a mapping uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// No keys at all
    Empty,
    /// Every key is symbolic
    Symbolic,
    /// Every key is textual
    Textual,
    /// Both representations occur
    Mixed,
}
