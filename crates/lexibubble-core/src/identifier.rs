//! Node identifiers backed by string interning
//!
//! This module provides the [`NodeId`] type. Identifiers are cheap to copy
//! and compare, which matters because the layout engine keys every position
//! frame by node id on every tick.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Identifier of a node in one layout
///
/// # Examples
///
/// ```
/// use lexibubble_core::identifier::NodeId;
///
/// let center = NodeId::new("center");
/// assert_eq!(center, "center");
///
/// let positional = NodeId::positional("syn", 3);
/// assert_eq!(positional, "syn-3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(DefaultSymbol);

impl NodeId {
    /// Creates a `NodeId` from &str.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Creates an identifier from a prefix and a position, such as `syn-3`.
    ///
    /// Used when the provider supplied no usable identifier for a record.
    pub fn positional(prefix: &str, index: usize) -> Self {
        Self::new(&format!("{prefix}-{index}"))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{str_value}")
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        interner()
            .resolve(self.0)
            .is_some_and(|value| value == *other)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
