//! Insertion-ordered key/value storage.

use indexmap::IndexMap;

/// A string-keyed map that preserves first-insertion order.
///
/// Every clause component stores its entries in one of these. Setting an
/// existing key overwrites the value without moving the key's position, so a
/// reconfigured entry keeps its place in both the rendered fragment and the
/// parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: IndexMap<String, V>,
}

impl<V> OrderedMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert or overwrite an entry.
    ///
    /// A new key is appended to the order; an existing key keeps its
    /// position and only the value changes.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), value);
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Values in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
