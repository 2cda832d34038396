//! Ordered map type for keyed mappings and aggregate fields.
//!
//! [`ValueMap`] wraps an [`IndexMap`] so that entries iterate in insertion
//! order. Aggregates rely on this to render fields in declaration order;
//! keyed mappings are additionally sorted at render time unless
//! [`KeyOrder::Insertion`](crate::KeyOrder::Insertion) is requested.
//!
//! Keys are rendered text, so two distinct source keys can end up with the
//! same text. [`ValueMap::append`] keeps every such entry; they iterate
//! together, at the position of the first one, in arrival order.
//!
//! ## Examples
//!
//! ```rust
//! use tinyfmt::{ValueMap, Value};
//!
//! let mut map = ValueMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::slice;

/// An insertion-ordered map of rendered keys to values.
///
/// # Examples
///
/// ```rust
/// use tinyfmt::{ValueMap, Value};
///
/// let mut map = ValueMap::new();
/// map.insert("second".to_string(), Value::from(2));
/// map.insert("first".to_string(), Value::from(1));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["second", "first"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap(IndexMap<String, Vec<Value>>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(IndexMap::new())
    }

    /// Creates an empty `ValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, every entry under it is
    /// replaced, the first old value is returned and the key keeps its
    /// position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfmt::{ValueMap, Value};
    ///
    /// let mut map = ValueMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0
            .insert(key, vec![value])
            .and_then(|old| old.into_iter().next())
    }

    /// Adds an entry, keeping any existing entries under the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfmt::{ValueMap, Value};
    ///
    /// let mut map = ValueMap::new();
    /// map.append("k".to_string(), Value::from(1));
    /// map.append("k".to_string(), Value::from(2));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("k"), Some(&Value::from(1)));
    /// ```
    pub fn append(&mut self, key: String, value: Value) {
        self.0.entry(key).or_default().push(value);
    }

    /// Returns a reference to the first value stored under the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).and_then(|values| values.first())
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            outer: self.0.iter(),
            current: None,
        }
    }

    /// Returns the entries ordered by key.
    ///
    /// Keys compare as plain strings, so `"10"` sorts before `"9"`. Entries
    /// sharing a key stay in arrival order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tinyfmt::{ValueMap, Value};
    ///
    /// let map: ValueMap = [("b", 2), ("a", 1)]
    ///     .into_iter()
    ///     .map(|(k, v)| (k.to_string(), Value::from(v)))
    ///     .collect();
    ///
    /// let keys: Vec<_> = map.sorted_entries().into_iter().map(|(k, _)| k.as_str()).collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&String, &Value)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

/// Iterator over the entries of a [`ValueMap`].
pub struct Iter<'a> {
    outer: indexmap::map::Iter<'a, String, Vec<Value>>,
    current: Option<(&'a String, slice::Iter<'a, Value>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    return Some((*key, value));
                }
            }
            let (key, values) = self.outer.next()?;
            self.current = Some((key, values.iter()));
        }
    }
}

impl From<HashMap<String, Value>> for ValueMap {
    fn from(map: HashMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BTreeMap<String, Value>> for ValueMap {
    fn from(map: BTreeMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        let mut entries = Vec::with_capacity(self.len());
        for (key, values) in self.0 {
            for value in values {
                entries.push((key.clone(), value));
            }
        }
        entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut map = ValueMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
