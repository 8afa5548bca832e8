//! Compound: the keyed container of the NBT format.

use rustc_hash::FxHashMap;

use crate::model::{Tag, Value};

/// A mapping of unique string keys to values.
///
/// Entries keep their insertion order, which is also the order the encoder
/// writes them in, so encoding the same compound twice yields identical
/// bytes. Equality is semantic and ignores order.
///
/// Re-inserting an existing key replaces its value in place (last write
/// wins) without moving the entry.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    entries: Vec<(String, Value)>,
    indices: FxHashMap<String, usize>,
}

impl Compound {
    /// Creates a new empty compound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new compound with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            indices: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the compound has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a value, returning the previous value stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some(&idx) = self.indices.get(&key) {
            Some(std::mem::replace(&mut self.entries[idx].1, value))
        } else {
            let idx = self.entries.len();
            self.indices.insert(key.clone(), idx);
            self.entries.push((key, value));
            None
        }
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.indices.get(key).map(|&idx| &self.entries[idx].1)
    }

    /// Looks up a value by key for modification.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self.indices.get(key) {
            Some(&idx) => Some(&mut self.entries[idx].1),
            None => None,
        }
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.indices.contains_key(key)
    }

    /// Removes an entry, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.indices.remove(key)?;
        let (_, value) = self.entries.remove(idx);
        for (k, _) in &self.entries[idx..] {
            if let Some(i) = self.indices.get_mut(k.as_str()) {
                *i -= 1;
            }
        }
        Some(value)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.entries.iter().map(entry_ref)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns the tag of the value stored under `key`.
    pub fn tag_of(&self, key: &str) -> Option<Tag> {
        self.get(key).map(Value::tag)
    }

    /// Looks up an integer of any width.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Looks up a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Looks up a nested compound.
    pub fn get_compound(&self, key: &str) -> Option<&Compound> {
        self.get(key).and_then(Value::as_compound)
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut compound = Compound::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            compound.insert(k, v);
        }
        compound
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a str, &'a Value);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, Value)>,
        fn(&'a (String, Value)) -> (&'a str, &'a Value),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_ref as fn(&'a (String, Value)) -> (&'a str, &'a Value))
    }
}

fn entry_ref(entry: &(String, Value)) -> (&str, &Value) {
    (entry.0.as_str(), &entry.1)
}
