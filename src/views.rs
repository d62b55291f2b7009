//! Insertion-ordered views over a [`HashTable`]

use std::{
    fmt,
    hash::{BuildHasher, Hash},
    iter::FusedIterator,
    slice,
};

use crate::HashTable;

/// Iterator over the keys of a table in insertion order
#[derive(Debug, Clone)]
pub struct Keys<'a, K> {
    /// Remaining keys of the registry
    inner: slice::Iter<'a, K>,
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}

impl<K> FusedIterator for Keys<'_, K> {}

/// Iterator over the key-value pairs of a table in insertion order
pub struct Entries<'a, K, V, S> {
    /// Table the values are looked up in
    table: &'a HashTable<K, V, S>,
    /// Remaining keys of the registry
    keys: slice::Iter<'a, K>,
}

impl<'a, K, V, S> Iterator for Entries<'a, K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        self.keys.by_ref().find_map(|key| table.find(key).map(|value| (key, value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.keys.len()))
    }
}

impl<K, V, S> fmt::Debug for Entries<'_, K, V, S>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries").field("keys", &self.keys.as_slice()).finish_non_exhaustive()
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Returns an iterator over the keys in insertion order
    #[must_use]
    pub fn iter(&self) -> Keys<'_, K> {
        Keys { inner: self.ordered_keys().iter() }
    }

    /// Returns an iterator over borrowed key-value pairs in insertion order
    #[must_use]
    pub fn entries(&self) -> Entries<'_, K, V, S> {
        Entries { table: self, keys: self.ordered_keys().iter() }
    }

    /// Returns the keys in insertion order as a new `Vec`
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        self.ordered_keys().to_vec()
    }

    /// Returns the key-value pairs in insertion order as a new `Vec`
    #[must_use]
    pub fn items(&self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.entries().map(|(key, value)| (key.clone(), value.clone())).collect()
    }

    /// Returns the values in insertion order of their keys as a new `Vec`
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries().map(|(_, value)| value.clone()).collect()
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = &'a K;
    type IntoIter = Keys<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
