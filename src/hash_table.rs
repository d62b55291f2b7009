use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    hash::{BuildHasher, BuildHasherDefault, Hash},
    mem,
};

use tracing::{debug, trace};

use crate::TableError;

/// Load factor threshold used when none is given
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.6;

/// Factor by which the bucket count is multiplied on every resize
pub const GROWTH_FACTOR: usize = 2;

/// Hasher used when the caller does not supply one
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// A stored key-value pair
#[derive(Debug, Clone)]
struct Pair<K, V> {
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
}

/// Pairs whose keys hash to the same index, in order of first insertion
type Bucket<K, V> = Vec<Pair<K, V>>;

/// A hash table resolving collisions by separate chaining.
///
/// Each key is mapped to one of `capacity` buckets by `hash(key) % capacity`; a bucket is a
/// short list of pairs searched linearly by key equality. Insertion order of keys is kept in a
/// separate registry so that `items`, `keys`, `values` and iteration are deterministic and do not
/// depend on the bucket layout.
///
/// Before an insertion, if the load factor (`len / capacity`) has reached the configured
/// threshold, the bucket count is doubled and every pair is rehashed.
///
/// Note: This implementation is not thread-safe.
#[derive(Clone)]
pub struct HashTable<K, V, S = DefaultHashBuilder> {
    /// The buckets storing the key-value pairs
    buckets: Vec<Bucket<K, V>>,
    /// Keys currently stored, in order of first insertion
    order: Vec<K>,
    /// Load factor at which the next insertion grows the table, in (0, 1]
    load_factor_threshold: f64,
    /// Builds the hasher used to derive bucket indices
    hash_builder: S,
}

/// Checks that `threshold` lies in (0, 1]
fn validate_threshold<K>(threshold: f64) -> Result<f64, TableError<K>> {
    if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
        return Err(TableError::InvalidArgument(format!(
            "load factor threshold must be in (0, 1], got {threshold}"
        )));
    }
    Ok(threshold)
}

/// Allocates `capacity` empty buckets
fn empty_buckets<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty table with `capacity` buckets and the default load factor threshold.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, TableError<K>> {
        Self::with_load_factor_threshold(capacity, DEFAULT_LOAD_FACTOR_THRESHOLD)
    }

    /// Creates an empty table with `capacity` buckets that grows once the load factor reaches
    /// `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidArgument`] if `capacity` is zero or `threshold` is not in
    /// (0, 1].
    pub fn with_load_factor_threshold(
        capacity: usize,
        threshold: f64,
    ) -> Result<Self, TableError<K>> {
        Self::with_hasher(capacity, threshold, DefaultHashBuilder::default())
    }

    /// Builds a table by inserting `entries` in iteration order.
    ///
    /// When `capacity` is `None` or zero the number of entries is used instead.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidArgument`] when the resulting capacity is zero, i.e. when
    /// `entries` is empty and no capacity was given.
    pub fn from_entries<I>(entries: I, capacity: Option<usize>) -> Result<Self, TableError<K>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries: Vec<(K, V)> = entries.into_iter().collect();
        let capacity = match capacity {
            Some(capacity) if capacity > 0 => capacity,
            _ => entries.len(),
        };

        let mut table = Self::new(capacity)?;
        table.update(entries);
        Ok(table)
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Creates an empty table that derives bucket indices with hashers built by `hash_builder`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidArgument`] if `capacity` is zero or `threshold` is not in
    /// (0, 1].
    pub fn with_hasher(
        capacity: usize,
        threshold: f64,
        hash_builder: S,
    ) -> Result<Self, TableError<K>> {
        if capacity == 0 {
            return Err(TableError::InvalidArgument(
                "capacity must be greater than zero".to_string(),
            ));
        }
        let load_factor_threshold = validate_threshold::<K>(threshold)?;

        Ok(Self { buckets: empty_buckets(capacity), order: Vec::new(), load_factor_threshold, hash_builder })
    }

    /// Gets the bucket index of a key for a table of `capacity` buckets
    #[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
    fn index_for<Q>(&self, key: &Q, capacity: usize) -> usize
    where
        Q: Hash + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        // capacity is never zero, and the remainder is below it so it fits in usize
        (hash % capacity as u64) as usize
    }

    /// Gets the bucket index of a key in the current storage
    fn index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        self.index_for(key, self.buckets.len())
    }

    /// Returns the bucket a key belongs to
    fn bucket<Q>(&self, key: &Q) -> Option<&Bucket<K, V>>
    where
        Q: Hash + ?Sized,
    {
        self.buckets.get(self.index(key))
    }

    /// Returns the bucket a key belongs to, mutably
    fn bucket_mut<Q>(&mut self, key: &Q) -> Option<&mut Bucket<K, V>>
    where
        Q: Hash + ?Sized,
    {
        let index = self.index(key);
        self.buckets.get_mut(index)
    }

    /// Inserts or replaces the value for `key`.
    ///
    /// If the load factor has already reached the threshold the table is grown first, so the new
    /// pair goes into the resized storage. Replacing an existing key keeps its position both in
    /// its bucket and in the insertion order.
    pub fn set(&mut self, key: K, value: V) {
        if self.load_factor() >= self.load_factor_threshold {
            self.resize();
        }

        let Some(bucket) = self.bucket_mut(&key) else {
            return;
        };

        if let Some(pair) = bucket.iter_mut().find(|pair| pair.key == key) {
            *pair = Pair { key, value };
            return;
        }

        bucket.push(Pair { key: key.clone(), value });
        self.order.push(key);
    }

    /// Returns the value stored for `key`, or `None` if it is absent
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket(key)?.iter().find(|pair| pair.key.borrow() == key).map(|pair| &pair.value)
    }

    /// Returns a mutable reference to the value stored for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket_mut(key)?
            .iter_mut()
            .find(|pair| pair.key.borrow() == key)
            .map(|pair| &mut pair.value)
    }

    /// Returns the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] carrying the key if it is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, TableError<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        self.find(key).ok_or_else(|| TableError::KeyNotFound(key.to_owned()))
    }

    /// Returns the value stored for `key`, or `default` if it is absent
    pub fn get_or_default<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).unwrap_or(default)
    }

    /// Returns true if the table holds an entry for `key`
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] carrying the key if it is absent; the table is left
    /// unchanged.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V, TableError<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let removed = self.bucket_mut(key).and_then(|bucket| {
            let position = bucket.iter().position(|pair| pair.key.borrow() == key)?;
            Some(bucket.remove(position))
        });

        let Some(pair) = removed else {
            return Err(TableError::KeyNotFound(key.to_owned()));
        };

        self.order.retain(|stored| stored.borrow() != key);
        Ok(pair.value)
    }

    /// Sets every entry in iteration order; later entries overwrite earlier ones with the same key
    pub fn update<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        trace!(capacity = self.capacity(), len = self.len(), "clearing hash table");
        self.buckets = empty_buckets(self.capacity());
        self.order.clear();
    }

    /// Doubles the bucket count and rehashes every pair into the new storage.
    ///
    /// The replacement buckets are filled in isolation and swapped in at the end. Old buckets
    /// are drained in index order; pairs sharing a new bucket also shared an old one, because
    /// `hash % (2 * c) % c == hash % c`, so their relative order is kept.
    fn resize(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(GROWTH_FACTOR);
        debug!(old_capacity, new_capacity, len = self.len(), "resizing hash table");

        let mut grown = empty_buckets(new_capacity);
        for pair in mem::take(&mut self.buckets).into_iter().flatten() {
            let index = self.index_for(&pair.key, new_capacity);
            if let Some(bucket) = grown.get_mut(index) {
                bucket.push(pair);
            }
        }

        self.buckets = grown;
    }

    /// Returns the number of stored entries
    #[must_use]
    pub fn size(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor, `len / capacity`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Returns the load factor at which the next insertion grows the table
    #[must_use]
    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// Changes the load factor at which the table grows. Takes effect on the next insertion.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidArgument`] if `threshold` is not in (0, 1]; the current
    /// threshold is kept.
    pub fn set_load_factor_threshold(&mut self, threshold: f64) -> Result<(), TableError<K>> {
        self.load_factor_threshold = validate_threshold::<K>(threshold)?;
        Ok(())
    }

    /// Returns an independent table with the same entries, order, capacity and threshold
    #[must_use]
    pub fn copy(&self) -> Self
    where
        V: Clone,
        S: Clone,
    {
        self.clone()
    }

    /// Returns the keys in insertion order
    pub(crate) fn ordered_keys(&self) -> &[K] {
        &self.order
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.update(iter);
    }
}

/// Tables are equal when they hold the same set of pairs; order, capacity and threshold are
/// ignored.
impl<K, V, S> PartialEq for HashTable<K, V, S>
where
    K: Eq + Hash + Clone,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries().all(|(key, value)| other.find(key).is_some_and(|other| other == value))
    }
}

impl<K, V, S> Eq for HashTable<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Eq,
    S: BuildHasher,
{
}
