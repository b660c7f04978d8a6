use std::hash::Hash;
use std::mem;

use super::CapacityError;
use super::hash_table::{Entry, HashTable};
use super::primes;
use super::set_view::SetView;

/// Key-value dictionary over a chained hash table.
///
/// Exactly one table is live at a time. Growth builds a fresh table at the
/// next prime capacity and swaps it in whole, so callers never observe a
/// half-migrated state.
#[derive(Debug)]
pub struct Dict<K, V> {
    table: HashTable<K, V>,
}

impl<K, V> Default for Dict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Dict<K, V> {
    /// Creates an empty dictionary at the default capacity
    pub fn new() -> Self {
        Self {
            table: HashTable::with_capacity(primes::DEFAULT_CAPACITY),
        }
    }

    /// Creates an empty dictionary with a caller-chosen starting capacity.
    ///
    /// The capacity must be drawn from the prime growth sequence, otherwise
    /// the table would start at a size growth can never reproduce.
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        if !primes::is_growth_capacity(capacity) {
            return Err(CapacityError::NotInGrowthSequence {
                requested: capacity,
            });
        }
        Ok(Self {
            table: HashTable::with_capacity(capacity),
        })
    }

    /// Returns the number of stored keys
    pub fn len(&self) -> usize {
        self.table.items()
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current bucket count; grows along the prime sequence, never shrinks
    pub fn capacity(&self) -> usize {
        self.table.bucket_count()
    }

    /// Drops every entry. The capacity stays where growth left it
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<K: Hash + Eq, V> Dict<K, V> {
    /// Inserts `key` -> `value`, returning the previous value if the key
    /// was already present.
    ///
    /// The load factor is checked before the entry goes in, so a call that
    /// ends up replacing a value can still grow the table.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.ensure_load_factor();
        self.table.insert(Entry { key, value })
    }

    /// Removes `key`, returning the value it held. Absent keys are a no-op
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.table.remove(key).map(|entry| entry.value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.get(key).map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.get_mut(key).map(|entry| &mut entry.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    // [private]

    /// Grows once the entry count reaches half the bucket count
    fn ensure_load_factor(&mut self) {
        if 2 * self.table.items() >= self.table.bucket_count() {
            self.rehash();
        }
    }

    /// Reinserts every live entry into a fresh table at the next prime
    /// capacity, then drops the old table. O(n) in the entry count.
    fn rehash(&mut self) {
        let cap = primes::next_capacity(self.table.items());
        let old = mem::replace(&mut self.table, HashTable::with_capacity(cap));
        for entry in old.into_entries() {
            self.table.insert(entry);
        }
    }
}

impl<K: Hash + Eq + Clone, V> Dict<K, V> {
    /// Snapshot of all keys at call time
    pub fn key_set(&self) -> SetView<K> {
        SetView::new(self.table.iter().map(|entry| entry.key.clone()).collect())
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Dict<K, V> {
    /// Snapshot of all `(key, value)` pairs at call time
    pub fn entry_set(&self) -> SetView<(K, V)> {
        SetView::new(
            self.table
                .iter()
                .map(|entry| (entry.key.clone(), entry.value.clone()))
                .collect(),
        )
    }
}
