use std::hash::{DefaultHasher, Hash, Hasher};

/// An owned key-value pair, one slot of a bucket chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// Fixed-capacity array of bucket chains.
///
/// Collisions are resolved by chaining: every bucket owns a `Vec` of
/// entries and a key lives in exactly one chain across the whole table.
/// The table never grows on its own; the dictionary on top of it swaps in
/// a bigger one when the load factor calls for it.
#[derive(Debug)]
pub(crate) struct HashTable<K, V> {
    buckets: Vec<Vec<Entry<K, V>>>,
    items: usize,
}

#[derive(Debug)]
pub(crate) struct Iter<'a, K, V> {
    buckets: &'a [Vec<Entry<K, V>>],
    bucket_idx: usize,
    slot_idx: usize,
}

impl<K, V> HashTable<K, V> {
    /// Creates a new `HashTable` with `cap` many buckets
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buckets: (0..cap).map(|_| Vec::new()).collect(),
            items: 0,
        }
    }

    /// Returns the number of live entries across all chains
    pub fn items(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.items() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns the number of buckets, or "slots" of the hash table
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Drops every chain but keeps the buckets themselves allocated
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.items = 0;
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: &self.buckets,
            bucket_idx: 0,
            slot_idx: 0,
        }
    }

    /// Consumes the table, yielding every entry in bucket order.
    /// This is the rehash path: the old table dies here.
    pub fn into_entries(self) -> impl Iterator<Item = Entry<K, V>> {
        self.buckets.into_iter().flatten()
    }
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Inserts an entry, returning the previous value (if there was any).
    ///
    /// The chain is walked comparing keys: a match anywhere in the chain
    /// replaces that entry's value, otherwise the entry is appended at the
    /// tail. A distinct key always gets its own chain slot, no matter what
    /// values its chain neighbours hold.
    pub fn insert(&mut self, entry: Entry<K, V>) -> Option<V> {
        let i = self.idx(&entry.key);

        match self.buckets[i].iter_mut().find(|held| held.key == entry.key) {
            Some(held) => {
                let old = std::mem::replace(&mut held.value, entry.value);
                Some(old)
            }
            None => {
                self.buckets[i].push(entry);
                self.items += 1;
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&Entry<K, V>> {
        let i = self.idx(key);
        self.buckets[i].iter().find(|held| &held.key == key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Entry<K, V>> {
        let i = self.idx(key);
        self.buckets[i].iter_mut().find(|held| &held.key == key)
    }

    /// Splices the matching entry out of its chain, leaving the rest of
    /// the chain untouched. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<Entry<K, V>> {
        let i = self.idx(key);
        let pos = self.buckets[i].iter().position(|held| &held.key == key)?;
        self.items -= 1;
        Some(self.buckets[i].remove(pos))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    // [private]

    fn hash(key: &K) -> u64 {
        let mut h = DefaultHasher::default();
        key.hash(&mut h);
        h.finish()
    }

    /// Bucket index for `key`. The table is never constructed with zero
    /// buckets, so the modulo is always defined.
    fn idx(&self, key: &K) -> usize {
        Self::hash(key) as usize % self.buckets.len()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bucket = self.buckets.get(self.bucket_idx)?;
            match bucket.get(self.slot_idx) {
                Some(entry) => {
                    self.slot_idx += 1;
                    return Some(entry);
                }
                None => {
                    self.bucket_idx += 1;
                    self.slot_idx = 0;
                }
            }
        }
    }
}
