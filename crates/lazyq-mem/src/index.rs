//! Insertion-ordered hash index keyed through an `EqualityComparer`.
//!
//! The comparer supplies both hashing and equality, so keys need no `Hash`/`Eq`
//! of their own. Entries live in a dense vector in first-insertion order; hash
//! slots map a 64-bit hash to the entry positions sharing it. Removal leaves a
//! tombstone so positions stay stable.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};

use lazyq_core::comparer::EqualityComparer;

pub struct KeyedIndex<K, V, E> {
    comparer: E,
    hasher: RandomState,
    slots: HashMap<u64, Vec<usize>>,
    entries: Vec<Option<(K, V)>>,
    live: usize,
}

impl<K, V, E: EqualityComparer<K>> KeyedIndex<K, V, E> {
    pub fn new(comparer: E) -> Self {
        Self {
            comparer,
            hasher: RandomState::new(),
            slots: HashMap::new(),
            entries: Vec::new(),
            live: 0,
        }
    }

    fn hash_key(&self, key: &K) -> u64 {
        let mut h = self.hasher.build_hasher();
        self.comparer.hash(key, &mut h);
        h.finish()
    }

    fn position_hashed(&self, hash: u64, key: &K) -> Option<usize> {
        self.slots.get(&hash)?.iter().copied().find(|&pos| {
            matches!(&self.entries[pos], Some((k, _)) if self.comparer.equals(k, key))
        })
    }

    /// Entry position of `key` in insertion order, counting removed entries.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.position_hashed(self.hash_key(key), key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let pos = self.position(key)?;
        self.entries[pos].as_ref().map(|(_, v)| v)
    }

    fn push_entry(&mut self, hash: u64, key: K, value: V) -> usize {
        let pos = self.entries.len();
        self.entries.push(Some((key, value)));
        self.slots.entry(hash).or_default().push(pos);
        self.live += 1;
        pos
    }

    /// Insert unless an equal key is present. Returns `false` (and drops the
    /// pair) when the key already existed.
    pub fn insert_new(&mut self, key: K, value: V) -> bool {
        let hash = self.hash_key(&key);
        if self.position_hashed(hash, &key).is_some() {
            return false;
        }
        self.push_entry(hash, key, value);
        true
    }

    /// Apply `update` to the value for `key`, inserting `make()` first if the
    /// key is new. Returns whether an insertion happened.
    pub fn upsert<F, G>(&mut self, key: K, make: F, update: G) -> bool
    where
        F: FnOnce() -> V,
        G: FnOnce(&mut V),
    {
        let hash = self.hash_key(&key);
        let (pos, inserted) = match self.position_hashed(hash, &key) {
            Some(pos) => (pos, false),
            None => (self.push_entry(hash, key, make()), true),
        };
        if let Some((_, v)) = &mut self.entries[pos] {
            update(v);
        }
        inserted
    }

    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash_key(key);
        let pos = self.position_hashed(hash, key)?;
        if let Some(bucket) = self.slots.get_mut(&hash) {
            bucket.retain(|&p| p != pos);
            if bucket.is_empty() {
                self.slots.remove(&hash);
            }
        }
        self.live -= 1;
        self.entries[pos].take()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Entry at insertion position `pos`; `None` past the end or for a removed entry.
    pub fn get_index(&self, pos: usize) -> Option<(&K, &V)> {
        self.entries.get(pos)?.as_ref().map(|(k, v)| (k, v))
    }

    /// Live entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries
            .iter()
            .filter_map(|e| e.as_ref().map(|(k, v)| (k, v)))
    }

    /// Transform every value, keeping keys, order and hash slots.
    pub fn map_values<W, F>(self, mut f: F) -> KeyedIndex<K, W, E>
    where
        F: FnMut(V) -> W,
    {
        KeyedIndex {
            comparer: self.comparer,
            hasher: self.hasher,
            slots: self.slots,
            entries: self
                .entries
                .into_iter()
                .map(|e| e.map(|(k, v)| (k, f(v))))
                .collect(),
            live: self.live,
        }
    }
}

/// Seen-set used by distinct and the set operators.
pub type KeyedSet<T, E> = KeyedIndex<T, (), E>;

impl<T, E: EqualityComparer<T>> KeyedIndex<T, (), E> {
    /// Add `value`; `true` if it was not present yet.
    pub fn insert(&mut self, value: T) -> bool {
        self.insert_new(value, ())
    }
}
