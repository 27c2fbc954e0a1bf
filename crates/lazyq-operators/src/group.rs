//! Grouping, lookups and dictionaries.
//!
//! Groups come out in first-seen key order and each group keeps source order.
//! `group_by` is lazy and builds its table on the first pull; `to_lookup` and
//! `to_dictionary` are eager and report errors from the call itself.

use std::fmt;
use std::sync::Arc;

use lazyq_core::comparer::EqualityComparer;
use lazyq_core::error::{Result, SeqError};
use lazyq_core::seq::{Cursor, Fused, Sequence};
use lazyq_mem::{BufferBudget, KeyedIndex};

use crate::gen::{from_vec, Items, ItemsCursor};

/// A key and the elements that share it.
#[derive(Clone)]
pub struct Grouping<K, T> {
    key: K,
    items: Items<T>,
}

impl<K, T> Grouping<K, T> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn items(&self) -> &Items<T> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_parts(self) -> (K, Items<T>) {
        (self.key, self.items)
    }
}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for Grouping<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouping")
            .field("key", &self.key)
            .field("items", &self.items)
            .finish()
    }
}

impl<K: Clone, T: Clone> Sequence for Grouping<K, T> {
    type Item = T;
    type Cursor = ItemsCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        self.items.cursor()
    }
}

// --- lookup ---

/// Immutable key → elements multimap. Cheap to clone.
pub struct Lookup<K, T, E> {
    index: Arc<KeyedIndex<K, Items<T>, E>>,
}

impl<K, T, E> Clone for Lookup<K, T, E> {
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
        }
    }
}

impl<K, T, E: EqualityComparer<K>> Lookup<K, T, E> {
    /// Elements for `key`; empty when the key never occurred.
    pub fn get(&self, key: &K) -> Items<T> {
        self.index
            .get(key)
            .cloned()
            .unwrap_or_else(|| from_vec(Vec::new()))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.index.iter().map(|(k, _)| k)
    }
}

impl<K, T, E> Sequence for Lookup<K, T, E>
where
    K: Clone,
    T: Clone,
    E: EqualityComparer<K>,
{
    type Item = Grouping<K, T>;
    type Cursor = LookupCursor<K, T, E>;

    fn cursor(&self) -> Self::Cursor {
        LookupCursor {
            index: Arc::clone(&self.index),
            pos: 0,
        }
    }
}

pub struct LookupCursor<K, T, E> {
    index: Arc<KeyedIndex<K, Items<T>, E>>,
    pos: usize,
}

impl<K, T, E> Cursor for LookupCursor<K, T, E>
where
    K: Clone,
    E: EqualityComparer<K>,
{
    type Item = Grouping<K, T>;

    fn pull(&mut self) -> Result<Option<Grouping<K, T>>> {
        // Lookups never remove, so positions are dense.
        let Some((key, items)) = self.index.get_index(self.pos) else {
            return Ok(None);
        };
        self.pos += 1;
        Ok(Some(Grouping {
            key: key.clone(),
            items: items.clone(),
        }))
    }
}

/// Drain `cursor` into a lookup, charging every element to `budget`.
pub(crate) fn build_lookup<C, K, V, FK, FE, E>(
    cursor: &mut C,
    key: &FK,
    element: &FE,
    comparer: E,
    budget: &mut BufferBudget,
) -> Result<Lookup<K, V, E>>
where
    C: Cursor,
    FK: Fn(&C::Item) -> K,
    FE: Fn(C::Item) -> V,
    E: EqualityComparer<K>,
{
    let mut groups: KeyedIndex<K, Vec<V>, E> = KeyedIndex::new(comparer);
    while let Some(item) = cursor.pull()? {
        budget.charge(1)?;
        let k = key(&item);
        let value = element(item);
        groups.upsert(k, Vec::new, |bucket| bucket.push(value));
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(
        op = budget.op(),
        keys = groups.len(),
        elements = budget.held(),
        "built lookup"
    );
    Ok(Lookup {
        index: Arc::new(groups.map_values(from_vec)),
    })
}

pub fn to_lookup_with<S, K, V, FK, FE, E>(
    source: &S,
    key: FK,
    element: FE,
    comparer: E,
) -> Result<Lookup<K, V, E>>
where
    S: Sequence,
    FK: Fn(&S::Item) -> K,
    FE: Fn(S::Item) -> V,
    E: EqualityComparer<K>,
{
    let mut budget = BufferBudget::unbounded("to_lookup");
    build_lookup(&mut source.cursor(), &key, &element, comparer, &mut budget)
}

// --- group_by ---

pub struct GroupBy<S, FK, FE, E> {
    source: S,
    key: Arc<FK>,
    element: Arc<FE>,
    comparer: Arc<E>,
}

pub fn group_by_with<S, K, V, FK, FE, E>(
    source: S,
    key: FK,
    element: FE,
    comparer: E,
) -> GroupBy<S, FK, FE, E>
where
    S: Sequence,
    FK: Fn(&S::Item) -> K,
    FE: Fn(S::Item) -> V,
    E: EqualityComparer<K>,
{
    GroupBy {
        source,
        key: Arc::new(key),
        element: Arc::new(element),
        comparer: Arc::new(comparer),
    }
}

impl<S: Clone, FK, FE, E> Clone for GroupBy<S, FK, FE, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            key: Arc::clone(&self.key),
            element: Arc::clone(&self.element),
            comparer: Arc::clone(&self.comparer),
        }
    }
}

impl<S, K, V, FK, FE, E> Sequence for GroupBy<S, FK, FE, E>
where
    S: Sequence,
    K: Clone,
    V: Clone,
    FK: Fn(&S::Item) -> K,
    FE: Fn(S::Item) -> V,
    E: EqualityComparer<K>,
{
    type Item = Grouping<K, V>;
    type Cursor = GroupByCursor<S::Cursor, K, V, FK, FE, E>;

    fn cursor(&self) -> Self::Cursor {
        GroupByCursor {
            source: Fused::new(self.source.cursor()),
            key: Arc::clone(&self.key),
            element: Arc::clone(&self.element),
            comparer: Arc::clone(&self.comparer),
            groups: None,
        }
    }
}

pub struct GroupByCursor<C, K, V, FK, FE, E> {
    source: Fused<C>,
    key: Arc<FK>,
    element: Arc<FE>,
    comparer: Arc<E>,
    groups: Option<LookupCursor<K, V, Arc<E>>>,
}

impl<C, K, V, FK, FE, E> Cursor for GroupByCursor<C, K, V, FK, FE, E>
where
    C: Cursor,
    K: Clone,
    FK: Fn(&C::Item) -> K,
    FE: Fn(C::Item) -> V,
    E: EqualityComparer<K>,
{
    type Item = Grouping<K, V>;

    fn pull(&mut self) -> Result<Option<Grouping<K, V>>> {
        if self.groups.is_none() {
            if self.source.is_done() {
                return Ok(None);
            }
            let mut budget = BufferBudget::for_op("group_by");
            let lookup = build_lookup(
                &mut self.source,
                &*self.key,
                &*self.element,
                Arc::clone(&self.comparer),
                &mut budget,
            );
            // The source is spent either way.
            self.source.finish();
            self.groups = Some(LookupCursor {
                index: lookup?.index,
                pos: 0,
            });
        }
        match self.groups.as_mut() {
            Some(groups) => groups.pull(),
            None => Ok(None),
        }
    }
}

// --- dictionary ---

/// Insertion-ordered map with unique keys.
pub struct Dictionary<K, V, E> {
    index: KeyedIndex<K, V, E>,
}

impl<K, V, E: EqualityComparer<K>> Dictionary<K, V, E> {
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.index.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.index.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.index.iter().map(|(_, v)| v)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, E: EqualityComparer<K>> fmt::Debug for Dictionary<K, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.index.iter()).finish()
    }
}

/// Fails with `DuplicateKey` naming the source position of the first repeat.
pub fn to_dictionary_with<S, K, V, FK, FE, E>(
    source: &S,
    key: FK,
    element: FE,
    comparer: E,
) -> Result<Dictionary<K, V, E>>
where
    S: Sequence,
    FK: Fn(&S::Item) -> K,
    FE: Fn(S::Item) -> V,
    E: EqualityComparer<K>,
{
    let mut index = KeyedIndex::new(comparer);
    let mut cursor = source.cursor();
    let mut position = 0usize;
    while let Some(item) = cursor.pull()? {
        let k = key(&item);
        if index.contains_key(&k) {
            return Err(SeqError::DuplicateKey { index: position });
        }
        index.insert_new(k, element(item));
        position += 1;
    }
    Ok(Dictionary { index })
}
