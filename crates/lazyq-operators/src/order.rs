//! Stable multi-key ordering.
//!
//! A sort chain is built left to right by `order_by(..).then_by(..)`. On the
//! first pull the source is buffered, every level extracts its keys once, and
//! a permutation of positions is sorted with a stable sort over the whole
//! chain. Ties at every level fall back to source order; `descending` flips
//! only its own level.

use std::cmp::Ordering;
use std::sync::Arc;

use lazyq_core::comparer::{Comparer, NaturalOrder};
use lazyq_core::error::Result;
use lazyq_core::seq::{Cursor, Sequence};
use lazyq_mem::Buffer;

/// One or more sort levels over elements of type `T`.
pub trait SortChain<T>: Clone {
    /// Keys extracted for a whole buffer, indexed by element position.
    type Keys;

    fn extract(&self, items: &[T]) -> Self::Keys;

    fn compare(&self, keys: &Self::Keys, a: usize, b: usize) -> Ordering;
}

pub struct KeyLevel<F, C> {
    selector: Arc<F>,
    comparer: Arc<C>,
    descending: bool,
}

impl<F, C> KeyLevel<F, C> {
    pub fn new(selector: F, comparer: C, descending: bool) -> Self {
        Self {
            selector: Arc::new(selector),
            comparer: Arc::new(comparer),
            descending,
        }
    }
}

impl<F, C> Clone for KeyLevel<F, C> {
    fn clone(&self) -> Self {
        Self {
            selector: Arc::clone(&self.selector),
            comparer: Arc::clone(&self.comparer),
            descending: self.descending,
        }
    }
}

impl<T, K, F, C> SortChain<T> for KeyLevel<F, C>
where
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    type Keys = Vec<K>;

    fn extract(&self, items: &[T]) -> Vec<K> {
        items.iter().map(|item| (self.selector)(item)).collect()
    }

    fn compare(&self, keys: &Vec<K>, a: usize, b: usize) -> Ordering {
        let ord = Comparer::compare(&*self.comparer, &keys[a], &keys[b]);
        if self.descending {
            ord.reverse()
        } else {
            ord
        }
    }
}

/// `primary`, with ties broken by `secondary`.
#[derive(Clone)]
pub struct ThenLevel<A, B> {
    primary: A,
    secondary: B,
}

impl<T, A, B> SortChain<T> for ThenLevel<A, B>
where
    A: SortChain<T>,
    B: SortChain<T>,
{
    type Keys = (A::Keys, B::Keys);

    fn extract(&self, items: &[T]) -> Self::Keys {
        (self.primary.extract(items), self.secondary.extract(items))
    }

    fn compare(&self, keys: &Self::Keys, a: usize, b: usize) -> Ordering {
        self.primary
            .compare(&keys.0, a, b)
            .then_with(|| self.secondary.compare(&keys.1, a, b))
    }
}

/// An ordered sequence. Further levels are appended with the `then_by` family.
#[derive(Clone)]
pub struct OrderBy<S, Ch> {
    source: S,
    chain: Ch,
}

pub fn order_by_with<S, K, F, C>(
    source: S,
    key: F,
    comparer: C,
    descending: bool,
) -> OrderBy<S, KeyLevel<F, C>>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    C: Comparer<K>,
{
    OrderBy {
        source,
        chain: KeyLevel::new(key, comparer, descending),
    }
}

pub fn order_by<S, K, F>(source: S, key: F) -> OrderBy<S, KeyLevel<F, NaturalOrder>>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    order_by_with(source, key, NaturalOrder, false)
}

pub fn order_by_descending<S, K, F>(source: S, key: F) -> OrderBy<S, KeyLevel<F, NaturalOrder>>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Ord,
{
    order_by_with(source, key, NaturalOrder, true)
}

impl<S, Ch> OrderBy<S, Ch>
where
    S: Sequence,
    Ch: SortChain<S::Item>,
{
    fn then_level<F, C>(
        self,
        key: F,
        comparer: C,
        descending: bool,
    ) -> OrderBy<S, ThenLevel<Ch, KeyLevel<F, C>>> {
        OrderBy {
            source: self.source,
            chain: ThenLevel {
                primary: self.chain,
                secondary: KeyLevel::new(key, comparer, descending),
            },
        }
    }

    pub fn then_by<K, F>(self, key: F) -> OrderBy<S, ThenLevel<Ch, KeyLevel<F, NaturalOrder>>>
    where
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        self.then_level(key, NaturalOrder, false)
    }

    pub fn then_by_descending<K, F>(
        self,
        key: F,
    ) -> OrderBy<S, ThenLevel<Ch, KeyLevel<F, NaturalOrder>>>
    where
        F: Fn(&S::Item) -> K,
        K: Ord,
    {
        self.then_level(key, NaturalOrder, true)
    }

    pub fn then_by_with<K, F, C>(
        self,
        key: F,
        comparer: C,
    ) -> OrderBy<S, ThenLevel<Ch, KeyLevel<F, C>>>
    where
        F: Fn(&S::Item) -> K,
        C: Comparer<K>,
    {
        self.then_level(key, comparer, false)
    }

    pub fn then_by_descending_with<K, F, C>(
        self,
        key: F,
        comparer: C,
    ) -> OrderBy<S, ThenLevel<Ch, KeyLevel<F, C>>>
    where
        F: Fn(&S::Item) -> K,
        C: Comparer<K>,
    {
        self.then_level(key, comparer, true)
    }
}

impl<S, Ch> Sequence for OrderBy<S, Ch>
where
    S: Sequence,
    Ch: SortChain<S::Item>,
{
    type Item = S::Item;
    type Cursor = OrderByCursor<S::Cursor, Ch>;

    fn cursor(&self) -> Self::Cursor {
        OrderByCursor {
            source: Some(self.source.cursor()),
            chain: self.chain.clone(),
            items: Vec::new(),
            order: Vec::new(),
            pos: 0,
        }
    }
}

pub struct OrderByCursor<C: Cursor, Ch> {
    // Present until the first pull sorts.
    source: Option<C>,
    chain: Ch,
    items: Vec<Option<C::Item>>,
    order: Vec<usize>,
    pos: usize,
}

impl<C, Ch> OrderByCursor<C, Ch>
where
    C: Cursor,
    Ch: SortChain<C::Item>,
{
    fn sort(&mut self, mut source: C) -> Result<()> {
        let items = Buffer::drain("order_by", &mut source)?.into_vec();
        let keys = self.chain.extract(&items);
        let mut order: Vec<usize> = (0..items.len()).collect();
        // `sort_by` is stable: equal chains keep source order.
        order.sort_by(|&a, &b| self.chain.compare(&keys, a, b));
        #[cfg(feature = "tracing")]
        tracing::trace!(op = "order_by", len = items.len(), "sorted buffer");
        self.items = items.into_iter().map(Some).collect();
        self.order = order;
        Ok(())
    }
}

impl<C, Ch> Cursor for OrderByCursor<C, Ch>
where
    C: Cursor,
    Ch: SortChain<C::Item>,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        if let Some(source) = self.source.take() {
            self.sort(source)?;
        }
        let Some(&slot) = self.order.get(self.pos) else {
            return Ok(None);
        };
        self.pos += 1;
        Ok(self.items[slot].take())
    }
}
