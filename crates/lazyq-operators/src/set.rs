//! Distinctness and set algebra keyed by an `EqualityComparer`.
//!
//! All four are lazy and single pass over the first input. `distinct` and
//! `union` emit an element as soon as it is found unseen. `intersect` and
//! `except` materialize the second input into a set on the first pull.

use std::sync::Arc;

use lazyq_core::comparer::EqualityComparer;
use lazyq_core::error::Result;
use lazyq_core::seq::{Cursor, Fused, Sequence};
use lazyq_mem::{BufferBudget, KeyedSet};

use crate::bind::concat;

pub struct Distinct<S, E> {
    source: S,
    comparer: Arc<E>,
}

pub fn distinct_with<S, E>(source: S, comparer: E) -> Distinct<S, E>
where
    S: Sequence,
    S::Item: Clone,
    E: EqualityComparer<S::Item>,
{
    Distinct {
        source,
        comparer: Arc::new(comparer),
    }
}

impl<S: Clone, E> Clone for Distinct<S, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            comparer: Arc::clone(&self.comparer),
        }
    }
}

impl<S, E> Sequence for Distinct<S, E>
where
    S: Sequence,
    S::Item: Clone,
    E: EqualityComparer<S::Item>,
{
    type Item = S::Item;
    type Cursor = DistinctCursor<S::Cursor, E>;

    fn cursor(&self) -> Self::Cursor {
        DistinctCursor {
            inner: Fused::new(self.source.cursor()),
            comparer: Arc::clone(&self.comparer),
            seen: None,
        }
    }
}

pub struct DistinctCursor<C: Cursor, E> {
    inner: Fused<C>,
    comparer: Arc<E>,
    seen: Option<(KeyedSet<C::Item, Arc<E>>, BufferBudget)>,
}

impl<C, E> Cursor for DistinctCursor<C, E>
where
    C: Cursor,
    C::Item: Clone,
    E: EqualityComparer<C::Item>,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        let comparer = &self.comparer;
        let (seen, budget) = self.seen.get_or_insert_with(|| {
            (
                KeyedSet::new(Arc::clone(comparer)),
                BufferBudget::for_op("distinct"),
            )
        });
        while let Some(item) = self.inner.pull()? {
            if seen.contains_key(&item) {
                continue;
            }
            if let Err(e) = budget.charge(1) {
                self.inner.finish();
                return Err(e);
            }
            seen.insert(item.clone());
            return Ok(Some(item));
        }
        Ok(None)
    }
}

/// Distinct elements of `first`, then those of `second` not seen yet.
pub fn union_with<A, B, E>(first: A, second: B, comparer: E) -> impl Sequence<Item = A::Item>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
    E: EqualityComparer<A::Item>,
{
    distinct_with(concat(first, second), comparer)
}

// --- intersect / except ---

#[derive(Clone, Copy, PartialEq, Eq)]
enum SetMode {
    Intersect,
    Except,
}

impl SetMode {
    fn op(self) -> &'static str {
        match self {
            SetMode::Intersect => "intersect",
            SetMode::Except => "except",
        }
    }
}

/// Shared shape of `intersect` and `except`: probe `first` against a set built
/// from `second`.
pub struct SetProbe<A, B, E> {
    first: A,
    second: B,
    comparer: Arc<E>,
    mode: SetMode,
}

pub fn intersect_with<A, B, E>(first: A, second: B, comparer: E) -> SetProbe<A, B, E>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
    E: EqualityComparer<A::Item>,
{
    SetProbe {
        first,
        second,
        comparer: Arc::new(comparer),
        mode: SetMode::Intersect,
    }
}

pub fn except_with<A, B, E>(first: A, second: B, comparer: E) -> SetProbe<A, B, E>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
    E: EqualityComparer<A::Item>,
{
    SetProbe {
        first,
        second,
        comparer: Arc::new(comparer),
        mode: SetMode::Except,
    }
}

impl<A: Clone, B: Clone, E> Clone for SetProbe<A, B, E> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            comparer: Arc::clone(&self.comparer),
            mode: self.mode,
        }
    }
}

impl<A, B, E> Sequence for SetProbe<A, B, E>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
    E: EqualityComparer<A::Item>,
{
    type Item = A::Item;
    type Cursor = SetProbeCursor<A::Cursor, B, E>;

    fn cursor(&self) -> Self::Cursor {
        SetProbeCursor {
            first: Fused::new(self.first.cursor()),
            second: Some(self.second.clone()),
            comparer: Arc::clone(&self.comparer),
            mode: self.mode,
            set: None,
        }
    }
}

pub struct SetProbeCursor<C: Cursor, B, E> {
    first: Fused<C>,
    // Consumed when the probe set is built.
    second: Option<B>,
    comparer: Arc<E>,
    mode: SetMode,
    set: Option<(KeyedSet<C::Item, Arc<E>>, BufferBudget)>,
}

impl<C, B, E> SetProbeCursor<C, B, E>
where
    C: Cursor,
    B: Sequence<Item = C::Item>,
    E: EqualityComparer<C::Item>,
{
    fn build(&mut self, second: B) -> Result<()> {
        let mut budget = BufferBudget::for_op(self.mode.op());
        let mut set = KeyedSet::new(Arc::clone(&self.comparer));
        let mut cursor = second.cursor();
        while let Some(item) = cursor.pull()? {
            if !set.contains_key(&item) {
                budget.charge(1)?;
                set.insert(item);
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(op = self.mode.op(), len = set.len(), "built probe set");
        self.set = Some((set, budget));
        Ok(())
    }
}

impl<C, B, E> Cursor for SetProbeCursor<C, B, E>
where
    C: Cursor,
    C::Item: Clone,
    B: Sequence<Item = C::Item>,
    E: EqualityComparer<C::Item>,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        if let Some(second) = self.second.take() {
            if let Err(e) = self.build(second) {
                self.first.finish();
                return Err(e);
            }
        }
        let Some((set, budget)) = self.set.as_mut() else {
            return Ok(None);
        };
        while let Some(item) = self.first.pull()? {
            match self.mode {
                // Removing on match makes every element come out at most once.
                SetMode::Intersect => {
                    if set.remove(&item).is_some() {
                        return Ok(Some(item));
                    }
                }
                SetMode::Except => {
                    if set.contains_key(&item) {
                        continue;
                    }
                    if let Err(e) = budget.charge(1) {
                        self.first.finish();
                        return Err(e);
                    }
                    set.insert(item.clone());
                    return Ok(Some(item));
                }
            }
        }
        Ok(None)
    }
}
