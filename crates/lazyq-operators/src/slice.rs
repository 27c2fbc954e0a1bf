//! Prefix/suffix slicing, gates, `default_if_empty` and `reverse`.
//!
//! `take`/`skip` treat a non-positive count as zero and never fail, unlike
//! `range`/`repeat`.
//!
//! `skip` is a filter on the element index. `take`, the `*_while` gates and
//! `default_if_empty` carry a counter or gate in their own cursor: a bind
//! closure is shared by every cursor of the factory, and `unfold` state is
//! cloned from the seed, so neither can own the upstream cursor that `take`
//! must stop pulling.

use std::sync::Arc;

use lazyq_core::error::Result;
use lazyq_core::seq::{Cursor, Fused, Sequence};
use lazyq_mem::Buffer;

use crate::bind::filter_indexed;

// --- take / skip ---

#[derive(Clone)]
pub struct Take<S> {
    source: S,
    count: i64,
}

pub fn take<S: Sequence>(source: S, count: i64) -> Take<S> {
    Take { source, count }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            inner: Fused::new(self.source.cursor()),
            remaining: self.count,
        }
    }
}

pub struct TakeCursor<C> {
    inner: Fused<C>,
    remaining: i64,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        // Stop before pulling past the prefix; the source may be infinite.
        if self.remaining <= 0 {
            self.inner.finish();
            return Ok(None);
        }
        let item = self.inner.pull()?;
        if item.is_some() {
            self.remaining -= 1;
        }
        Ok(item)
    }
}

/// Drops the first `count` elements. A filter on the element index, so it
/// needs no state of its own.
pub fn skip<S: Sequence>(source: S, count: i64) -> impl Sequence<Item = S::Item> {
    filter_indexed(source, move |_, index| i64::try_from(index).map_or(true, |i| i >= count))
}

// --- gates ---

/// Yields elements while `predicate(x, index)` holds, then stops pulling.
pub struct TakeWhile<S, P> {
    source: S,
    predicate: Arc<P>,
}

pub fn take_while_indexed<S, P>(source: S, predicate: P) -> TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    TakeWhile {
        source,
        predicate: Arc::new(predicate),
    }
}

pub fn take_while<S, P>(source: S, predicate: P) -> TakeWhile<S, impl Fn(&S::Item, usize) -> bool>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    take_while_indexed(source, move |item: &S::Item, _| predicate(item))
}

impl<S: Clone, P> Clone for TakeWhile<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileCursor {
            inner: Fused::new(self.source.cursor()),
            predicate: Arc::clone(&self.predicate),
            index: 0,
        }
    }
}

pub struct TakeWhileCursor<C, P> {
    inner: Fused<C>,
    predicate: Arc<P>,
    index: usize,
}

impl<C, P> Cursor for TakeWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        let Some(item) = self.inner.pull()? else {
            return Ok(None);
        };
        if (self.predicate)(&item, self.index) {
            self.index += 1;
            Ok(Some(item))
        } else {
            self.inner.finish();
            Ok(None)
        }
    }
}

/// Drops elements while `predicate(x, index)` holds, then yields the rest
/// without testing again.
pub struct SkipWhile<S, P> {
    source: S,
    predicate: Arc<P>,
}

pub fn skip_while_indexed<S, P>(source: S, predicate: P) -> SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    SkipWhile {
        source,
        predicate: Arc::new(predicate),
    }
}

pub fn skip_while<S, P>(source: S, predicate: P) -> SkipWhile<S, impl Fn(&S::Item, usize) -> bool>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    skip_while_indexed(source, move |item: &S::Item, _| predicate(item))
}

impl<S: Clone, P> Clone for SkipWhile<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Cursor = SkipWhileCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        SkipWhileCursor {
            inner: Fused::new(self.source.cursor()),
            predicate: Arc::clone(&self.predicate),
            index: 0,
            yielding: false,
        }
    }
}

pub struct SkipWhileCursor<C, P> {
    inner: Fused<C>,
    predicate: Arc<P>,
    index: usize,
    yielding: bool,
}

impl<C, P> Cursor for SkipWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        if self.yielding {
            return self.inner.pull();
        }
        while let Some(item) = self.inner.pull()? {
            let skip = (self.predicate)(&item, self.index);
            self.index += 1;
            if !skip {
                self.yielding = true;
                return Ok(Some(item));
            }
        }
        Ok(None)
    }
}

// --- default_if_empty ---

#[derive(Clone)]
pub struct DefaultIfEmpty<S, T> {
    source: S,
    default: T,
}

pub fn default_if_empty<S>(source: S, default: S::Item) -> DefaultIfEmpty<S, S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    DefaultIfEmpty { source, default }
}

impl<S, T> Sequence for DefaultIfEmpty<S, T>
where
    S: Sequence<Item = T>,
    T: Clone,
{
    type Item = T;
    type Cursor = DefaultIfEmptyCursor<S::Cursor, T>;

    fn cursor(&self) -> Self::Cursor {
        DefaultIfEmptyCursor {
            inner: Fused::new(self.source.cursor()),
            fallback: Some(self.default.clone()),
        }
    }
}

pub struct DefaultIfEmptyCursor<C, T> {
    inner: Fused<C>,
    // Taken by the first element or by the empty-source fallback.
    fallback: Option<T>,
}

impl<C, T> Cursor for DefaultIfEmptyCursor<C, T>
where
    C: Cursor<Item = T>,
{
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        match self.inner.pull() {
            Ok(Some(item)) => {
                self.fallback = None;
                Ok(Some(item))
            }
            Ok(None) => Ok(self.fallback.take()),
            Err(e) => {
                self.fallback = None;
                Err(e)
            }
        }
    }
}

// --- reverse ---

#[derive(Clone)]
pub struct Reverse<S> {
    source: S,
}

pub fn reverse<S: Sequence>(source: S) -> Reverse<S> {
    Reverse { source }
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;
    type Cursor = ReverseCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ReverseCursor {
            source: Some(self.source.cursor()),
            buffered: Vec::new(),
        }
    }
}

pub struct ReverseCursor<C: Cursor> {
    // Present until the first pull drains it.
    source: Option<C>,
    buffered: Vec<C::Item>,
}

impl<C: Cursor> Cursor for ReverseCursor<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        if let Some(mut source) = self.source.take() {
            self.buffered = Buffer::drain("reverse", &mut source)?.into_vec();
        }
        Ok(self.buffered.pop())
    }
}
