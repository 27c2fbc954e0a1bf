//! Monadic bind and the projection family derived from it.
//!
//! `bind` drains the child produced for one source element before pulling the
//! next source element. `select` binds to a one-element child, `filter` to a
//! zero- or one-element child, and `concat` binds over a two-element sequence
//! holding both inputs.

use std::sync::Arc;

use lazyq_core::error::Result;
use lazyq_core::seq::{Cursor, Emit, Fused, IntoCursor, Sequence};

use crate::gen::from_vec;

pub struct Bind<S, F> {
    source: S,
    project: Arc<F>,
}

pub fn bind<S, F, I>(source: S, project: F) -> Bind<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoCursor,
{
    Bind {
        source,
        project: Arc::new(project),
    }
}

impl<S: Clone, F> Clone for Bind<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            project: Arc::clone(&self.project),
        }
    }
}

impl<S, F, I> Sequence for Bind<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoCursor,
{
    type Item = I::Item;
    type Cursor = BindCursor<S::Cursor, F, I>;

    fn cursor(&self) -> Self::Cursor {
        BindCursor {
            outer: Fused::new(self.source.cursor()),
            project: Arc::clone(&self.project),
            inner: None,
        }
    }
}

pub struct BindCursor<C, F, I: IntoCursor> {
    outer: Fused<C>,
    project: Arc<F>,
    inner: Option<I::IntoCursor>,
}

impl<C, F, I> Cursor for BindCursor<C, F, I>
where
    C: Cursor,
    F: Fn(C::Item) -> I,
    I: IntoCursor,
{
    type Item = I::Item;

    fn pull(&mut self) -> Result<Option<I::Item>> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                match inner.pull() {
                    Ok(Some(item)) => return Ok(Some(item)),
                    Ok(None) => self.inner = None,
                    Err(e) => {
                        self.inner = None;
                        self.outer.finish();
                        return Err(e);
                    }
                }
            }
            match self.outer.pull()? {
                Some(item) => self.inner = Some((self.project)(item).into_cursor()),
                None => return Ok(None),
            }
        }
    }
}

// --- index threading ---

/// Pairs every element with its zero-based position. The counter lives in the
/// cursor, so each enumeration starts at zero.
#[derive(Clone)]
pub struct Indexed<S> {
    source: S,
}

pub fn indexed<S: Sequence>(source: S) -> Indexed<S> {
    Indexed { source }
}

impl<S: Sequence> Sequence for Indexed<S> {
    type Item = (usize, S::Item);
    type Cursor = IndexedCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        IndexedCursor {
            inner: self.source.cursor(),
            next: 0,
        }
    }
}

pub struct IndexedCursor<C> {
    inner: C,
    next: usize,
}

impl<C: Cursor> Cursor for IndexedCursor<C> {
    type Item = (usize, C::Item);

    fn pull(&mut self) -> Result<Option<Self::Item>> {
        Ok(self.inner.pull()?.map(|item| {
            let index = self.next;
            self.next += 1;
            (index, item)
        }))
    }
}

// --- derived operators ---

pub fn select<S, F, U>(source: S, f: F) -> impl Sequence<Item = U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    bind(source, move |item| Emit::one(f(item)))
}

pub fn select_indexed<S, F, U>(source: S, f: F) -> impl Sequence<Item = U>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> U,
{
    bind(indexed(source), move |(i, item)| Emit::one(f(item, i)))
}

pub fn filter<S, P>(source: S, predicate: P) -> impl Sequence<Item = S::Item>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    bind(source, move |item| {
        if predicate(&item) {
            Emit::one(item)
        } else {
            Emit::none()
        }
    })
}

pub fn filter_indexed<S, P>(source: S, predicate: P) -> impl Sequence<Item = S::Item>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    bind(indexed(source), move |(i, item)| {
        if predicate(&item, i) {
            Emit::one(item)
        } else {
            Emit::none()
        }
    })
}

pub fn select_many<S, F, I>(source: S, f: F) -> impl Sequence<Item = I::Item>
where
    S: Sequence,
    F: Fn(S::Item) -> I,
    I: IntoCursor,
{
    bind(source, f)
}

pub fn select_many_indexed<S, F, I>(source: S, f: F) -> impl Sequence<Item = I::Item>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> I,
    I: IntoCursor,
{
    bind(indexed(source), move |(i, item)| f(item, i))
}

/// Flatten `collection(x)` for every `x`, combining each child element with
/// its parent through `result`.
pub fn select_many_with<S, F, I, G, R>(
    source: S,
    collection: F,
    result: G,
) -> impl Sequence<Item = R>
where
    S: Sequence,
    F: Fn(&S::Item) -> I,
    I: Sequence,
    G: Fn(&S::Item, I::Item) -> R,
{
    let result = Arc::new(result);
    bind(source, move |parent| {
        let children = collection(&parent);
        let result = Arc::clone(&result);
        select(children, move |child| result(&parent, child))
    })
}

/// One of two sequence types with the same element type.
#[derive(Clone)]
pub enum Either<A, B> {
    Left(A),
    Right(B),
}

impl<A, B> Sequence for Either<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = Either<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        match self {
            Either::Left(a) => Either::Left(a.cursor()),
            Either::Right(b) => Either::Right(b.cursor()),
        }
    }
}

impl<A, B> Cursor for Either<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn pull(&mut self) -> Result<Option<A::Item>> {
        match self {
            Either::Left(a) => a.pull(),
            Either::Right(b) => b.pull(),
        }
    }
}

pub fn concat<A, B>(first: A, second: B) -> impl Sequence<Item = A::Item>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    bind(
        from_vec(vec![Either::Left(first), Either::Right(second)]),
        |part: Either<A, B>| part,
    )
}
