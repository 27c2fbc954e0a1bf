//! Generators: the anamorphism (`unfold`) and the leaf sources built on it.
//!
//! `range` and `repeat` validate their counts inside `defer`, so an invalid
//! count surfaces on the first pull and never at construction.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use lazyq_core::error::{Result, SeqError};
use lazyq_core::seq::{Cursor, Sequence};

// --- unfold ---

/// `seed` → while `cond(state)` emit `project(state)`, then `state = step(state)`.
pub struct Unfold<St, P, F, G> {
    seed: St,
    cond: Arc<P>,
    step: Arc<F>,
    project: Arc<G>,
}

pub fn unfold<St, P, F, G, T>(seed: St, cond: P, step: F, project: G) -> Unfold<St, P, F, G>
where
    St: Clone,
    P: Fn(&St) -> bool,
    F: Fn(St) -> St,
    G: Fn(&St) -> T,
{
    Unfold {
        seed,
        cond: Arc::new(cond),
        step: Arc::new(step),
        project: Arc::new(project),
    }
}

impl<St: Clone, P, F, G> Clone for Unfold<St, P, F, G> {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed.clone(),
            cond: Arc::clone(&self.cond),
            step: Arc::clone(&self.step),
            project: Arc::clone(&self.project),
        }
    }
}

impl<St, P, F, G, T> Sequence for Unfold<St, P, F, G>
where
    St: Clone,
    P: Fn(&St) -> bool,
    F: Fn(St) -> St,
    G: Fn(&St) -> T,
{
    type Item = T;
    type Cursor = UnfoldCursor<St, P, F, G>;

    fn cursor(&self) -> Self::Cursor {
        UnfoldCursor {
            state: Some(self.seed.clone()),
            cond: Arc::clone(&self.cond),
            step: Arc::clone(&self.step),
            project: Arc::clone(&self.project),
        }
    }
}

pub struct UnfoldCursor<St, P, F, G> {
    // None once the continuation test has failed.
    state: Option<St>,
    cond: Arc<P>,
    step: Arc<F>,
    project: Arc<G>,
}

impl<St, P, F, G, T> Cursor for UnfoldCursor<St, P, F, G>
where
    P: Fn(&St) -> bool,
    F: Fn(St) -> St,
    G: Fn(&St) -> T,
{
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        let Some(state) = self.state.take() else {
            return Ok(None);
        };
        if !(self.cond)(&state) {
            return Ok(None);
        }
        let out = (self.project)(&state);
        self.state = Some((self.step)(state));
        Ok(Some(out))
    }
}

// --- trivial instances ---

pub struct Empty<T>(PhantomData<fn() -> T>);

pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Empty(PhantomData)
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor = EmptyCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        EmptyCursor(PhantomData)
    }
}

pub struct EmptyCursor<T>(PhantomData<fn() -> T>);

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        Ok(None)
    }
}

/// Exactly one element (`Return`).
pub fn once<T: Clone>(value: T) -> impl Sequence<Item = T> {
    unfold(
        false,
        |done: &bool| !*done,
        |_: bool| true,
        move |_: &bool| value.clone(),
    )
}

/// `value` repeated `count` times. A negative count fails on first pull.
pub fn repeat<T: Clone>(value: T, count: i64) -> impl Sequence<Item = T> {
    defer(move || {
        if count < 0 {
            return Err(SeqError::OutOfRange {
                param: "count",
                value: count,
            });
        }
        let value = value.clone();
        Ok(unfold(
            0i64,
            move |i: &i64| *i < count,
            |i: i64| i + 1,
            move |_: &i64| value.clone(),
        ))
    })
}

/// `value` forever.
pub fn repeat_forever<T: Clone>(value: T) -> impl Sequence<Item = T> {
    unfold((), |_: &()| true, |s: ()| s, move |_: &()| value.clone())
}

/// `count` consecutive integers from `start`. Fails on first pull when `count`
/// is negative or when `start + count - 1` exceeds `i32::MAX`.
pub fn range(start: i32, count: i32) -> impl Sequence<Item = i32> {
    defer(move || {
        if count < 0 {
            return Err(SeqError::OutOfRange {
                param: "count",
                value: i64::from(count),
            });
        }
        let end = i64::from(start) + i64::from(count);
        if end - 1 > i64::from(i32::MAX) {
            return Err(SeqError::OutOfRange {
                param: "count",
                value: i64::from(count),
            });
        }
        // Counter runs in i64 so stepping past i32::MAX at the end cannot overflow.
        Ok(unfold(
            i64::from(start),
            move |i: &i64| *i < end,
            |i: i64| i + 1,
            |i: &i64| *i as i32,
        ))
    })
}

// --- deferred construction ---

/// Build the real sequence on first pull. An `Err` from `factory` is that pull's error.
pub struct Defer<F> {
    factory: Arc<F>,
}

pub fn defer<F, S>(factory: F) -> Defer<F>
where
    F: Fn() -> Result<S>,
    S: Sequence,
{
    Defer {
        factory: Arc::new(factory),
    }
}

impl<F> Clone for Defer<F> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<F, S> Sequence for Defer<F>
where
    F: Fn() -> Result<S>,
    S: Sequence,
{
    type Item = S::Item;
    type Cursor = DeferCursor<F, S>;

    fn cursor(&self) -> Self::Cursor {
        DeferCursor {
            factory: Some(Arc::clone(&self.factory)),
            inner: None,
        }
    }
}

pub struct DeferCursor<F, S: Sequence> {
    factory: Option<Arc<F>>,
    inner: Option<S::Cursor>,
}

impl<F, S> Cursor for DeferCursor<F, S>
where
    F: Fn() -> Result<S>,
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&mut self) -> Result<Option<S::Item>> {
        if let Some(factory) = self.factory.take() {
            self.inner = Some(factory()?.cursor());
        }
        match self.inner.as_mut() {
            Some(inner) => inner.pull(),
            None => Ok(None),
        }
    }
}

/// A sequence whose first pull raises `error`.
pub struct Fail<T> {
    error: SeqError,
    _item: PhantomData<fn() -> T>,
}

pub fn fail<T>(error: SeqError) -> Fail<T> {
    Fail {
        error,
        _item: PhantomData,
    }
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        fail(self.error.clone())
    }
}

impl<T> Sequence for Fail<T> {
    type Item = T;
    type Cursor = FailCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        FailCursor {
            error: Some(self.error.clone()),
            _item: PhantomData,
        }
    }
}

pub struct FailCursor<T> {
    error: Option<SeqError>,
    _item: PhantomData<fn() -> T>,
}

impl<T> Cursor for FailCursor<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }
}

// --- shared in-memory source ---

/// Immutable shared elements. Cloning is a reference-count bump; each cursor
/// yields clones of the elements in order.
pub struct Items<T> {
    items: Arc<[T]>,
}

pub fn from_vec<T>(items: Vec<T>) -> Items<T> {
    Items {
        items: items.into(),
    }
}

pub fn from_slice<T: Clone>(items: &[T]) -> Items<T> {
    Items {
        items: items.into(),
    }
}

impl<T> Items<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        from_vec(items)
    }
}

impl<T> Clone for Items<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Items<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Clone> Sequence for Items<T> {
    type Item = T;
    type Cursor = ItemsCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        ItemsCursor {
            items: Arc::clone(&self.items),
            pos: 0,
        }
    }
}

pub struct ItemsCursor<T> {
    items: Arc<[T]>,
    pos: usize,
}

impl<T: Clone> Cursor for ItemsCursor<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        let item = self.items.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        Ok(item)
    }
}

// --- external producers ---

/// Adapt any pull-based producer. `make` runs on each cursor's first pull, so
/// every enumeration starts from a fresh iterator.
pub struct FromFn<F> {
    make: Arc<F>,
}

pub fn from_fn<F, I>(make: F) -> FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn {
        make: Arc::new(make),
    }
}

impl<F> Clone for FromFn<F> {
    fn clone(&self) -> Self {
        Self {
            make: Arc::clone(&self.make),
        }
    }
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor = FromFnCursor<F, I>;

    fn cursor(&self) -> Self::Cursor {
        FromFnCursor {
            make: Some(Arc::clone(&self.make)),
            iter: None,
        }
    }
}

pub struct FromFnCursor<F, I: IntoIterator> {
    make: Option<Arc<F>>,
    iter: Option<std::iter::Fuse<I::IntoIter>>,
}

impl<F, I> Cursor for FromFnCursor<F, I>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Result<Option<I::Item>> {
        if let Some(make) = self.make.take() {
            self.iter = Some(make().into_iter().fuse());
        }
        Ok(self.iter.as_mut().and_then(Iterator::next))
    }
}
