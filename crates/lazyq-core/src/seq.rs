//! The sequence kernel: restartable factories that hand out independent cursors.
//!
//! A `Sequence` is a rule for producing cursors. Calling `cursor()` twice gives
//! two cursors with private state, so a sequence can be enumerated any number
//! of times without shared mutable state. Nothing runs until a cursor is pulled.
//!
//! Invariants every implementation upholds:
//! - once a cursor yields `Ok(None)` it keeps yielding `Ok(None)`;
//! - once a cursor yields `Err(_)` every later pull yields `Ok(None)`;
//! - a cursor never borrows its factory; it owns (shared handles to) whatever it needs.

use crate::error::{Result, SeqError};

/// Stateful pull handle. Produced once per enumeration.
pub trait Cursor {
    type Item;

    /// Pull the next element. `Ok(None)` means exhausted.
    fn pull(&mut self) -> Result<Option<Self::Item>>;
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<Self::Item>> {
        (**self).pull()
    }
}

/// Restartable sequence factory.
///
/// `Clone` is required so that operators can keep a copy of a source and open
/// it lazily (e.g. the right side of a concatenation or the inner side of a
/// join). Implementations keep their clones cheap by sharing data and closures
/// behind `Arc`.
pub trait Sequence: Clone {
    type Item;
    type Cursor: Cursor<Item = Self::Item>;

    /// Open a fresh, independent cursor.
    fn cursor(&self) -> Self::Cursor;

    /// Bridge into `Iterator` for `for` loops and std adapters.
    fn iter(&self) -> Iter<Self::Cursor> {
        Iter::new(self.cursor())
    }
}

/// Anything that can be turned into a cursor by value.
///
/// Every `Sequence` qualifies. `Emit` qualifies too, which lets projections and
/// filters be written as binds to zero- or one-element children without
/// cloning the element.
pub trait IntoCursor {
    type Item;
    type IntoCursor: Cursor<Item = Self::Item>;

    fn into_cursor(self) -> Self::IntoCursor;
}

impl<S: Sequence> IntoCursor for S {
    type Item = S::Item;
    type IntoCursor = S::Cursor;

    fn into_cursor(self) -> Self::IntoCursor {
        self.cursor()
    }
}

/// A one-shot child holding zero or one owned element, or the error its
/// single pull raises.
#[derive(Debug)]
pub struct Emit<T>(Option<Result<T>>);

impl<T> Emit<T> {
    pub fn one(value: T) -> Self {
        Emit(Some(Ok(value)))
    }

    pub fn none() -> Self {
        Emit(None)
    }

    pub fn from_option(value: Option<T>) -> Self {
        Emit(value.map(Ok))
    }

    pub fn error(error: SeqError) -> Self {
        Emit(Some(Err(error)))
    }
}

impl<T> Cursor for Emit<T> {
    type Item = T;

    fn pull(&mut self) -> Result<Option<T>> {
        self.0.take().transpose()
    }
}

impl<T> IntoCursor for Emit<T> {
    type Item = T;
    type IntoCursor = Emit<T>;

    fn into_cursor(self) -> Self {
        self
    }
}

/// Cursor wrapper that stays exhausted after the inner cursor yields `Ok(None)`
/// or an error. Operators hold their upstream through this so they inherit the
/// exhaustion contract without tracking it by hand.
pub struct Fused<C>(Option<C>);

impl<C> Fused<C> {
    pub fn new(cursor: C) -> Self {
        Fused(Some(cursor))
    }

    /// Drop the inner cursor; every later pull yields `Ok(None)`.
    pub fn finish(&mut self) {
        self.0 = None;
    }

    pub fn is_done(&self) -> bool {
        self.0.is_none()
    }
}

impl<C: Cursor> Cursor for Fused<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Result<Option<C::Item>> {
        let Some(cursor) = self.0.as_mut() else {
            return Ok(None);
        };
        match cursor.pull() {
            Ok(Some(item)) => Ok(Some(item)),
            other => {
                self.0 = None;
                other
            }
        }
    }
}

/// Fused `Iterator` over a cursor. Errors are yielded once, then iteration ends.
pub struct Iter<C> {
    cursor: C,
    done: bool,
}

impl<C: Cursor> Iter<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.pull() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<C: Cursor> std::iter::FusedIterator for Iter<C> {}
