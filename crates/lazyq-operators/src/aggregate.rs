//! Numeric folds: `sum`, `average`, `min`, `max` and their nullable forms.
//!
//! Nullable sequences have `Option<N>` elements. `None` entries are skipped;
//! `sum_nullable` of nothing is zero, while `average_nullable`,
//! `min_nullable` and `max_nullable` of nothing are `None`. The non-nullable
//! `average`, `min` and `max` fail with `Empty` instead.

use lazyq_core::error::{Result, SeqError};
use lazyq_core::numeric::Numeric;
use lazyq_core::seq::{Cursor, Emit, Sequence};

use crate::bind::bind;
use crate::fold::try_fold;

pub fn sum<S, N>(source: &S) -> Result<N>
where
    S: Sequence<Item = N>,
    N: Numeric,
{
    try_fold(source, N::sum_seed(), N::checked_sum).map(N::sum_finish)
}

pub fn sum_nullable<S, N>(source: &S) -> Result<N>
where
    S: Sequence<Item = Option<N>>,
    N: Numeric,
{
    try_fold(source, N::sum_seed(), |acc, value| match value {
        Some(v) => N::checked_sum(acc, v),
        None => Ok(acc),
    })
    .map(N::sum_finish)
}

fn mean_of<C, N>(cursor: &mut C) -> Result<Option<N::Mean>>
where
    C: Cursor<Item = N>,
    N: Numeric,
{
    let mut acc = N::mean_seed();
    let mut count: i64 = 0;
    while let Some(value) = cursor.pull()? {
        acc = N::checked_mean(acc, value)?;
        count = count.checked_add(1).ok_or(SeqError::Overflow("i64"))?;
    }
    Ok((count > 0).then(|| N::mean_finish(acc, count)))
}

pub fn average<S, N>(source: &S) -> Result<N::Mean>
where
    S: Sequence<Item = N>,
    N: Numeric,
{
    mean_of(&mut source.cursor())?.ok_or(SeqError::Empty)
}

pub fn average_nullable<S, N>(source: &S) -> Result<Option<N::Mean>>
where
    S: Sequence<Item = Option<N>>,
    N: Numeric,
{
    mean_of(&mut present(source).cursor())
}

fn present<S, T>(source: &S) -> impl Sequence<Item = T>
where
    S: Sequence<Item = Option<T>>,
{
    bind(source.clone(), Emit::from_option)
}

fn is_nan<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}

// A NaN element wins immediately.
fn min_of<C, T>(cursor: &mut C) -> Result<Option<T>>
where
    C: Cursor<Item = T>,
    T: PartialOrd,
{
    let Some(mut best) = cursor.pull()? else {
        return Ok(None);
    };
    if is_nan(&best) {
        return Ok(Some(best));
    }
    while let Some(value) = cursor.pull()? {
        if is_nan(&value) {
            return Ok(Some(value));
        }
        if value < best {
            best = value;
        }
    }
    Ok(Some(best))
}

// Any value replaces a NaN running maximum.
fn max_of<C, T>(cursor: &mut C) -> Result<Option<T>>
where
    C: Cursor<Item = T>,
    T: PartialOrd,
{
    let Some(mut best) = cursor.pull()? else {
        return Ok(None);
    };
    while let Some(value) = cursor.pull()? {
        if value > best || is_nan(&best) {
            best = value;
        }
    }
    Ok(Some(best))
}

pub fn min<S>(source: &S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    min_of(&mut source.cursor())?.ok_or(SeqError::Empty)
}

pub fn max<S>(source: &S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    max_of(&mut source.cursor())?.ok_or(SeqError::Empty)
}

pub fn min_nullable<S, T>(source: &S) -> Result<Option<T>>
where
    S: Sequence<Item = Option<T>>,
    T: PartialOrd,
{
    min_of(&mut present(source).cursor())
}

pub fn max_nullable<S, T>(source: &S) -> Result<Option<T>>
where
    S: Sequence<Item = Option<T>>,
    T: PartialOrd,
{
    max_of(&mut present(source).cursor())
}
