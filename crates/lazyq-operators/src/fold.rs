//! Strict left folds and the terminal operators built on them.
//!
//! Everything here pulls its source to completion (or to the first deciding
//! element) before returning.

use lazyq_core::comparer::EqualityComparer;
use lazyq_core::error::{Result, SeqError};
use lazyq_core::seq::{Cursor, Sequence};

pub fn fold<S, A, F>(source: &S, seed: A, f: F) -> Result<A>
where
    S: Sequence,
    F: Fn(A, S::Item) -> A,
{
    try_fold(source, seed, |acc, item| Ok(f(acc, item)))
}

/// Fold whose step may fail; the first error stops the traversal.
pub fn try_fold<S, A, F>(source: &S, seed: A, f: F) -> Result<A>
where
    S: Sequence,
    F: Fn(A, S::Item) -> Result<A>,
{
    let mut cursor = source.cursor();
    let mut acc = seed;
    while let Some(item) = cursor.pull()? {
        acc = f(acc, item)?;
    }
    Ok(acc)
}

/// Seedless fold: the first element is the seed. Fails with `Empty` on an empty source.
pub fn aggregate<S, F>(source: &S, f: F) -> Result<S::Item>
where
    S: Sequence,
    F: Fn(S::Item, S::Item) -> S::Item,
{
    let mut cursor = source.cursor();
    let mut acc = cursor.pull()?.ok_or(SeqError::Empty)?;
    while let Some(item) = cursor.pull()? {
        acc = f(acc, item);
    }
    Ok(acc)
}

/// Seeded fold with a finisher. An empty source gives `finish(seed)`.
pub fn aggregate_seeded<S, A, R, F, G>(source: &S, seed: A, f: F, finish: G) -> Result<R>
where
    S: Sequence,
    F: Fn(A, S::Item) -> A,
    G: FnOnce(A) -> R,
{
    fold(source, seed, f).map(finish)
}

pub fn long_count_where<S, P>(source: &S, predicate: P) -> Result<i64>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    try_fold(source, 0i64, |n, item| {
        if predicate(&item) {
            n.checked_add(1).ok_or(SeqError::Overflow("i64"))
        } else {
            Ok(n)
        }
    })
}

pub fn count_where<S, P>(source: &S, predicate: P) -> Result<i32>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    try_fold(source, 0i32, |n, item| {
        if predicate(&item) {
            n.checked_add(1).ok_or(SeqError::Overflow("i32"))
        } else {
            Ok(n)
        }
    })
}

/// Stops at the first element failing `predicate`.
pub fn all<S, P>(source: &S, predicate: P) -> Result<bool>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut cursor = source.cursor();
    while let Some(item) = cursor.pull()? {
        if !predicate(&item) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Stops at the first element satisfying `predicate`.
pub fn any_where<S, P>(source: &S, predicate: P) -> Result<bool>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    all(source, |item| !predicate(item)).map(|none| !none)
}

pub fn contains<S>(source: &S, value: &S::Item) -> Result<bool>
where
    S: Sequence,
    S::Item: PartialEq,
{
    any_where(source, |item| item == value)
}

pub fn contains_with<S, E>(source: &S, value: &S::Item, comparer: E) -> Result<bool>
where
    S: Sequence,
    E: EqualityComparer<S::Item>,
{
    any_where(source, |item| comparer.equals(item, value))
}

pub fn to_vec<S: Sequence>(source: &S) -> Result<Vec<S::Item>> {
    fold(source, Vec::new(), |mut out, item| {
        out.push(item);
        out
    })
}

/// Drive the source for its side effects.
pub fn run<S: Sequence>(source: &S) -> Result<()> {
    fold(source, (), |(), _| ())
}

fn pairwise<A, B, F>(first: &A, second: &B, eq: F) -> Result<bool>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    F: Fn(&A::Item, &A::Item) -> bool,
{
    let mut left = first.cursor();
    let mut right = second.cursor();
    loop {
        match (left.pull()?, right.pull()?) {
            (Some(a), Some(b)) => {
                if !eq(&a, &b) {
                    return Ok(false);
                }
            }
            (None, None) => return Ok(true),
            _ => return Ok(false),
        }
    }
}

/// Pairwise equality in order, including equal length.
pub fn sequence_equal<A, B>(first: &A, second: &B) -> Result<bool>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: PartialEq,
{
    pairwise(first, second, |a, b| a == b)
}

pub fn sequence_equal_with<A, B, E>(first: &A, second: &B, comparer: E) -> Result<bool>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    E: EqualityComparer<A::Item>,
{
    pairwise(first, second, |a, b| comparer.equals(a, b))
}
