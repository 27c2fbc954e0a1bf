//! Element access by position or predicate.
//!
//! The `_or_none` and `_or_default` forms turn an empty or no-match result
//! into a fallback. They never hide `MoreThanOne`/`MoreThanOneMatch`.

use lazyq_core::error::{Result, SeqError};
use lazyq_core::seq::{Cursor, Sequence};

fn first_matching<S, P>(source: &S, predicate: P) -> Result<Option<S::Item>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut cursor = source.cursor();
    while let Some(item) = cursor.pull()? {
        if predicate(&item) {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

fn last_matching<S, P>(source: &S, predicate: P) -> Result<Option<S::Item>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut cursor = source.cursor();
    let mut last = None;
    while let Some(item) = cursor.pull()? {
        if predicate(&item) {
            last = Some(item);
        }
    }
    Ok(last)
}

// Stops at the second match.
fn single_matching<S, P>(source: &S, predicate: P, ambiguous: SeqError) -> Result<Option<S::Item>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let mut cursor = source.cursor();
    let mut found = None;
    while let Some(item) = cursor.pull()? {
        if predicate(&item) {
            if found.is_some() {
                return Err(ambiguous);
            }
            found = Some(item);
        }
    }
    Ok(found)
}

fn any_item<T>(_: &T) -> bool {
    true
}

// --- first ---

pub fn first_or_none<S: Sequence>(source: &S) -> Result<Option<S::Item>> {
    first_matching(source, any_item)
}

pub fn first_where_or_none<S, P>(source: &S, predicate: P) -> Result<Option<S::Item>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    first_matching(source, predicate)
}

pub fn first<S: Sequence>(source: &S) -> Result<S::Item> {
    first_or_none(source)?.ok_or(SeqError::Empty)
}

pub fn first_where<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    first_matching(source, predicate)?.ok_or(SeqError::NoMatch)
}

pub fn first_or_default<S>(source: &S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Default,
{
    Ok(first_or_none(source)?.unwrap_or_default())
}

// --- last ---

pub fn last_or_none<S: Sequence>(source: &S) -> Result<Option<S::Item>> {
    last_matching(source, any_item)
}

pub fn last_where_or_none<S, P>(source: &S, predicate: P) -> Result<Option<S::Item>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    last_matching(source, predicate)
}

pub fn last<S: Sequence>(source: &S) -> Result<S::Item> {
    last_or_none(source)?.ok_or(SeqError::Empty)
}

pub fn last_where<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    last_matching(source, predicate)?.ok_or(SeqError::NoMatch)
}

pub fn last_or_default<S>(source: &S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Default,
{
    Ok(last_or_none(source)?.unwrap_or_default())
}

// --- single ---

pub fn single_or_none<S: Sequence>(source: &S) -> Result<Option<S::Item>> {
    single_matching(source, any_item, SeqError::MoreThanOne)
}

pub fn single_where_or_none<S, P>(source: &S, predicate: P) -> Result<Option<S::Item>>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    single_matching(source, predicate, SeqError::MoreThanOneMatch)
}

pub fn single<S: Sequence>(source: &S) -> Result<S::Item> {
    single_or_none(source)?.ok_or(SeqError::Empty)
}

pub fn single_where<S, P>(source: &S, predicate: P) -> Result<S::Item>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    single_where_or_none(source, predicate)?.ok_or(SeqError::NoMatch)
}

pub fn single_or_default<S>(source: &S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Default,
{
    Ok(single_or_none(source)?.unwrap_or_default())
}

// --- element_at ---

pub fn element_at_or_none<S: Sequence>(source: &S, index: i64) -> Result<Option<S::Item>> {
    if index < 0 {
        return Ok(None);
    }
    let mut cursor = source.cursor();
    let mut remaining = index;
    while let Some(item) = cursor.pull()? {
        if remaining == 0 {
            return Ok(Some(item));
        }
        remaining -= 1;
    }
    Ok(None)
}

/// Fails with `OutOfRange` for a negative index or one past the end.
pub fn element_at<S: Sequence>(source: &S, index: i64) -> Result<S::Item> {
    element_at_or_none(source, index)?.ok_or(SeqError::OutOfRange {
        param: "index",
        value: index,
    })
}

pub fn element_at_or_default<S>(source: &S, index: i64) -> Result<S::Item>
where
    S: Sequence,
    S::Item: Default,
{
    Ok(element_at_or_none(source, index)?.unwrap_or_default())
}
