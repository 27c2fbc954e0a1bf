//! Element conversion through `TryInto`.
//!
//! Both are binds to a zero-or-one child. `cast` emits an `InvalidCast` error
//! child for the first element that does not convert, which ends the
//! enumeration; `of_type` emits nothing for such elements instead.

use std::any::type_name;

use lazyq_core::error::SeqError;
use lazyq_core::seq::{Emit, Sequence};

use crate::bind::bind;

pub fn cast<S, U>(source: S) -> impl Sequence<Item = U>
where
    S: Sequence,
    S::Item: TryInto<U>,
{
    bind(source, |item: S::Item| match TryInto::<U>::try_into(item) {
        Ok(converted) => Emit::one(converted),
        Err(_) => Emit::error(SeqError::InvalidCast(type_name::<U>())),
    })
}

pub fn of_type<S, U>(source: S) -> impl Sequence<Item = U>
where
    S: Sequence,
    S::Item: TryInto<U>,
{
    bind(source, |item: S::Item| Emit::from_option(TryInto::<U>::try_into(item).ok()))
}
