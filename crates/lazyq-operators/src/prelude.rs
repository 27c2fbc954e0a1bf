//! Everything needed to build and run queries.

pub use lazyq_core::prelude::*;

pub use crate::bind::{bind, Either};
pub use crate::ext::SequenceExt;
pub use crate::gen::{
    defer, empty, fail, from_fn, from_slice, from_vec, once, range, repeat, repeat_forever, unfold,
    Items,
};
pub use crate::group::{Dictionary, Grouping, Lookup};
pub use crate::order::{OrderBy, SortChain};
