#![forbid(unsafe_code)]
//! lazyq-operators: the query-operator surface over the `lazyq-core` kernel.
//!
//! Three primitives carry the weight:
//! - `gen::unfold` (anamorphism) for every generator,
//! - `bind::bind` (monadic bind) for projection, filtering and concatenation,
//! - `fold::try_fold` (catamorphism) for every terminal operator.
//!
//! Operators that cannot be expressed as a single forward pull (ordering,
//! reversal, set algebra, grouping, joins) buffer through `lazyq-mem` and
//! charge what they hold against the configured buffer cap.
//!
//! Everything is also reachable as methods through [`SequenceExt`].

pub mod aggregate;
pub mod bind;
pub mod cast;
pub mod element;
pub mod ext;
pub mod fold;
pub mod gen;
pub mod group;
pub mod join;
pub mod order;
pub mod prelude;
pub mod set;
pub mod slice;

pub use ext::SequenceExt;
pub use gen::{
    defer, empty, fail, from_fn, from_slice, from_vec, once, range, repeat, repeat_forever, unfold,
    Items,
};
pub use group::{Dictionary, Grouping, Lookup};
pub use order::OrderBy;
