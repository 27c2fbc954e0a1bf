#![forbid(unsafe_code)]
//! lazyq-mem: element budgets, budgeted buffers, and comparer-keyed indexes.
//!
//! Buffering operators (sort, reverse, distinct, set algebra, grouping, joins)
//! hold state beyond the current pull. Everything they hold is charged
//! against a `BufferBudget` so the configured element cap is enforced here and
//! nowhere else.

pub mod budget;
pub mod buffer;
pub mod index;
pub mod tracking;

pub use budget::BufferBudget;
pub use buffer::Buffer;
pub use index::{KeyedIndex, KeyedSet};
pub use tracking::peak_buffered;
