#![forbid(unsafe_code)]
//! lazyq: lazy, restartable, pull-based sequences with a full query-operator
//! surface.
//!
//! ```
//! use lazyq::prelude::*;
//!
//! let evens = range(1, 10).filter(|n| n % 2 == 0).select(|n| n * 10);
//! assert_eq!(evens.to_vec().unwrap(), vec![20, 40, 60, 80, 100]);
//! // Sequences are factories: enumerating again starts over.
//! assert_eq!(evens.count().unwrap(), 5);
//! ```
//!
//! Layering:
//! - [`lazyq_core`]: kernel traits, errors, configuration, comparers, numeric folds;
//! - [`lazyq_mem`]: buffer budgets and the comparer-keyed index;
//! - [`lazyq_operators`]: generators and operators, with method syntax via `SequenceExt`.

pub use lazyq_core;
pub use lazyq_mem;
pub use lazyq_operators;

pub use lazyq_core::config::EngineConfig;
pub use lazyq_core::error::{Result, SeqError};
pub use lazyq_core::seq::{Cursor, Sequence};
pub use lazyq_operators::SequenceExt;

pub mod prelude {
    pub use lazyq_operators::prelude::*;
}
