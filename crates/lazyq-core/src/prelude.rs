//! Convenient re-exports for downstream crates.

pub use crate::comparer::{by_key, ByKey, Comparer, EqualityComparer, NaturalEq, NaturalOrder};
pub use crate::config::EngineConfig;
pub use crate::error::{Result, SeqError};
pub use crate::numeric::Numeric;
pub use crate::seq::{Cursor, Emit, Fused, IntoCursor, Iter, Sequence};
