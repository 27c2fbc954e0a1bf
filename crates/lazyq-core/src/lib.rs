#![forbid(unsafe_code)]
//! lazyq-core: the sequence kernel and the vocabulary shared by every layer.
//!
//! Contents:
//! - `seq`: the `Sequence` factory / `Cursor` contract, `IntoCursor`, `Emit`.
//! - `comparer`: equality and ordering strategies with natural defaults.
//! - `numeric`: checked accumulation policy per scalar type.
//! - `error`: the single error taxonomy surfaced by pulls and terminal operators.
//! - `config`: process-wide engine configuration.
//!
//! No buffering, hashing tables, or operators live here.

pub mod comparer;
pub mod config;
pub mod error;
pub mod numeric;
pub mod prelude;
pub mod seq;
