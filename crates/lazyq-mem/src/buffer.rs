//! Budgeted element buffer.
//!
//! All full-materialization passes inside operators go through here so that
//! the configured cap is enforced in one place.

use lazyq_core::config;
use lazyq_core::error::Result;
use lazyq_core::seq::Cursor;

use crate::budget::BufferBudget;

pub struct Buffer<T> {
    budget: BufferBudget,
    items: Vec<T>,
}

impl<T> Buffer<T> {
    pub fn new(budget: BufferBudget) -> Self {
        let hint = config::current().buffer_capacity_hint;
        Self {
            budget,
            items: Vec::with_capacity(hint),
        }
    }

    /// Buffer for operator `op` under the active configuration.
    pub fn for_op(op: &'static str) -> Self {
        Self::new(BufferBudget::for_op(op))
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        self.budget.charge(1)?;
        self.items.push(item);
        Ok(())
    }

    /// Pull `cursor` to exhaustion into a fresh buffer.
    pub fn drain<C: Cursor<Item = T>>(op: &'static str, cursor: &mut C) -> Result<Self> {
        let mut buf = Self::for_op(op);
        while let Some(item) = cursor.pull()? {
            buf.push(item)?;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(op, len = buf.len(), "materialized buffer");
        Ok(buf)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
