//! Element budget for buffering operators.
//!
//! Every operator that holds elements beyond the current pull (sort and reverse
//! buffers, seen-sets, group and join tables) charges a `BufferBudget` before
//! growing. The cap is snapshotted from the engine configuration when the
//! budget is created, i.e. when the cursor first buffers.

use lazyq_core::config;
use lazyq_core::error::{Result, SeqError};

use crate::tracking;

#[derive(Debug, Clone)]
pub struct BufferBudget {
    op: &'static str,
    cap: Option<usize>,
    held: usize,
}

impl BufferBudget {
    /// Budget for operator `op` using the active configuration's cap.
    pub fn for_op(op: &'static str) -> Self {
        Self::with_cap(op, config::current().buffer_cap)
    }

    pub fn with_cap(op: &'static str, cap: Option<usize>) -> Self {
        Self { op, cap, held: 0 }
    }

    pub fn unbounded(op: &'static str) -> Self {
        Self::with_cap(op, None)
    }

    /// Account for `n` more held elements.
    pub fn charge(&mut self, n: usize) -> Result<()> {
        let next = self.held.saturating_add(n);
        if let Some(cap) = self.cap {
            if next > cap {
                #[cfg(feature = "tracing")]
                tracing::debug!(op = self.op, cap, requested = next, "buffer cap exceeded");
                return Err(SeqError::BufferCapExceeded { op: self.op, cap });
            }
        }
        self.held = next;
        tracking::record_held(next, self.op);
        Ok(())
    }

    pub fn held(&self) -> usize {
        self.held
    }

    pub fn op(&self) -> &'static str {
        self.op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_fails_past_the_cap() {
        let mut b = BufferBudget::with_cap("test", Some(2));
        b.charge(1).unwrap();
        b.charge(1).unwrap();
        let err = b.charge(1).unwrap_err();
        assert_eq!(err, SeqError::BufferCapExceeded { op: "test", cap: 2 });
        assert_eq!(b.held(), 2);
    }

    #[test]
    fn unbounded_never_fails() {
        let mut b = BufferBudget::unbounded("test");
        b.charge(usize::MAX).unwrap();
        b.charge(1).unwrap();
        assert_eq!(b.held(), usize::MAX);
    }
}
