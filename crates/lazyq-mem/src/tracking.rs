//! Lightweight peak tracking for buffered elements.
//!
//! Keep this optional and cheap. Each budget reports its running total; the
//! tracker keeps the largest value any single operator instance reached.

use std::sync::atomic::{AtomicUsize, Ordering};

static BUFFERED_PEAK: PeakTracker = PeakTracker::new();

#[derive(Default)]
pub struct PeakTracker {
    peak_elements: AtomicUsize,
}

impl PeakTracker {
    pub const fn new() -> Self {
        Self {
            peak_elements: AtomicUsize::new(0),
        }
    }

    /// Record a new "held elements" value; updates peak if higher.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn record_held(&self, held: usize, op: &'static str) {
        let mut cur = self.peak_elements.load(Ordering::Relaxed);
        while held > cur {
            match self.peak_elements.compare_exchange(
                cur,
                held,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(held, op, "new buffered peak");
                    break;
                }
                Err(observed) => cur = observed,
            }
        }
    }

    pub fn peak(&self) -> usize {
        self.peak_elements.load(Ordering::Relaxed)
    }
}

pub(crate) fn record_held(held: usize, op: &'static str) {
    BUFFERED_PEAK.record_held(held, op);
}

/// Largest number of elements any single buffering operator has held in this process.
pub fn peak_buffered() -> usize {
    BUFFERED_PEAK.peak()
}
