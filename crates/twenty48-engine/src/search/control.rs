//! Search control: the per-decision wall-clock deadline.

use std::time::{Duration, Instant};

/// When a decision's search must stop.
///
/// Computed once per decision and shared read-only by every node of the
/// search tree. Every node checks [`expired()`](Deadline::expired) before
/// doing any work, so an over-running iteration unwinds promptly.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline `budget` from now.
    ///
    /// A budget too large to represent as an [`Instant`] never expires.
    pub fn after(budget: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            at: start.checked_add(budget),
        }
    }

    /// A deadline that never expires, for fixed-depth searches.
    pub fn none() -> Self {
        Self {
            start: Instant::now(),
            at: None,
        }
    }

    /// Return `true` once the wall clock has reached the deadline.
    #[inline]
    pub fn expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }

    /// Time since the deadline was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
