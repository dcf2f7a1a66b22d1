//! Request bookkeeping for one synchronized resource
//!
//! Every request takes a ticket. Only the holder of the newest ticket may write
//! its response into the dashboard state, and the resource counts as loading
//! while any request is still in flight.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Ticket identifying one issued request.
pub type Ticket = u64;

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
    in_flight: AtomicUsize,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new in-flight request and returns its ticket.
    pub fn begin(&self) -> Ticket {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a response for `ticket` is still the newest one.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Makes every outstanding ticket stale without starting a request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    /// Marks one request settled. Returns true while others remain in flight.
    pub fn finish(&self) -> bool {
        let previous = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_sub(1)))
            .unwrap_or(0);
        previous > 1
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}
