//! Single-flight guard for workflow invocations
//!
//! Each AI workflow allows one request in flight at a time; a second
//! invocation is rejected at the call site rather than queued. The guard
//! is the explicit replacement for the loading flags the original UI
//! relied on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct FlightGuard {
    in_flight: Arc<AtomicBool>,
}

/// Permit held for the duration of one invocation; releases on drop
pub struct FlightPermit {
    flag: Arc<AtomicBool>,
}

impl FlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard, or `None` while a permit is outstanding
    pub fn try_acquire(&self) -> Option<FlightPermit> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| FlightPermit {
                flag: self.in_flight.clone(),
            })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl Drop for FlightPermit {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
