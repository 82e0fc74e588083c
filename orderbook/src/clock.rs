//! Strictly monotonic nanosecond timestamp source (C1).
//!
//! `Instant`-based clocks are monotonic but not injective: two calls from
//! different threads can observe the same nanosecond. The engine's
//! correctness properties require a total order over *all* emitted events,
//! so ties have to be broken by the source itself rather than left to the
//! OS clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Produces strictly increasing nanosecond ticks, free-threaded.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Default clock: a CAS loop over a shared counter seeded from a real
/// monotonic clock, forcing every call to return a value strictly greater
/// than every prior call across the whole process.
pub struct MonotonicClock {
    epoch: Instant,
    last: AtomicU64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            last: AtomicU64::new(0),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        let observed = self.epoch.elapsed().as_nanos() as u64;
        loop {
            let last = self.last.load(Ordering::Acquire);
            let candidate = observed.max(last + 1);
            if self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                return candidate;
            }
        }
    }
}
