//! Strictly increasing commit stamps.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use plaza_core::Stamp;

/// Issues [`Stamp`]s measured from the clock's creation.
///
/// Each stamp is `max(elapsed, previous + 1)`, so two commits never share
/// a stamp even when the OS clock is coarser than the commit rate.
pub struct StampClock {
    origin: Instant,
    last: AtomicU64,
}

impl Default for StampClock {
    fn default() -> Self {
        Self::new()
    }
}

// Compile-time assertion: StampClock must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<StampClock>();
};

impl StampClock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            last: AtomicU64::new(0),
        }
    }

    /// Issue the next stamp.
    pub fn next(&self) -> Stamp {
        let elapsed = self.origin.elapsed().as_nanos() as u64;
        let prev = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |prev| {
                Some(elapsed.max(prev + 1))
            })
            .unwrap_or_else(|prev| prev);
        Stamp(elapsed.max(prev + 1))
    }
}
