//! Bounded connection-attempt counter.

use std::sync::atomic::{AtomicU32, Ordering};

/// Guard limiting consecutive failed connection attempts.
///
/// Only the connector and observer mutate this. The counter never exceeds
/// `max`: `try_acquire` refuses (without incrementing) once the maximum is
/// reached, and stays refused until a qualifying reset.
#[derive(Debug)]
pub struct AttemptGuard {
    max: u32,
    count: AtomicU32,
}

impl AttemptGuard {
    /// Create a guard allowing `max` attempts between resets.
    pub fn new(max: u32) -> Self {
        Self {
            max,
            count: AtomicU32::new(0),
        }
    }

    /// Record one attempt. Returns false, leaving the counter unchanged, if
    /// the maximum has been reached.
    pub fn try_acquire(&self) -> bool {
        self.count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                (count < self.max).then_some(count + 1)
            })
            .is_ok()
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }

    /// Current number of recorded attempts.
    pub fn current(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    /// The configured maximum.
    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for AttemptGuard {
    fn default() -> Self {
        Self::new(3)
    }
}
