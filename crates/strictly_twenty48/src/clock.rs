//! Time source for elapsed-time tracking.

use std::fmt::Debug;
use std::time::Instant;

/// Source of "now" for the game timer.
///
/// Injected so tests can drive time by hand.
pub trait Clock: Debug + Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
