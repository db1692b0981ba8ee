//! Clock capability.
//!
//! Mining draws one timestamp per candidate; injecting the clock keeps the
//! search deterministic under test. Swap in a nullable implementation to
//! control time programmatically.

use crate::time::Timestamp;

/// A source of current time, shareable across solver threads.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
