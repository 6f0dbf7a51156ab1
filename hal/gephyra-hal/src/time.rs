//! Deadline-bounded waits over a monotonic clock
//!
//! Bus drivers busy-poll status flags; every poll loop is bounded by a
//! `Deadline`. Production code runs on `SystemClock`, tests drive the
//! same loops with a stepped clock.

use embassy_time::{Duration, Instant};

/// Monotonic time source.
pub trait Monotonic {
    /// Current instant. Never moves backwards.
    fn now(&self) -> Instant;
}

/// The embassy-time system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Monotonic for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Expiry point for one bounded wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline `budget` from now on `clock`.
    pub fn after<C: Monotonic>(clock: &C, budget: Duration) -> Self {
        Self {
            at: clock.now() + budget,
        }
    }

    /// True once `clock` has reached the deadline.
    pub fn expired<C: Monotonic>(&self, clock: &C) -> bool {
        clock.now() >= self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Manually stepped clock for driving deadline logic.
    struct StepClock {
        ticks: Cell<u64>,
    }

    impl StepClock {
        fn new() -> Self {
            Self {
                ticks: Cell::new(0),
            }
        }

        fn advance(&self, d: Duration) {
            self.ticks.set(self.ticks.get() + d.as_ticks());
        }
    }

    impl Monotonic for StepClock {
        fn now(&self) -> Instant {
            Instant::from_ticks(self.ticks.get())
        }
    }

    #[test]
    fn test_deadline_not_expired_before_budget() {
        let clock = StepClock::new();
        let deadline = Deadline::after(&clock, Duration::from_millis(35));

        clock.advance(Duration::from_millis(34));
        assert!(!deadline.expired(&clock));
    }

    #[test]
    fn test_deadline_expired_at_budget() {
        let clock = StepClock::new();
        let deadline = Deadline::after(&clock, Duration::from_millis(35));

        clock.advance(Duration::from_millis(35));
        assert!(deadline.expired(&clock));
    }

    #[test]
    fn test_zero_budget_expires_immediately() {
        let clock = StepClock::new();
        let deadline = Deadline::after(&clock, Duration::from_millis(0));

        assert!(deadline.expired(&clock));
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
