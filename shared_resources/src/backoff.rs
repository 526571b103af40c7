//! # Bounded retry policy for door interlocks.
//!
//! A door that cannot close because the car is overloaded or something blocks
//! the doorway is polled again after a growing delay. The delay for attempt `n`
//! (0-indexed) is `first × factor^n`, clamped to `max`. After `max_attempts`
//! failed polls the caller gives up and reports the door as blocked.
//!
//! ```rust
//! use std::time::Duration;
//! use shared_resources::backoff::RetryPolicy;
//!
//! let policy = RetryPolicy { max_attempts: 5, first_ms: 100, max_ms: 1_000, factor: 2.0 };
//! assert_eq!(policy.delay(0), Duration::from_millis(100));
//! assert_eq!(policy.delay(2), Duration::from_millis(400));
//! assert_eq!(policy.delay(9), Duration::from_millis(1_000));
//! ```

use std::time::Duration;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Number of sensor polls before the door is declared blocked (at least 1).
    pub max_attempts: u32,
    /// Delay after the first failed poll.
    pub first_ms: u64,
    /// Upper bound on any single delay.
    pub max_ms: u64,
    /// Growth factor between consecutive delays.
    pub factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 10,
            first_ms: 100,
            max_ms: 2_000,
            factor: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Retries immediately, for tests and simulations that should not sleep.
    pub fn immediate(max_attempts: u32) -> Self {
        RetryPolicy {
            max_attempts,
            first_ms: 0,
            max_ms: 0,
            factor: 1.0,
        }
    }

    pub fn delay(&self, attempt: u32) -> Duration {
        let first = self.first_ms as f64;
        let cap = self.max_ms as f64;
        let exponent = attempt.min(i32::MAX as u32) as i32;
        let base = first * self.factor.max(1.0).powi(exponent);
        let millis = if base.is_finite() { base.min(cap) } else { cap };
        Duration::from_millis(millis.max(0.0) as u64)
    }

    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}
