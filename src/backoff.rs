use std::time::Duration;

/// Doubling delay between retry attempts: `unit * 2^attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    unit: Duration,
}

impl Backoff {
    pub fn new(unit: Duration) -> Self {
        Self { unit }
    }

    /// No waiting at all. Handy in tests.
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn unit(&self) -> Duration {
        self.unit
    }

    /// Delay to sleep after `failed_attempt` (0-indexed) fails and before the
    /// next attempt starts.
    pub fn delay_for(&self, failed_attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(failed_attempt).unwrap_or(u32::MAX);
        self.unit.saturating_mul(factor)
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
