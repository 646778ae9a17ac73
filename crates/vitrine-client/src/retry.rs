//! Availability polling budget
//!
//! The automatic initialization task polls for the SDK factory at a fixed
//! interval until a bounded number of polls is spent. The interval is fixed
//! rather than exponential: the budget models waiting for the SDK to load,
//! not backing off a failing request.

use std::time::Duration;

/// Configuration for the automatic initialization poll loop.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Maximum number of availability polls before giving up.
    pub max_polls: u32,
    /// Spacing between polls.
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_polls: 50,
            interval: Duration::from_millis(100),
        }
    }
}

impl PollConfig {
    /// Create the default poll configuration (50 polls at 100 ms).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of polls.
    #[must_use]
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = max_polls;
        self
    }

    /// Set the spacing between polls.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Upper bound on how long the automatic task keeps polling.
    #[must_use]
    pub fn ceiling(&self) -> Duration {
        self.interval * self.max_polls
    }
}
