//! Test utilities for peer contacts.
//!
//! Deterministic `TimeSource` implementations. Enable with the `test-utils`
//! feature flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use peer_contact::test_utils::FixedTimeSource;
//! use peer_contact::TimeSource;
//!
//! let time_source = FixedTimeSource::new(1000);
//! assert_eq!(time_source.now().as_millis(), 1000);
//! ```

use crate::domain::Timestamp;
use crate::ports::outbound::TimeSource;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// A time source that returns a fixed timestamp.
#[derive(Debug, Clone)]
pub struct FixedTimeSource {
    timestamp: u64,
}

impl FixedTimeSource {
    /// Create a new fixed time source with the given timestamp (in milliseconds).
    pub fn new(timestamp: u64) -> Self {
        Self { timestamp }
    }

    /// Get the configured timestamp value.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.timestamp)
    }
}

/// A time source moved by hand, including backward.
///
/// Shared by reference between the code under test and the test body.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    millis: AtomicU64,
}

impl ManualTimeSource {
    /// Start the clock at `millis`.
    pub fn new(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.millis.fetch_add(by, Ordering::SeqCst);
    }

    /// Jump to an arbitrary time.
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_time_source_returns_configured_value() {
        let source = FixedTimeSource::new(1000);
        assert_eq!(source.now().as_millis(), 1000);
        assert_eq!(source.timestamp(), 1000);
    }

    #[test]
    fn test_manual_time_source_advances_and_rewinds() {
        let clock = ManualTimeSource::new(100);
        clock.advance(Duration::from_millis(50));
        assert_eq!(clock.now().as_millis(), 150);
        clock.set(10);
        assert_eq!(clock.now().as_millis(), 10);
    }
}
