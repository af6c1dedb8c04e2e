//! # Driven Ports (Outbound SPI)
//!
//! Interfaces this crate **requires** from the host application: a clock for
//! liveness timestamps and a source of configuration.

use crate::domain::{ContactConfig, ContactParams, Timestamp};

/// Abstract interface for time-related operations.
///
/// Enables deterministic testing by injecting controllable time sources.
/// Production code uses `SystemTimeSource`; tests use fixed or manually
/// advanced clocks.
///
/// # Example Implementation
///
/// ```rust
/// use peer_contact::{TimeSource, Timestamp};
///
/// struct FrozenClock;
///
/// impl TimeSource for FrozenClock {
///     fn now(&self) -> Timestamp {
///         Timestamp::from_millis(50_000)
///     }
/// }
///
/// assert_eq!(FrozenClock.now().as_millis(), 50_000);
/// ```
pub trait TimeSource: Send + Sync {
    /// Get the current timestamp.
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Abstract interface for configuration loading.
///
/// Allows different configuration sources (file, environment, etc.)
pub trait ConfigProvider: Send + Sync {
    /// Seed peers to construct contacts from at startup.
    ///
    /// Entries are unvalidated; construction errors surface when the caller
    /// turns them into contacts.
    fn get_bootstrap_contacts(&self) -> Vec<ContactParams>;

    /// Liveness tunables consumed by freshness checks.
    fn get_contact_config(&self) -> ContactConfig;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test-only TimeSource returning a fixed timestamp for deterministic assertions.
    struct FixedTimeSource(u64);

    impl TimeSource for FixedTimeSource {
        fn now(&self) -> Timestamp {
            Timestamp::from_millis(self.0)
        }
    }

    #[test]
    fn test_fixed_time_source_returns_configured_value() {
        let source = FixedTimeSource(1000);
        assert_eq!(source.now().as_millis(), 1000);
    }

    #[test]
    fn test_time_source_through_reference() {
        fn read<T: TimeSource>(clock: T) -> u64 {
            clock.now().as_millis()
        }
        let source = FixedTimeSource(42);
        assert_eq!(read(&source), 42);
    }
}
