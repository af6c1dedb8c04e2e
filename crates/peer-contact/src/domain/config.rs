//! Liveness configuration
//!
//! Eviction itself belongs to the routing table; this only carries the
//! threshold a holder uses to ask a contact whether it has gone quiet.

use super::types::ConfigError;
use std::time::Duration;

/// Default staleness threshold: the Kademlia bucket refresh interval (1 hour).
pub const DEFAULT_STALE_AFTER_MS: u64 = 3_600_000;

/// Configuration for contact liveness checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    /// A contact not seen for longer than this is considered stale.
    pub stale_after_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            stale_after_ms: DEFAULT_STALE_AFTER_MS,
        }
    }
}

impl ContactConfig {
    /// Create a validated configuration.
    pub fn new(stale_after_ms: u64) -> Result<Self, ConfigError> {
        let config = Self { stale_after_ms };
        config.validate()?;
        Ok(config)
    }

    /// Create a config suitable for testing (one second threshold)
    pub fn for_testing() -> Self {
        Self {
            stale_after_ms: 1_000,
        }
    }

    /// The staleness threshold as a `Duration`.
    pub fn stale_after(&self) -> Duration {
        Duration::from_millis(self.stale_after_ms)
    }

    /// Reject thresholds that would mark every contact stale immediately.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stale_after_ms == 0 {
            return Err(ConfigError::Invalid(
                "stale_after_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
