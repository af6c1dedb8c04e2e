//! Domain Errors for Peer Contacts

use thiserror::Error;

/// Errors raised while constructing a [`Contact`](crate::domain::Contact).
///
/// Every variant aborts construction; no partially built contact is ever
/// returned. Whether a constructed contact is *usable* is a separate,
/// non-failing question answered by `Contact::is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Address was missing, empty, or not a string.
    #[error("Invalid address was supplied")]
    InvalidAddress,

    /// Port was missing or not representable as an integer.
    #[error("Invalid port was supplied")]
    InvalidPort,

    /// An explicitly supplied node id was not exactly 160 bits of hex.
    #[error("Invalid nodeID was supplied: {reason}")]
    InvalidNodeId {
        /// What was wrong with the supplied value
        reason: String,
    },
}

impl ContactError {
    pub(crate) fn invalid_node_id(reason: impl Into<String>) -> Self {
        Self::InvalidNodeId {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        error: String,
    },

    /// TOML parsing error.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value parsed but is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_error_messages() {
        assert_eq!(
            ContactError::InvalidAddress.to_string(),
            "Invalid address was supplied"
        );
        assert_eq!(
            ContactError::InvalidPort.to_string(),
            "Invalid port was supplied"
        );
        assert!(ContactError::invalid_node_id("too short")
            .to_string()
            .starts_with("Invalid nodeID was supplied"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Io {
            path: "/etc/peers.toml".to_string(),
            error: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to read /etc/peers.toml: not found");
    }
}
