//! # Peer Contacts
//!
//! Identity records for remote peers in a Kademlia-style overlay: network
//! address, port, 160-bit node identifier and a liveness timestamp.
//!
//! Routing tables and transports consume these records. This crate performs
//! no network I/O, resolves no hostnames and computes no XOR distances; it
//! only produces, validates and ages the records.
//!
//! ## Architecture
//!
//! - **Domain Layer:** `Contact`, `NodeId`, `Timestamp`, `ContactConfig`
//! - **Ports Layer:** `TimeSource`, `ConfigProvider`
//! - **Adapters Layer:** system clock, config providers, persistence (feature-gated)
//!
//! ## Features
//!
//! - `persistence` - `ContactRecord` and announcement decoding (serde, serde_json)
//! - `config` - `TomlConfigProvider` (serde, toml)
//! - `telemetry` - subscriber installation (tracing-subscriber)
//! - `test-utils` - `FixedTimeSource`, `ManualTimeSource`
//!
//! ## Example
//!
//! ```rust
//! use peer_contact::{Contact, ContactError, ContactParams, Timestamp};
//!
//! // Node id derived from "0.0.0.0:1337"
//! let contact = Contact::create(ContactParams::new("0.0.0.0", 1337)).unwrap();
//! assert_eq!(
//!     contact.node_id().as_str(),
//!     "cbffb2e4ac71a5511dd7185c34552973098ed6af"
//! );
//! assert!(contact.is_valid());
//!
//! // Restored contacts keep their liveness time until seen again
//! let restored = Contact::create(
//!     ContactParams::new("127.0.0.1", 1337).with_last_seen(Timestamp::from_millis(50_000)),
//! )
//! .unwrap();
//! assert_eq!(restored.last_seen().as_millis(), 50_000);
//! restored.seen();
//! assert!(restored.last_seen().as_millis() > 50_000);
//!
//! // Port range is checked by is_valid, not by construction
//! let unroutable = Contact::create(ContactParams::new("0.0.0.0", 0)).unwrap();
//! assert!(!unroutable.is_valid());
//!
//! let err = Contact::create(ContactParams::new("0.0.0.0", 1337).with_node_id("a1b2c3"));
//! assert!(matches!(err, Err(ContactError::InvalidNodeId { .. })));
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;

// =============================================================================
// FEATURE-GATED MODULES
// =============================================================================

/// Subscriber installation.
/// Requires feature: `telemetry`
#[cfg(feature = "telemetry")]
pub mod telemetry;

/// Test utilities (FixedTimeSource, ManualTimeSource)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// CORE RE-EXPORTS
// =============================================================================

pub use domain::{
    derive_node_id, ConfigError, Contact, ContactConfig, ContactError, ContactParams, LastSeen,
    NodeId, Timestamp, DEFAULT_STALE_AFTER_MS, MAX_PORT, MIN_PORT, NODE_ID_BITS, NODE_ID_BYTES,
    NODE_ID_HEX_LEN,
};

pub use ports::{ConfigProvider, TimeSource};

pub use adapters::{StaticConfigProvider, SystemTimeSource};

#[cfg(feature = "config")]
pub use adapters::TomlConfigProvider;

#[cfg(feature = "persistence")]
pub use adapters::persistence::{
    contact_from_announcement, decode_announcement, ContactRecord, PersistenceError,
};

#[cfg(feature = "telemetry")]
pub use telemetry::{init_logging, TelemetryConfig, TelemetryError};

#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::{FixedTimeSource, ManualTimeSource};
