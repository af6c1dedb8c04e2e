//! Peer Contact
//!
//! A `Contact` is the identity record of one remote peer: where to reach it
//! (`address`, `port`), who it is (`node_id`), and when we last heard from
//! it (`last_seen`).
//!
//! ## Invariants
//!
//! - `address`, `port` and `node_id` are write-once; there are no setters.
//! - `node_id` is either the caller-supplied literal or the derivation from
//!   `address:port`, fixed at construction.
//! - `last_seen` changes only through `seen`/`seen_with` and never moves
//!   backward.
//!
//! Contacts are `Send + Sync`; share one with `Arc<Contact>` and call
//! `seen` through a shared reference.

mod last_seen;
mod params;


pub use last_seen::LastSeen;
pub use params::ContactParams;

use super::config::ContactConfig;
use super::types::{ContactError, NodeId, Timestamp};
use crate::ports::TimeSource;
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace};

/// Lowest port a usable contact may advertise.
pub const MIN_PORT: i64 = 1;

/// Highest port a usable contact may advertise.
pub const MAX_PORT: i64 = u16::MAX as i64;

/// Identity record for a remote peer.
#[derive(Debug)]
pub struct Contact {
    address: String,
    port: i64,
    node_id: NodeId,
    last_seen: LastSeen,
}

impl Contact {
    /// Build a contact, stamping `last_seen` from the system clock when omitted.
    ///
    /// # Errors
    ///
    /// - `InvalidAddress` if the address is missing or empty
    /// - `InvalidPort` if the port is missing
    /// - `InvalidNodeId` if a supplied node id is not exactly 160 bits of hex
    pub fn create(params: ContactParams) -> Result<Self, ContactError> {
        Self::build(params, Timestamp::now)
    }

    /// Build a contact, reading "now" from `clock` when `last_seen` is omitted.
    pub fn create_with_clock<T: TimeSource + ?Sized>(
        params: ContactParams,
        clock: &T,
    ) -> Result<Self, ContactError> {
        Self::build(params, || clock.now())
    }

    fn build(
        params: ContactParams,
        now: impl FnOnce() -> Timestamp,
    ) -> Result<Self, ContactError> {
        let ContactParams {
            address,
            port,
            node_id,
            last_seen,
        } = params;

        let address = match address {
            Some(address) if !address.is_empty() => address,
            _ => {
                debug!("Rejecting contact: missing or empty address");
                return Err(ContactError::InvalidAddress);
            }
        };

        let Some(port) = port else {
            debug!(%address, "Rejecting contact: missing port");
            return Err(ContactError::InvalidPort);
        };

        let node_id = match node_id {
            Some(literal) => NodeId::from_hex(&literal).inspect_err(|e| {
                debug!(%address, port, error = %e, "Rejecting contact: bad node id");
            })?,
            None => NodeId::derive(&address, port),
        };

        let last_seen = last_seen.unwrap_or_else(now);

        trace!(%address, port, node_id = %node_id, %last_seen, "Contact created");

        Ok(Self {
            address,
            port,
            node_id,
            last_seen: LastSeen::new(last_seen),
        })
    }

    /// Network address, exactly as supplied.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Port, exactly as supplied (possibly out of range).
    pub fn port(&self) -> i64 {
        self.port
    }

    /// The 160-bit node identifier.
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    /// When this peer was last heard from.
    pub fn last_seen(&self) -> Timestamp {
        self.last_seen.get()
    }

    /// Whether the contact is usable for routing/transport.
    ///
    /// True iff the port lies in `1..=65535`. Never fails; collaborators gate
    /// admission on this rather than on construction.
    pub fn is_valid(&self) -> bool {
        (MIN_PORT..=MAX_PORT).contains(&self.port)
    }

    /// The port narrowed to a socket port, if valid.
    pub fn socket_port(&self) -> Option<u16> {
        u16::try_from(self.port).ok().filter(|port| *port != 0)
    }

    /// `"address:port"`, the string node ids are derived from.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// Record a successful exchange with the peer at the current system time.
    pub fn seen(&self) {
        self.seen_at(Timestamp::now());
    }

    /// Record a successful exchange at `clock.now()`.
    ///
    /// A clock that reads earlier than the stored value leaves it unchanged.
    pub fn seen_with<T: TimeSource + ?Sized>(&self, clock: &T) {
        self.seen_at(clock.now());
    }

    fn seen_at(&self, now: Timestamp) {
        let current = self.last_seen.advance_to(now);
        trace!(node_id = %self.node_id, %now, %current, "Contact seen");
    }

    /// Time since the peer was last seen, zero if `now` is earlier.
    pub fn age(&self, now: Timestamp) -> Duration {
        now.saturating_duration_since(self.last_seen())
    }

    /// Whether the peer has been silent longer than the configured threshold.
    pub fn is_stale(&self, now: Timestamp, config: &ContactConfig) -> bool {
        self.age(now) > config.stale_after()
    }
}

impl Clone for Contact {
    /// Snapshots `last_seen`; the clone's liveness is tracked independently.
    fn clone(&self) -> Self {
        Self {
            address: self.address.clone(),
            port: self.port,
            node_id: self.node_id.clone(),
            last_seen: self.last_seen.clone(),
        }
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
            && self.port == other.port
            && self.node_id == other.node_id
            && self.last_seen() == other.last_seen()
    }
}

impl Eq for Contact {}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}
