use crate::domain::types::Timestamp;

/// Input to [`Contact::create`](super::Contact::create).
///
/// Every field is optional so that incomplete peer announcements can be
/// expressed and rejected with the matching error kind. `address` and
/// `port` are required by construction; `node_id` and `last_seen` are not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactParams {
    /// Network address of the peer. Must be non-empty.
    pub address: Option<String>,
    /// Port as announced. Range is checked by `Contact::is_valid`, not here.
    pub port: Option<i64>,
    /// Advertised 160-bit node id as hex; derived when absent.
    pub node_id: Option<String>,
    /// Previously persisted liveness time; "now" when absent.
    pub last_seen: Option<Timestamp>,
}

impl ContactParams {
    /// Params for a fresh contact at `address:port`.
    pub fn new(address: impl Into<String>, port: i64) -> Self {
        Self {
            address: Some(address.into()),
            port: Some(port),
            ..Self::default()
        }
    }

    /// Use an explicit node id instead of deriving one.
    #[must_use]
    pub fn with_node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    /// Restore a known liveness time instead of stamping "now".
    #[must_use]
    pub fn with_last_seen(mut self, last_seen: Timestamp) -> Self {
        self.last_seen = Some(last_seen);
        self
    }
}
