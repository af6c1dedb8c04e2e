use crate::domain::{Contact, ContactError, ContactParams, Timestamp};
use serde::{Deserialize, Serialize};

/// Persisted shape of a contact.
///
/// Field names match the JSON peers already exchange (`nodeID`,
/// `lastSeen`). `last_seen` is stored as its literal millisecond value so a
/// restore never fabricates a "just seen" signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Network address.
    pub address: String,
    /// Port as announced, possibly out of range.
    pub port: i64,
    /// Node id hex literal.
    #[serde(rename = "nodeID")]
    pub node_id: String,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "lastSeen")]
    pub last_seen: u64,
}

impl From<&Contact> for ContactRecord {
    fn from(contact: &Contact) -> Self {
        Self {
            address: contact.address().to_owned(),
            port: contact.port(),
            node_id: contact.node_id().as_str().to_owned(),
            last_seen: contact.last_seen().as_millis(),
        }
    }
}

impl From<ContactRecord> for ContactParams {
    fn from(record: ContactRecord) -> Self {
        Self {
            address: Some(record.address),
            port: Some(record.port),
            node_id: Some(record.node_id),
            last_seen: Some(Timestamp::from_millis(record.last_seen)),
        }
    }
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ContactError;

    /// Restores through the regular factory, so corrupted records fail with
    /// the same errors as bad announcements.
    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Contact::create(record.into())
    }
}
