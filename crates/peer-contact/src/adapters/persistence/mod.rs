//! # Persistence Adapters
//!
//! Serde shapes for storing contacts and for reading the loosely typed peer
//! announcements they are built from.
//!
//! - `ContactRecord` - the four persisted fields, restored through `Contact::create`
//! - `decode_announcement` - untyped JSON to `ContactParams`
//!
//! Requires feature: `persistence`

mod announcement;
mod record;


pub use announcement::{contact_from_announcement, decode_announcement, LAST_SEEN_KEY, NODE_ID_KEY};
pub use record::ContactRecord;

use crate::domain::{Contact, ContactError};
use thiserror::Error;

/// Errors from saving or restoring contacts.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Malformed JSON or wrong field types.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The record decoded but does not describe a constructible contact.
    #[error("Invalid stored contact: {0}")]
    Contact(#[from] ContactError),
}

/// Serialize one contact.
pub fn to_json(contact: &Contact) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&ContactRecord::from(contact))?)
}

/// Restore one contact, keeping its stored `lastSeen`.
pub fn from_json(json: &str) -> Result<Contact, PersistenceError> {
    let record: ContactRecord = serde_json::from_str(json)?;
    Ok(Contact::try_from(record)?)
}

/// Serialize a snapshot of many contacts (e.g. a routing table dump).
pub fn contacts_to_json(contacts: &[Contact]) -> Result<String, PersistenceError> {
    let records: Vec<ContactRecord> = contacts.iter().map(ContactRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Restore a snapshot. Fails on the first invalid record.
pub fn contacts_from_json(json: &str) -> Result<Vec<Contact>, PersistenceError> {
    let records: Vec<ContactRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|record| Contact::try_from(record).map_err(PersistenceError::from))
        .collect()
}
