//! Decoding of untyped peer announcements.
//!
//! Announcements arrive as loosely typed JSON objects. Missing or
//! wrong-typed fields map onto the construction error kinds, checked in
//! the order address, port, node id.

use crate::domain::{Contact, ContactError, ContactParams, Timestamp};
use crate::ports::TimeSource;
use serde_json::{Map, Value};
use tracing::debug;

/// Key carrying the advertised node id.
pub const NODE_ID_KEY: &str = "nodeID";

/// Key carrying a previously observed liveness time.
pub const LAST_SEEN_KEY: &str = "lastSeen";

/// Decode announcement fields into construction params.
///
/// # Errors
///
/// - `InvalidAddress` if `value` is not an object, or `address` is absent, empty or not a string
/// - `InvalidPort` if `port` is absent or not an integer (JSON number or decimal string)
/// - `InvalidNodeId` if `nodeID` is present but not a string
pub fn decode_announcement(value: &Value) -> Result<ContactParams, ContactError> {
    let Some(fields) = value.as_object() else {
        debug!("Announcement is not an object");
        return Err(ContactError::InvalidAddress);
    };

    let address = match present(fields, "address") {
        Some(Value::String(address)) if !address.is_empty() => address.clone(),
        _ => {
            debug!("Rejecting announcement: missing or empty address");
            return Err(ContactError::InvalidAddress);
        }
    };

    let port = present(fields, "port")
        .and_then(port_from_value)
        .ok_or(ContactError::InvalidPort)?;

    let node_id = match present(fields, NODE_ID_KEY) {
        None => None,
        Some(Value::String(node_id)) => Some(node_id.clone()),
        Some(_) => return Err(ContactError::invalid_node_id("expected a hex string")),
    };

    let last_seen = present(fields, LAST_SEEN_KEY).and_then(|v| {
        let millis = millis_from_value(v);
        if millis.is_none() {
            debug!(%address, value = %v, "Ignoring unreadable lastSeen");
        }
        millis.map(Timestamp::from_millis)
    });

    Ok(ContactParams {
        address: Some(address),
        port: Some(port),
        node_id,
        last_seen,
    })
}

/// Decode an announcement and build the contact, stamping `clock.now()`
/// when no `lastSeen` was carried.
pub fn contact_from_announcement<T: TimeSource + ?Sized>(
    value: &Value,
    clock: &T,
) -> Result<Contact, ContactError> {
    Contact::create_with_clock(decode_announcement(value)?, clock)
}

/// A field that is present and not `null`.
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

fn port_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn millis_from_value(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })
}
