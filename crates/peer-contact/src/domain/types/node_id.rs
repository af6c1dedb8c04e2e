//! 160-bit Kademlia node identifiers

use super::errors::ContactError;
use sha1::{Digest, Sha1};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Number of bits in a node identifier.
pub const NODE_ID_BITS: usize = 160;

/// Number of bytes in a node identifier.
pub const NODE_ID_BYTES: usize = NODE_ID_BITS / 8;

/// Number of hex characters in an encoded node identifier.
pub const NODE_ID_HEX_LEN: usize = NODE_ID_BYTES * 2;

/// 160-bit node identifier, kept both as its hex literal and decoded bytes.
///
/// A supplied identifier keeps the exact literal it was given (including
/// letter case) so that it round-trips unmodified; equality and hashing use
/// the decoded bytes, so `"ABCD…"` and `"abcd…"` name the same node.
///
/// XOR distance and bucket placement belong to the routing table; this type
/// only guarantees a stable, fixed-length value to compare on.
#[derive(Clone)]
pub struct NodeId {
    literal: String,
    bytes: [u8; NODE_ID_BYTES],
}

impl NodeId {
    /// Parse a supplied identifier.
    ///
    /// # Errors
    ///
    /// `ContactError::InvalidNodeId` unless `literal` is exactly
    /// [`NODE_ID_HEX_LEN`] hex digits.
    pub fn from_hex(literal: &str) -> Result<Self, ContactError> {
        if literal.len() != NODE_ID_HEX_LEN {
            return Err(ContactError::invalid_node_id(format!(
                "expected {NODE_ID_HEX_LEN} hex characters, got {}",
                literal.len()
            )));
        }

        let mut bytes = [0u8; NODE_ID_BYTES];
        hex::decode_to_slice(literal, &mut bytes)
            .map_err(|e| ContactError::invalid_node_id(e.to_string()))?;

        Ok(Self {
            literal: literal.to_owned(),
            bytes,
        })
    }

    /// Derive the identifier for an endpoint: SHA-1 over `"{address}:{port}"`.
    ///
    /// Pure and deterministic, so every node agrees on a peer's identity
    /// from nothing but its reachability endpoint.
    pub fn derive(address: &str, port: i64) -> Self {
        let digest = Sha1::digest(format!("{address}:{port}").as_bytes());
        let mut bytes = [0u8; NODE_ID_BYTES];
        bytes.copy_from_slice(&digest);
        Self::from_bytes(bytes)
    }

    /// Create a `NodeId` from raw bytes, encoded as lowercase hex.
    pub fn from_bytes(bytes: [u8; NODE_ID_BYTES]) -> Self {
        Self {
            literal: hex::encode(bytes),
            bytes,
        }
    }

    /// The hex literal, exactly as supplied or derived.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// The decoded 20 bytes.
    pub fn as_bytes(&self) -> &[u8; NODE_ID_BYTES] {
        &self.bytes
    }
}

/// Derive a node identifier from an address and port.
///
/// Free-function form of [`NodeId::derive`].
pub fn derive_node_id(address: &str, port: i64) -> NodeId {
    NodeId::derive(address, port)
}

impl PartialEq for NodeId {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for NodeId {}

impl Hash for NodeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.literal)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl FromStr for NodeId {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-1("0.0.0.0:1337")
    const ENDPOINT_DIGEST: &str = "cbffb2e4ac71a5511dd7185c34552973098ed6af";

    #[test]
    fn test_derive_is_deterministic() {
        let a = NodeId::derive("0.0.0.0", 1337);
        let b = NodeId::derive("0.0.0.0", 1337);
        assert_eq!(a, b);
        assert_eq!(a.as_str(), b.as_str());
        assert_eq!(a.as_str().len(), NODE_ID_HEX_LEN);
    }

    #[test]
    fn test_derive_hashes_address_colon_port() {
        let expected = hex::encode(Sha1::digest(b"0.0.0.0:1337"));
        assert_eq!(NodeId::derive("0.0.0.0", 1337).as_str(), expected);
        assert_eq!(expected, ENDPOINT_DIGEST);
    }

    #[test]
    fn test_derive_distinguishes_ports() {
        assert_ne!(
            NodeId::derive("127.0.0.1", 1337),
            NodeId::derive("127.0.0.1", 1338)
        );
    }

    #[test]
    fn test_from_hex_rejects_short_value() {
        let err = NodeId::from_hex("abcdef").unwrap_err();
        assert!(matches!(err, ContactError::InvalidNodeId { .. }));
    }

    #[test]
    fn test_from_hex_reports_character_count() {
        let err = NodeId::from_hex("a1b2c3").unwrap_err();
        assert_eq!(
            err,
            ContactError::InvalidNodeId {
                reason: "expected 40 hex characters, got 6".to_owned()
            }
        );
    }

    #[test]
    fn test_from_hex_rejects_non_hex_characters() {
        let bad = "z".repeat(NODE_ID_HEX_LEN);
        assert!(matches!(
            NodeId::from_hex(&bad),
            Err(ContactError::InvalidNodeId { .. })
        ));
    }

    #[test]
    fn test_from_hex_keeps_literal_and_compares_bytes() {
        let lower = "ab".repeat(NODE_ID_BYTES);
        let upper = lower.to_uppercase();
        let a = NodeId::from_hex(&lower).unwrap();
        let b = NodeId::from_hex(&upper).unwrap();
        assert_eq!(b.as_str(), upper);
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), &[0xab; NODE_ID_BYTES]);
    }

    #[test]
    fn test_from_bytes_encodes_lowercase() {
        let id = NodeId::from_bytes([0xCD; NODE_ID_BYTES]);
        assert_eq!(id.as_str(), "cd".repeat(NODE_ID_BYTES));
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn test_from_str_delegates_to_from_hex() {
        let parsed: NodeId = "01".repeat(NODE_ID_BYTES).parse().unwrap();
        assert_eq!(parsed.as_bytes(), &[1u8; NODE_ID_BYTES]);
        assert!("01".parse::<NodeId>().is_err());
    }
}
