//! Domain Layer - Pure business logic with no I/O
//!
//! - Node identifiers (160-bit, SHA-1 derived from `address:port`)
//! - Millisecond liveness timestamps
//! - The `Contact` record and its monotonic `last_seen` cell
//! - Liveness configuration

pub mod config;
pub mod contact;
/// Core domain types (identifiers, timestamps, errors)
pub mod types;

pub use config::*;
pub use contact::*;
pub use types::*;
