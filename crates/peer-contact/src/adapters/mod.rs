//! # Adapters
//!
//! Concrete implementations of the driven ports plus the serde edges.
//!
//! - `SystemTimeSource` - Production time source using system clock
//! - `StaticConfigProvider` - Hardcoded configuration
//! - `TomlConfigProvider` - Config file loading (requires "config" feature)
//! - `persistence` - Stored records and announcement decoding (requires "persistence" feature)

/// Configuration providers
pub mod config;
/// Time source adapters
pub mod time;

#[cfg(feature = "persistence")]
pub mod persistence;

pub use config::StaticConfigProvider;
pub use time::SystemTimeSource;

#[cfg(feature = "config")]
pub use config::TomlConfigProvider;
