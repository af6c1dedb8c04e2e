//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! The domain performs no I/O of its own. Everything it needs from the
//! outside world (the current time, configuration) comes through the
//! driven ports defined here.

pub mod outbound;

pub use outbound::{ConfigProvider, TimeSource};
