use crate::domain::types::Timestamp;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Independently synchronized liveness cell.
///
/// The only mutable part of a contact. Readers (eviction decisions) and
/// writers (transport acknowledgements) never need to lock the surrounding
/// record, and the stored value never moves backward: advancing to an older
/// time is a no-op.
pub struct LastSeen(AtomicU64);

impl LastSeen {
    /// Create a cell holding `initial`.
    pub fn new(initial: Timestamp) -> Self {
        Self(AtomicU64::new(initial.as_millis()))
    }

    /// Current value.
    pub fn get(&self) -> Timestamp {
        Timestamp::from_millis(self.0.load(Ordering::Acquire))
    }

    /// Move the cell forward to `now`, returning the value it holds afterwards.
    pub fn advance_to(&self, now: Timestamp) -> Timestamp {
        let previous = self.0.fetch_max(now.as_millis(), Ordering::AcqRel);
        Timestamp::from_millis(previous.max(now.as_millis()))
    }
}

impl Clone for LastSeen {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl fmt::Debug for LastSeen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LastSeen").field(&self.get()).finish()
    }
}
