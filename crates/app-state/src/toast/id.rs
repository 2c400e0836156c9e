//! Toast id generation
//!
//! Ids come from an injectable [`IdGenerator`] so tests can predict them.

use std::sync::atomic::{AtomicU64, Ordering};

use super::notification::ToastId;

/// Source of unique toast ids
pub trait IdGenerator: Send + Sync {
    /// Produce the next id. Must never repeat for the life of the generator.
    fn next_id(&self) -> ToastId;
}

/// Monotonic counter ids: `"1"`, `"2"`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Start counting at 1
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ToastId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ToastId::new(n.to_string())
    }
}

/// Random v4 UUID ids
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> ToastId {
        ToastId::new(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "1");
        assert_eq!(ids.next_id().as_str(), "2");
        assert_eq!(ids.next_id().as_str(), "3");
    }

    #[test]
    fn test_uuid_ids_unique() {
        let ids = UuidIds;
        let seen: HashSet<_> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 100);
    }
}
