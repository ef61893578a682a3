//! Identifier generation for newly created entities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh entity ids.
///
/// The store re-draws when a generator returns an id that is already live in
/// the target collection, so implementations only need to be unique in
/// practice. They must not keep returning live ids: `Collection::create`
/// draws until it gets a free one.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids. The default generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic decimal ids ("1", "2", ...) starting at a given value.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_distinct() {
        let ids = UuidIds;
        let drawn: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(drawn.len(), 1000);
    }

    #[test]
    fn test_uuid_ids_parse_back() {
        let id = UuidIds.next_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_sequential_ids_count_up() {
        let ids = SequentialIds::starting_at(5);
        assert_eq!(ids.next_id(), "5");
        assert_eq!(ids.next_id(), "6");
        assert_eq!(ids.next_id(), "7");
    }
}
