//! Account id generation.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::Utc;

use banklite_core::AccountId;

/// Source of fresh account ids.
pub trait AccountIdGenerator: Send + Sync + core::fmt::Debug {
    fn next_id(&self) -> AccountId;
}

/// Millisecond-timestamp ids (e.g. `"1700000000123"`).
///
/// Within one generator ids strictly increase: if the clock has not moved
/// since the last id, the next one is `last + 1`.
#[derive(Debug, Default)]
pub struct ClockIdGenerator {
    last: AtomicI64,
}

impl ClockIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountIdGenerator for ClockIdGenerator {
    fn next_id(&self) -> AccountId {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(now.max(last + 1)))
            .unwrap_or_else(|last| last);
        AccountId::new(now.max(prev + 1).to_string())
    }
}

/// Deterministic ids for tests: `start`, `start + 1`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl AccountIdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> AccountId {
        AccountId::new(self.next.fetch_add(1, Ordering::SeqCst).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_ids_never_repeat() {
        let ids = ClockIdGenerator::new();
        let mut previous: i64 = 0;
        for _ in 0..1_000 {
            let id: i64 = ids.next_id().as_str().parse().unwrap();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn clock_ids_track_wall_clock() {
        let before = Utc::now().timestamp_millis();
        let id: i64 = ClockIdGenerator::new().next_id().as_str().parse().unwrap();
        assert!(id >= before);
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::starting_at(100);
        assert_eq!(ids.next_id().as_str(), "100");
        assert_eq!(ids.next_id().as_str(), "101");
    }
}
