//! Debounced snapshot writes.
//!
//! Marking a store dirty arms (or re-arms) a deadline one window into the
//! future. Keys come due once their deadline has passed with no further
//! marks, so a burst of mutations results in a single write. The caller
//! supplies the clock, which keeps scheduling deterministic.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::persistence::StoreKey;

/// Default coalescing window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Upper bound accepted for the coalescing window in milliseconds.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Tracks which stores need writing and when.
#[derive(Debug, Clone)]
pub struct WriteScheduler {
    window: Duration,
    pending: BTreeMap<StoreKey, Instant>,
}

impl Default for WriteScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl WriteScheduler {
    /// Creates a scheduler with the given window. A zero window makes every
    /// mark due immediately.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: BTreeMap::new(),
        }
    }

    /// Coalescing window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Marks a store dirty, pushing its deadline to `now + window`.
    pub fn mark(&mut self, key: StoreKey, now: Instant) {
        let deadline = now + self.window;
        if self.pending.insert(key, deadline).is_some() {
            debug!("Re-armed write of {key}");
        }
    }

    /// Removes and returns every store whose deadline has passed.
    pub fn due(&mut self, now: Instant) -> Vec<StoreKey> {
        let due: Vec<StoreKey> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(key, _)| *key)
            .collect();
        for key in &due {
            self.pending.remove(key);
        }
        due
    }

    /// Removes and returns every pending store regardless of deadline.
    pub fn drain(&mut self) -> Vec<StoreKey> {
        std::mem::take(&mut self.pending).into_keys().collect()
    }

    /// Whether a store is waiting to be written.
    #[must_use]
    pub fn is_pending(&self, key: StoreKey) -> bool {
        self.pending.contains_key(&key)
    }

    /// Whether any store is waiting to be written.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_default_window() {
        assert_eq!(WriteScheduler::default().window(), ms(300));
    }

    #[test]
    fn test_marks_coalesce_and_rearm() {
        let start = Instant::now();
        let mut scheduler = WriteScheduler::default();

        scheduler.mark(StoreKey::Commands, start);
        scheduler.mark(StoreKey::Commands, start + ms(200));
        assert!(scheduler.due(start + ms(300)).is_empty());
        assert_eq!(scheduler.next_deadline(), Some(start + ms(500)));

        assert_eq!(scheduler.due(start + ms(500)), vec![StoreKey::Commands]);
        assert!(!scheduler.has_pending());
        assert!(scheduler.due(start + ms(900)).is_empty());
    }

    #[test]
    fn test_keys_are_independent() {
        let start = Instant::now();
        let mut scheduler = WriteScheduler::new(ms(100));

        scheduler.mark(StoreKey::Wishlist, start);
        scheduler.mark(StoreKey::Abilities, start + ms(50));

        assert_eq!(scheduler.due(start + ms(120)), vec![StoreKey::Wishlist]);
        assert!(scheduler.is_pending(StoreKey::Abilities));
        assert_eq!(scheduler.due(start + ms(150)), vec![StoreKey::Abilities]);
    }

    #[test]
    fn test_drain_ignores_deadlines() {
        let start = Instant::now();
        let mut scheduler = WriteScheduler::default();
        scheduler.mark(StoreKey::Wishlist, start);
        scheduler.mark(StoreKey::Character, start);

        assert_eq!(
            scheduler.drain(),
            vec![StoreKey::Character, StoreKey::Wishlist]
        );
        assert!(scheduler.drain().is_empty());
    }

    #[test]
    fn test_zero_window_is_immediate() {
        let now = Instant::now();
        let mut scheduler = WriteScheduler::new(Duration::ZERO);
        scheduler.mark(StoreKey::Commands, now);
        assert_eq!(scheduler.due(now), vec![StoreKey::Commands]);
    }

    proptest! {
        #[test]
        fn prop_burst_yields_one_write_per_key(
            marks in prop::collection::vec((0usize..4, 0u64..1_000), 1..50),
        ) {
            let start = Instant::now();
            let mut scheduler = WriteScheduler::default();
            let mut last_mark = start;
            for (key, offset) in &marks {
                let at = start + ms(*offset);
                last_mark = last_mark.max(at);
                scheduler.mark(StoreKey::ALL[*key], at);
            }

            let written = scheduler.due(last_mark + ms(DEFAULT_DEBOUNCE_MS));
            let mut expected: Vec<_> = marks.iter().map(|(key, _)| StoreKey::ALL[*key]).collect();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(written, expected);
            prop_assert!(!scheduler.has_pending());
        }
    }
}
