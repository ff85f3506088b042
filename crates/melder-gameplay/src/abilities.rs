//! Per-character ability holdings.

use melder_common::{AbilityId, Character};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::{Ability, Catalog};

/// Held ability counts for every character.
///
/// Counts never exceed the ability's limit. Zero counts and characters
/// without holdings are pruned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityTracker {
    profiles: BTreeMap<Character, BTreeMap<AbilityId, u8>>,
}

impl AbilityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gains one copy if the limit allows. Returns whether the count changed.
    pub fn add(&mut self, profile: Character, ability: &Ability) -> bool {
        let held = self.held(profile, ability.id);
        if held >= ability.limit {
            debug!(
                "{profile}: {:?} already at limit {}",
                ability.id, ability.limit
            );
            return false;
        }

        self.profiles
            .entry(profile)
            .or_default()
            .insert(ability.id, held + 1);
        debug!("{profile}: {:?} held {}", ability.id, held + 1);
        true
    }

    /// Loses one copy. Returns whether the count changed.
    pub fn remove(&mut self, profile: Character, ability: AbilityId) -> bool {
        let Some(holdings) = self.profiles.get_mut(&profile) else {
            return false;
        };
        let Some(held) = holdings.get_mut(&ability).filter(|held| **held > 0) else {
            return false;
        };

        *held -= 1;
        let now = *held;
        if now == 0 {
            holdings.remove(&ability);
        }
        if holdings.is_empty() {
            self.profiles.remove(&profile);
        }
        debug!("{profile}: {ability:?} held {now}");
        true
    }

    /// Pip-grid interaction: a click below the held count removes one,
    /// anywhere else adds one.
    pub fn click_slot(&mut self, profile: Character, ability: &Ability, index: u8) -> bool {
        if index < self.held(profile, ability.id) {
            self.remove(profile, ability.id)
        } else {
            self.add(profile, ability)
        }
    }

    /// Held count, 0 when absent.
    #[must_use]
    pub fn held(&self, profile: Character, ability: AbilityId) -> u8 {
        self.profiles
            .get(&profile)
            .and_then(|holdings| holdings.get(&ability))
            .copied()
            .unwrap_or(0)
    }

    /// Non-zero holdings of a character in catalog order.
    pub fn holdings(&self, profile: Character) -> impl Iterator<Item = (AbilityId, u8)> + '_ {
        self.profiles
            .get(&profile)
            .into_iter()
            .flat_map(|holdings| holdings.iter().map(|(id, held)| (*id, *held)))
    }

    /// Drops every holding of a character. Returns false when there was nothing.
    pub fn reset(&mut self, profile: Character) -> bool {
        let removed = self.profiles.remove(&profile).is_some();
        if removed {
            debug!("{profile}: ability holdings reset");
        }
        removed
    }

    /// Whether no character holds anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Restores the invariants on decoded holdings: counts are clamped to
    /// each ability's limit, and zero counts and empty characters are
    /// dropped. Returns the number of holdings changed or removed.
    pub fn normalize(&mut self, catalog: &Catalog) -> usize {
        let mut changed = 0;
        for holdings in self.profiles.values_mut() {
            holdings.retain(|id, held| {
                let limit = catalog.ability(*id).limit;
                if *held > limit {
                    *held = limit;
                    changed += 1;
                }
                if *held == 0 {
                    changed += 1;
                    return false;
                }
                true
            });
        }
        self.profiles.retain(|_, holdings| !holdings.is_empty());
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const A: Character = Character::Aqua;

    #[test]
    fn test_limit_is_silent() {
        let scan = Catalog::builtin().ability(AbilityId::Scan);
        let mut tracker = AbilityTracker::new();

        assert!(tracker.add(A, scan));
        assert!(!tracker.add(A, scan));
        assert_eq!(tracker.held(A, AbilityId::Scan), 1);
    }

    #[test]
    fn test_remove_prunes() {
        let magnet = Catalog::builtin().ability(AbilityId::TreasureMagnet);
        let mut tracker = AbilityTracker::new();
        tracker.add(A, magnet);
        tracker.add(A, magnet);

        assert!(tracker.remove(A, AbilityId::TreasureMagnet));
        assert!(tracker.remove(A, AbilityId::TreasureMagnet));
        assert!(!tracker.remove(A, AbilityId::TreasureMagnet));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_remove_zero_holding_is_noop() {
        let mut tracker: AbilityTracker = serde_json::from_str(r#"{"2":{"0":0}}"#).expect("decode");
        let first = AbilityId::ALL[0];

        assert!(!tracker.remove(A, first));
        assert_eq!(tracker.held(A, first), 0);
        assert!(tracker.add(A, Catalog::builtin().ability(first)));
        assert_eq!(tracker.held(A, first), 1);
    }

    #[test]
    fn test_normalize_drops_zeros_and_clamps() {
        let catalog = Catalog::builtin();
        let scan = catalog.ability(AbilityId::Scan);
        let json = format!(
            r#"{{"0":{{"{}":0}},"2":{{"{}":9}}}}"#,
            AbilityId::FireBoost.index(),
            AbilityId::Scan.index()
        );
        let mut tracker: AbilityTracker = serde_json::from_str(&json).expect("decode");

        assert_eq!(tracker.normalize(catalog), 2);
        assert_eq!(tracker.holdings(Character::Terra).count(), 0);
        assert_eq!(tracker.held(A, AbilityId::Scan), scan.limit);
        assert!(!tracker.add(A, scan));
        assert_eq!(tracker.normalize(catalog), 0);
    }

    #[test]
    fn test_click_slot() {
        let haste = Catalog::builtin().ability(AbilityId::AttackHaste);
        let mut tracker = AbilityTracker::new();

        tracker.click_slot(A, haste, 3);
        tracker.click_slot(A, haste, 4);
        assert_eq!(tracker.held(A, AbilityId::AttackHaste), 2);

        tracker.click_slot(A, haste, 0);
        assert_eq!(tracker.held(A, AbilityId::AttackHaste), 1);
    }

    #[test]
    fn test_profiles_are_isolated() {
        let boost = Catalog::builtin().ability(AbilityId::FireBoost);
        let mut tracker = AbilityTracker::new();
        tracker.add(A, boost);

        assert_eq!(tracker.held(Character::Terra, AbilityId::FireBoost), 0);
        assert!(!tracker.reset(Character::Terra));
        assert!(tracker.reset(A));
        assert_eq!(tracker.holdings(A).count(), 0);
    }

    #[test]
    fn test_json_shape() {
        let boost = Catalog::builtin().ability(AbilityId::HpBoost);
        let mut tracker = AbilityTracker::new();
        tracker.add(Character::Ventus, boost);

        let json = serde_json::to_string(&tracker).expect("serialize");
        assert_eq!(json, format!(r#"{{"1":{{"{}":1}}}}"#, AbilityId::HpBoost.index()));
    }

    proptest! {
        #[test]
        fn prop_limit_never_exceeded(index in 0usize..AbilityId::COUNT, extra in 0usize..8) {
            let ability = Catalog::builtin().ability(AbilityId::ALL[index]);
            let mut tracker = AbilityTracker::new();
            for _ in 0..(ability.limit as usize + extra) {
                tracker.add(A, ability);
            }
            prop_assert_eq!(tracker.held(A, ability.id), ability.limit);
        }
    }
}
