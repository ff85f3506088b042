//! JSON snapshots of planner state in a key-value store.
//!
//! Each logical store is written as one full snapshot. Loading never fails:
//! a missing key yields `None`, and an unreadable or corrupt value is logged
//! and treated the same way.

use melder_common::{Character, MelderError, MelderResult, StoreError};
use melder_gameplay::{AbilityTracker, Catalog, Ledger, Wishlist};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::store::KeyValueStore;

/// Logical stores persisted by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StoreKey {
    /// Current character
    Character,
    /// Per-character command ledger
    Commands,
    /// Per-character ability holdings
    Abilities,
    /// Per-character wishlist
    Wishlist,
}

impl StoreKey {
    /// Every key in write order.
    pub const ALL: [StoreKey; 4] = [
        Self::Character,
        Self::Commands,
        Self::Abilities,
        Self::Wishlist,
    ];

    /// Key under which the snapshot is stored.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Character => "melder_character",
            Self::Commands => "melder_commands",
            Self::Abilities => "melder_abilities",
            Self::Wishlist => "melder_wishlist",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Reads and decodes one snapshot, failing soft.
pub fn load_snapshot<T, S>(store: &S, key: StoreKey) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key.key()) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No snapshot for {key}");
            return None;
        },
        Err(e) => {
            warn!("Failed to read {key}, starting empty: {e}");
            return None;
        },
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Corrupt snapshot in {key}, starting empty: {e}");
            None
        },
    }
}

/// Encodes and writes one snapshot.
pub fn save_snapshot<T, S>(store: &mut S, key: StoreKey, value: &T) -> MelderResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|e| {
        MelderError::Store(StoreError::Encode {
            key: key.key().to_string(),
            reason: e.to_string(),
        })
    })?;
    store.set(key.key(), &json)?;
    debug!("Persisted {key} ({} bytes)", json.len());
    Ok(())
}

/// Every persisted store, decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshots {
    /// Current character, `None` when never stored
    pub character: Option<Character>,
    /// Command ledger
    pub ledger: Ledger,
    /// Ability holdings
    pub abilities: AbilityTracker,
    /// Wishlist
    pub wishlist: Wishlist,
}

impl Snapshots {
    /// Loads every store, substituting empty state for anything missing or
    /// corrupt. Decoded stores are normalized: empty entries are pruned and
    /// ability counts are clamped to the limits in `catalog`.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, catalog: &Catalog) -> Self {
        let mut snapshots = Self {
            character: load_snapshot(store, StoreKey::Character),
            ledger: load_snapshot(store, StoreKey::Commands).unwrap_or_default(),
            abilities: load_snapshot(store, StoreKey::Abilities).unwrap_or_default(),
            wishlist: load_snapshot(store, StoreKey::Wishlist).unwrap_or_default(),
        };

        let repaired = [
            (StoreKey::Commands, snapshots.ledger.prune()),
            (StoreKey::Abilities, snapshots.abilities.normalize(catalog)),
            (StoreKey::Wishlist, snapshots.wishlist.prune()),
        ];
        for (key, count) in repaired {
            if count > 0 {
                warn!("Repaired {count} stale records in {key}");
            }
        }

        info!(
            "Loaded planner state (character: {})",
            snapshots
                .character
                .map_or_else(|| "unset".to_string(), |c| c.to_string())
        );
        snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use melder_common::CommandId;

    #[test]
    fn test_missing_keys_load_empty() {
        let store = MemoryStore::new();
        let snapshots = Snapshots::load(&store, Catalog::builtin());
        assert_eq!(snapshots, Snapshots::default());
    }

    #[test]
    fn test_corrupt_snapshot_loads_empty() {
        let mut store = MemoryStore::new();
        store.set("melder_commands", "{ nope").expect("set");
        store.set("melder_character", "7").expect("set");
        store.set("melder_wishlist", "[1, 2]").expect("set");

        let snapshots = Snapshots::load(&store, Catalog::builtin());
        assert!(snapshots.ledger.is_empty());
        assert!(snapshots.wishlist.is_empty());
        assert_eq!(snapshots.character, None);
    }

    #[test]
    fn test_stale_records_are_normalized() {
        let mut store = MemoryStore::new();
        store
            .set("melder_commands", r#"{"0":{"0":{"count":0,"discovered":false}},"1":{}}"#)
            .expect("set");
        store.set("melder_abilities", r#"{"0":{"0":0}}"#).expect("set");
        store.set("melder_wishlist", r#"{"2":{"1":[]}}"#).expect("set");

        let snapshots = Snapshots::load(&store, Catalog::builtin());
        assert!(snapshots.ledger.is_empty());
        assert_eq!(snapshots.ledger.entry(Character::Terra, CommandId::ALL[0]), None);
        assert!(snapshots.abilities.is_empty());
        assert!(snapshots.wishlist.is_empty());
    }

    #[test]
    fn test_ledger_snapshot_shape() {
        let mut ledger = Ledger::new();
        for _ in 0..3 {
            ledger.add(Character::Terra, CommandId::Blitz);
        }

        let mut store = MemoryStore::new();
        save_snapshot(&mut store, StoreKey::Commands, &ledger).expect("save");
        assert_eq!(
            store.get("melder_commands").expect("get").as_deref(),
            Some(r#"{"0":{"1":{"count":3,"discovered":true}}}"#)
        );

        let back: Option<Ledger> = load_snapshot(&store, StoreKey::Commands);
        assert_eq!(back, Some(ledger));
    }

    #[test]
    fn test_character_snapshot() {
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, StoreKey::Character, &Character::Aqua).expect("save");
        assert_eq!(store.get("melder_character").expect("get").as_deref(), Some("2"));
        assert_eq!(
            Snapshots::load(&store, Catalog::builtin()).character,
            Some(Character::Aqua)
        );
    }

    #[test]
    fn test_store_key_names() {
        let keys: Vec<_> = StoreKey::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            keys,
            ["melder_character", "melder_commands", "melder_abilities", "melder_wishlist"]
        );
    }
}
