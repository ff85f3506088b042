//! Per-character command ledger.

use melder_common::{Character, CommandId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Owned count and discovery flag of one command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Number of copies owned
    pub count: u32,
    /// Whether the command has been seen
    pub discovered: bool,
}

impl InventoryEntry {
    /// Entries carrying no information are not stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0 && !self.discovered
    }
}

/// Read access to one character's owned commands.
pub trait InventoryView {
    /// Owned count, 0 when absent.
    fn count(&self, command: CommandId) -> u32;

    /// Discovery flag, false when absent.
    fn is_discovered(&self, command: CommandId) -> bool;
}

impl InventoryView for HashMap<CommandId, u32> {
    fn count(&self, command: CommandId) -> u32 {
        self.get(&command).copied().unwrap_or(0)
    }

    fn is_discovered(&self, _command: CommandId) -> bool {
        false
    }
}

/// Borrowed view of one character's ledger entries.
#[derive(Debug, Clone, Copy)]
pub struct ProfileInventory<'a> {
    entries: Option<&'a BTreeMap<CommandId, InventoryEntry>>,
}

impl ProfileInventory<'_> {
    /// Stored entry for a command.
    #[must_use]
    pub fn entry(&self, command: CommandId) -> Option<InventoryEntry> {
        self.entries.and_then(|e| e.get(&command)).copied()
    }
}

impl InventoryView for ProfileInventory<'_> {
    fn count(&self, command: CommandId) -> u32 {
        self.entry(command).map_or(0, |e| e.count)
    }

    fn is_discovered(&self, command: CommandId) -> bool {
        self.entry(command).is_some_and(|e| e.discovered)
    }
}

/// Owned and discovered commands for every character.
///
/// Serialized as `{ "<character>": { "<command>": {"count", "discovered"} } }`
/// with numeric keys. Entries that fall back to `{0, false}` are pruned, and
/// so are characters left without entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    profiles: BTreeMap<Character, BTreeMap<CommandId, InventoryEntry>>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires one copy. Acquisition always marks the command discovered.
    pub fn add(&mut self, profile: Character, command: CommandId) {
        self.update(profile, command, |entry| {
            entry.count = entry.count.saturating_add(1);
            entry.discovered = true;
        });
        debug!("{profile}: added {command:?} (now {})", self.count(profile, command));
    }

    /// Removes one copy. Returns false when nothing was owned.
    pub fn remove(&mut self, profile: Character, command: CommandId) -> bool {
        if self.count(profile, command) == 0 {
            return false;
        }
        self.update(profile, command, |entry| entry.count -= 1);
        debug!("{profile}: removed {command:?} (now {})", self.count(profile, command));
        true
    }

    /// Flips the discovery flag without touching the count. Returns the new flag.
    pub fn toggle_discovered(&mut self, profile: Character, command: CommandId) -> bool {
        self.update(profile, command, |entry| entry.discovered = !entry.discovered);
        let discovered = self.is_discovered(profile, command);
        debug!("{profile}: {command:?} discovered = {discovered}");
        discovered
    }

    /// Owned count, 0 when absent.
    #[must_use]
    pub fn count(&self, profile: Character, command: CommandId) -> u32 {
        self.view(profile).count(command)
    }

    /// Discovery flag, false when absent.
    #[must_use]
    pub fn is_discovered(&self, profile: Character, command: CommandId) -> bool {
        self.view(profile).is_discovered(command)
    }

    /// Stored entry for a command.
    #[must_use]
    pub fn entry(&self, profile: Character, command: CommandId) -> Option<InventoryEntry> {
        self.view(profile).entry(command)
    }

    /// Stored entries of a character in catalog order.
    pub fn entries(
        &self,
        profile: Character,
    ) -> impl Iterator<Item = (CommandId, InventoryEntry)> + '_ {
        self.profiles
            .get(&profile)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(id, entry)| (*id, *entry)))
    }

    /// Read-only view of one character.
    #[must_use]
    pub fn view(&self, profile: Character) -> ProfileInventory<'_> {
        ProfileInventory {
            entries: self.profiles.get(&profile),
        }
    }

    /// Drops every entry of a character. Returns false when there was nothing.
    pub fn reset(&mut self, profile: Character) -> bool {
        let removed = self.profiles.remove(&profile).is_some();
        if removed {
            debug!("{profile}: command ledger reset");
        }
        removed
    }

    /// Whether no character has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Drops `{0, false}` entries and characters without entries, as left
    /// behind by hand-edited or older snapshots. Returns the number of
    /// entries dropped.
    pub fn prune(&mut self) -> usize {
        let mut dropped = 0;
        for entries in self.profiles.values_mut() {
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_empty());
            dropped += before - entries.len();
        }
        self.profiles.retain(|_, entries| !entries.is_empty());
        dropped
    }

    fn update(
        &mut self,
        profile: Character,
        command: CommandId,
        apply: impl FnOnce(&mut InventoryEntry),
    ) {
        let entries = self.profiles.entry(profile).or_default();
        let entry = entries.entry(command).or_default();
        apply(entry);
        if entry.is_empty() {
            entries.remove(&command);
        }
        if entries.is_empty() {
            self.profiles.remove(&profile);
        }
    }
}
