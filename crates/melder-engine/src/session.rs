//! Planner session: the query and mutation surface for a front end.
//!
//! A session owns the store, every per-character service and the current
//! character. Mutations apply to memory immediately and mark the affected
//! snapshot dirty; [`PlannerSession::tick`] writes snapshots whose debounce
//! window has elapsed, and [`PlannerSession::flush`] (also run on drop)
//! writes everything still pending.

use melder_common::{AbilityId, Character, CommandId, RecipeId};
use melder_gameplay::{
    meldable_commands, AbilityTracker, Catalog, Command, FilteredCommand, FilteredWish, Ledger,
    NameResolver, ProfileInventory, RecipeSearch, SearchRequest, Wishlist, WishlistEntry,
};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::debounce::WriteScheduler;
use crate::persistence::{save_snapshot, Snapshots, StoreKey};
use crate::store::KeyValueStore;

/// Planner state bound to a store.
pub struct PlannerSession<S: KeyValueStore> {
    store: S,
    catalog: &'static Catalog,
    character: Character,
    ledger: Ledger,
    abilities: AbilityTracker,
    wishlist: Wishlist,
    scheduler: WriteScheduler,
}

impl<S: KeyValueStore> PlannerSession<S> {
    /// Loads persisted state from `store`, starting empty where snapshots are
    /// missing or corrupt. The configured default character is persisted
    /// right away when no character was stored.
    pub fn open(store: S, config: &EngineConfig) -> Self {
        let catalog = Catalog::builtin();
        let snapshots = Snapshots::load(&store, catalog);
        let stored_character = snapshots.character;

        let mut session = Self {
            store,
            catalog,
            character: stored_character.unwrap_or(config.default_character),
            ledger: snapshots.ledger,
            abilities: snapshots.abilities,
            wishlist: snapshots.wishlist,
            scheduler: WriteScheduler::new(config.debounce_window()),
        };

        if stored_character.is_none() {
            session.write(StoreKey::Character);
        }

        info!("Planner session opened for {}", session.character);
        session
    }

    /// Catalog the session queries.
    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================================================================
    // Character
    // ========================================================================

    /// Current character.
    #[must_use]
    pub fn character(&self) -> Character {
        self.character
    }

    /// Switches the current character. Per-character data is untouched.
    pub fn set_character(&mut self, character: Character) {
        if self.character == character {
            return;
        }
        info!("Switched character {} -> {character}", self.character);
        self.character = character;
        self.touch(StoreKey::Character);
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Acquires one copy of a command.
    pub fn add_command(&mut self, command: CommandId) {
        self.ledger.add(self.character, command);
        self.touch(StoreKey::Commands);
    }

    /// Spends one copy of a command. Returns false when none was owned.
    pub fn remove_command(&mut self, command: CommandId) -> bool {
        let changed = self.ledger.remove(self.character, command);
        if changed {
            self.touch(StoreKey::Commands);
        }
        changed
    }

    /// Flips the discovery flag. Returns the new flag.
    pub fn toggle_discovered(&mut self, command: CommandId) -> bool {
        let discovered = self.ledger.toggle_discovered(self.character, command);
        self.touch(StoreKey::Commands);
        discovered
    }

    /// Owned count of a command.
    #[must_use]
    pub fn command_count(&self, command: CommandId) -> u32 {
        self.ledger.count(self.character, command)
    }

    /// Discovery flag of a command.
    #[must_use]
    pub fn is_discovered(&self, command: CommandId) -> bool {
        self.ledger.is_discovered(self.character, command)
    }

    /// Read-only inventory of the current character.
    #[must_use]
    pub fn inventory(&self) -> ProfileInventory<'_> {
        self.ledger.view(self.character)
    }

    /// Forgets every owned and discovered command of a character.
    pub fn reset_commands(&mut self, character: Character) {
        if self.ledger.reset(character) {
            self.touch(StoreKey::Commands);
        }
    }

    // ========================================================================
    // Abilities
    // ========================================================================

    /// Gains one copy of an ability, up to its limit.
    pub fn add_ability(&mut self, ability: AbilityId) -> bool {
        let changed = self
            .abilities
            .add(self.character, self.catalog.ability(ability));
        if changed {
            self.touch(StoreKey::Abilities);
        }
        changed
    }

    /// Loses one copy of an ability.
    pub fn remove_ability(&mut self, ability: AbilityId) -> bool {
        let changed = self.abilities.remove(self.character, ability);
        if changed {
            self.touch(StoreKey::Abilities);
        }
        changed
    }

    /// Pip-grid click on slot `index` of an ability.
    pub fn click_ability_slot(&mut self, ability: AbilityId, index: u8) -> bool {
        let changed =
            self.abilities
                .click_slot(self.character, self.catalog.ability(ability), index);
        if changed {
            self.touch(StoreKey::Abilities);
        }
        changed
    }

    /// Held count of an ability.
    #[must_use]
    pub fn ability_count(&self, ability: AbilityId) -> u8 {
        self.abilities.held(self.character, ability)
    }

    /// Non-zero holdings of the current character.
    pub fn ability_holdings(&self) -> impl Iterator<Item = (AbilityId, u8)> + '_ {
        self.abilities.holdings(self.character)
    }

    /// Forgets every held ability of a character.
    pub fn reset_abilities(&mut self, character: Character) {
        if self.abilities.reset(character) {
            self.touch(StoreKey::Abilities);
        }
    }

    // ========================================================================
    // Wishlist
    // ========================================================================

    /// Wishes for a recipe. Returns false for an unknown recipe id.
    pub fn add_to_wishlist(&mut self, recipe: RecipeId) -> bool {
        let Some(found) = self.catalog.recipe(recipe) else {
            warn!("Ignoring wishlist add for unknown {recipe}");
            return false;
        };
        self.wishlist.add(self.character, found);
        self.touch(StoreKey::Wishlist);
        true
    }

    /// Removes the first wished copy of a recipe under a command.
    pub fn remove_from_wishlist(&mut self, command: CommandId, recipe: RecipeId) -> bool {
        let changed = self.wishlist.remove(self.character, command, recipe);
        if changed {
            self.touch(StoreKey::Wishlist);
        }
        changed
    }

    /// Whether a recipe is wished for under a command.
    #[must_use]
    pub fn is_in_wishlist(&self, command: CommandId, recipe: RecipeId) -> bool {
        self.wishlist.contains(self.character, command, recipe)
    }

    /// Number of wished recipes of the current character.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len(self.character)
    }

    /// Wished recipes of the current character, keyed by output command.
    pub fn wishlist_entries(&self) -> impl Iterator<Item = (CommandId, &[WishlistEntry])> + '_ {
        self.wishlist.entries(self.character)
    }

    /// Ingredients still missing for the current character's wishlist.
    #[must_use]
    pub fn ingredient_shortage(&self) -> BTreeMap<CommandId, u32> {
        self.wishlist
            .ingredient_shortage(self.character, &self.inventory())
    }

    /// Empties a character's wishlist.
    pub fn clear_wishlist(&mut self, character: Character) {
        if self.wishlist.clear(character) {
            self.touch(StoreKey::Wishlist);
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Commands available to the current character, in catalog order.
    pub fn visible_commands(&self) -> impl Iterator<Item = &'static Command> {
        self.catalog.commands_for(self.character)
    }

    /// Searches the current character's commands.
    pub fn search<N: NameResolver + ?Sized>(
        &self,
        request: &SearchRequest,
        names: &N,
    ) -> Vec<FilteredCommand<'static>> {
        RecipeSearch::new(self.catalog, names).search(
            self.visible_commands(),
            request,
            &self.inventory(),
        )
    }

    /// Searches the current character's wishlist.
    pub fn search_wishlist<N: NameResolver + ?Sized>(
        &self,
        request: &SearchRequest,
        names: &N,
    ) -> Vec<FilteredWish<'_>> {
        RecipeSearch::new(self.catalog, names).search_wishlist(
            self.wishlist_entries(),
            request,
            &self.inventory(),
        )
    }

    /// Commands the current character can meld right now.
    #[must_use]
    pub fn meldable_commands(&self) -> Vec<&'static Command> {
        let inventory = self.inventory();
        meldable_commands(self.visible_commands(), &inventory).collect()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Writes every snapshot whose debounce window has elapsed at `now`.
    /// Returns the number of snapshots written. Failed writes are re-armed
    /// from `now`.
    pub fn tick(&mut self, now: Instant) -> usize {
        let due = self.scheduler.due(now);
        self.write_all(due, now)
    }

    /// Writes every pending snapshot. Returns the number written. Failed
    /// writes stay pending.
    pub fn flush(&mut self) -> usize {
        let pending = self.scheduler.drain();
        if !pending.is_empty() {
            debug!("Flushing {} pending snapshots", pending.len());
        }
        self.write_all(pending, Instant::now())
    }

    /// Whether any snapshot is waiting to be written.
    #[must_use]
    pub fn has_pending_writes(&self) -> bool {
        self.scheduler.has_pending()
    }

    fn touch(&mut self, key: StoreKey) {
        let now = Instant::now();
        self.scheduler.mark(key, now);
        if self.scheduler.window().is_zero() {
            self.tick(now);
        }
    }

    fn write_all(&mut self, keys: Vec<StoreKey>, now: Instant) -> usize {
        let mut written = 0;
        for key in keys {
            if self.write(key) {
                written += 1;
            } else {
                self.scheduler.mark(key, now);
            }
        }
        written
    }

    fn write(&mut self, key: StoreKey) -> bool {
        let result = match key {
            StoreKey::Character => save_snapshot(&mut self.store, key, &self.character),
            StoreKey::Commands => save_snapshot(&mut self.store, key, &self.ledger),
            StoreKey::Abilities => save_snapshot(&mut self.store, key, &self.abilities),
            StoreKey::Wishlist => save_snapshot(&mut self.store, key, &self.wishlist),
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to persist {key}: {e}");
                false
            },
        }
    }
}

impl<S: KeyValueStore> Drop for PlannerSession<S> {
    fn drop(&mut self) {
        self.flush();
    }
}
