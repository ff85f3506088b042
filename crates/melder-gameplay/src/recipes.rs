//! Recipe filtering and search.
//!
//! This module provides:
//! - Structured filters (ingredient, yielded ability, undiscovered only)
//! - Inventory-gated and full-catalog search modes
//! - Filtering of wishlist snapshots with the same filters
//!
//! Every search is a pure function of its inputs and can be recomputed on
//! each keystroke.

use melder_common::{AbilityId, CommandId, Family};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Command, Recipe};
use crate::crafting::can_craft;
use crate::inventory::InventoryView;
use crate::names::NameResolver;
use crate::wishlist::WishlistEntry;

// ============================================================================
// Filters
// ============================================================================

/// Structured recipe filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFilter {
    /// Keep only recipes using this ingredient.
    pub ingredient: Option<CommandId>,
    /// Keep only recipes whose family can yield this ability.
    pub ability: Option<AbilityId>,
    /// Keep only commands not yet discovered.
    pub undiscovered_only: bool,
}

impl RecipeFilter {
    /// Creates an inactive filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by ingredient.
    #[must_use]
    pub const fn ingredient(mut self, command: CommandId) -> Self {
        self.ingredient = Some(command);
        self
    }

    /// Filters by yielded ability.
    #[must_use]
    pub const fn ability(mut self, ability: AbilityId) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Restricts to undiscovered commands.
    #[must_use]
    pub const fn undiscovered_only(mut self, enabled: bool) -> Self {
        self.undiscovered_only = enabled;
        self
    }

    /// Whether any filter field is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.ingredient.is_some() || self.ability.is_some() || self.undiscovered_only
    }

    fn accepts(&self, catalog: &Catalog, ingredients: [CommandId; 2], family: Family) -> bool {
        if let Some(ingredient) = self.ingredient {
            if !ingredients.contains(&ingredient) {
                return false;
            }
        }
        if let Some(ability) = self.ability {
            if !catalog.crystals(family).yields(ability) {
                return false;
            }
        }
        true
    }
}

/// Which recipes a search starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Only recipes the inventory can meld right now.
    #[default]
    Gated,
    /// Every recipe, regardless of inventory.
    Catalog,
}

/// One search over commands or wishlist snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Case-insensitive substring matched against display names
    pub query: String,
    /// Structured filter
    pub filter: RecipeFilter,
    /// Starting recipe set
    pub mode: FilterMode,
}

impl SearchRequest {
    /// Creates an empty gated request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text query.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the structured filter.
    #[must_use]
    pub const fn filter(mut self, filter: RecipeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the mode.
    #[must_use]
    pub const fn mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }
}

// ============================================================================
// Results
// ============================================================================

/// A command with the recipes that survived filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCommand<'a> {
    /// Catalog command
    pub command: &'a Command,
    /// Visible recipes in catalog order
    pub recipes: Vec<&'a Recipe>,
}

/// A wished-for command with the snapshots that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredWish<'a> {
    /// Command the snapshots produce
    pub command: CommandId,
    /// Visible snapshots in insertion order
    pub entries: Vec<&'a WishlistEntry>,
}

// ============================================================================
// Search engine
// ============================================================================

/// Search over catalog commands.
pub struct RecipeSearch<'a, N: NameResolver + ?Sized> {
    catalog: &'a Catalog,
    names: &'a N,
}

impl<'a, N: NameResolver + ?Sized> RecipeSearch<'a, N> {
    /// Creates a search bound to a catalog and a name resolver.
    pub fn new(catalog: &'a Catalog, names: &'a N) -> Self {
        Self { catalog, names }
    }

    /// Filters commands, keeping input order.
    ///
    /// A command is dropped when its name does not match the query, when
    /// only undiscovered commands are wanted and it is discovered, or when
    /// any filter is active and none of its recipes survived. Without an
    /// active filter, commands with no visible recipe are kept.
    pub fn search<'c>(
        &self,
        commands: impl IntoIterator<Item = &'c Command>,
        request: &SearchRequest,
        inventory: &impl InventoryView,
    ) -> Vec<FilteredCommand<'c>> {
        let query = request.query.to_lowercase();
        let filter = &request.filter;

        commands
            .into_iter()
            .filter_map(|command| {
                let recipes: Vec<&Recipe> = command
                    .recipes
                    .iter()
                    .filter(|recipe| match request.mode {
                        FilterMode::Gated => can_craft(recipe, inventory),
                        FilterMode::Catalog => true,
                    })
                    .filter(|recipe| filter.accepts(self.catalog, recipe.ingredients, recipe.family))
                    .collect();

                if !self.name_matches(command.id, &query) {
                    return None;
                }
                if filter.undiscovered_only && inventory.is_discovered(command.id) {
                    return None;
                }
                if filter.is_active() && recipes.is_empty() {
                    return None;
                }
                Some(FilteredCommand { command, recipes })
            })
            .collect()
    }

    /// Filters wishlist snapshots, keeping input order.
    ///
    /// Snapshots are matched as stored, not against the live catalog, and
    /// the mode is ignored. Commands left without snapshots are dropped.
    pub fn search_wishlist<'w>(
        &self,
        wishlist: impl IntoIterator<Item = (CommandId, &'w [WishlistEntry])>,
        request: &SearchRequest,
        inventory: &impl InventoryView,
    ) -> Vec<FilteredWish<'w>> {
        let query = request.query.to_lowercase();
        let filter = &request.filter;

        wishlist
            .into_iter()
            .filter(|(command, _)| self.name_matches(*command, &query))
            .filter(|(command, _)| !(filter.undiscovered_only && inventory.is_discovered(*command)))
            .filter_map(|(command, list)| {
                let entries: Vec<&WishlistEntry> = list
                    .iter()
                    .filter(|entry| filter.accepts(self.catalog, entry.ingredients, entry.family))
                    .collect();
                (!entries.is_empty()).then_some(FilteredWish { command, entries })
            })
            .collect()
    }

    fn name_matches(&self, command: CommandId, query: &str) -> bool {
        query.is_empty()
            || self
                .names
                .command_name(command)
                .to_lowercase()
                .contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::BuiltinNames;
    use crate::wishlist::Wishlist;
    use melder_common::Character;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn empty() -> HashMap<CommandId, u32> {
        HashMap::new()
    }

    fn blitz_only(catalog: &Catalog) -> Vec<&Command> {
        vec![catalog.command(CommandId::Blitz)]
    }

    fn ingredients_of(result: &FilteredCommand<'_>) -> Vec<[CommandId; 2]> {
        result.recipes.iter().map(|r| r.ingredients).collect()
    }

    #[test]
    fn test_gated_shows_craftable_recipe_only() {
        let catalog = Catalog::builtin();
        let search = RecipeSearch::new(catalog, &BuiltinNames);
        let inv = HashMap::from([
            (CommandId::StunEdge, 1),
            (CommandId::SlotEdge, 1),
            (CommandId::QuickBlitz, 0),
        ]);

        let result = search.search(blitz_only(catalog), &SearchRequest::new(), &inv);
        assert_eq!(result.len(), 1);
        assert_eq!(
            ingredients_of(&result[0]),
            vec![[CommandId::StunEdge, CommandId::SlotEdge]]
        );
    }

    #[test]
    fn test_catalog_mode_ingredient_filter() {
        let catalog = Catalog::builtin();
        let search = RecipeSearch::new(catalog, &BuiltinNames);
        let request = SearchRequest::new()
            .mode(FilterMode::Catalog)
            .filter(RecipeFilter::new().ingredient(CommandId::SlotEdge));

        let result = search.search(blitz_only(catalog), &request, &empty());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].recipes.len(), 2);
    }

    #[test]
    fn test_unfiltered_keeps_empty_commands() {
        let catalog = Catalog::builtin();
        let search = RecipeSearch::new(catalog, &BuiltinNames);
        let commands: Vec<_> = catalog.commands_for(Character::Terra).collect();

        let result = search.search(commands.iter().copied(), &SearchRequest::new(), &empty());
        assert_eq!(result.len(), commands.len());
        assert!(result.iter().all(|r| r.recipes.is_empty()));

        let filtered = SearchRequest::new().filter(RecipeFilter::new().ability(AbilityId::FireBoost));
        assert!(search
            .search(commands.iter().copied(), &filtered, &empty())
            .is_empty());
    }

    #[test]
    fn test_results_compare_by_value() {
        let catalog = Catalog::builtin();
        let search = RecipeSearch::new(catalog, &BuiltinNames);
        let blitz = catalog.command(CommandId::Blitz);
        let request = SearchRequest::new()
            .mode(FilterMode::Catalog)
            .filter(RecipeFilter::new().ingredient(CommandId::StunEdge));

        let result = search.search(blitz_only(catalog), &request, &empty());
        assert_eq!(
            result,
            vec![FilteredCommand {
                command: blitz,
                recipes: vec![&blitz.recipes[0]],
            }]
        );
        assert_eq!(result, search.search(blitz_only(catalog), &request, &empty()));
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let catalog = Catalog::builtin();
        let search = RecipeSearch::new(catalog, &BuiltinNames);
        let request = SearchRequest::new().query("BLIT").mode(FilterMode::Catalog);

        let ids: Vec<_> = search
            .search(catalog.commands(), &request, &empty())
            .into_iter()
            .map(|r| r.command.id)
            .collect();
        assert!(ids.contains(&CommandId::Blitz));
        assert!(ids.contains(&CommandId::QuickBlitz));
        assert!(!ids.contains(&CommandId::Fire));
    }

    #[test]
    fn test_ability_filter_uses_family_yields() {
        let catalog = Catalog::builtin();
        let search = RecipeSearch::new(catalog, &BuiltinNames);
        let request = SearchRequest::new()
            .mode(FilterMode::Catalog)
            .filter(RecipeFilter::new().ability(AbilityId::Defender));

        for result in search.search(catalog.commands(), &request, &empty()) {
            assert!(!result.recipes.is_empty());
            for recipe in result.recipes {
                assert!(matches!(recipe.family, Family::J | Family::N));
            }
        }
    }

    #[test]
    fn test_undiscovered_only() {
        let catalog = Catalog::builtin();
        let search = RecipeSearch::new(catalog, &BuiltinNames);
        let mut ledger = crate::inventory::Ledger::new();
        ledger.toggle_discovered(Character::Terra, CommandId::Blitz);

        let request = SearchRequest::new()
            .mode(FilterMode::Catalog)
            .filter(RecipeFilter::new().undiscovered_only(true));
        let ids: Vec<_> = search
            .search(catalog.commands(), &request, &ledger.view(Character::Terra))
            .into_iter()
            .map(|r| r.command.id)
            .collect();

        assert!(!ids.contains(&CommandId::Blitz));
        assert!(ids.contains(&CommandId::MagicHour));
        // Base commands have no recipes left once a filter is active.
        assert!(!ids.contains(&CommandId::QuickBlitz));
    }

    #[test]
    fn test_search_wishlist() {
        let catalog = Catalog::builtin();
        let search = RecipeSearch::new(catalog, &BuiltinNames);
        let mut wishlist = Wishlist::new();
        for recipe in &catalog.command(CommandId::Blitz).recipes {
            wishlist.add(Character::Terra, recipe);
        }
        wishlist.add(Character::Terra, &catalog.command(CommandId::MagicHour).recipes[0]);

        let request = SearchRequest::new()
            .query("blitz")
            .filter(RecipeFilter::new().ingredient(CommandId::QuickBlitz));
        let result = search.search_wishlist(wishlist.entries(Character::Terra), &request, &empty());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].command, CommandId::Blitz);
        assert_eq!(result[0].entries.len(), 1);
        assert_eq!(
            result[0].entries[0].ingredients,
            [CommandId::QuickBlitz, CommandId::SlotEdge]
        );
    }

    fn filter_strategy() -> impl Strategy<Value = RecipeFilter> {
        (
            prop::option::of(0usize..CommandId::COUNT),
            prop::option::of(0usize..AbilityId::COUNT),
            any::<bool>(),
        )
            .prop_map(|(ingredient, ability, undiscovered_only)| RecipeFilter {
                ingredient: ingredient.map(|i| CommandId::ALL[i]),
                ability: ability.map(|a| AbilityId::ALL[a]),
                undiscovered_only,
            })
    }

    proptest! {
        #[test]
        fn prop_enabling_filter_never_adds_recipes(
            base in filter_strategy(),
            extra_ingredient in 0usize..CommandId::COUNT,
            extra_ability in 0usize..AbilityId::COUNT,
            which in 0u8..3,
            owned in prop::collection::vec((0usize..CommandId::COUNT, 0u32..3), 0..40),
            catalog_mode in any::<bool>(),
        ) {
            let catalog = Catalog::builtin();
            let search = RecipeSearch::new(catalog, &BuiltinNames);
            let inv: HashMap<CommandId, u32> =
                owned.into_iter().map(|(i, n)| (CommandId::ALL[i], n)).collect();
            let mode = if catalog_mode { FilterMode::Catalog } else { FilterMode::Gated };

            let stricter = match which {
                0 if base.ingredient.is_none() => base.ingredient(CommandId::ALL[extra_ingredient]),
                1 if base.ability.is_none() => base.ability(AbilityId::ALL[extra_ability]),
                _ => base.undiscovered_only(true),
            };

            let count = |filter: RecipeFilter| -> HashMap<CommandId, usize> {
                let request = SearchRequest::new().mode(mode).filter(filter);
                search
                    .search(catalog.commands(), &request, &inv)
                    .into_iter()
                    .map(|r| (r.command.id, r.recipes.len()))
                    .collect()
            };

            let loose = count(base);
            for (command, visible) in count(stricter) {
                prop_assert!(visible <= loose.get(&command).copied().unwrap_or(0));
            }
        }
    }
}
