//! # Melder Gameplay
//!
//! Melding systems for the Melder planner.
//!
//! This crate provides:
//! - Static catalog of commands, recipes, abilities and crystal yields
//! - Per-character command ledger (owned counts and discovery)
//! - Craftability predicate
//! - Recipe filter and search engine
//! - Ability holding tracker
//! - Wishlist with ingredient shortage
//! - Display name resolution

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod abilities;
pub mod catalog;
pub mod crafting;
pub mod inventory;
pub mod names;
pub mod recipes;
pub mod wishlist;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::abilities::*;
    pub use crate::catalog::*;
    pub use crate::crafting::*;
    pub use crate::inventory::*;
    pub use crate::names::*;
    pub use crate::recipes::*;
    pub use crate::wishlist::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use melder_common::{Character, CommandId};

    const T: Character = Character::Terra;

    #[test]
    fn test_ledger_drives_gated_search() {
        let catalog = Catalog::builtin();
        let mut ledger = Ledger::new();
        ledger.add(T, CommandId::StunEdge);
        ledger.add(T, CommandId::SlotEdge);

        let search = RecipeSearch::new(catalog, &BuiltinNames);
        let result = search.search(
            [catalog.command(CommandId::Blitz)],
            &SearchRequest::new(),
            &ledger.view(T),
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].recipes.len(), 1);
        assert_eq!(
            result[0].recipes[0].ingredients,
            [CommandId::StunEdge, CommandId::SlotEdge]
        );
    }

    #[test]
    fn test_acquire_and_spend_keeps_discovery() {
        let mut ledger = Ledger::new();
        for _ in 0..3 {
            ledger.add(T, CommandId::QuickBlitz);
        }
        assert_eq!(ledger.count(T, CommandId::QuickBlitz), 3);
        assert!(ledger.is_discovered(T, CommandId::QuickBlitz));

        for _ in 0..3 {
            ledger.remove(T, CommandId::QuickBlitz);
        }
        assert_eq!(ledger.count(T, CommandId::QuickBlitz), 0);
        assert!(ledger.entry(T, CommandId::QuickBlitz).is_some());
    }

    #[test]
    fn test_wishlist_shortage_against_ledger() {
        let catalog = Catalog::builtin();
        let mut ledger = Ledger::new();
        let mut wishlist = Wishlist::new();

        let blitz = &catalog.command(CommandId::Blitz).recipes[0];
        wishlist.add(T, blitz);
        wishlist.add(T, blitz);
        ledger.add(T, CommandId::StunEdge);

        let shortage = wishlist.ingredient_shortage(T, &ledger.view(T));
        assert_eq!(shortage.get(&CommandId::StunEdge), Some(&1));
        assert_eq!(shortage.get(&CommandId::SlotEdge), Some(&2));
    }

    #[test]
    fn test_meldable_after_acquiring() {
        let catalog = Catalog::builtin();
        let mut ledger = Ledger::new();
        assert_eq!(
            meldable_commands(catalog.commands_for(T), &ledger.view(T)).count(),
            0
        );

        ledger.add(T, CommandId::QuickBlitz);
        ledger.add(T, CommandId::SlotEdge);
        let meldable: Vec<_> = meldable_commands(catalog.commands_for(T), &ledger.view(T))
            .map(|c| c.id)
            .collect();
        assert!(meldable.contains(&CommandId::Blitz));
    }
}
