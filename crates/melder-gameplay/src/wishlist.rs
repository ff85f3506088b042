//! Per-character wishlist of recipes to meld later.

use melder_common::{Character, CommandId, Family, RecipeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::catalog::Recipe;
use crate::inventory::InventoryView;

/// Snapshot of a recipe taken when it was wished for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// Recipe identifier at the time of adding
    pub id: RecipeId,
    /// Ingredient pair in display order
    pub ingredients: [CommandId; 2],
    /// Crystal family tag
    pub family: Family,
    /// Success chance percentage, `None` when guaranteed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance: Option<u8>,
}

impl From<&Recipe> for WishlistEntry {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            ingredients: recipe.ingredients,
            family: recipe.family,
            chance: recipe.chance,
        }
    }
}

/// Wished recipes of one character, keyed by the command they produce.
pub type ProfileWishlist = BTreeMap<CommandId, Vec<WishlistEntry>>;

/// Wishlists of every character.
///
/// The same recipe may be wished for more than once; each copy is an
/// independent entry. Empty command lists and empty characters are pruned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    profiles: BTreeMap<Character, ProfileWishlist>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot of the recipe under the command it produces.
    pub fn add(&mut self, profile: Character, recipe: &Recipe) {
        self.profiles
            .entry(profile)
            .or_default()
            .entry(recipe.output)
            .or_default()
            .push(WishlistEntry::from(recipe));
        debug!("{profile}: wished for {} ({:?})", recipe.id, recipe.output);
    }

    /// Removes the first entry with the given recipe id. Returns whether an
    /// entry was removed.
    pub fn remove(&mut self, profile: Character, command: CommandId, recipe: RecipeId) -> bool {
        let Some(commands) = self.profiles.get_mut(&profile) else {
            return false;
        };
        let Some(entries) = commands.get_mut(&command) else {
            return false;
        };
        let Some(position) = entries.iter().position(|e| e.id == recipe) else {
            return false;
        };

        entries.remove(position);
        if entries.is_empty() {
            commands.remove(&command);
        }
        if commands.is_empty() {
            self.profiles.remove(&profile);
        }
        debug!("{profile}: unwished {recipe} ({command:?})");
        true
    }

    /// Whether the recipe is wished for under the command.
    #[must_use]
    pub fn contains(&self, profile: Character, command: CommandId, recipe: RecipeId) -> bool {
        self.profiles
            .get(&profile)
            .and_then(|commands| commands.get(&command))
            .is_some_and(|entries| entries.iter().any(|e| e.id == recipe))
    }

    /// Wished recipes of a character, keyed by output command.
    pub fn entries(
        &self,
        profile: Character,
    ) -> impl Iterator<Item = (CommandId, &[WishlistEntry])> + '_ {
        self.profiles
            .get(&profile)
            .into_iter()
            .flat_map(|commands| commands.iter().map(|(id, list)| (*id, list.as_slice())))
    }

    /// Total number of wished recipes of a character.
    #[must_use]
    pub fn len(&self, profile: Character) -> usize {
        self.entries(profile).map(|(_, list)| list.len()).sum()
    }

    /// Whether no character wishes for anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Drops every entry of a character. Returns false when there was nothing.
    pub fn clear(&mut self, profile: Character) -> bool {
        let removed = self.profiles.remove(&profile).is_some();
        if removed {
            debug!("{profile}: wishlist cleared");
        }
        removed
    }

    /// Drops empty command lists and characters without wishes, as left
    /// behind by hand-edited or older snapshots. Returns the number of
    /// command lists dropped.
    pub fn prune(&mut self) -> usize {
        let mut dropped = 0;
        for commands in self.profiles.values_mut() {
            let before = commands.len();
            commands.retain(|_, entries| !entries.is_empty());
            dropped += before - commands.len();
        }
        self.profiles.retain(|_, commands| !commands.is_empty());
        dropped
    }

    /// Ingredients still missing to meld every wished recipe once.
    ///
    /// Each ingredient reference counts once, so a self-pair counts twice.
    /// Ingredients already covered by the inventory are omitted.
    #[must_use]
    pub fn ingredient_shortage(
        &self,
        profile: Character,
        inventory: &impl InventoryView,
    ) -> BTreeMap<CommandId, u32> {
        let mut needed: BTreeMap<CommandId, u32> = BTreeMap::new();
        for (_, list) in self.entries(profile) {
            for entry in list {
                for ingredient in entry.ingredients {
                    *needed.entry(ingredient).or_default() += 1;
                }
            }
        }

        needed
            .into_iter()
            .filter_map(|(command, references)| {
                let missing = references.saturating_sub(inventory.count(command));
                (missing > 0).then_some((command, missing))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use proptest::prelude::*;
    use std::collections::HashMap;

    const T: Character = Character::Terra;

    fn recipe(id: u16, output: CommandId, ingredients: [CommandId; 2]) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            output,
            ingredients,
            family: Family::A,
            chance: None,
        }
    }

    #[test]
    fn test_add_and_contains() {
        let catalog = Catalog::builtin();
        let blitz = &catalog.command(CommandId::Blitz).recipes[1];

        let mut wishlist = Wishlist::new();
        wishlist.add(T, blitz);

        assert!(wishlist.contains(T, CommandId::Blitz, blitz.id));
        assert!(!wishlist.contains(Character::Aqua, CommandId::Blitz, blitz.id));
        assert_eq!(wishlist.len(T), 1);
    }

    #[test]
    fn test_prune_decoded_wishlist() {
        let json = format!(
            r#"{{"0":{{"{}":[]}},"2":{{}}}}"#,
            CommandId::Blitz.index()
        );
        let mut wishlist: Wishlist = serde_json::from_str(&json).expect("deserialize");
        assert!(!wishlist.is_empty());

        assert_eq!(wishlist.prune(), 1);
        assert!(wishlist.is_empty());
        assert_eq!(wishlist.entries(T).count(), 0);
    }

    #[test]
    fn test_duplicates_are_independent() {
        let r = recipe(4, CommandId::Fira, [CommandId::Fire, CommandId::Fire]);
        let mut wishlist = Wishlist::new();
        wishlist.add(T, &r);
        wishlist.add(T, &r);
        assert_eq!(wishlist.len(T), 2);

        assert!(wishlist.remove(T, CommandId::Fira, r.id));
        assert_eq!(wishlist.len(T), 1);
        assert!(wishlist.contains(T, CommandId::Fira, r.id));
    }

    #[test]
    fn test_remove_prunes_keys() {
        let r = recipe(7, CommandId::Fira, [CommandId::Fire, CommandId::Fire]);
        let mut wishlist = Wishlist::new();
        wishlist.add(T, &r);

        assert!(!wishlist.remove(T, CommandId::Fira, RecipeId::new(8)));
        assert!(wishlist.remove(T, CommandId::Fira, r.id));
        assert!(!wishlist.remove(T, CommandId::Fira, r.id));
        assert!(wishlist.is_empty());
        assert_eq!(serde_json::to_string(&wishlist).expect("serialize"), "{}");
    }

    #[test]
    fn test_shortage_scenario() {
        let mut wishlist = Wishlist::new();
        wishlist.add(T, &recipe(1, CommandId::Fira, [CommandId::Fire, CommandId::Blizzard]));
        wishlist.add(T, &recipe(2, CommandId::Firaga, [CommandId::Fire, CommandId::Fire]));

        let inv = HashMap::from([(CommandId::Fire, 1), (CommandId::Blizzard, 5)]);
        let shortage = wishlist.ingredient_shortage(T, &inv);

        assert_eq!(shortage.get(&CommandId::Fire), Some(&2));
        assert!(!shortage.contains_key(&CommandId::Blizzard));
        assert!(wishlist
            .ingredient_shortage(Character::Ventus, &inv)
            .is_empty());
    }

    #[test]
    fn test_snapshot_json() {
        let mut wishlist = Wishlist::new();
        let mut r = recipe(3, CommandId::Blitz, [CommandId::StunEdge, CommandId::SlotEdge]);
        r.chance = Some(90);
        wishlist.add(Character::Ventus, &r);

        let json = serde_json::to_string(&wishlist).expect("serialize");
        let expected = format!(
            r#"{{"1":{{"1":[{{"id":3,"ingredients":[{},{}],"family":0,"chance":90}}]}}}}"#,
            CommandId::StunEdge.index(),
            CommandId::SlotEdge.index()
        );
        assert_eq!(json, expected);
        let back: Wishlist = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, wishlist);
    }

    proptest! {
        #[test]
        fn prop_shortage_is_references_minus_owned(
            pairs in prop::collection::vec((0usize..6, 0usize..6), 0..12),
            owned in 0u32..8,
        ) {
            let x = CommandId::ALL[0];
            let mut wishlist = Wishlist::new();
            let mut references = 0u32;
            for (i, (a, b)) in pairs.iter().enumerate() {
                let ingredients = [CommandId::ALL[*a], CommandId::ALL[*b]];
                references += ingredients.iter().filter(|c| **c == x).count() as u32;
                wishlist.add(T, &recipe(i as u16, CommandId::Blitz, ingredients));
            }

            let inv = HashMap::from([(x, owned)]);
            let shortage = wishlist.ingredient_shortage(T, &inv);
            if references <= owned {
                prop_assert!(!shortage.contains_key(&x));
            } else {
                prop_assert_eq!(shortage.get(&x).copied(), Some(references - owned));
            }
        }
    }
}
