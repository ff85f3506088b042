//! Craftability of recipes against an inventory.

use crate::catalog::{Command, Recipe};
use crate::inventory::InventoryView;

/// Whether the inventory holds both ingredients of a recipe.
///
/// A self-pair needs two copies of the same command; distinct ingredients
/// need one copy each. Commands missing from the inventory count as zero.
#[must_use]
pub fn can_craft(recipe: &Recipe, inventory: &impl InventoryView) -> bool {
    let [first, second] = recipe.ingredients;
    if first == second {
        inventory.count(first) >= 2
    } else {
        inventory.count(first) > 0 && inventory.count(second) > 0
    }
}

/// Recipes of a command that can be melded right now.
pub fn craftable_recipes<'a, I: InventoryView>(
    command: &'a Command,
    inventory: &'a I,
) -> impl Iterator<Item = &'a Recipe> + 'a {
    command
        .recipes
        .iter()
        .filter(move |recipe| can_craft(recipe, inventory))
}

/// Commands with at least one craftable recipe, in input order.
pub fn meldable_commands<'c: 'i, 'i, I: InventoryView>(
    commands: impl IntoIterator<Item = &'c Command> + 'i,
    inventory: &'i I,
) -> impl Iterator<Item = &'c Command> + 'i {
    commands
        .into_iter()
        .filter(move |command| craftable_recipes(command, inventory).next().is_some())
}
