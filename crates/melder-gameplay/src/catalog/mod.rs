//! Static melding catalog.
//!
//! This module provides:
//! - Const definition tables for commands, recipes, abilities and crystal yields
//! - Validation of those tables at load time
//! - Read-only lookups used by every other system

mod abilities;
mod commands;

use melder_common::{
    AbilityGroup, AbilityId, AbilityKind, Character, CommandId, CommandKind, CrystalSlot, Family,
    RecipeId,
};
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::info;

/// Catalog validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A table has the wrong number of rows
    #[error("{table} table has {found} rows, expected {expected}")]
    TableLength {
        /// Table name
        table: &'static str,
        /// Required row count
        expected: usize,
        /// Actual row count
        found: usize,
    },
    /// A table row is not in identifier order
    #[error("{table} table row {position} holds {found}")]
    OutOfOrder {
        /// Table name
        table: &'static str,
        /// Row index
        position: usize,
        /// Identifier key found at that row
        found: &'static str,
    },
    /// Command is not available to any character
    #[error("Command {0:?} is not available to any character")]
    NoCharacters(CommandId),
    /// Recipe success chance outside 1..=100
    #[error("Recipe for {command:?} has chance {chance}%")]
    InvalidChance {
        /// Command the recipe produces
        command: CommandId,
        /// Offending chance
        chance: u8,
    },
    /// Recipe family yields nothing
    #[error("Recipe for {command:?} uses family {family:?} with an empty crystal map")]
    EmptyCrystalMap {
        /// Command the recipe produces
        command: CommandId,
        /// Family tag of the recipe
        family: Family,
    },
    /// Crystal slot listed twice in one family
    #[error("Family {family:?} lists {slot:?} twice")]
    DuplicateCrystal {
        /// Family tag
        family: Family,
        /// Repeated slot
        slot: CrystalSlot,
    },
    /// Ability limit must be positive
    #[error("Ability {0:?} has a zero limit")]
    ZeroLimit(AbilityId),
}

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// Definition tables
// ============================================================================

/// Const definition of one recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeDef {
    /// Ingredient pair in display order
    pub ingredients: [CommandId; 2],
    /// Crystal family tag
    pub family: Family,
    /// Success chance percentage, `None` when guaranteed
    pub chance: Option<u8>,
}

impl RecipeDef {
    /// Sets the success chance percentage.
    #[must_use]
    pub const fn chance(mut self, percent: u8) -> Self {
        self.chance = Some(percent);
        self
    }
}

/// Starts a guaranteed recipe from two ingredients and a family.
#[must_use]
pub const fn meld(first: CommandId, second: CommandId, family: Family) -> RecipeDef {
    RecipeDef {
        ingredients: [first, second],
        family,
        chance: None,
    }
}

/// Const definition of one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
    /// Command identifier
    pub id: CommandId,
    /// Command category
    pub kind: CommandKind,
    /// Characters that can use the command
    pub characters: &'static [Character],
    /// Recipes producing the command
    pub recipes: &'static [RecipeDef],
}

impl CommandDef {
    /// Creates a command definition.
    #[must_use]
    pub const fn new(
        id: CommandId,
        kind: CommandKind,
        characters: &'static [Character],
        recipes: &'static [RecipeDef],
    ) -> Self {
        Self {
            id,
            kind,
            characters,
            recipes,
        }
    }
}

/// Const definition of one ability.
#[derive(Debug, Clone, Copy)]
pub struct AbilityDef {
    /// Ability identifier
    pub id: AbilityId,
    /// Ability category
    pub kind: AbilityKind,
    /// Maximum number a profile can hold
    pub limit: u8,
    /// Presentation group
    pub group: AbilityGroup,
}

impl AbilityDef {
    /// Creates an ability definition.
    #[must_use]
    pub const fn new(id: AbilityId, kind: AbilityKind, limit: u8, group: AbilityGroup) -> Self {
        Self {
            id,
            kind,
            limit,
            group,
        }
    }
}

/// Const definition of the crystal yields of one family.
#[derive(Debug, Clone, Copy)]
pub struct FamilyDef {
    /// Family tag
    pub family: Family,
    /// Ability yielded by each crystal, in slot order
    pub crystals: &'static [(CrystalSlot, AbilityId)],
}

impl FamilyDef {
    /// Creates a family definition.
    #[must_use]
    pub const fn new(family: Family, crystals: &'static [(CrystalSlot, AbilityId)]) -> Self {
        Self { family, crystals }
    }
}

// ============================================================================
// Catalog entities
// ============================================================================

/// A meld producing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    /// Catalog-wide recipe identifier
    pub id: RecipeId,
    /// Command this recipe produces
    pub output: CommandId,
    /// Ingredient pair in display order
    pub ingredients: [CommandId; 2],
    /// Crystal family tag
    pub family: Family,
    /// Success chance percentage, `None` when guaranteed
    pub chance: Option<u8>,
}

impl Recipe {
    /// Whether the meld always succeeds.
    #[must_use]
    pub fn is_guaranteed(&self) -> bool {
        self.chance.is_none()
    }

    /// Whether both ingredients are the same command.
    #[must_use]
    pub fn is_self_pair(&self) -> bool {
        self.ingredients[0] == self.ingredients[1]
    }

    /// Whether `command` is one of the ingredients.
    #[must_use]
    pub fn uses(&self, command: CommandId) -> bool {
        self.ingredients.contains(&command)
    }
}

/// A catalog command with its recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Command identifier
    pub id: CommandId,
    /// Command category
    pub kind: CommandKind,
    /// Characters that can use the command
    pub characters: Vec<Character>,
    /// Recipes producing the command; empty for base commands
    pub recipes: Vec<Recipe>,
}

impl Command {
    /// Whether the command is available to a character.
    #[must_use]
    pub fn is_available_to(&self, character: Character) -> bool {
        self.characters.contains(&character)
    }

    /// Whether the command can only be obtained directly.
    #[must_use]
    pub fn is_base(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// An ability with its holding limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ability {
    /// Ability identifier
    pub id: AbilityId,
    /// Ability category
    pub kind: AbilityKind,
    /// Maximum number a profile can hold
    pub limit: u8,
    /// Presentation group
    pub group: AbilityGroup,
}

/// Ability yielded by each crystal for one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrystalMap {
    /// Family tag
    pub family: Family,
    slots: Vec<(CrystalSlot, AbilityId)>,
}

impl CrystalMap {
    /// Ability the given crystal yields, if the slot is mapped.
    #[must_use]
    pub fn ability_at(&self, slot: CrystalSlot) -> Option<AbilityId> {
        self.slots
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, ability)| *ability)
    }

    /// Whether any crystal yields the ability.
    #[must_use]
    pub fn yields(&self, ability: AbilityId) -> bool {
        self.slots.iter().any(|(_, a)| *a == ability)
    }

    /// Mapped crystals in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (CrystalSlot, AbilityId)> + '_ {
        self.slots.iter().copied()
    }

    /// Yielded abilities in slot order.
    pub fn abilities(&self) -> impl Iterator<Item = AbilityId> + '_ {
        self.slots.iter().map(|(_, ability)| *ability)
    }

    /// Number of mapped crystals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no crystal is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Immutable melding catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    commands: Vec<Command>,
    abilities: Vec<Ability>,
    families: Vec<CrystalMap>,
    /// Recipe id -> (command, offset into its recipe list).
    recipe_index: Vec<(CommandId, usize)>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The embedded catalog, built and validated on first use.
    ///
    /// # Panics
    ///
    /// Panics if the embedded tables fail validation.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            Self::from_tables(commands::COMMANDS, abilities::ABILITIES, abilities::FAMILIES)
                .unwrap_or_else(|e| panic!("embedded melding catalog is invalid: {e}"))
        })
    }

    /// Builds and validates a catalog from definition tables.
    pub fn from_tables(
        commands: &[CommandDef],
        abilities: &[AbilityDef],
        families: &[FamilyDef],
    ) -> CatalogResult<Self> {
        check_order("command", commands, CommandId::COUNT, |d| {
            (d.id.index(), d.id.key())
        })?;
        check_order("ability", abilities, AbilityId::COUNT, |d| {
            (d.id.index(), d.id.key())
        })?;
        check_order("family", families, Family::COUNT, |d| {
            (d.family.index(), d.family.key())
        })?;

        for def in abilities {
            if def.limit == 0 {
                return Err(CatalogError::ZeroLimit(def.id));
            }
        }

        let mut crystal_maps = Vec::with_capacity(families.len());
        for def in families {
            let mut slots: Vec<(CrystalSlot, AbilityId)> = Vec::with_capacity(def.crystals.len());
            for &(slot, ability) in def.crystals {
                if slots.iter().any(|(s, _)| *s == slot) {
                    return Err(CatalogError::DuplicateCrystal {
                        family: def.family,
                        slot,
                    });
                }
                slots.push((slot, ability));
            }
            crystal_maps.push(CrystalMap {
                family: def.family,
                slots,
            });
        }

        let mut built = Vec::with_capacity(commands.len());
        let mut recipe_index = Vec::new();
        for def in commands {
            if def.characters.is_empty() {
                return Err(CatalogError::NoCharacters(def.id));
            }

            let mut recipes = Vec::with_capacity(def.recipes.len());
            for recipe in def.recipes {
                if let Some(chance) = recipe.chance {
                    if !(1..=100).contains(&chance) {
                        return Err(CatalogError::InvalidChance {
                            command: def.id,
                            chance,
                        });
                    }
                }
                if crystal_maps[recipe.family.index()].is_empty() {
                    return Err(CatalogError::EmptyCrystalMap {
                        command: def.id,
                        family: recipe.family,
                    });
                }

                let id = RecipeId::new(recipe_index.len() as u16);
                recipe_index.push((def.id, recipes.len()));
                recipes.push(Recipe {
                    id,
                    output: def.id,
                    ingredients: recipe.ingredients,
                    family: recipe.family,
                    chance: recipe.chance,
                });
            }

            built.push(Command {
                id: def.id,
                kind: def.kind,
                characters: def.characters.to_vec(),
                recipes,
            });
        }

        let catalog = Self {
            commands: built,
            abilities: abilities
                .iter()
                .map(|d| Ability {
                    id: d.id,
                    kind: d.kind,
                    limit: d.limit,
                    group: d.group,
                })
                .collect(),
            families: crystal_maps,
            recipe_index,
        };

        info!(
            "Catalog built: {} commands, {} recipes, {} abilities, {} families",
            catalog.commands.len(),
            catalog.recipe_index.len(),
            catalog.abilities.len(),
            catalog.families.len()
        );

        Ok(catalog)
    }

    /// Looks up a command. Total over `CommandId`.
    #[must_use]
    pub fn command(&self, id: CommandId) -> &Command {
        &self.commands[id.index()]
    }

    /// All commands in catalog order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Commands available to a character, in catalog order.
    pub fn commands_for(&self, character: Character) -> impl Iterator<Item = &Command> + '_ {
        self.commands
            .iter()
            .filter(move |c| c.is_available_to(character))
    }

    /// Commands of one kind available to a character, in catalog order.
    pub fn commands_of_kind(
        &self,
        character: Character,
        kind: CommandKind,
    ) -> impl Iterator<Item = &Command> + '_ {
        self.commands_for(character).filter(move |c| c.kind == kind)
    }

    /// Looks up an ability. Total over `AbilityId`.
    #[must_use]
    pub fn ability(&self, id: AbilityId) -> &Ability {
        &self.abilities[id.index()]
    }

    /// All abilities in catalog order.
    #[must_use]
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    /// Looks up a recipe by id.
    #[must_use]
    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        let &(command, offset) = self.recipe_index.get(id.raw() as usize)?;
        self.commands[command.index()].recipes.get(offset)
    }

    /// Every recipe in catalog order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.commands.iter().flat_map(|c| c.recipes.iter())
    }

    /// Number of recipes in the catalog.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipe_index.len()
    }

    /// Crystal yields of a family.
    #[must_use]
    pub fn crystals(&self, family: Family) -> &CrystalMap {
        &self.families[family.index()]
    }

    /// Abilities a family yields, in slot order.
    pub fn abilities_for(&self, family: Family) -> impl Iterator<Item = AbilityId> + '_ {
        self.crystals(family).abilities()
    }

    /// Families with at least one crystal yielding the ability.
    #[must_use]
    pub fn families_yielding(&self, ability: AbilityId) -> Vec<Family> {
        self.families
            .iter()
            .filter(|map| map.yields(ability))
            .map(|map| map.family)
            .collect()
    }

    /// Crystal to ability table for a recipe.
    #[must_use]
    pub fn meld_outcomes(&self, recipe: &Recipe) -> Vec<(CrystalSlot, AbilityId)> {
        self.crystals(recipe.family).iter().collect()
    }
}

fn check_order<T>(
    table: &'static str,
    rows: &[T],
    expected: usize,
    id_of: impl Fn(&T) -> (usize, &'static str),
) -> CatalogResult<()> {
    if rows.len() != expected {
        return Err(CatalogError::TableLength {
            table,
            expected,
            found: rows.len(),
        });
    }
    for (position, row) in rows.iter().enumerate() {
        let (index, key) = id_of(row);
        if index != position {
            return Err(CatalogError::OutOfOrder {
                table,
                position,
                found: key,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tables() -> (Vec<CommandDef>, Vec<AbilityDef>, Vec<FamilyDef>) {
        (
            commands::COMMANDS.to_vec(),
            abilities::ABILITIES.to_vec(),
            abilities::FAMILIES.to_vec(),
        )
    }

    #[test]
    fn test_builtin_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.commands().len(), 149);
        assert_eq!(catalog.recipe_count(), 278);
        assert_eq!(catalog.recipes().count(), 278);
        assert_eq!(catalog.abilities().len(), 30);
        assert_eq!(Family::ALL.len(), 16);
    }

    #[test]
    fn test_recipe_ids_unique_and_resolvable() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for recipe in catalog.recipes() {
            assert!(seen.insert(recipe.id));
            let looked_up = catalog.recipe(recipe.id).expect("recipe by id");
            assert_eq!(looked_up, recipe);
            assert!(catalog.command(recipe.output).recipes.contains(recipe));
        }
        assert!(catalog.recipe(RecipeId::new(278)).is_none());
    }

    #[test]
    fn test_known_entries() {
        let catalog = Catalog::builtin();

        let blitz = catalog.command(CommandId::Blitz);
        assert_eq!(blitz.kind, CommandKind::Attack);
        assert_eq!(blitz.recipes.len(), 2);
        assert_eq!(
            blitz.recipes[0].ingredients,
            [CommandId::StunEdge, CommandId::SlotEdge]
        );
        assert_eq!(blitz.recipes[0].family, Family::K);
        assert_eq!(blitz.recipes[0].chance, Some(90));

        assert!(catalog.command(CommandId::QuickBlitz).is_base());
        assert!(catalog
            .command(CommandId::MagicHour)
            .is_available_to(Character::Aqua));
        assert!(!catalog
            .command(CommandId::MagicHour)
            .is_available_to(Character::Terra));

        let magnet = catalog.ability(AbilityId::TreasureMagnet);
        assert_eq!(magnet.limit, 5);
        assert_eq!(magnet.group, AbilityGroup::Item);
    }

    #[test]
    fn test_crystal_lookups() {
        let catalog = Catalog::builtin();
        let a = catalog.crystals(Family::A);
        assert_eq!(a.len(), 7);
        assert_eq!(a.ability_at(CrystalSlot::Shimmering), Some(AbilityId::FireBoost));
        assert_eq!(a.ability_at(CrystalSlot::Abounding), Some(AbilityId::LinkPrizePlus));
        assert!(a.yields(AbilityId::LeafBracer));
        assert!(!a.yields(AbilityId::Scan));

        let first: Vec<_> = catalog.abilities_for(Family::A).take(2).collect();
        assert_eq!(first, vec![AbilityId::FireBoost, AbilityId::MagicHaste]);

        let defender = catalog.families_yielding(AbilityId::Defender);
        assert_eq!(defender, vec![Family::J, Family::N]);
        assert!(catalog.families_yielding(AbilityId::Scan).is_empty());
    }

    #[test]
    fn test_meld_outcomes_follow_family() {
        let catalog = Catalog::builtin();
        let recipe = &catalog.command(CommandId::Blitz).recipes[0];
        let outcomes = catalog.meld_outcomes(recipe);
        assert_eq!(outcomes.len(), 7);
        assert_eq!(outcomes[0], (CrystalSlot::Shimmering, AbilityId::ThunderScreen));
    }

    #[test]
    fn test_character_grouping() {
        let catalog = Catalog::builtin();
        for character in Character::ALL.iter().copied() {
            let visible: Vec<_> = catalog.commands_for(character).collect();
            assert!(!visible.is_empty());
            assert!(visible.iter().all(|c| c.is_available_to(character)));
            assert!(visible.windows(2).all(|w| w[0].id < w[1].id));

            let by_kind: usize = CommandKind::ALL
                .iter()
                .map(|kind| catalog.commands_of_kind(character, *kind).count())
                .sum();
            assert_eq!(by_kind, visible.len());
        }
        assert!(catalog
            .commands_for(Character::Terra)
            .any(|c| c.id == CommandId::UltimaCannon));
    }

    #[test]
    fn test_rejects_out_of_order_commands() {
        let (mut commands, abilities, families) = tables();
        commands.swap(0, 1);
        let err = Catalog::from_tables(&commands, &abilities, &families).expect_err("order");
        assert_eq!(
            err,
            CatalogError::OutOfOrder {
                table: "command",
                position: 0,
                found: "Blitz",
            }
        );
    }

    #[test]
    fn test_rejects_missing_ability() {
        let (commands, mut abilities, families) = tables();
        abilities.pop();
        let err = Catalog::from_tables(&commands, &abilities, &families).expect_err("length");
        assert!(matches!(
            err,
            CatalogError::TableLength {
                table: "ability",
                expected: 30,
                found: 29
            }
        ));
    }

    #[test]
    fn test_rejects_empty_crystal_map() {
        let (commands, abilities, mut families) = tables();
        families[Family::K.index()] = FamilyDef::new(Family::K, &[]);
        let err = Catalog::from_tables(&commands, &abilities, &families).expect_err("empty map");
        assert!(matches!(
            err,
            CatalogError::EmptyCrystalMap {
                family: Family::K,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_chance() {
        static ZERO: [RecipeDef; 1] =
            [meld(CommandId::QuickBlitz, CommandId::QuickBlitz, Family::A).chance(0)];
        static OVER: [RecipeDef; 1] =
            [meld(CommandId::QuickBlitz, CommandId::QuickBlitz, Family::A).chance(101)];

        for bad in [&ZERO[..], &OVER[..]] {
            let (mut commands, abilities, families) = tables();
            commands[0].recipes = bad;
            let err = Catalog::from_tables(&commands, &abilities, &families).expect_err("chance");
            assert!(matches!(err, CatalogError::InvalidChance { .. }));
        }
    }

    #[test]
    fn test_rejects_zero_limit_and_orphan_command() {
        let (commands, mut abilities, families) = tables();
        abilities[0].limit = 0;
        assert_eq!(
            Catalog::from_tables(&commands, &abilities, &families).expect_err("limit"),
            CatalogError::ZeroLimit(AbilityId::TreasureMagnet)
        );

        let (mut commands, abilities, families) = tables();
        commands[3].characters = &[];
        assert!(matches!(
            Catalog::from_tables(&commands, &abilities, &families),
            Err(CatalogError::NoCharacters(CommandId::BarrierSurge))
        ));
    }

    #[test]
    fn test_rejects_duplicate_crystal() {
        let (commands, abilities, mut families) = tables();
        families[0] = FamilyDef::new(
            Family::A,
            &[
                (CrystalSlot::Shimmering, AbilityId::FireBoost),
                (CrystalSlot::Shimmering, AbilityId::MagicHaste),
            ],
        );
        assert_eq!(
            Catalog::from_tables(&commands, &abilities, &families).expect_err("dup"),
            CatalogError::DuplicateCrystal {
                family: Family::A,
                slot: CrystalSlot::Shimmering,
            }
        );
    }
}
