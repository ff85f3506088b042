//! Identifier types for profiles, crystal families and recipes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::macros::catalog_enum;

catalog_enum! {
    /// A playable character. All mutable planner state is partitioned by
    /// character.
    pub enum Character ("character") {
        Terra => "Terra",
        Ventus => "Ventus",
        Aqua => "Aqua",
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::Terra
    }
}

catalog_enum! {
    /// Crystal family tag carried by every recipe. The family decides which
    /// ability each crystal yields when the recipe is melded.
    pub enum Family ("family") {
        A => "A",
        B => "B",
        C => "C",
        D => "D",
        E => "E",
        F => "F",
        G => "G",
        H => "H",
        I => "I",
        J => "J",
        K => "K",
        L => "L",
        M => "M",
        N => "N",
        O => "O",
        P => "P",
    }
}

catalog_enum! {
    /// One of the seven crystals that can be added to a meld.
    pub enum CrystalSlot ("crystal") {
        Shimmering => "Shimmering Crystal",
        Fleeting => "Fleeting Crystal",
        Pulsing => "Pulsing Crystal",
        Wellspring => "Wellspring Crystal",
        Soothing => "Soothing Crystal",
        Hungry => "Hungry Crystal",
        Abounding => "Abounding Crystal",
    }
}

/// Unique identifier for a recipe.
///
/// Assigned sequentially over the whole catalog when it is built, so one
/// command with several recipes still gets a distinct id per recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(u16);

impl RecipeId {
    /// Creates a recipe ID from a raw value.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recipe#{}", self.0)
    }
}
