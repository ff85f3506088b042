//! Embedded ability and crystal tables.

use melder_common::{AbilityGroup as G, AbilityId as Ab, AbilityKind, CrystalSlot as S, Family};

use super::{AbilityDef, FamilyDef};

/// Every ability in catalog order.
pub(super) const ABILITIES: &[AbilityDef] = &[
    // Prize
    AbilityDef::new(Ab::TreasureMagnet, AbilityKind::Prize, 5, G::Item),
    AbilityDef::new(Ab::HpPrizePlus, AbilityKind::Prize, 3, G::Prize),
    AbilityDef::new(Ab::LinkPrizePlus, AbilityKind::Prize, 3, G::Prize),
    AbilityDef::new(Ab::LuckyStrike, AbilityKind::Prize, 5, G::Item),

    // Stat
    AbilityDef::new(Ab::HpBoost, AbilityKind::Stat, 3, G::Stat),
    AbilityDef::new(Ab::FireBoost, AbilityKind::Stat, 3, G::Boost),
    AbilityDef::new(Ab::BlizzardBoost, AbilityKind::Stat, 3, G::Boost),
    AbilityDef::new(Ab::ThunderBoost, AbilityKind::Stat, 3, G::Boost),
    AbilityDef::new(Ab::CureBoost, AbilityKind::Stat, 3, G::Boost),
    AbilityDef::new(Ab::ItemBoost, AbilityKind::Stat, 3, G::Boost),
    AbilityDef::new(Ab::AttackHaste, AbilityKind::Stat, 5, G::Haste),
    AbilityDef::new(Ab::MagicHaste, AbilityKind::Stat, 5, G::Haste),
    AbilityDef::new(Ab::ComboFBoost, AbilityKind::Stat, 2, G::Haste),
    AbilityDef::new(Ab::FinishBoost, AbilityKind::Stat, 2, G::Boost),
    AbilityDef::new(Ab::FireScreen, AbilityKind::Stat, 2, G::Defense),
    AbilityDef::new(Ab::BlizzardScreen, AbilityKind::Stat, 2, G::Defense),
    AbilityDef::new(Ab::ThunderScreen, AbilityKind::Stat, 2, G::Defense),
    AbilityDef::new(Ab::DarkScreen, AbilityKind::Stat, 2, G::Defense),
    AbilityDef::new(Ab::ReloadBoost, AbilityKind::Stat, 1, G::Haste),
    AbilityDef::new(Ab::Defender, AbilityKind::Stat, 1, G::Survival),

    // Support
    AbilityDef::new(Ab::ZeroExp, AbilityKind::Support, 1, G::Exp),
    AbilityDef::new(Ab::ComboPlus, AbilityKind::Support, 3, G::Utility),
    AbilityDef::new(Ab::AirComboPlus, AbilityKind::Support, 3, G::Utility),
    AbilityDef::new(Ab::ExpChance, AbilityKind::Support, 1, G::Exp),
    AbilityDef::new(Ab::ExpWalker, AbilityKind::Support, 1, G::Exp),
    AbilityDef::new(Ab::DamageSyphon, AbilityKind::Support, 1, G::Utility),
    AbilityDef::new(Ab::SecondChance, AbilityKind::Support, 1, G::Survival),
    AbilityDef::new(Ab::OnceMore, AbilityKind::Support, 1, G::Survival),
    AbilityDef::new(Ab::Scan, AbilityKind::Support, 1, G::Utility),
    AbilityDef::new(Ab::LeafBracer, AbilityKind::Support, 1, G::Utility),
];

/// Crystal yields per family, in family order.
pub(super) const FAMILIES: &[FamilyDef] = &[
    FamilyDef::new(Family::A, &[
        (S::Shimmering, Ab::FireBoost),
        (S::Fleeting, Ab::MagicHaste),
        (S::Pulsing, Ab::LeafBracer),
        (S::Wellspring, Ab::AirComboPlus),
        (S::Soothing, Ab::HpBoost),
        (S::Hungry, Ab::HpPrizePlus),
        (S::Abounding, Ab::LinkPrizePlus),
    ]),
    FamilyDef::new(Family::B, &[
        (S::Shimmering, Ab::FireBoost),
        (S::Fleeting, Ab::ReloadBoost),
        (S::Pulsing, Ab::FinishBoost),
        (S::Wellspring, Ab::OnceMore),
        (S::Soothing, Ab::DamageSyphon),
        (S::Hungry, Ab::HpPrizePlus),
        (S::Abounding, Ab::ExpChance),
    ]),
    FamilyDef::new(Family::C, &[
        (S::Shimmering, Ab::FireScreen),
        (S::Fleeting, Ab::AttackHaste),
        (S::Pulsing, Ab::FinishBoost),
        (S::Wellspring, Ab::ComboPlus),
        (S::Soothing, Ab::HpBoost),
        (S::Hungry, Ab::HpPrizePlus),
        (S::Abounding, Ab::LinkPrizePlus),
    ]),
    FamilyDef::new(Family::D, &[
        (S::Shimmering, Ab::FireScreen),
        (S::Fleeting, Ab::AttackHaste),
        (S::Pulsing, Ab::LeafBracer),
        (S::Wellspring, Ab::ComboPlus),
        (S::Soothing, Ab::HpBoost),
        (S::Hungry, Ab::HpPrizePlus),
        (S::Abounding, Ab::LinkPrizePlus),
    ]),
    FamilyDef::new(Family::E, &[
        (S::Shimmering, Ab::BlizzardBoost),
        (S::Fleeting, Ab::MagicHaste),
        (S::Pulsing, Ab::LeafBracer),
        (S::Wellspring, Ab::ComboPlus),
        (S::Soothing, Ab::ItemBoost),
        (S::Hungry, Ab::HpPrizePlus),
        (S::Abounding, Ab::LuckyStrike),
    ]),
    FamilyDef::new(Family::F, &[
        (S::Shimmering, Ab::BlizzardBoost),
        (S::Fleeting, Ab::ReloadBoost),
        (S::Pulsing, Ab::SecondChance),
        (S::Wellspring, Ab::AirComboPlus),
        (S::Soothing, Ab::DamageSyphon),
        (S::Hungry, Ab::HpPrizePlus),
        (S::Abounding, Ab::LuckyStrike),
    ]),
    FamilyDef::new(Family::G, &[
        (S::Shimmering, Ab::BlizzardScreen),
        (S::Fleeting, Ab::AttackHaste),
        (S::Pulsing, Ab::LeafBracer),
        (S::Wellspring, Ab::AirComboPlus),
        (S::Soothing, Ab::ItemBoost),
        (S::Hungry, Ab::HpPrizePlus),
        (S::Abounding, Ab::LuckyStrike),
    ]),
    FamilyDef::new(Family::H, &[
        (S::Shimmering, Ab::BlizzardScreen),
        (S::Fleeting, Ab::MagicHaste),
        (S::Pulsing, Ab::ComboFBoost),
        (S::Wellspring, Ab::AirComboPlus),
        (S::Soothing, Ab::ItemBoost),
        (S::Hungry, Ab::HpPrizePlus),
        (S::Abounding, Ab::ExpWalker),
    ]),
    FamilyDef::new(Family::I, &[
        (S::Shimmering, Ab::ThunderBoost),
        (S::Fleeting, Ab::MagicHaste),
        (S::Pulsing, Ab::ComboFBoost),
        (S::Wellspring, Ab::AirComboPlus),
        (S::Soothing, Ab::HpBoost),
        (S::Hungry, Ab::TreasureMagnet),
        (S::Abounding, Ab::LinkPrizePlus),
    ]),
    FamilyDef::new(Family::J, &[
        (S::Shimmering, Ab::ThunderBoost),
        (S::Fleeting, Ab::ReloadBoost),
        (S::Pulsing, Ab::ComboFBoost),
        (S::Wellspring, Ab::OnceMore),
        (S::Soothing, Ab::Defender),
        (S::Hungry, Ab::TreasureMagnet),
        (S::Abounding, Ab::ExpChance),
    ]),
    FamilyDef::new(Family::K, &[
        (S::Shimmering, Ab::ThunderScreen),
        (S::Fleeting, Ab::AttackHaste),
        (S::Pulsing, Ab::FinishBoost),
        (S::Wellspring, Ab::ComboPlus),
        (S::Soothing, Ab::HpBoost),
        (S::Hungry, Ab::TreasureMagnet),
        (S::Abounding, Ab::LinkPrizePlus),
    ]),
    FamilyDef::new(Family::L, &[
        (S::Shimmering, Ab::ThunderScreen),
        (S::Fleeting, Ab::AttackHaste),
        (S::Pulsing, Ab::FinishBoost),
        (S::Wellspring, Ab::ComboPlus),
        (S::Soothing, Ab::HpBoost),
        (S::Hungry, Ab::TreasureMagnet),
        (S::Abounding, Ab::LuckyStrike),
    ]),
    FamilyDef::new(Family::M, &[
        (S::Shimmering, Ab::CureBoost),
        (S::Fleeting, Ab::MagicHaste),
        (S::Pulsing, Ab::ComboFBoost),
        (S::Wellspring, Ab::ComboPlus),
        (S::Soothing, Ab::ItemBoost),
        (S::Hungry, Ab::TreasureMagnet),
        (S::Abounding, Ab::LuckyStrike),
    ]),
    FamilyDef::new(Family::N, &[
        (S::Shimmering, Ab::CureBoost),
        (S::Fleeting, Ab::ReloadBoost),
        (S::Pulsing, Ab::SecondChance),
        (S::Wellspring, Ab::ComboPlus),
        (S::Soothing, Ab::Defender),
        (S::Hungry, Ab::TreasureMagnet),
        (S::Abounding, Ab::LuckyStrike),
    ]),
    FamilyDef::new(Family::O, &[
        (S::Shimmering, Ab::DarkScreen),
        (S::Fleeting, Ab::AttackHaste),
        (S::Pulsing, Ab::FinishBoost),
        (S::Wellspring, Ab::AirComboPlus),
        (S::Soothing, Ab::ItemBoost),
        (S::Hungry, Ab::TreasureMagnet),
        (S::Abounding, Ab::LuckyStrike),
    ]),
    FamilyDef::new(Family::P, &[
        (S::Shimmering, Ab::DarkScreen),
        (S::Fleeting, Ab::MagicHaste),
        (S::Pulsing, Ab::ComboFBoost),
        (S::Wellspring, Ab::AirComboPlus),
        (S::Soothing, Ab::ItemBoost),
        (S::Hungry, Ab::TreasureMagnet),
        (S::Abounding, Ab::ExpWalker),
    ]),
];
