//! Ability identifiers.

use crate::macros::catalog_enum;

catalog_enum! {
    /// Every ability a meld can yield, in catalog order.
    pub enum AbilityId ("ability") {
        // Prize
        TreasureMagnet => "Treasure Magnet",
        HpPrizePlus => "HP Prize Plus",
        LinkPrizePlus => "Link Prize Plus",
        LuckyStrike => "Lucky Strike",

        // Stat
        HpBoost => "HP Boost",
        FireBoost => "Fire Boost",
        BlizzardBoost => "Blizzard Boost",
        ThunderBoost => "Thunder Boost",
        CureBoost => "Cure Boost",
        ItemBoost => "Item Boost",
        AttackHaste => "Attack Haste",
        MagicHaste => "Magic Haste",
        ComboFBoost => "Combo-F Boost",
        FinishBoost => "Finish Boost",
        FireScreen => "Fire Screen",
        BlizzardScreen => "Blizzard Screen",
        ThunderScreen => "Thunder Screen",
        DarkScreen => "Dark Screen",
        ReloadBoost => "Reload Boost",
        Defender => "Defender",

        // Support
        ZeroExp => "Zero EXP",
        ComboPlus => "Combo Plus",
        AirComboPlus => "Air Combo Plus",
        ExpChance => "EXP Chance",
        ExpWalker => "EXP Walker",
        DamageSyphon => "Damage Syphon",
        SecondChance => "Second Chance",
        OnceMore => "Once More",
        Scan => "Scan",
        LeafBracer => "Leaf Bracer",
    }
}

catalog_enum! {
    /// Ability category.
    pub enum AbilityKind ("ability kind") {
        Prize => "Prize Abilities",
        Stat => "Stat Abilities",
        Support => "Support Abilities",
    }
}

catalog_enum! {
    /// Presentation group an ability is filed under.
    pub enum AbilityGroup ("ability group") {
        Item => "Item",
        Prize => "Prize",
        Stat => "Stat",
        Boost => "Boost",
        Haste => "Haste",
        Defense => "Defense",
        Survival => "Survival",
        Exp => "EXP",
        Utility => "Utility",
    }
}
