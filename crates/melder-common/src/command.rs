//! Command identifiers.

use crate::macros::catalog_enum;

catalog_enum! {
    /// Every command in the melding catalog, in catalog order.
    pub enum CommandId ("command") {
        // Attack
        QuickBlitz => "Quick Blitz",
        Blitz => "Blitz",
        MagicHour => "Magic Hour",
        BarrierSurge => "Barrier Surge",
        MeteorCrash => "Meteor Crash",
        WishingEdge => "Wishing Edge",
        SlidingDash => "Sliding Dash",
        FireDash => "Fire Dash",
        DarkHaze => "Dark Haze",
        SonicBlade => "Sonic Blade",
        ChaosBlade => "Chaos Blade",
        Zantetsuken => "Zantetsuken",
        StrikeRaid => "Strike Raid",
        FreezeRaid => "Freeze Raid",
        TreasureRaid => "Treasure Raid",
        SparkRaid => "Spark Raid",
        WindRaid => "Wind Raid",
        FireSurge => "Fire Surge",
        ThunderSurge => "Thunder Surge",
        AerialSlam => "Aerial Slam",
        ArsSolum => "Ars Solum",
        ArsArcanum => "Ars Arcanum",
        TimeSplicer => "Time Splicer",
        PoisonEdge => "Poison Edge",
        BlizzardEdge => "Blizzard Edge",
        StunEdge => "Stun Edge",
        SlotEdge => "Slot Edge",
        FireStrike => "Fire Strike",
        ConfusionStrike => "Confusion Strike",
        BindingStrike => "Binding Strike",
        BrutalBlast => "Brutal Blast",
        TornadoStrike => "Tornado Strike",
        MagnetSpiral => "Magnet Spiral",
        Windcutter => "Windcutter",
        LimitStorm => "Limit Storm",
        Salvation => "Salvation",
        CollisionMagnet => "Collision Magnet",
        GeoImpact => "Geo Impact",
        Sacrifice => "Sacrifice",
        BreakTime => "Break Time",

        // Magic
        Fire => "Fire",
        Fira => "Fira",
        Firaga => "Firaga",
        DarkFiraga => "Dark Firaga",
        FissionFiraga => "Fission Firaga",
        TripleFiraga => "Triple Firaga",
        CrawlingFire => "Crawling Fire",
        Blizzard => "Blizzard",
        Blizzara => "Blizzara",
        Blizzaga => "Blizzaga",
        TripleBlizzaga => "Triple Blizzaga",
        Thunder => "Thunder",
        Thundara => "Thundara",
        Thundaga => "Thundaga",
        ThundagaShot => "Thundaga Shot",
        Cure => "Cure",
        Cura => "Cura",
        Curaga => "Curaga",
        Esuna => "Esuna",
        MineShield => "Mine Shield",
        MineSquare => "Mine Square",
        SeekerMine => "Seeker Mine",
        ZeroGravity => "Zero Gravity",
        ZeroGravira => "Zero Gravira",
        ZeroGraviga => "Zero Graviga",
        Magnet => "Magnet",
        Magnera => "Magnera",
        Magnega => "Magnega",
        MunnyMagnet => "Munny Magnet",
        EnergyMagnet => "Energy Magnet",
        DLinkMagnet => "D-Link Magnet",
        Aero => "Aero",
        Aerora => "Aerora",
        Aeroga => "Aeroga",
        Warp => "Warp",
        Faith => "Faith",
        DeepFreeze => "Deep Freeze",
        Glacier => "Glacier",
        IceBarrage => "Ice Barrage",
        Tornado => "Tornado",
        FiragaBurst => "Firaga Burst",
        RagingStorm => "Raging Storm",
        MegaFlare => "Mega Flare",
        Quake => "Quake",
        Meteor => "Meteor",
        Transcendence => "Transcendence",
        Mini => "Mini",
        Blackout => "Blackout",
        Ignite => "Ignite",
        Confuse => "Confuse",
        Bind => "Bind",
        Poison => "Poison",
        Slow => "Slow",
        Stop => "Stop",
        Stopra => "Stopra",
        Stopga => "Stopga",
        Sleep => "Sleep",

        // Movement
        Jump => "Jump",
        HighJump => "High Jump",
        DodgeRoll => "Dodge Roll",
        ThunderRoll => "Thunder Roll",
        AirSlide => "Air Slide",
        IceSlide => "Ice Slide",
        Reversal => "Reversal",
        Glide => "Glide",
        Superglide => "Superglide",
        FireGlide => "Fire Glide",
        Cartwheel => "Cartwheel",
        Firewheel => "Firewheel",
        HomingSlide => "Homing Slide",
        SonicImpact => "Sonic Impact",
        Slide => "Slide",
        Teleport => "Teleport",
        Doubleflight => "Doubleflight",

        // Defense
        Block => "Block",
        RenewalBlock => "Renewal Block",
        FocusBlock => "Focus Block",
        StunBlock => "Stun Block",
        PoisonBlock => "Poison Block",
        Barrier => "Barrier",
        RenewalBarrier => "Renewal Barrier",
        FocusBarrier => "Focus Barrier",
        ConfuseBarrier => "Confuse Barrier",
        StopBarrier => "Stop Barrier",

        // Reprisal
        CounterHammer => "Counter Hammer",
        CounterRush => "Counter Rush",
        ReversalSlash => "Reversal Slash",
        PaybackFang => "Payback Fang",
        PaybackRaid => "Payback Raid",
        CounterBlast => "Counter Blast",
        PaybackSurge => "Payback Surge",
        AerialRecovery => "Aerial Recovery",

        // Shotlock
        MeteorShower => "Meteor Shower",
        FlameSalvo => "Flame Salvo",
        ChaosSnake => "Chaos Snake",
        DarkVolley => "Dark Volley",
        Ragnarok => "Ragnarok",
        Thunderstorm => "Thunderstorm",
        BioBarrage => "Bio Barrage",
        PulseBomb => "Pulse Bomb",
        BubbleBlaster => "Bubble Blaster",
        PrismRain => "Prism Rain",
        PhotonCharge => "Photon Charge",
        AbsoluteZero => "Absolute Zero",
        LightningRay => "Lightning Ray",
        SonicShadow => "Sonic Shadow",
        Multivortex => "Multivortex",
        Lightbloom => "Lightbloom",
        UltimaCannon => "Ultima Cannon",
    }
}

catalog_enum! {
    /// Command category.
    pub enum CommandKind ("command kind") {
        Attack => "Attack Commands",
        Magic => "Magic Commands",
        Movement => "Movement Commands",
        Defense => "Defense Commands",
        Reprisal => "Reprisal Commands",
        Shotlock => "Shotlock Commands",
    }
}
