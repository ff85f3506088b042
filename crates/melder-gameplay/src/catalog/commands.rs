//! Embedded command table.

use melder_common::{Character, CommandId as Cmd, CommandKind, Family as F};

use super::{meld, CommandDef};

const EVERYONE: &[Character] = &[Character::Terra, Character::Ventus, Character::Aqua];
const TERRA: &[Character] = &[Character::Terra];
const VENTUS: &[Character] = &[Character::Ventus];
const AQUA: &[Character] = &[Character::Aqua];

/// Every command in catalog order.
pub(super) const COMMANDS: &[CommandDef] = &[
    // Attack
    CommandDef::new(Cmd::QuickBlitz, CommandKind::Attack, EVERYONE, &[]),
    CommandDef::new(Cmd::Blitz, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::StunEdge, Cmd::SlotEdge, F::K).chance(90),
        meld(Cmd::QuickBlitz, Cmd::SlotEdge, F::O).chance(90),
    ]),
    CommandDef::new(Cmd::MagicHour, CommandKind::Attack, AQUA, &[
        meld(Cmd::Blitz, Cmd::ZeroGraviga, F::O).chance(90),
        meld(Cmd::BarrierSurge, Cmd::Aeroga, F::N).chance(90),
    ]),
    CommandDef::new(Cmd::BarrierSurge, CommandKind::Attack, AQUA, &[
        meld(Cmd::FireDash, Cmd::Barrier, F::D),
        meld(Cmd::StunEdge, Cmd::Barrier, F::K),
    ]),
    CommandDef::new(Cmd::MeteorCrash, CommandKind::Attack, TERRA, &[
        meld(Cmd::FireStrike, Cmd::BrutalBlast, F::D),
        meld(Cmd::Blitz, Cmd::Quake, F::N),
    ]),
    CommandDef::new(Cmd::WishingEdge, CommandKind::Attack, AQUA, &[
        meld(Cmd::StrikeRaid, Cmd::BarrierSurge, F::O),
        meld(Cmd::BarrierSurge, Cmd::StunEdge, F::K),
        meld(Cmd::StunEdge, Cmd::BindingStrike, F::J),
    ]),
    CommandDef::new(Cmd::SlidingDash, CommandKind::Attack, EVERYONE, &[]),
    CommandDef::new(Cmd::FireDash, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::SlidingDash, Cmd::Fira, F::C),
        meld(Cmd::SlidingDash, Cmd::Fire, F::D),
        meld(Cmd::ConfusionStrike, Cmd::Fire, F::D),
    ]),
    CommandDef::new(Cmd::DarkHaze, CommandKind::Attack, TERRA, &[
        meld(Cmd::FireDash, Cmd::Blackout, F::A),
        meld(Cmd::FireSurge, Cmd::ZeroGravity, F::C),
        meld(Cmd::FireDash, Cmd::ZeroGravira, F::D),
    ]),
    CommandDef::new(Cmd::SonicBlade, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::Blitz, Cmd::DarkHaze, F::D).chance(90),
        meld(Cmd::FireDash, Cmd::ThunderSurge, F::K).chance(90),
        meld(Cmd::Blitz, Cmd::AirSlide, F::N).chance(90),
    ]),
    CommandDef::new(Cmd::ChaosBlade, CommandKind::Attack, TERRA, &[
        meld(Cmd::DarkHaze, Cmd::SonicBlade, F::B).chance(90),
    ]),
    CommandDef::new(Cmd::Zantetsuken, CommandKind::Attack, TERRA, &[
        meld(Cmd::DarkHaze, Cmd::Stopga, F::B).chance(80),
        meld(Cmd::SonicBlade, Cmd::Stopga, F::F).chance(80),
    ]),
    CommandDef::new(Cmd::StrikeRaid, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::QuickBlitz, Cmd::SlidingDash, F::O),
    ]),
    CommandDef::new(Cmd::FreezeRaid, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::StrikeRaid, Cmd::Blizzara, F::I),
        meld(Cmd::BlizzardEdge, Cmd::BindingStrike, F::K),
    ]),
    CommandDef::new(Cmd::TreasureRaid, CommandKind::Attack, VENTUS, &[
        meld(Cmd::StrikeRaid, Cmd::SlotEdge, F::O),
        meld(Cmd::SlotEdge, Cmd::Magnet, F::D),
        meld(Cmd::SlotEdge, Cmd::Magnera, F::K),
    ]),
    CommandDef::new(Cmd::SparkRaid, CommandKind::Attack, VENTUS, &[
        meld(Cmd::FreezeRaid, Cmd::Magnega, F::J),
        meld(Cmd::TreasureRaid, Cmd::Magnega, F::N),
        meld(Cmd::ThunderSurge, Cmd::DodgeRoll, F::P).chance(20),
        meld(Cmd::Thundaga, Cmd::DodgeRoll, F::L).chance(20),
        meld(Cmd::DodgeRoll, Cmd::StunBlock, F::L).chance(20),
    ]),
    CommandDef::new(Cmd::WindRaid, CommandKind::Attack, VENTUS, &[
        meld(Cmd::FreezeRaid, Cmd::Aeroga, F::B),
        meld(Cmd::TreasureRaid, Cmd::Aeroga, F::F),
    ]),
    CommandDef::new(Cmd::FireSurge, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::FireStrike, Cmd::Fira, F::A),
        meld(Cmd::FireDash, Cmd::Ignite, F::D),
        meld(Cmd::BindingStrike, Cmd::Fira, F::K),
        meld(Cmd::ConfusionStrike, Cmd::Fira, F::O),
    ]),
    CommandDef::new(Cmd::ThunderSurge, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::FireDash, Cmd::Thundara, F::D),
        meld(Cmd::FreezeRaid, Cmd::Thundara, F::G),
        meld(Cmd::StunEdge, Cmd::Thundara, F::I),
        meld(Cmd::ConfusionStrike, Cmd::Thundara, F::I).chance(95),
    ]),
    CommandDef::new(Cmd::AerialSlam, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::FireDash, Cmd::HighJump, F::A),
        meld(Cmd::FireStrike, Cmd::Aerora, F::C).chance(90),
        meld(Cmd::FireSurge, Cmd::Aero, F::D),
    ]),
    CommandDef::new(Cmd::ArsSolum, CommandKind::Attack, TERRA, &[
        meld(Cmd::DarkHaze, Cmd::SonicBlade, F::B).chance(20),
        meld(Cmd::DarkHaze, Cmd::Stopga, F::B).chance(20),
        meld(Cmd::SonicBlade, Cmd::Stopga, F::F).chance(20),
        meld(Cmd::SlidingDash, Cmd::Thunder, F::K).chance(5),
        meld(Cmd::StrikeRaid, Cmd::Thunder, F::L).chance(5),
        meld(Cmd::StrikeRaid, Cmd::Thundara, F::K).chance(5),
        meld(Cmd::ConfusionStrike, Cmd::Thundara, F::I).chance(5),
    ]),
    CommandDef::new(Cmd::ArsArcanum, CommandKind::Attack, VENTUS, &[
        meld(Cmd::Blitz, Cmd::AerialSlam, F::F),
        meld(Cmd::QuickBlitz, Cmd::SlotEdge, F::O).chance(10),
        meld(Cmd::FireStrike, Cmd::Aerora, F::C).chance(10),
        meld(Cmd::QuickBlitz, Cmd::Blizzard, F::G).chance(5),
        meld(Cmd::QuickBlitz, Cmd::Blizzara, F::H).chance(5),
        meld(Cmd::SlidingDash, Cmd::Blizzard, F::E).chance(5),
        meld(Cmd::SlidingDash, Cmd::Blizzara, F::G).chance(5),
        meld(Cmd::PoisonEdge, Cmd::Cura, F::P).chance(5),
        meld(Cmd::BlizzardEdge, Cmd::Cura, F::G).chance(5),
    ]),
    CommandDef::new(Cmd::TimeSplicer, CommandKind::Attack, VENTUS, &[
        meld(Cmd::AerialSlam, Cmd::Stopga, F::F),
        meld(Cmd::StunEdge, Cmd::SlotEdge, F::K).chance(10),
    ]),
    CommandDef::new(Cmd::PoisonEdge, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::QuickBlitz, Cmd::Poison, F::O).chance(95),
        meld(Cmd::SlidingDash, Cmd::Poison, F::K).chance(95),
        meld(Cmd::StrikeRaid, Cmd::Poison, F::D).chance(95),
    ]),
    CommandDef::new(Cmd::BlizzardEdge, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::QuickBlitz, Cmd::Blizzard, F::G).chance(95),
        meld(Cmd::QuickBlitz, Cmd::Blizzara, F::H).chance(95),
        meld(Cmd::SlidingDash, Cmd::Blizzard, F::E).chance(95),
        meld(Cmd::SlidingDash, Cmd::Blizzara, F::G).chance(95),
    ]),
    CommandDef::new(Cmd::StunEdge, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::SlidingDash, Cmd::Thunder, F::K).chance(95),
        meld(Cmd::StrikeRaid, Cmd::Thunder, F::L).chance(95),
        meld(Cmd::StrikeRaid, Cmd::Thundara, F::K).chance(95),
    ]),
    CommandDef::new(Cmd::SlotEdge, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::PoisonEdge, Cmd::Cura, F::P).chance(95),
        meld(Cmd::BlizzardEdge, Cmd::Cura, F::G).chance(95),
        meld(Cmd::Curaga, Cmd::RenewalBlock, F::N).chance(90),
        meld(Cmd::Curaga, Cmd::FocusBlock, F::P).chance(90),
    ]),
    CommandDef::new(Cmd::FireStrike, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::PoisonEdge, Cmd::Fira, F::D),
        meld(Cmd::StunEdge, Cmd::Fire, F::K),
    ]),
    CommandDef::new(Cmd::ConfusionStrike, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::QuickBlitz, Cmd::Confuse, F::O),
        meld(Cmd::SlidingDash, Cmd::ZeroGravity, F::K),
        meld(Cmd::StrikeRaid, Cmd::Confuse, F::G),
    ]),
    CommandDef::new(Cmd::BindingStrike, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::QuickBlitz, Cmd::Bind, F::K),
        meld(Cmd::StrikeRaid, Cmd::Bind, F::O),
        meld(Cmd::StunEdge, Cmd::ZeroGravity, F::I),
    ]),
    CommandDef::new(Cmd::BrutalBlast, CommandKind::Attack, TERRA, &[
        meld(Cmd::StunEdge, Cmd::MineShield, F::O).chance(70),
        meld(Cmd::BindingStrike, Cmd::MineSquare, F::L).chance(70),
    ]),
    CommandDef::new(Cmd::TornadoStrike, CommandKind::Attack, VENTUS, &[
        meld(Cmd::ConfusionStrike, Cmd::Aeroga, F::G),
        meld(Cmd::BindingStrike, Cmd::Aeroga, F::F),
    ]),
    CommandDef::new(Cmd::MagnetSpiral, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::BindingStrike, Cmd::CollisionMagnet, F::K),
        meld(Cmd::BindingStrike, Cmd::Magnega, F::J),
        meld(Cmd::QuickBlitz, Cmd::Magnera, F::K).chance(20),
        meld(Cmd::StunEdge, Cmd::Magnera, F::L).chance(20),
        meld(Cmd::ZeroGravira, Cmd::Magnet, F::I).chance(20),
    ]),
    CommandDef::new(Cmd::Windcutter, CommandKind::Attack, TERRA, &[
        meld(Cmd::BindingStrike, Cmd::Aeroga, F::F),
        meld(Cmd::ConfusionStrike, Cmd::Aeroga, F::G),
    ]),
    CommandDef::new(Cmd::LimitStorm, CommandKind::Attack, TERRA, &[
        meld(Cmd::BrutalBlast, Cmd::ConfusionStrike, F::G),
        meld(Cmd::BrutalBlast, Cmd::BindingStrike, F::D),
    ]),
    CommandDef::new(Cmd::Salvation, CommandKind::Attack, VENTUS, &[
        meld(Cmd::WindRaid, Cmd::Curaga, F::N),
    ]),
    CommandDef::new(Cmd::CollisionMagnet, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::QuickBlitz, Cmd::Magnera, F::K).chance(80),
        meld(Cmd::StunEdge, Cmd::Magnera, F::L).chance(80),
        meld(Cmd::ZeroGravira, Cmd::Magnet, F::I).chance(80),
    ]),
    CommandDef::new(Cmd::GeoImpact, CommandKind::Attack, TERRA, &[
        meld(Cmd::BrutalBlast, Cmd::BrutalBlast, F::N).chance(70),
    ]),
    CommandDef::new(Cmd::Sacrifice, CommandKind::Attack, TERRA, &[
        meld(Cmd::DarkHaze, Cmd::Warp, F::B),
        meld(Cmd::PoisonEdge, Cmd::Warp, F::D),
    ]),
    CommandDef::new(Cmd::BreakTime, CommandKind::Attack, EVERYONE, &[
        meld(Cmd::Curaga, Cmd::RenewalBlock, F::N).chance(10),
        meld(Cmd::Curaga, Cmd::FocusBlock, F::P).chance(10),
    ]),

    // Magic
    CommandDef::new(Cmd::Fire, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Fira, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::FireDash, Cmd::Fire, F::D),
        meld(Cmd::FireStrike, Cmd::Fire, F::D),
        meld(Cmd::Fire, Cmd::Fire, F::A),
        meld(Cmd::Fire, Cmd::Ignite, F::C),
    ]),
    CommandDef::new(Cmd::Firaga, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::FireDash, Cmd::Fira, F::D).chance(90),
        meld(Cmd::Fire, Cmd::Fira, F::A).chance(90),
        meld(Cmd::Fira, Cmd::Fira, F::B).chance(90),
    ]),
    CommandDef::new(Cmd::DarkFiraga, CommandKind::Magic, TERRA, &[
        meld(Cmd::DarkHaze, Cmd::Firaga, F::D),
        meld(Cmd::Firaga, Cmd::Blackout, F::B),
    ]),
    CommandDef::new(Cmd::FissionFiraga, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Fira, Cmd::Aeroga, F::A).chance(80),
        meld(Cmd::Firaga, Cmd::Aerora, F::A).chance(80),
        meld(Cmd::Firaga, Cmd::Aeroga, F::B).chance(80),
    ]),
    CommandDef::new(Cmd::TripleFiraga, CommandKind::Magic, AQUA, &[
        meld(Cmd::Fira, Cmd::Firaga, F::A).chance(95),
        meld(Cmd::Blitz, Cmd::Firaga, F::D).chance(90),
        meld(Cmd::Firaga, Cmd::Firaga, F::B).chance(90),
    ]),
    CommandDef::new(Cmd::CrawlingFire, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Firaga, Cmd::Slow, F::A).chance(80),
        meld(Cmd::Firaga, Cmd::Stopra, F::D).chance(80),
        meld(Cmd::Firaga, Cmd::Stopga, F::B).chance(80),
    ]),
    CommandDef::new(Cmd::Blizzard, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Blizzara, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::StrikeRaid, Cmd::Blizzard, F::G),
        meld(Cmd::BlizzardEdge, Cmd::Blizzard, F::G),
        meld(Cmd::Blizzard, Cmd::Blizzard, F::E),
        meld(Cmd::Blizzard, Cmd::Aero, F::H),
    ]),
    CommandDef::new(Cmd::Blizzaga, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::BlizzardEdge, Cmd::Blizzara, F::G),
        meld(Cmd::Blizzard, Cmd::Blizzara, F::E),
        meld(Cmd::Blizzara, Cmd::Blizzara, F::F),
    ]),
    CommandDef::new(Cmd::TripleBlizzaga, CommandKind::Magic, AQUA, &[
        meld(Cmd::Blitz, Cmd::Blizzaga, F::G),
        meld(Cmd::Blizzara, Cmd::Blizzaga, F::E),
        meld(Cmd::Blizzaga, Cmd::Blizzaga, F::F),
    ]),
    CommandDef::new(Cmd::Thunder, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Thundara, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::StunEdge, Cmd::Thunder, F::K),
        meld(Cmd::Thunder, Cmd::Thunder, F::I),
        meld(Cmd::ZeroGravity, Cmd::Magnet, F::L),
    ]),
    CommandDef::new(Cmd::Thundaga, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::BindingStrike, Cmd::Thundara, F::K).chance(90),
        meld(Cmd::Thunder, Cmd::Thundara, F::I).chance(90),
        meld(Cmd::Thundara, Cmd::Thundara, F::J).chance(90),
    ]),
    CommandDef::new(Cmd::ThundagaShot, CommandKind::Magic, AQUA, &[
        meld(Cmd::StrikeRaid, Cmd::Thundaga, F::I).chance(85),
        meld(Cmd::FreezeRaid, Cmd::Thundaga, F::E).chance(85),
        meld(Cmd::Firaga, Cmd::Thundaga, F::A).chance(85),
    ]),
    CommandDef::new(Cmd::Cure, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Cura, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Thunder, Cmd::Cure, F::I),
        meld(Cmd::Cure, Cmd::Cure, F::M),
        meld(Cmd::Cure, Cmd::Aero, F::O),
    ]),
    CommandDef::new(Cmd::Curaga, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Cure, Cmd::Cura, F::M),
        meld(Cmd::Cura, Cmd::Cura, F::N),
    ]),
    CommandDef::new(Cmd::Esuna, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::MineShield, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Fira, Cmd::ZeroGravity, F::A),
        meld(Cmd::Fira, Cmd::Block, F::C),
        meld(Cmd::Ignite, Cmd::Stop, F::D),
        meld(Cmd::Stopra, Cmd::Block, F::M),
    ]),
    CommandDef::new(Cmd::MineSquare, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Fira, Cmd::Stop, F::A),
        meld(Cmd::Aerora, Cmd::Ignite, F::D),
    ]),
    CommandDef::new(Cmd::SeekerMine, CommandKind::Magic, AQUA, &[
        meld(Cmd::MineShield, Cmd::MineSquare, F::B),
        meld(Cmd::MineShield, Cmd::Magnega, F::C),
        meld(Cmd::MineSquare, Cmd::Magnega, F::D),
    ]),
    CommandDef::new(Cmd::ZeroGravity, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::ZeroGravira, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Thunder, Cmd::ZeroGravity, F::I).chance(90),
        meld(Cmd::ZeroGravity, Cmd::ZeroGravity, F::M).chance(90),
        meld(Cmd::Magnet, Cmd::Aero, F::P).chance(90),
    ]),
    CommandDef::new(Cmd::ZeroGraviga, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Thundara, Cmd::ZeroGravira, F::I).chance(80),
        meld(Cmd::ZeroGravity, Cmd::ZeroGravira, F::M).chance(80),
        meld(Cmd::ZeroGravira, Cmd::ZeroGravira, F::N).chance(80),
    ]),
    CommandDef::new(Cmd::Magnet, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Magnera, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::StunEdge, Cmd::Magnet, F::K),
        meld(Cmd::Thunder, Cmd::Magnet, F::I),
        meld(Cmd::Magnet, Cmd::Magnet, F::M),
    ]),
    CommandDef::new(Cmd::Magnega, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Magnet, Cmd::Magnera, F::I),
        meld(Cmd::Magnera, Cmd::Magnera, F::J),
    ]),
    CommandDef::new(Cmd::MunnyMagnet, CommandKind::Magic, AQUA, &[
        meld(Cmd::WishingEdge, Cmd::Magnera, F::K),
        meld(Cmd::Thundara, Cmd::Magnera, F::I),
    ]),
    CommandDef::new(Cmd::EnergyMagnet, CommandKind::Magic, AQUA, &[
        meld(Cmd::Cure, Cmd::Magnera, F::M),
        meld(Cmd::Cura, Cmd::Magnera, F::N),
    ]),
    CommandDef::new(Cmd::DLinkMagnet, CommandKind::Magic, AQUA, &[
        meld(Cmd::ZeroGravira, Cmd::Magnera, F::L),
        meld(Cmd::Magnera, Cmd::Magnera, F::I),
        meld(Cmd::Magnera, Cmd::Stopra, F::I),
    ]),
    CommandDef::new(Cmd::Aero, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Aerora, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::QuickBlitz, Cmd::Aero, F::G).chance(95),
        meld(Cmd::Thunder, Cmd::Aero, F::I).chance(95),
        meld(Cmd::Aero, Cmd::Aero, F::E).chance(95),
    ]),
    CommandDef::new(Cmd::Aeroga, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::QuickBlitz, Cmd::Aerora, F::O).chance(90),
        meld(Cmd::Aero, Cmd::Aerora, F::M).chance(90),
        meld(Cmd::Aerora, Cmd::Aerora, F::N).chance(90),
    ]),
    CommandDef::new(Cmd::Warp, CommandKind::Magic, TERRA, &[
        meld(Cmd::Thundara, Cmd::ZeroGravira, F::I).chance(20),
        meld(Cmd::ZeroGravity, Cmd::ZeroGravira, F::M).chance(20),
        meld(Cmd::ZeroGravira, Cmd::ZeroGravira, F::N).chance(20),
        meld(Cmd::Thunder, Cmd::ZeroGravity, F::I).chance(10),
        meld(Cmd::Magnet, Cmd::Aero, F::P).chance(10),
        meld(Cmd::ZeroGravity, Cmd::ZeroGravity, F::M).chance(10),
    ]),
    CommandDef::new(Cmd::Faith, CommandKind::Magic, VENTUS, &[
        meld(Cmd::WindRaid, Cmd::BreakTime, F::N),
    ]),
    CommandDef::new(Cmd::DeepFreeze, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::FreezeRaid, Cmd::Blizzaga, F::G),
        meld(Cmd::BindingStrike, Cmd::Blizzaga, F::H),
    ]),
    CommandDef::new(Cmd::Glacier, CommandKind::Magic, AQUA, &[
        meld(Cmd::Blizzaga, Cmd::DeepFreeze, F::E),
        meld(Cmd::TripleBlizzaga, Cmd::DeepFreeze, F::F),
    ]),
    CommandDef::new(Cmd::IceBarrage, CommandKind::Magic, AQUA, &[]),
    CommandDef::new(Cmd::Tornado, CommandKind::Magic, VENTUS, &[
        meld(Cmd::Magnega, Cmd::Aeroga, F::N),
        meld(Cmd::QuickBlitz, Cmd::Aerora, F::O).chance(10),
        meld(Cmd::Aero, Cmd::Aerora, F::M).chance(10),
        meld(Cmd::Aerora, Cmd::Aerora, F::N).chance(10),
        meld(Cmd::QuickBlitz, Cmd::Aero, F::G).chance(5),
        meld(Cmd::Thunder, Cmd::Aero, F::I).chance(5),
        meld(Cmd::Aero, Cmd::Aero, F::E).chance(5),
    ]),
    CommandDef::new(Cmd::FiragaBurst, CommandKind::Magic, AQUA, &[
        meld(Cmd::Fira, Cmd::Aeroga, F::A).chance(20),
        meld(Cmd::Firaga, Cmd::Aerora, F::A).chance(20),
        meld(Cmd::Firaga, Cmd::Aeroga, F::B).chance(20),
        meld(Cmd::Firaga, Cmd::Slow, F::A).chance(20),
        meld(Cmd::Firaga, Cmd::Stopra, F::D).chance(20),
        meld(Cmd::Firaga, Cmd::Stopga, F::B).chance(20),
    ]),
    CommandDef::new(Cmd::RagingStorm, CommandKind::Magic, AQUA, &[
        meld(Cmd::FissionFiraga, Cmd::FiragaBurst, F::B),
        meld(Cmd::Blitz, Cmd::Firaga, F::D).chance(10),
        meld(Cmd::FireDash, Cmd::Fira, F::D).chance(10),
        meld(Cmd::FireSurge, Cmd::Cartwheel, F::C).chance(10),
        meld(Cmd::Fire, Cmd::Fira, F::A).chance(10),
        meld(Cmd::Fira, Cmd::Fira, F::B).chance(10),
        meld(Cmd::Fira, Cmd::Firaga, F::A).chance(10),
        meld(Cmd::Firaga, Cmd::Firaga, F::B).chance(10),
    ]),
    CommandDef::new(Cmd::MegaFlare, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::FissionFiraga, Cmd::CrawlingFire, F::B),
    ]),
    CommandDef::new(Cmd::Quake, CommandKind::Magic, TERRA, &[
        meld(Cmd::BrutalBlast, Cmd::ZeroGraviga, F::B).chance(90),
        meld(Cmd::BrutalBlast, Cmd::Magnega, F::C).chance(90),
        meld(Cmd::StunEdge, Cmd::MineShield, F::O).chance(30),
        meld(Cmd::BindingStrike, Cmd::MineSquare, F::L).chance(30),
        meld(Cmd::BrutalBlast, Cmd::BrutalBlast, F::N).chance(30),
    ]),
    CommandDef::new(Cmd::Meteor, CommandKind::Magic, TERRA, &[
        meld(Cmd::GeoImpact, Cmd::Quake, F::B),
        meld(Cmd::BrutalBlast, Cmd::ZeroGraviga, F::B).chance(10),
        meld(Cmd::BrutalBlast, Cmd::Magnega, F::C).chance(10),
    ]),
    CommandDef::new(Cmd::Transcendence, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::MagnetSpiral, Cmd::ZeroGraviga, F::J),
    ]),
    CommandDef::new(Cmd::Mini, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Magnera, Cmd::Warp, F::N),
        meld(Cmd::Magnega, Cmd::Magnega, F::J),
        meld(Cmd::Magnega, Cmd::Bind, F::I),
    ]),
    CommandDef::new(Cmd::Blackout, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::ZeroGravity, Cmd::Confuse, F::M),
        meld(Cmd::ZeroGravira, Cmd::Confuse, F::N),
        meld(Cmd::ZeroGravira, Cmd::Poison, F::P),
    ]),
    CommandDef::new(Cmd::Ignite, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Fire, Cmd::Bind, F::A),
        meld(Cmd::Fira, Cmd::Bind, F::C),
    ]),
    CommandDef::new(Cmd::Confuse, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Bind, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Poison, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Slow, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Stop, CommandKind::Magic, EVERYONE, &[]),
    CommandDef::new(Cmd::Stopra, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Slow, Cmd::Slow, F::L),
        meld(Cmd::Slow, Cmd::Stop, F::K),
        meld(Cmd::Stop, Cmd::Stop, F::I),
    ]),
    CommandDef::new(Cmd::Stopga, CommandKind::Magic, EVERYONE, &[
        meld(Cmd::Stop, Cmd::Stopra, F::I),
        meld(Cmd::Stopra, Cmd::Stopra, F::J),
    ]),
    CommandDef::new(Cmd::Sleep, CommandKind::Magic, EVERYONE, &[]),

    // Movement
    CommandDef::new(Cmd::Jump, CommandKind::Movement, EVERYONE, &[]),
    CommandDef::new(Cmd::HighJump, CommandKind::Movement, EVERYONE, &[]),
    CommandDef::new(Cmd::DodgeRoll, CommandKind::Movement, VENTUS, &[]),
    CommandDef::new(Cmd::ThunderRoll, CommandKind::Movement, VENTUS, &[
        meld(Cmd::ThunderSurge, Cmd::DodgeRoll, F::P).chance(80),
        meld(Cmd::Thundaga, Cmd::DodgeRoll, F::L).chance(80),
        meld(Cmd::StunBlock, Cmd::DodgeRoll, F::L).chance(80),
    ]),
    CommandDef::new(Cmd::AirSlide, CommandKind::Movement, EVERYONE, &[]),
    CommandDef::new(Cmd::IceSlide, CommandKind::Movement, EVERYONE, &[
        meld(Cmd::BlizzardEdge, Cmd::AirSlide, F::F),
        meld(Cmd::Blizzaga, Cmd::AirSlide, F::H),
    ]),
    CommandDef::new(Cmd::Reversal, CommandKind::Movement, VENTUS, &[]),
    CommandDef::new(Cmd::Glide, CommandKind::Movement, VENTUS, &[]),
    CommandDef::new(Cmd::Superglide, CommandKind::Movement, VENTUS, &[]),
    CommandDef::new(Cmd::FireGlide, CommandKind::Movement, VENTUS, &[
        meld(Cmd::FireSurge, Cmd::Glide, F::C),
        meld(Cmd::Firaga, Cmd::Glide, F::B),
    ]),
    CommandDef::new(Cmd::Cartwheel, CommandKind::Movement, AQUA, &[]),
    CommandDef::new(Cmd::Firewheel, CommandKind::Movement, AQUA, &[
        meld(Cmd::Firaga, Cmd::Cartwheel, F::B),
        meld(Cmd::FissionFiraga, Cmd::Cartwheel, F::B),
        meld(Cmd::FireSurge, Cmd::Cartwheel, F::C).chance(90),
    ]),
    CommandDef::new(Cmd::HomingSlide, CommandKind::Movement, VENTUS, &[
        meld(Cmd::SlidingDash, Cmd::Magnera, F::P),
        meld(Cmd::SlidingDash, Cmd::AirSlide, F::C),
        meld(Cmd::Magnet, Cmd::AirSlide, F::L),
    ]),
    CommandDef::new(Cmd::SonicImpact, CommandKind::Movement, TERRA, &[]),
    CommandDef::new(Cmd::Slide, CommandKind::Movement, TERRA, &[]),
    CommandDef::new(Cmd::Teleport, CommandKind::Movement, AQUA, &[]),
    CommandDef::new(Cmd::Doubleflight, CommandKind::Movement, AQUA, &[]),

    // Defense
    CommandDef::new(Cmd::Block, CommandKind::Defense, EVERYONE, &[]),
    CommandDef::new(Cmd::RenewalBlock, CommandKind::Defense, EVERYONE, &[
        meld(Cmd::Curaga, Cmd::Block, F::P),
        meld(Cmd::Esuna, Cmd::Block, F::C),
    ]),
    CommandDef::new(Cmd::FocusBlock, CommandKind::Defense, EVERYONE, &[]),
    CommandDef::new(Cmd::StunBlock, CommandKind::Defense, EVERYONE, &[
        meld(Cmd::StunEdge, Cmd::Block, F::L),
        meld(Cmd::Thundaga, Cmd::Block, F::I),
    ]),
    CommandDef::new(Cmd::PoisonBlock, CommandKind::Defense, EVERYONE, &[
        meld(Cmd::PoisonEdge, Cmd::Block, F::H).chance(80),
        meld(Cmd::Poison, Cmd::Block, F::P).chance(80),
    ]),
    CommandDef::new(Cmd::Barrier, CommandKind::Defense, AQUA, &[]),
    CommandDef::new(Cmd::RenewalBarrier, CommandKind::Defense, AQUA, &[
        meld(Cmd::Curaga, Cmd::Barrier, F::P),
        meld(Cmd::Esuna, Cmd::Barrier, F::N),
    ]),
    CommandDef::new(Cmd::FocusBarrier, CommandKind::Defense, AQUA, &[]),
    CommandDef::new(Cmd::ConfuseBarrier, CommandKind::Defense, AQUA, &[
        meld(Cmd::ConfusionStrike, Cmd::Barrier, F::C),
        meld(Cmd::Confuse, Cmd::Barrier, F::L),
    ]),
    CommandDef::new(Cmd::StopBarrier, CommandKind::Defense, AQUA, &[
        meld(Cmd::Stopga, Cmd::Barrier, F::C),
    ]),

    // Reprisal
    CommandDef::new(Cmd::CounterHammer, CommandKind::Reprisal, TERRA, &[]),
    CommandDef::new(Cmd::CounterRush, CommandKind::Reprisal, VENTUS, &[]),
    CommandDef::new(Cmd::ReversalSlash, CommandKind::Reprisal, VENTUS, &[]),
    CommandDef::new(Cmd::PaybackFang, CommandKind::Reprisal, TERRA, &[
        meld(Cmd::SlidingDash, Cmd::CounterHammer, F::P),
    ]),
    CommandDef::new(Cmd::PaybackRaid, CommandKind::Reprisal, VENTUS, &[
        meld(Cmd::SlidingDash, Cmd::StrikeRaid, F::P),
    ]),
    CommandDef::new(Cmd::CounterBlast, CommandKind::Reprisal, AQUA, &[]),
    CommandDef::new(Cmd::PaybackSurge, CommandKind::Reprisal, AQUA, &[
        meld(Cmd::SlidingDash, Cmd::FireSurge, F::C),
        meld(Cmd::SlidingDash, Cmd::ThunderSurge, F::L),
    ]),
    CommandDef::new(Cmd::AerialRecovery, CommandKind::Reprisal, EVERYONE, &[]),

    // Shotlock
    CommandDef::new(Cmd::MeteorShower, CommandKind::Shotlock, EVERYONE, &[]),
    CommandDef::new(Cmd::FlameSalvo, CommandKind::Shotlock, EVERYONE, &[]),
    CommandDef::new(Cmd::ChaosSnake, CommandKind::Shotlock, EVERYONE, &[]),
    CommandDef::new(Cmd::DarkVolley, CommandKind::Shotlock, TERRA, &[]),
    CommandDef::new(Cmd::Ragnarok, CommandKind::Shotlock, EVERYONE, &[]),
    CommandDef::new(Cmd::Thunderstorm, CommandKind::Shotlock, EVERYONE, &[]),
    CommandDef::new(Cmd::BioBarrage, CommandKind::Shotlock, EVERYONE, &[
        meld(Cmd::PoisonEdge, Cmd::Block, F::P).chance(20),
        meld(Cmd::Poison, Cmd::Block, F::P).chance(20),
        meld(Cmd::QuickBlitz, Cmd::Poison, F::P).chance(5),
        meld(Cmd::SlidingDash, Cmd::Poison, F::P).chance(5),
        meld(Cmd::StrikeRaid, Cmd::Poison, F::P).chance(5),
    ]),
    CommandDef::new(Cmd::PulseBomb, CommandKind::Shotlock, VENTUS, &[]),
    CommandDef::new(Cmd::BubbleBlaster, CommandKind::Shotlock, AQUA, &[]),
    CommandDef::new(Cmd::PrismRain, CommandKind::Shotlock, AQUA, &[]),
    CommandDef::new(Cmd::PhotonCharge, CommandKind::Shotlock, EVERYONE, &[]),
    CommandDef::new(Cmd::AbsoluteZero, CommandKind::Shotlock, EVERYONE, &[]),
    CommandDef::new(Cmd::LightningRay, CommandKind::Shotlock, EVERYONE, &[
        meld(Cmd::Blitz, Cmd::DarkHaze, F::L).chance(10),
        meld(Cmd::Blitz, Cmd::AirSlide, F::L).chance(10),
        meld(Cmd::FireDash, Cmd::ThunderSurge, F::L).chance(10),
        meld(Cmd::BindingStrike, Cmd::Thundara, F::L).chance(10),
        meld(Cmd::Thunder, Cmd::Thundara, F::L).chance(10),
        meld(Cmd::Thundara, Cmd::Thundara, F::L).chance(10),
    ]),
    CommandDef::new(Cmd::SonicShadow, CommandKind::Shotlock, TERRA, &[]),
    CommandDef::new(Cmd::Multivortex, CommandKind::Shotlock, VENTUS, &[]),
    CommandDef::new(Cmd::Lightbloom, CommandKind::Shotlock, AQUA, &[]),
    CommandDef::new(Cmd::UltimaCannon, CommandKind::Shotlock, TERRA, &[]),
];
