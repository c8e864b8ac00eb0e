//! Golden invasion monsters.
//!
//! The classic golden set is shared by every version; a version adds its own
//! monsters through an extra list instead of redefining the builder.

use crate::monsters::{DropSpec, MonsterSpec, MonsterStats, add_monster};
use std::time::Duration;
use tracing::info;
use worldseed_core::builder::{BuildContext, BuildError, Builder, BuilderKind};
use worldseed_core::id::ItemNumber;
use worldseed_core::monster::SpecialItemType;

/// Elemental attribute shared by all golden monsters.
pub const GOLDEN_ATTRIBUTE: u8 = 2;

const BOX_OF_LUCK: &[ItemNumber] = &[ItemNumber::new(14, 11)];

const fn box_drop(description: &'static str, item_level: u8) -> DropSpec {
    DropSpec {
        description,
        chance: 1.0,
        item_type: SpecialItemType::None,
        item_level: Some(item_level),
        items: BOX_OF_LUCK,
    }
}

const fn golden(
    number: u16,
    designation: &'static str,
    attack_skill: Option<u16>,
    stats: MonsterStats,
    drops: &'static [DropSpec],
) -> MonsterSpec {
    MonsterSpec {
        number,
        designation,
        move_range: 3,
        attack_range: 2,
        view_range: 7,
        move_delay: Duration::from_millis(400),
        attack_delay: Duration::from_millis(1800),
        respawn_delay: Duration::from_secs(10),
        attribute: GOLDEN_ATTRIBUTE,
        number_of_maximum_item_drops: 1,
        attack_skill,
        stats,
        drops,
    }
}

const fn stats(
    level: f32,
    health: f32,
    min_damage: f32,
    max_damage: f32,
    defense: f32,
    attack_rate: f32,
    defense_rate: f32,
) -> MonsterStats {
    MonsterStats {
        level,
        health,
        min_damage,
        max_damage,
        defense,
        attack_rate,
        defense_rate,
    }
}

const GOBLIN_DROPS: &[DropSpec] = &[box_drop("Golden Goblin - Box of Luck", 0)];
const DRAGON_DROPS: &[DropSpec] = &[box_drop("Golden Dragon - Box of Kundun+1", 8)];
const VEPAR_DROPS: &[DropSpec] = &[box_drop("Golden Vepar - Box of Kundun+2", 9)];
const LIZARD_KING_DROPS: &[DropSpec] = &[box_drop("Golden Lizard King - Box of Kundun+3", 10)];
const WHEEL_DROPS: &[DropSpec] = &[box_drop("Golden Wheel - Box of Kundun+5", 12)];
const TANTALLOS_DROPS: &[DropSpec] = &[box_drop("Golden Tantallos - Box of Kundun+4", 11)];

/// Golden monsters present in every version.
pub const CLASSIC_GOLDEN_MOBS: &[MonsterSpec] = &[
    golden(
        78,
        "Golden Goblin",
        None,
        stats(14.0, 5_000.0, 55.0, 65.0, 20.0, 75.0, 22.0),
        GOBLIN_DROPS,
    ),
    golden(
        79,
        "Golden Dragon",
        Some(5),
        stats(55.0, 30_000.0, 200.0, 230.0, 150.0, 500.0, 140.0),
        DRAGON_DROPS,
    ),
    golden(
        81,
        "Golden Vepar",
        Some(1),
        stats(45.0, 20_000.0, 150.0, 180.0, 120.0, 400.0, 110.0),
        VEPAR_DROPS,
    ),
    golden(
        80,
        "Golden Lizard King",
        None,
        stats(78.0, 60_000.0, 400.0, 450.0, 300.0, 800.0, 250.0),
        LIZARD_KING_DROPS,
    ),
];

/// Golden monsters added in Season 6.
pub const SEASON6_GOLDEN_MOBS: &[MonsterSpec] = &[
    golden(
        83,
        "Golden Wheel",
        None,
        stats(90.0, 90_000.0, 600.0, 680.0, 420.0, 1_100.0, 360.0),
        WHEEL_DROPS,
    ),
    golden(
        82,
        "Golden Tantallos",
        None,
        stats(85.0, 75_000.0, 500.0, 560.0, 380.0, 950.0, 320.0),
        TANTALLOS_DROPS,
    ),
];

pub struct InvasionMobs {
    extra: &'static [MonsterSpec],
}

impl InvasionMobs {
    /// Only the classic golden set.
    pub const fn classic() -> Self {
        Self { extra: &[] }
    }

    pub const fn season6() -> Self {
        Self::with_extra(SEASON6_GOLDEN_MOBS)
    }

    pub const fn with_extra(extra: &'static [MonsterSpec]) -> Self {
        Self { extra }
    }

    /// Every monster this builder creates, in creation order.
    pub fn mobs(&self) -> impl Iterator<Item = &'static MonsterSpec> {
        CLASSIC_GOLDEN_MOBS.iter().chain(self.extra.iter())
    }
}

impl Builder for InvasionMobs {
    fn name(&self) -> &'static str {
        "invasion_mobs"
    }

    fn kind(&self) -> BuilderKind {
        BuilderKind::Composite
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["skills", "misc"]
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let mut created = 0;
        for spec in self.mobs() {
            if add_monster(ctx, spec)?.is_some() {
                created += 1;
            }
        }
        info!(created, "invasion monsters built");
        Ok(())
    }
}
