//! Spell scrolls (group 15).

use super::{add_item, item, requirements};
use worldseed_core::attribute::AttributeKind::{RequiredEnergy, RequiredLevel};
use worldseed_core::builder::{BuildContext, BuildError, Builder};

const GROUP: u8 = 15;

// (number, name, required level, required energy, value)
const SCROLLS: [(u16, &str, u16, u16, u32); 19] = [
    (0, "Scroll of Poison", 30, 140, 17_000),
    (1, "Scroll of Meteorite", 21, 104, 11_000),
    (2, "Scroll of Lightning", 13, 72, 3_000),
    (3, "Scroll of Fire Ball", 5, 40, 300),
    (4, "Scroll of Flame", 35, 160, 21_000),
    (5, "Scroll of Teleport", 17, 88, 5_000),
    (6, "Scroll of Ice", 25, 120, 14_000),
    (7, "Scroll of Twister", 40, 180, 25_000),
    (8, "Scroll of Evil Spirit", 50, 220, 35_000),
    (9, "Scroll of Hellfire", 60, 260, 60_000),
    (10, "Scroll of Power Wave", 9, 56, 1_100),
    (11, "Scroll of Aqua Beam", 74, 345, 100_000),
    (12, "Scroll of Cometfall", 80, 436, 175_000),
    (13, "Scroll of Inferno", 88, 578, 265_000),
    (14, "Scroll of Teleport Ally", 83, 644, 250_000),
    (15, "Scroll of Soul Barrier", 77, 408, 225_000),
    (16, "Scroll of Decay", 220, 953, 400_000),
    (17, "Scroll of Ice Storm", 93, 849, 500_000),
    (18, "Scroll of Nova", 181, 1052, 600_000),
];

pub struct Scrolls;

impl Builder for Scrolls {
    fn name(&self) -> &'static str {
        "scrolls"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, name, level, energy, value) in SCROLLS {
            let mut scroll = item(GROUP, number, name, 1, 2);
            scroll.drop_level = u8::try_from(level).unwrap_or(u8::MAX);
            scroll.value = value;
            scroll.requirements = requirements(&[
                (RequiredLevel, f32::from(level)),
                (RequiredEnergy, f32::from(energy)),
            ]);
            add_item(ctx, scroll, &[])?;
        }
        Ok(())
    }
}
