//! Skill orbs (group 12). Orbs teach a skill to the class that can use them.

use super::{add_item, item, requirements};
use worldseed_core::attribute::AttributeKind::{RequiredEnergy, RequiredLevel, RequiredStrength};
use worldseed_core::builder::{BuildContext, BuildError, Builder};

const GROUP: u8 = 12;

// (number, name, drop level, required level, required strength, required energy, value)
const ORBS: [(u16, &str, u8, u16, f32, f32, u32); 12] = [
    (7, "Orb of Twisting Slash", 47, 47, 0.0, 0.0, 29_000),
    (8, "Orb of Healing", 8, 8, 0.0, 100.0, 800),
    (9, "Orb of Greater Defense", 13, 13, 0.0, 100.0, 3_000),
    (10, "Orb of Greater Damage", 18, 18, 0.0, 100.0, 7_000),
    (11, "Orb of Summoning", 3, 3, 0.0, 0.0, 150),
    (12, "Orb of Rageful Blow", 78, 78, 170.0, 0.0, 150_000),
    (13, "Orb of Impale", 20, 20, 28.0, 0.0, 10_000),
    (14, "Orb of Greater Fortitude", 60, 60, 120.0, 0.0, 43_000),
    (16, "Orb of Fire Slash", 60, 60, 320.0, 0.0, 45_000),
    (17, "Orb of Penetration", 64, 64, 130.0, 0.0, 45_000),
    (18, "Orb of Ice Arrow", 81, 81, 0.0, 0.0, 200_000),
    (19, "Orb of Death Stab", 160, 160, 0.0, 0.0, 250_000),
];

pub struct Orbs;

impl Builder for Orbs {
    fn name(&self) -> &'static str {
        "orbs"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, name, drop_level, level, strength, energy, value) in ORBS {
            let mut orb = item(GROUP, number, name, 1, 1);
            orb.drop_level = drop_level;
            orb.value = value;
            orb.requirements = requirements(&[
                (RequiredLevel, f32::from(level)),
                (RequiredStrength, strength),
                (RequiredEnergy, energy),
            ]);
            add_item(ctx, orb, &[])?;
        }
        Ok(())
    }
}
