//! Wings and capes (group 12).

use super::{add_item, item, requirements};
use worldseed_core::attribute::AttributeKind::{
    DamageReceiveDecrement, DefenseBase, RequiredLevel, SkillDamageBonus,
};
use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::item::ItemSlot;

const GROUP: u8 = 12;

// (number, name, width, height, defense, required level, damage absorb, damage increase)
const WINGS: [(u16, &str, u8, u8, f32, u16, f32, f32); 17] = [
    (0, "Wings of Elf", 3, 2, 10.0, 100, 0.88, 1.16),
    (1, "Wings of Heaven", 5, 3, 10.0, 100, 0.88, 1.16),
    (2, "Wings of Satan", 5, 2, 20.0, 100, 0.88, 1.16),
    (3, "Wings of Spirits", 5, 3, 30.0, 150, 0.75, 1.28),
    (4, "Wings of Soul", 5, 3, 30.0, 150, 0.75, 1.28),
    (5, "Wings of Dragon", 3, 3, 45.0, 150, 0.75, 1.28),
    (6, "Wings of Darkness", 4, 2, 40.0, 150, 0.75, 1.28),
    (36, "Wing of Storm", 4, 3, 60.0, 400, 0.61, 1.39),
    (37, "Wing of Eternal", 4, 3, 45.0, 400, 0.61, 1.39),
    (38, "Wing of Illusion", 4, 3, 45.0, 400, 0.61, 1.39),
    (39, "Wing of Ruin", 4, 3, 55.0, 400, 0.61, 1.39),
    (40, "Cape of Emperor", 2, 3, 45.0, 400, 0.61, 1.39),
    (41, "Wing of Curse", 4, 3, 10.0, 1, 0.88, 1.16),
    (42, "Wings of Despair", 4, 3, 30.0, 150, 0.75, 1.28),
    (43, "Wing of Dimension", 4, 3, 45.0, 400, 0.61, 1.39),
    (49, "Cape of Fighter", 2, 3, 15.0, 180, 0.85, 1.20),
    (50, "Cape of Overrule", 2, 3, 45.0, 400, 0.61, 1.39),
];

pub struct Wings;

impl Builder for Wings {
    fn name(&self) -> &'static str {
        "wings"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, name, width, height, defense, level, absorb, increase) in WINGS {
            let mut wing = item(GROUP, number, name, width, height);
            wing.slot = Some(ItemSlot::Wings);
            wing.durability = 200;
            wing.maximum_item_level = 15;
            wing.drops_from_monsters = false;
            wing.requirements = requirements(&[(RequiredLevel, f32::from(level))]);
            add_item(
                ctx,
                wing,
                &[
                    (DefenseBase, defense),
                    (DamageReceiveDecrement, absorb),
                    (SkillDamageBonus, increase),
                ],
            )?;
        }
        Ok(())
    }
}
