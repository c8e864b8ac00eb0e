//! Armor sets: helm, armor, pants, gloves and boots (groups 7 to 11).
//!
//! Every piece of a set shares the set's item number; the group selects the
//! piece.

use super::{add_item, item, requirements};
use worldseed_core::attribute::AttributeKind::{
    DefenseBase, DefenseRatePvm, RequiredAgility, RequiredLevel, RequiredStrength,
};
use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::item::ItemSlot;

// (group, piece name, slot, width, height, defense percent of the set's base)
const PIECES: [(u8, &str, ItemSlot, u8, u8, u16); 5] = [
    (7, "Helm", ItemSlot::Helm, 2, 2, 80),
    (8, "Armor", ItemSlot::Armor, 2, 3, 120),
    (9, "Pants", ItemSlot::Pants, 2, 2, 100),
    (10, "Gloves", ItemSlot::Gloves, 2, 2, 60),
    (11, "Boots", ItemSlot::Boots, 2, 2, 70),
];

// (number, set name, base defense, drop level, required strength, required agility)
const SETS: [(u16, &str, u16, u8, u16, u16); 15] = [
    (0, "Bronze", 10, 18, 80, 20),
    (1, "Dragon", 30, 68, 120, 30),
    (2, "Pad", 5, 10, 20, 0),
    (3, "Legendary", 15, 42, 30, 0),
    (4, "Bone", 11, 30, 30, 0),
    (5, "Leather", 6, 6, 80, 0),
    (6, "Scale", 19, 48, 110, 0),
    (7, "Sphinx", 21, 56, 30, 0),
    (8, "Brass", 14, 36, 100, 0),
    (9, "Plate", 27, 64, 130, 0),
    (10, "Vine", 4, 6, 30, 60),
    (11, "Silk", 8, 16, 30, 70),
    (12, "Wind", 13, 32, 30, 80),
    (13, "Spirit", 26, 58, 40, 150),
    (14, "Guardian", 34, 70, 40, 175),
];

pub struct Armors;

impl Builder for Armors {
    fn name(&self) -> &'static str {
        "armors"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, set, base_defense, drop_level, strength, agility) in SETS {
            for (group, piece, slot, width, height, percent) in PIECES {
                let name = format!("{set} {piece}");
                let mut armor = item(group, number, &name, width, height);
                armor.slot = Some(slot);
                armor.drop_level = drop_level;
                armor.durability = 20 + drop_level / 2;
                armor.maximum_item_level = 15;
                armor.value = u32::from(drop_level) * 100;
                armor.requirements = requirements(&[
                    (RequiredLevel, f32::from(drop_level)),
                    (RequiredStrength, f32::from(strength)),
                    (RequiredAgility, f32::from(agility)),
                ]);
                let defense = f32::from(base_defense * percent) / 100.0;
                add_item(
                    ctx,
                    armor,
                    &[(DefenseBase, defense), (DefenseRatePvm, defense / 2.0)],
                )?;
            }
        }
        Ok(())
    }
}
