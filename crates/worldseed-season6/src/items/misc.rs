//! Rings, pendants, boxes and event items.

use super::{add_item, item, requirements};
use worldseed_core::attribute::AttributeKind::{
    self, FireResistance, IceResistance, LightningResistance, MaximumMana, PoisonResistance,
    RequiredLevel, WizardryBaseDmg,
};
use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::item::ItemSlot;

// (number, name, slot, required level, effect)
const JEWELRY: [(u16, &str, ItemSlot, u16, (AttributeKind, f32)); 5] = [
    (8, "Ring of Ice", ItemSlot::Ring, 20, (IceResistance, 0.1)),
    (9, "Ring of Poison", ItemSlot::Ring, 17, (PoisonResistance, 0.1)),
    (12, "Pendant of Lightning", ItemSlot::Pendant, 21, (LightningResistance, 0.1)),
    (13, "Pendant of Fire", ItemSlot::Pendant, 13, (FireResistance, 0.1)),
    (20, "Wizards Ring", ItemSlot::Ring, 0, (WizardryBaseDmg, 1.1)),
];

// (number, name, maximum item level, value)
const SUNDRIES: [(u16, &str, u8, u32); 8] = [
    (11, "Box of Luck", 12, 0),
    (15, "Zen", 0, 0),
    (17, "Devil's Eye", 7, 1_000),
    (18, "Devil's Key", 7, 1_000),
    (19, "Devil's Invitation", 7, 30_000),
    (21, "Rena", 0, 3_000),
    (28, "Lost Map", 0, 50_000),
    (29, "Symbol of Kundun", 7, 10_000),
];

pub struct Misc;

impl Builder for Misc {
    fn name(&self) -> &'static str {
        "misc"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, name, slot, level, effect) in JEWELRY {
            let mut jewelry = item(13, number, name, 1, 1);
            jewelry.slot = Some(slot);
            jewelry.durability = 50;
            jewelry.maximum_item_level = 4;
            jewelry.requirements = requirements(&[(RequiredLevel, f32::from(level))]);
            let mut effects = vec![effect];
            if number == 20 {
                effects.push((MaximumMana, 1.1));
            }
            add_item(ctx, jewelry, &effects)?;
        }

        for (number, name, maximum_level, value) in SUNDRIES {
            let mut sundry = item(14, number, name, 1, 1);
            sundry.maximum_item_level = maximum_level;
            sundry.value = value;
            add_item(ctx, sundry, &[])?;
        }
        Ok(())
    }
}
