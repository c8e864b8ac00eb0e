//! Pets and mounts (group 13).

use super::{add_item, item, requirements};
use worldseed_core::attribute::AttributeKind::{
    self, DamageReceiveDecrement, RequiredLeadership, RequiredLevel, SkillDamageBonus,
};
use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::item::ItemSlot;

const GROUP: u8 = 13;

// (number, name, required level, required leadership, durability, effect)
const PETS: [(u16, &str, u16, u16, u8, Option<(AttributeKind, f32)>); 13] = [
    (0, "Guardian Angel", 23, 0, 255, Some((DamageReceiveDecrement, 0.8))),
    (1, "Imp", 28, 0, 255, Some((SkillDamageBonus, 1.3))),
    (2, "Horn of Uniria", 25, 0, 255, None),
    (3, "Horn of Dinorant", 110, 0, 255, Some((DamageReceiveDecrement, 0.9))),
    (4, "Dark Horse Horn", 110, 0, 255, Some((DamageReceiveDecrement, 0.9))),
    (5, "Dark Raven", 1, 185, 255, None),
    (37, "Horn of Fenrir", 300, 0, 255, Some((DamageReceiveDecrement, 0.9))),
    (64, "Demon", 1, 0, 255, Some((SkillDamageBonus, 1.4))),
    (65, "Spirit of Guardian", 1, 0, 255, Some((DamageReceiveDecrement, 0.7))),
    (67, "Pet Rudolf", 1, 0, 255, None),
    (80, "Pet Panda", 1, 0, 255, None),
    (106, "Pet Unicorn", 1, 0, 255, None),
    (123, "Pet Skeleton", 1, 0, 255, Some((SkillDamageBonus, 1.2))),
];

pub struct Pets;

impl Builder for Pets {
    fn name(&self) -> &'static str {
        "pets"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, name, level, leadership, durability, effect) in PETS {
            let mut pet = item(GROUP, number, name, 1, 1);
            pet.slot = Some(ItemSlot::Pet);
            pet.durability = durability;
            pet.drops_from_monsters = false;
            pet.requirements = requirements(&[
                (RequiredLevel, f32::from(level)),
                (RequiredLeadership, f32::from(leadership)),
            ]);
            add_item(ctx, pet, effect.as_slice())?;
        }
        Ok(())
    }
}
