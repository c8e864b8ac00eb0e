//! Consumables (group 14): healing, mana, shield and complex potions.

use super::{add_item, item};
use worldseed_core::attribute::AttributeKind::{
    self, HealthRecoveryMultiplier, ManaRecoveryMultiplier, MaximumShield,
};
use worldseed_core::builder::{BuildContext, BuildError, Builder};

const GROUP: u8 = 14;

// (number, name, drop level, stack size, value, recovery effects)
const POTIONS: [(u16, &str, u8, u8, u32, &[(AttributeKind, f32)]); 18] = [
    (0, "Apple", 0, 3, 5, &[(HealthRecoveryMultiplier, 0.1)]),
    (1, "Small Healing Potion", 0, 3, 10, &[(HealthRecoveryMultiplier, 0.2)]),
    (2, "Medium Healing Potion", 10, 3, 20, &[(HealthRecoveryMultiplier, 0.3)]),
    (3, "Large Healing Potion", 25, 3, 30, &[(HealthRecoveryMultiplier, 0.4)]),
    (4, "Small Mana Potion", 0, 3, 10, &[(ManaRecoveryMultiplier, 0.2)]),
    (5, "Medium Mana Potion", 10, 3, 20, &[(ManaRecoveryMultiplier, 0.3)]),
    (6, "Large Mana Potion", 25, 3, 30, &[(ManaRecoveryMultiplier, 0.4)]),
    (8, "Antidote", 0, 3, 10, &[]),
    (9, "Ale", 0, 3, 15, &[]),
    (10, "Town Portal Scroll", 0, 1, 750, &[]),
    (35, "Small Shield Potion", 50, 3, 2_000, &[(MaximumShield, 0.25)]),
    (36, "Medium Shield Potion", 80, 3, 4_000, &[(MaximumShield, 0.35)]),
    (37, "Large Shield Potion", 100, 3, 6_000, &[(MaximumShield, 0.45)]),
    (
        38,
        "Small Complex Potion",
        50,
        3,
        2_500,
        &[(HealthRecoveryMultiplier, 0.1), (MaximumShield, 0.05)],
    ),
    (
        39,
        "Medium Complex Potion",
        80,
        3,
        5_000,
        &[(HealthRecoveryMultiplier, 0.25), (MaximumShield, 0.1)],
    ),
    (
        40,
        "Large Complex Potion",
        100,
        3,
        7_500,
        &[(HealthRecoveryMultiplier, 0.45), (MaximumShield, 0.2)],
    ),
    (70, "Elite Healing Potion", 0, 50, 0, &[(HealthRecoveryMultiplier, 1.0)]),
    (71, "Elite Mana Potion", 0, 50, 0, &[(ManaRecoveryMultiplier, 1.0)]),
];

pub struct Potions;

impl Builder for Potions {
    fn name(&self) -> &'static str {
        "potions"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, name, drop_level, stack, value, effects) in POTIONS {
            let mut potion = item(GROUP, number, name, 1, 1);
            potion.drop_level = drop_level;
            potion.durability = stack;
            potion.value = value;
            // Elite potions come from the cash shop only.
            potion.drops_from_monsters = value > 0;
            add_item(ctx, potion, effects)?;
        }
        Ok(())
    }
}
