//! Weapons and shields (groups 0 to 6).

use super::{add_item, item, requirements};
use worldseed_core::attribute::AttributeKind::{
    AttackSpeed, DefenseBase, DefenseRatePvm, MaximumPhysBaseDmg, MinimumPhysBaseDmg,
    RequiredAgility, RequiredLevel, RequiredStrength, WizardryBaseDmg,
};
use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::item::{ItemDefinition, ItemSlot};

/// `(number, name, width, height, drop level, min damage, max damage, attack speed)`
type WeaponRow = (u16, &'static str, u8, u8, u8, u16, u16, u8);

const SWORDS: &[WeaponRow] = &[
    (0, "Kris", 1, 2, 6, 6, 11, 50),
    (1, "Short Sword", 1, 3, 3, 3, 7, 20),
    (2, "Rapier", 1, 3, 9, 9, 15, 40),
    (3, "Katana", 1, 3, 16, 16, 26, 35),
    (4, "Sword of Assassin", 1, 3, 12, 12, 18, 30),
    (5, "Blade", 1, 3, 36, 36, 47, 30),
    (6, "Gladius", 1, 3, 20, 20, 30, 20),
    (7, "Falchion", 1, 3, 24, 24, 34, 25),
    (8, "Serpent Sword", 1, 3, 30, 30, 42, 20),
    (9, "Sword of Salamander", 2, 3, 32, 32, 46, 30),
    (10, "Light Saber", 2, 4, 40, 40, 56, 25),
    (11, "Legendary Sword", 2, 3, 44, 44, 61, 20),
    (12, "Heliacal Sword", 2, 4, 56, 56, 72, 25),
    (13, "Double Blade", 1, 3, 48, 48, 65, 30),
    (14, "Lightning Sword", 1, 3, 59, 59, 78, 30),
    (15, "Giant Sword", 2, 3, 52, 52, 70, 15),
    (16, "Sword of Destruction", 1, 4, 82, 82, 104, 35),
    (17, "Dark Breaker", 2, 4, 104, 104, 128, 40),
    (18, "Thunder Blade", 2, 3, 105, 105, 129, 40),
    (19, "Divine Sword of Archangel", 1, 4, 86, 86, 110, 45),
];

const AXES: &[WeaponRow] = &[
    (0, "Small Axe", 1, 3, 1, 1, 6, 20),
    (1, "Hand Axe", 1, 3, 4, 4, 9, 30),
    (2, "Double Axe", 1, 3, 14, 14, 24, 20),
    (3, "Tomahawk", 1, 3, 18, 18, 28, 30),
    (4, "Elven Axe", 1, 3, 26, 26, 38, 40),
    (5, "Battle Axe", 2, 3, 30, 30, 44, 20),
    (6, "Nikea Axe", 2, 3, 34, 34, 50, 30),
    (7, "Larkan Axe", 2, 3, 46, 46, 67, 25),
    (8, "Crescent Axe", 2, 3, 54, 54, 69, 30),
];

const MACES: &[WeaponRow] = &[
    (0, "Mace", 1, 3, 7, 7, 13, 15),
    (1, "Morning Star", 1, 3, 13, 13, 22, 15),
    (2, "Flail", 1, 3, 22, 22, 32, 15),
    (3, "Great Hammer", 2, 3, 38, 38, 50, 15),
    (4, "Crystal Morning Star", 2, 3, 66, 66, 107, 30),
    (5, "Crystal Sword", 2, 4, 72, 72, 120, 40),
    (6, "Chaos Dragon Axe", 2, 4, 75, 75, 130, 35),
    (7, "Elemental Mace", 1, 3, 90, 90, 110, 50),
    (8, "Battle Scepter", 1, 4, 54, 54, 67, 30),
    (9, "Master Scepter", 1, 4, 72, 72, 89, 30),
    (10, "Great Scepter", 1, 4, 82, 82, 98, 30),
    (11, "Lord Scepter", 1, 4, 98, 98, 112, 30),
    (12, "Great Lord Scepter", 1, 4, 105, 105, 125, 30),
    (13, "Divine Scepter of Archangel", 1, 4, 108, 108, 130, 35),
];

const SPEARS: &[WeaponRow] = &[
    (0, "Light Spear", 2, 4, 42, 42, 63, 25),
    (1, "Spear", 2, 4, 23, 23, 36, 30),
    (2, "Dragon Lance", 2, 4, 15, 15, 28, 30),
    (3, "Giant Trident", 2, 4, 29, 29, 42, 35),
    (4, "Serpent Spear", 2, 4, 46, 46, 70, 35),
    (5, "Double Poleaxe", 2, 4, 13, 13, 24, 30),
    (6, "Halberd", 2, 4, 19, 19, 31, 30),
    (7, "Berdysh", 2, 4, 37, 37, 54, 30),
    (8, "Great Scythe", 2, 4, 54, 54, 80, 25),
    (9, "Bill of Balrog", 2, 4, 63, 63, 90, 25),
    (10, "Dragon Spear", 2, 4, 92, 92, 112, 35),
];

const BOWS: &[WeaponRow] = &[
    (0, "Short Bow", 2, 3, 2, 3, 5, 30),
    (1, "Bow", 2, 3, 8, 9, 13, 30),
    (2, "Elven Bow", 2, 3, 16, 17, 24, 30),
    (3, "Battle Bow", 2, 3, 26, 28, 37, 30),
    (4, "Tiger Bow", 2, 4, 40, 42, 52, 30),
    (5, "Silver Bow", 2, 4, 56, 59, 71, 40),
    (6, "Chaos Nature Bow", 2, 4, 75, 88, 106, 35),
    (7, "Bolt", 1, 1, 0, 0, 0, 0),
    (8, "Crossbow", 2, 2, 4, 5, 8, 40),
    (9, "Golden Crossbow", 2, 2, 12, 13, 19, 40),
    (10, "Arquebus", 2, 2, 20, 22, 30, 40),
    (11, "Light Crossbow", 2, 3, 32, 35, 44, 40),
    (12, "Serpent Crossbow", 2, 3, 48, 50, 61, 40),
    (13, "Bluewing Crossbow", 2, 3, 68, 68, 82, 40),
    (14, "Aquagold Crossbow", 2, 3, 72, 72, 90, 40),
    (15, "Arrows", 1, 1, 0, 0, 0, 0),
];

/// Staffs carry wizardry damage instead of physical damage.
const STAFFS: &[WeaponRow] = &[
    (0, "Skull Staff", 1, 3, 6, 3, 4, 20),
    (1, "Angelic Staff", 2, 3, 18, 10, 12, 25),
    (2, "Serpent Staff", 2, 3, 30, 17, 18, 25),
    (3, "Thunder Staff", 2, 4, 42, 23, 25, 25),
    (4, "Gorgon Staff", 2, 4, 52, 29, 32, 25),
    (5, "Legendary Staff", 1, 4, 59, 29, 31, 25),
    (6, "Staff of Resurrection", 1, 4, 70, 35, 39, 25),
    (7, "Chaos Lightning Staff", 2, 4, 75, 47, 48, 30),
    (8, "Staff of Destruction", 2, 4, 90, 50, 54, 25),
    (9, "Dragon Soul Staff", 1, 4, 100, 52, 58, 30),
    (10, "Divine Staff of Archangel", 2, 4, 104, 53, 55, 20),
];

// (number, name, width, height, drop level, defense, defense rate)
const SHIELDS: [(u16, &str, u8, u8, u8, u16, u16); 17] = [
    (0, "Small Shield", 2, 2, 3, 1, 3),
    (1, "Horn Shield", 2, 2, 9, 3, 9),
    (2, "Kite Shield", 2, 2, 12, 4, 12),
    (3, "Elven Shield", 2, 2, 21, 8, 22),
    (4, "Buckler", 2, 2, 6, 2, 6),
    (5, "Dragon Slayer Shield", 2, 2, 35, 10, 36),
    (6, "Skull Shield", 2, 2, 15, 5, 15),
    (7, "Spiked Shield", 2, 2, 30, 9, 30),
    (8, "Tower Shield", 2, 2, 40, 11, 40),
    (9, "Plate Shield", 2, 2, 25, 8, 25),
    (10, "Large Round Shield", 2, 2, 45, 12, 45),
    (11, "Serpent Shield", 2, 2, 50, 14, 50),
    (12, "Bronze Shield", 2, 2, 22, 7, 22),
    (13, "Dragon Shield", 2, 3, 60, 16, 60),
    (14, "Legendary Shield", 2, 3, 48, 13, 48),
    (15, "Grand Soul Shield", 2, 3, 74, 20, 74),
    (16, "Elemental Shield", 2, 3, 66, 18, 66),
];

fn weapon_slot(group: u8, number: u16) -> ItemSlot {
    match (group, number) {
        (4, 0..=7) => ItemSlot::LeftHand,
        (4, _) => ItemSlot::RightHand,
        _ => ItemSlot::EitherHand,
    }
}

fn weapon(group: u8, row: &WeaponRow) -> ItemDefinition {
    let &(number, name, width, height, drop_level, ..) = row;
    let mut weapon = item(group, number, name, width, height);
    weapon.slot = Some(weapon_slot(group, number));
    weapon.drop_level = drop_level;
    weapon.maximum_item_level = 15;
    weapon.durability = 20 + drop_level / 3;
    weapon.value = u32::from(drop_level) * 120;
    weapon.is_ammunition = group == 4 && matches!(number, 7 | 15);
    weapon.requirements = requirements(&[
        (RequiredLevel, f32::from(drop_level)),
        (RequiredStrength, f32::from(drop_level) * 2.0),
        (RequiredAgility, f32::from(drop_level)),
    ]);
    weapon
}

pub struct Weapons;

impl Builder for Weapons {
    fn name(&self) -> &'static str {
        "weapons"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let physical: [(u8, &[WeaponRow]); 5] =
            [(0, SWORDS), (1, AXES), (2, MACES), (3, SPEARS), (4, BOWS)];
        for (group, rows) in physical {
            for row in rows {
                let &(.., min, max, speed) = row;
                let definition = weapon(group, row);
                if definition.is_ammunition {
                    add_item(ctx, definition, &[])?;
                    continue;
                }
                add_item(
                    ctx,
                    definition,
                    &[
                        (MinimumPhysBaseDmg, f32::from(min)),
                        (MaximumPhysBaseDmg, f32::from(max)),
                        (AttackSpeed, f32::from(speed)),
                    ],
                )?;
            }
        }

        for row in STAFFS {
            let &(.., min, max, speed) = row;
            add_item(
                ctx,
                weapon(5, row),
                &[
                    (WizardryBaseDmg, f32::from(min + max) / 2.0),
                    (AttackSpeed, f32::from(speed)),
                ],
            )?;
        }

        for (number, name, width, height, drop_level, defense, defense_rate) in SHIELDS {
            let mut shield = item(6, number, name, width, height);
            shield.slot = Some(ItemSlot::LeftHand);
            shield.drop_level = drop_level;
            shield.maximum_item_level = 15;
            shield.durability = 20 + drop_level / 3;
            shield.value = u32::from(drop_level) * 100;
            shield.requirements = requirements(&[
                (RequiredLevel, f32::from(drop_level)),
                (RequiredStrength, f32::from(drop_level) + 20.0),
            ]);
            add_item(
                ctx,
                shield,
                &[
                    (DefenseBase, f32::from(defense)),
                    (DefenseRatePvm, f32::from(defense_rate)),
                ],
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldseed_core::attribute::HasAttributes;
    use worldseed_core::builder::run_builder;
    use worldseed_core::graph::ConfigurationGraph;
    use worldseed_core::id::ItemNumber;
    use worldseed_core::lookup::resolve_item;

    #[test]
    fn arrows_are_ammunition_without_damage() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &Weapons).unwrap();

        let arrows = resolve_item(&g, ItemNumber::new(4, 15)).unwrap();
        let arrows = g.items.get(arrows).unwrap();
        assert!(arrows.is_ammunition);
        assert!(arrows.base_attributes.is_empty());

        let saber = resolve_item(&g, ItemNumber::new(0, 10)).unwrap();
        let saber = g.items.get(saber).unwrap();
        assert_eq!(saber.name, "Light Saber");
        assert_eq!(saber.attribute(MaximumPhysBaseDmg), Some(56.0));
    }

    #[test]
    fn crossbows_go_in_the_right_hand() {
        assert_eq!(weapon_slot(4, 3), ItemSlot::LeftHand);
        assert_eq!(weapon_slot(4, 9), ItemSlot::RightHand);
        assert_eq!(weapon_slot(0, 0), ItemSlot::EitherHand);
    }
}
