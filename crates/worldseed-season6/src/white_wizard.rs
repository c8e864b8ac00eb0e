//! The White Wizard invasion boss and its drop groups.

use crate::monsters::{DropSpec, MonsterSpec, MonsterStats, add_monster};
use std::time::Duration;
use worldseed_core::builder::{BuildContext, BuildError, Builder, BuilderKind};
use worldseed_core::id::{ItemNumber, MonsterKey};
use worldseed_core::monster::SpecialItemType;

pub const WHITE_WIZARD: u16 = 135;

/// Skill number of Energy Ball.
const ENERGY_BALL: u16 = 17;

const JEWELS: &[ItemNumber] = &[
    ItemNumber::new(14, 13),
    ItemNumber::new(14, 14),
    ItemNumber::new(12, 15),
];

const DROPS: &[DropSpec] = &[
    DropSpec {
        description: "White Wizard - Jewels",
        chance: 0.5,
        item_type: SpecialItemType::None,
        item_level: None,
        items: JEWELS,
    },
    DropSpec {
        description: "White Wizard - Zen",
        chance: 0.5,
        item_type: SpecialItemType::Money,
        item_level: None,
        items: &[],
    },
];

pub const SPEC: MonsterSpec = MonsterSpec {
    number: WHITE_WIZARD,
    designation: "White Wizard",
    move_range: 3,
    attack_range: 4,
    view_range: 8,
    move_delay: Duration::from_millis(400),
    attack_delay: Duration::from_millis(1600),
    respawn_delay: Duration::from_secs(10),
    attribute: 3,
    number_of_maximum_item_drops: 3,
    attack_skill: Some(ENERGY_BALL),
    stats: MonsterStats {
        level: 95.0,
        health: 150_000.0,
        min_damage: 700.0,
        max_damage: 800.0,
        defense: 500.0,
        attack_rate: 1_200.0,
        defense_rate: 600.0,
    },
    drops: DROPS,
};

/// Create the White Wizard unless it already exists.
pub fn create_white_wizard(ctx: &mut BuildContext<'_>) -> Result<Option<MonsterKey>, BuildError> {
    add_monster(ctx, &SPEC)
}

pub struct WhiteWizard;

impl Builder for WhiteWizard {
    fn name(&self) -> &'static str {
        "white_wizard"
    }

    fn kind(&self) -> BuilderKind {
        BuilderKind::Composite
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["skills", "jewels"]
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        create_white_wizard(ctx).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Jewels;
    use crate::skills::Skills;
    use worldseed_core::builder::run_builder;
    use worldseed_core::graph::ConfigurationGraph;
    use worldseed_core::lookup::resolve_monster;
    use worldseed_core::test_utils::monster_count;

    fn prerequisites() -> ConfigurationGraph {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &Skills).unwrap();
        run_builder(&mut g, &Jewels).unwrap();
        g
    }

    #[test]
    fn second_run_creates_nothing() {
        let mut g = prerequisites();
        assert_eq!(run_builder(&mut g, &WhiteWizard).unwrap(), 3);
        assert_eq!(run_builder(&mut g, &WhiteWizard).unwrap(), 0);
        assert_eq!(monster_count(&g, WHITE_WIZARD), 1);
        assert_eq!(g.drop_item_groups.len(), 2);
    }

    #[test]
    fn wizard_casts_energy_ball_and_drops_jewels() {
        let mut g = prerequisites();
        run_builder(&mut g, &WhiteWizard).unwrap();

        let key = resolve_monster(&g, WHITE_WIZARD).unwrap();
        let wizard = g.monsters.get(key).unwrap();
        let skill = g.skills.get(wizard.attack_skill.unwrap()).unwrap();
        assert_eq!(skill.name, "Energy Ball");

        let groups: Vec<_> = wizard
            .drop_item_groups
            .iter()
            .map(|&k| g.drop_item_groups.get(k).unwrap())
            .collect();
        assert_eq!(groups[0].possible_items.len(), 3);
        assert_eq!(groups[1].item_type, SpecialItemType::Money);
        assert!(groups.iter().all(|group| group.monster == Some(key)));
    }

    #[test]
    fn wizard_without_jewels_fails() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &Skills).unwrap();
        assert!(run_builder(&mut g, &WhiteWizard).is_err());
        assert_eq!(monster_count(&g, WHITE_WIZARD), 0);
    }
}
