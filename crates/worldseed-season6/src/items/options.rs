//! Item option types and the excellent, harmony and guardian option tables.

use tracing::debug;
use worldseed_core::attribute::AggregateType;
use worldseed_core::attribute::AttributeKind::{
    self, AttackRatePvp, AttackSpeed, CriticalDamageBonus, DamageReceiveDecrement,
    DamageReflection, DefenseBase, DefenseRatePvm, DefenseRatePvp, ExcellentDamageChance,
    HealthAfterMonsterKillMultiplier, ManaAfterMonsterKillMultiplier, MaximumHealth, MaximumMana,
    MaximumPhysBaseDmg, MaximumShield, MinimumPhysBaseDmg, MoneyAmountRate,
    RequiredAgilityReduction, RequiredStrengthReduction, ShieldBypassChance,
    ShieldDecreaseRateIncrease, SkillDamageBonus, WizardryBaseDmg,
};
use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::item::{IncreasableOption, ItemOptionDefinition, ItemOptionKind, ItemOptionType};

/// Every option type of this version.
pub struct ItemOptionTypes;

impl Builder for ItemOptionTypes {
    fn name(&self) -> &'static str {
        "item_option_types"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for kind in ItemOptionKind::ALL {
            let key = ctx.graph.item_option_types.insert_new(ItemOptionType {
                kind,
                name: kind.name().to_string(),
                is_visible: kind.is_visible(),
            });
            ctx.graph.item_option_types.append(key)?;
        }
        Ok(())
    }
}

fn option(
    number: u8,
    kind: ItemOptionKind,
    attribute: AttributeKind,
    value: f32,
    aggregate: AggregateType,
) -> IncreasableOption {
    IncreasableOption {
        number,
        kind,
        attribute,
        value,
        aggregate,
        level_values: Vec::new(),
    }
}

// Harmony level tables, one value per refinement level.
const MIN_PHYS_DAMAGE: [f32; 14] = [
    2., 3., 4., 5., 6., 7., 9., 11., 12., 14., 15., 16., 17., 20.,
];
const MAX_PHYS_DAMAGE: [f32; 14] = [
    3., 4., 5., 6., 7., 8., 10., 12., 14., 17., 20., 23., 26., 29.,
];
const REQUIREMENT_REDUCTION: [f32; 10] = [6., 8., 10., 12., 14., 16., 20., 23., 26., 29.];
const PHYS_CRITICAL_DAMAGE: [f32; 10] = [30., 32., 34., 36., 38., 40., 42., 44., 46., 48.];
const SHIELD_DECREASE: [f32; 5] = [0.05, 0.07, 0.09, 0.11, 0.14];
const WIZARDRY_DAMAGE: [f32; 14] = [
    6., 8., 10., 12., 14., 16., 17., 18., 19., 21., 23., 25., 27., 31.,
];
const WIZARDRY_SKILL_DAMAGE: [f32; 8] = [7., 10., 13., 16., 19., 22., 25., 30.];
const WIZARDRY_CRITICAL_DAMAGE: [f32; 8] = [10., 12., 14., 16., 18., 20., 22., 25.];
const DEFENSE: [f32; 14] = [
    3., 4., 5., 6., 7., 8., 10., 12., 14., 16., 18., 20., 22., 25.,
];
const MAXIMUM_HEALTH: [f32; 14] = [
    4., 6., 8., 10., 12., 14., 16., 18., 20., 22., 24., 26., 28., 30.,
];
const MAXIMUM_SHIELD: [f32; 10] = [50., 75., 100., 125., 150., 175., 200., 225., 250., 275.];
const DAMAGE_DECREMENT: [f32; 8] = [0.03, 0.04, 0.05, 0.06, 0.07, 0.08, 0.09, 0.1];

/// A harmony option whose value grows with the item's option level.
fn leveled(number: u8, attribute: AttributeKind, level_values: &[f32]) -> IncreasableOption {
    IncreasableOption {
        number,
        kind: ItemOptionKind::HarmonyOption,
        attribute,
        value: level_values.first().copied().unwrap_or_default(),
        aggregate: AggregateType::AddRaw,
        level_values: level_values.to_vec(),
    }
}

fn add_definition(
    ctx: &mut BuildContext<'_>,
    definition: ItemOptionDefinition,
) -> Result<(), BuildError> {
    debug!(
        definition = %definition.name,
        options = definition.possible_options.len(),
        "option definition created"
    );
    let key = ctx.graph.item_options.insert_new(definition);
    ctx.graph.item_options.append(key)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Excellent
// ---------------------------------------------------------------------------

pub struct ExcellentOptions;

impl Builder for ExcellentOptions {
    fn name(&self) -> &'static str {
        "excellent_options"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        use AggregateType::{AddRaw, Multiplicate};
        let exc = ItemOptionKind::Excellent;

        add_definition(
            ctx,
            ItemOptionDefinition {
                name: "Excellent Physical Attack Options".to_string(),
                kind: exc,
                add_chance: 0.001,
                add_chance_reduction_per_option: 0.2,
                maximum_options_per_item: 2,
                possible_options: vec![
                    option(1, exc, ManaAfterMonsterKillMultiplier, 1.0 / 8.0, AddRaw),
                    option(2, exc, HealthAfterMonsterKillMultiplier, 1.0 / 8.0, AddRaw),
                    option(3, exc, AttackSpeed, 7.0, AddRaw),
                    option(4, exc, MaximumPhysBaseDmg, 1.02, Multiplicate),
                    option(5, exc, MinimumPhysBaseDmg, 1.0 / 20.0, AddRaw),
                    option(6, exc, ExcellentDamageChance, 0.1, AddRaw),
                ],
            },
        )?;

        add_definition(
            ctx,
            ItemOptionDefinition {
                name: "Excellent Wizardry Attack Options".to_string(),
                kind: exc,
                add_chance: 0.001,
                add_chance_reduction_per_option: 0.2,
                maximum_options_per_item: 2,
                possible_options: vec![
                    option(1, exc, ManaAfterMonsterKillMultiplier, 1.0 / 8.0, AddRaw),
                    option(2, exc, HealthAfterMonsterKillMultiplier, 1.0 / 8.0, AddRaw),
                    option(3, exc, AttackSpeed, 7.0, AddRaw),
                    option(4, exc, WizardryBaseDmg, 1.02, Multiplicate),
                    option(5, exc, WizardryBaseDmg, 1.0 / 20.0, AddRaw),
                    option(6, exc, ExcellentDamageChance, 0.1, AddRaw),
                ],
            },
        )?;

        add_definition(
            ctx,
            ItemOptionDefinition {
                name: "Excellent Defense Options".to_string(),
                kind: exc,
                add_chance: 0.001,
                add_chance_reduction_per_option: 0.2,
                maximum_options_per_item: 2,
                possible_options: vec![
                    option(1, exc, MoneyAmountRate, 1.3, Multiplicate),
                    option(2, exc, DefenseRatePvm, 1.1, Multiplicate),
                    option(3, exc, DamageReflection, 0.05, AddRaw),
                    option(4, exc, DamageReceiveDecrement, 0.96, Multiplicate),
                    option(5, exc, MaximumMana, 1.04, Multiplicate),
                    option(6, exc, MaximumHealth, 1.04, Multiplicate),
                ],
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Harmony
// ---------------------------------------------------------------------------

pub struct HarmonyOptions;

impl Builder for HarmonyOptions {
    fn name(&self) -> &'static str {
        "harmony_options"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let harmony = |name: &str, possible_options| ItemOptionDefinition {
            name: name.to_string(),
            kind: ItemOptionKind::HarmonyOption,
            add_chance: 0.0,
            add_chance_reduction_per_option: 0.0,
            maximum_options_per_item: 1,
            possible_options,
        };

        add_definition(
            ctx,
            harmony(
                "Harmony Physical Attack Options",
                vec![
                    leveled(1, MinimumPhysBaseDmg, &MIN_PHYS_DAMAGE),
                    leveled(2, MaximumPhysBaseDmg, &MAX_PHYS_DAMAGE),
                    leveled(3, RequiredStrengthReduction, &REQUIREMENT_REDUCTION),
                    leveled(4, RequiredAgilityReduction, &REQUIREMENT_REDUCTION),
                    leveled(7, CriticalDamageBonus, &PHYS_CRITICAL_DAMAGE),
                    leveled(8, SkillDamageBonus, &[7., 8., 9., 11., 12., 14., 16., 19.]),
                    leveled(10, ShieldDecreaseRateIncrease, &SHIELD_DECREASE),
                ],
            ),
        )?;

        add_definition(
            ctx,
            harmony(
                "Harmony Wizardry Attack Options",
                vec![
                    leveled(1, WizardryBaseDmg, &WIZARDRY_DAMAGE),
                    leveled(2, RequiredStrengthReduction, &REQUIREMENT_REDUCTION),
                    leveled(3, RequiredAgilityReduction, &REQUIREMENT_REDUCTION),
                    leveled(4, SkillDamageBonus, &WIZARDRY_SKILL_DAMAGE),
                    leveled(5, CriticalDamageBonus, &WIZARDRY_CRITICAL_DAMAGE),
                    leveled(6, ShieldDecreaseRateIncrease, &SHIELD_DECREASE),
                ],
            ),
        )?;

        add_definition(
            ctx,
            harmony(
                "Harmony Defense Options",
                vec![
                    leveled(1, DefenseBase, &DEFENSE),
                    leveled(2, MaximumHealth, &MAXIMUM_HEALTH),
                    leveled(3, MaximumShield, &MAXIMUM_SHIELD),
                    leveled(4, DamageReceiveDecrement, &DAMAGE_DECREMENT),
                    leveled(5, ShieldBypassChance, &[0.01, 0.02, 0.03, 0.04, 0.05]),
                ],
            ),
        )
    }
}

// ---------------------------------------------------------------------------
// Guardian (380 level items)
// ---------------------------------------------------------------------------

pub struct GuardianOptions;

impl Builder for GuardianOptions {
    fn name(&self) -> &'static str {
        "guardian_options"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        use AggregateType::AddRaw;
        let guardian = ItemOptionKind::GuardianOption;

        add_definition(
            ctx,
            ItemOptionDefinition {
                name: "Guardian Weapon Options".to_string(),
                kind: guardian,
                add_chance: 1.0,
                add_chance_reduction_per_option: 0.0,
                maximum_options_per_item: 2,
                possible_options: vec![
                    option(1, guardian, AttackRatePvp, 10.0, AddRaw),
                    option(2, guardian, SkillDamageBonus, 10.0, AddRaw),
                ],
            },
        )?;

        add_definition(
            ctx,
            ItemOptionDefinition {
                name: "Guardian Armor Options".to_string(),
                kind: guardian,
                add_chance: 1.0,
                add_chance_reduction_per_option: 0.0,
                maximum_options_per_item: 2,
                possible_options: vec![
                    option(1, guardian, DefenseRatePvp, 10.0, AddRaw),
                    option(2, guardian, MaximumShield, 50.0, AddRaw),
                ],
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldseed_core::builder::run_builder;
    use worldseed_core::graph::ConfigurationGraph;
    use worldseed_core::lookup::resolve_option_type;

    #[test]
    fn every_option_kind_gets_a_type() {
        let mut g = ConfigurationGraph::new();
        assert_eq!(
            run_builder(&mut g, &ItemOptionTypes).unwrap(),
            ItemOptionKind::ALL.len()
        );
        for kind in ItemOptionKind::ALL {
            let key = resolve_option_type(&g, kind).unwrap();
            assert_eq!(g.item_option_types.get(key).unwrap().name, kind.name());
        }
    }

    #[test]
    fn harmony_options_carry_level_tables() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &HarmonyOptions).unwrap();
        let (_, physical) = g.item_options.iter().next().unwrap();
        let min_damage = &physical.possible_options[0];
        assert_eq!(min_damage.attribute, MinimumPhysBaseDmg);
        assert_eq!(min_damage.value, 2.0);
        assert_eq!(min_damage.level_values.len(), 14);
    }
}
