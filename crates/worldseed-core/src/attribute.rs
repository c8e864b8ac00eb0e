//! Stat identifiers and the attribute-assignment collaborator.
//!
//! The attribute system that later evaluates these values is not part of the
//! seeding pipeline. Builders only hand it `(kind, value)` pairs, and the
//! assigner stores them against the target entity.

use serde::{Deserialize, Serialize};

/// Every stat identifier referenced by configuration data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Level,
    MaximumHealth,
    MaximumMana,
    MaximumShield,
    MaximumAbility,
    MinimumPhysBaseDmg,
    MaximumPhysBaseDmg,
    PhysicalBaseDmg,
    WizardryBaseDmg,
    CurseBaseDmg,
    DefenseBase,
    AttackRatePvm,
    DefenseRatePvm,
    AttackRatePvp,
    DefenseRatePvp,
    AttackSpeed,
    ExcellentDamageChance,
    CriticalDamageBonus,
    SkillDamageBonus,
    DamageReflection,
    DamageReceiveDecrement,
    MoneyAmountRate,
    HealthAfterMonsterKillMultiplier,
    ManaAfterMonsterKillMultiplier,
    HealthRecoveryMultiplier,
    ManaRecoveryMultiplier,
    ShieldDecreaseRateIncrease,
    ShieldBypassChance,
    ShieldRateIncrease,
    RequiredStrengthReduction,
    RequiredAgilityReduction,
    PoisonResistance,
    IceResistance,
    LightningResistance,
    FireResistance,
    EarthResistance,
    WindResistance,
    WaterResistance,
    RequiredLevel,
    RequiredStrength,
    RequiredAgility,
    RequiredEnergy,
    RequiredLeadership,
}

/// How an attribute value combines with other contributions of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AggregateType {
    #[default]
    AddRaw,
    Multiplicate,
    AddFinal,
}

/// A stored `(kind, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub kind: AttributeKind,
    pub value: f32,
}

/// An entity that carries an attribute map.
pub trait HasAttributes {
    fn attributes(&self) -> &[AttributeValue];
    fn attributes_mut(&mut self) -> &mut Vec<AttributeValue>;

    /// Value stored for `kind`, if any.
    fn attribute(&self, kind: AttributeKind) -> Option<f32> {
        self.attributes()
            .iter()
            .find(|a| a.kind == kind)
            .map(|a| a.value)
    }
}

/// Stores attribute maps against entities.
pub trait AttributeAssigner {
    fn assign(&self, target: &mut dyn HasAttributes, attributes: &[(AttributeKind, f32)]);
}

/// Default assigner: one value per kind, a repeated kind overwrites.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpsertAttributes;

impl AttributeAssigner for UpsertAttributes {
    fn assign(&self, target: &mut dyn HasAttributes, attributes: &[(AttributeKind, f32)]) {
        let stored = target.attributes_mut();
        for &(kind, value) in attributes {
            match stored.iter_mut().find(|a| a.kind == kind) {
                Some(existing) => existing.value = value,
                None => stored.push(AttributeValue { kind, value }),
            }
        }
    }
}
