//! Skills, maps and character classes.

use crate::collection::Entity;
use crate::id::{CharacterClassKey, MapKey};
use serde::{Deserialize, Serialize};

/// How a skill selects and hits its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkillType {
    #[default]
    DirectHit,
    AreaSkillAutomaticHits,
    AreaSkillExplicitHits,
    Buff,
    Regeneration,
    Other,
}

/// Which damage formula a skill uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DamageType {
    #[default]
    Physical,
    Wizardry,
    Curse,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub number: u16,
    pub name: String,
    pub skill_type: SkillType,
    pub damage_type: DamageType,
    pub attack_damage: u32,
    pub mana_cost: u32,
    pub range: u8,
}

impl Entity for Skill {
    const KIND: &'static str = "skill";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameMapDefinition {
    pub number: u8,
    pub name: String,
    pub exp_multiplier: f64,
}

impl Entity for GameMapDefinition {
    const KIND: &'static str = "map";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub number: u8,
    pub name: String,
    pub can_get_created: bool,
    pub level_requirement_by_creation: u16,
    pub next_generation_class: Option<CharacterClassKey>,
    /// Map a new character of this class starts on.
    pub home_map: Option<MapKey>,
}

impl Entity for CharacterClass {
    const KIND: &'static str = "character class";
}
