//! Monster roster entities and their drop tables.

use crate::attribute::{AttributeValue, HasAttributes};
use crate::collection::Entity;
use crate::id::{DropGroupKey, ItemKey, MonsterKey, SkillKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What kind of world object a monster definition describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NpcObjectKind {
    #[default]
    Monster,
    PassiveNpc,
    Guard,
    Trap,
}

/// A monster (or NPC) definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonsterDefinition {
    pub number: u16,
    pub designation: String,
    pub object_kind: NpcObjectKind,
    pub move_range: u8,
    pub attack_range: u8,
    pub view_range: u8,
    pub move_delay: Duration,
    pub attack_delay: Duration,
    pub respawn_delay: Duration,
    /// Client-side monster attribute byte (2 marks event invasion mobs).
    pub attribute: u8,
    pub number_of_maximum_item_drops: u8,
    pub attack_skill: Option<SkillKey>,
    pub attributes: Vec<AttributeValue>,
    pub drop_item_groups: Vec<DropGroupKey>,
}

impl Entity for MonsterDefinition {
    const KIND: &'static str = "monster";
}

impl HasAttributes for MonsterDefinition {
    fn attributes(&self) -> &[AttributeValue] {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Vec<AttributeValue> {
        &mut self.attributes
    }
}

/// What a drop group produces when it is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpecialItemType {
    #[default]
    None,
    RandomItem,
    Excellent,
    Ancient,
    Money,
}

/// A weighted set of items a monster can drop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropItemGroup {
    /// Unique per graph; used as the de-duplication key.
    pub description: String,
    pub chance: f64,
    pub item_type: SpecialItemType,
    pub item_level: Option<u8>,
    pub minimum_monster_level: Option<u8>,
    pub maximum_monster_level: Option<u8>,
    pub possible_items: Vec<ItemKey>,
    /// Owning monster, when the group is monster specific.
    pub monster: Option<MonsterKey>,
}

impl Entity for DropItemGroup {
    const KIND: &'static str = "drop item group";
}
