//! Item catalog entities: categories, item definitions, option tables and
//! jewel mixes.

use crate::attribute::{AggregateType, AttributeKind, AttributeValue, HasAttributes};
use crate::collection::Entity;
use crate::id::{ItemKey, ItemNumber};
use serde::{Deserialize, Serialize};

/// Display grouping of item groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub group: u8,
    pub name: String,
}

impl Entity for ItemCategory {
    const KIND: &'static str = "item category";
}

/// Equipment slot an item can be worn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSlot {
    LeftHand,
    RightHand,
    EitherHand,
    Helm,
    Armor,
    Pants,
    Gloves,
    Boots,
    Wings,
    Pet,
    Pendant,
    Ring,
}

/// An item definition in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub group: u8,
    pub number: u16,
    pub name: String,
    pub width: u8,
    pub height: u8,
    pub durability: u8,
    pub drop_level: u8,
    pub maximum_item_level: u8,
    pub value: u32,
    pub drops_from_monsters: bool,
    pub is_ammunition: bool,
    pub slot: Option<ItemSlot>,
    /// Power-ups granted by the bare item (damage, defense, ...).
    pub base_attributes: Vec<AttributeValue>,
    /// Requirements to equip or use the item.
    pub requirements: Vec<AttributeValue>,
}

impl ItemDefinition {
    pub fn item_number(&self) -> ItemNumber {
        ItemNumber::new(self.group, self.number)
    }
}

impl Entity for ItemDefinition {
    const KIND: &'static str = "item";
}

impl HasAttributes for ItemDefinition {
    fn attributes(&self) -> &[AttributeValue] {
        &self.base_attributes
    }

    fn attributes_mut(&mut self) -> &mut Vec<AttributeValue> {
        &mut self.base_attributes
    }
}

/// Every option kind defined for this game version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ItemOptionKind {
    #[default]
    Option,
    Luck,
    Excellent,
    Wing,
    AncientBonus,
    AncientOption,
    HarmonyOption,
    GuardianOption,
    SocketOption,
    BlackFenrir,
    BlueFenrir,
    GoldFenrir,
}

impl ItemOptionKind {
    /// All option kinds, in their canonical order.
    pub const ALL: [ItemOptionKind; 12] = [
        ItemOptionKind::Option,
        ItemOptionKind::Luck,
        ItemOptionKind::Excellent,
        ItemOptionKind::Wing,
        ItemOptionKind::AncientBonus,
        ItemOptionKind::AncientOption,
        ItemOptionKind::HarmonyOption,
        ItemOptionKind::GuardianOption,
        ItemOptionKind::SocketOption,
        ItemOptionKind::BlackFenrir,
        ItemOptionKind::BlueFenrir,
        ItemOptionKind::GoldFenrir,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemOptionKind::Option => "Option",
            ItemOptionKind::Luck => "Luck",
            ItemOptionKind::Excellent => "Excellent",
            ItemOptionKind::Wing => "Wing",
            ItemOptionKind::AncientBonus => "Ancient Bonus",
            ItemOptionKind::AncientOption => "Ancient Option",
            ItemOptionKind::HarmonyOption => "Harmony Option",
            ItemOptionKind::GuardianOption => "Guardian Option",
            ItemOptionKind::SocketOption => "Socket Option",
            ItemOptionKind::BlackFenrir => "Black Fenrir",
            ItemOptionKind::BlueFenrir => "Blue Fenrir",
            ItemOptionKind::GoldFenrir => "Gold Fenrir",
        }
    }

    /// Whether the client shows options of this kind in item tooltips.
    pub fn is_visible(self) -> bool {
        !matches!(self, ItemOptionKind::AncientBonus)
    }
}

/// A registered option kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemOptionType {
    pub kind: ItemOptionKind,
    pub name: String,
    pub is_visible: bool,
}

impl Entity for ItemOptionType {
    const KIND: &'static str = "item option type";
}

/// One rollable option inside an option definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncreasableOption {
    pub number: u8,
    pub kind: ItemOptionKind,
    pub attribute: AttributeKind,
    pub value: f32,
    pub aggregate: AggregateType,
    /// Per-level values for options that grow with an option level
    /// (harmony). Empty when the option is flat.
    pub level_values: Vec<f32>,
}

/// A table of options that can be rolled on a family of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemOptionDefinition {
    pub name: String,
    pub kind: ItemOptionKind,
    pub add_chance: f32,
    pub add_chance_reduction_per_option: f32,
    pub maximum_options_per_item: u8,
    pub possible_options: Vec<IncreasableOption>,
}

impl Entity for ItemOptionDefinition {
    const KIND: &'static str = "item option definition";
}

/// Packs a stack of single jewels into one packed jewel and back.
///
/// Both items are referenced by handle, so a mix can only exist once both
/// items are in the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JewelMix {
    pub number: u8,
    pub single_jewel: ItemKey,
    pub mixed_jewel: ItemKey,
}

impl Entity for JewelMix {
    const KIND: &'static str = "jewel mix";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn option_kind_list_is_complete_and_unique() {
        let unique: HashSet<_> = ItemOptionKind::ALL.iter().collect();
        assert_eq!(unique.len(), ItemOptionKind::ALL.len());
        assert!(ItemOptionKind::ALL.contains(&ItemOptionKind::HarmonyOption));
        assert!(
            ItemOptionKind::ALL.contains(&ItemOptionKind::GuardianOption)
        );
    }

    #[test]
    fn option_kind_names_are_distinct() {
        let names: HashSet<_> = ItemOptionKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), ItemOptionKind::ALL.len());
    }

    #[test]
    fn item_number_of_definition() {
        let item = ItemDefinition {
            group: 12,
            number: 30,
            ..Default::default()
        };
        assert_eq!(item.item_number(), ItemNumber::new(12, 30));
    }
}
