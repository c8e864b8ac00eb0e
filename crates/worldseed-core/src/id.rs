use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Handle to an item category in the configuration graph.
    pub struct ItemCategoryKey;

    /// Handle to an item definition.
    pub struct ItemKey;

    /// Handle to an item option type.
    pub struct ItemOptionTypeKey;

    /// Handle to an item option definition (excellent, harmony, guardian, ...).
    pub struct ItemOptionKey;

    /// Handle to a skill.
    pub struct SkillKey;

    /// Handle to a game map definition.
    pub struct MapKey;

    /// Handle to a character class.
    pub struct CharacterClassKey;

    /// Handle to a monster definition.
    pub struct MonsterKey;

    /// Handle to a drop item group.
    pub struct DropGroupKey;

    /// Handle to a jewel mix.
    pub struct JewelMixKey;

    /// Handle to a cash shop category.
    pub struct CashShopCategoryKey;

    /// Handle to a game client definition.
    pub struct ClientDefinitionKey;
}

/// Natural key of an item: the client-side group and number pair.
///
/// The numbering scheme belongs to the game client and is treated as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemNumber {
    pub group: u8,
    pub number: u16,
}

impl ItemNumber {
    pub const fn new(group: u8, number: u16) -> Self {
        Self { group, number }
    }
}

impl std::fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.group, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_number_equality() {
        let a = ItemNumber::new(14, 13);
        let b = ItemNumber::new(0xE, 13);
        let c = ItemNumber::new(12, 30);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn item_number_display() {
        assert_eq!(ItemNumber::new(12, 30).to_string(), "12/30");
    }

    #[test]
    fn item_numbers_are_hashable() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(ItemNumber::new(14, 13), "Jewel of Bless");
        map.insert(ItemNumber::new(14, 14), "Jewel of Soul");
        assert_eq!(map[&ItemNumber::new(14, 13)], "Jewel of Bless");
    }
}
