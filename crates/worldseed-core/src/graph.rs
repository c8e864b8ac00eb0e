use crate::client::{CashShopCategory, GameClientDefinition};
use crate::collection::Collection;
use crate::id::*;
use crate::item::{
    ItemCategory, ItemDefinition, ItemOptionDefinition, ItemOptionType, JewelMix,
};
use crate::monster::{DropItemGroup, MonsterDefinition};
use crate::world::{CharacterClass, GameMapDefinition, Skill};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ConfigurationGraph
// ---------------------------------------------------------------------------

/// The complete set of entities describing one game-world version.
///
/// One writer owns the graph for the whole build pass. Builders append into
/// the collections; the pipeline commits or rolls back each builder's stage
/// across every collection at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigurationGraph {
    pub item_categories: Collection<ItemCategoryKey, ItemCategory>,
    pub items: Collection<ItemKey, ItemDefinition>,
    pub item_option_types: Collection<ItemOptionTypeKey, ItemOptionType>,
    pub item_options: Collection<ItemOptionKey, ItemOptionDefinition>,
    pub skills: Collection<SkillKey, Skill>,
    pub maps: Collection<MapKey, GameMapDefinition>,
    pub character_classes: Collection<CharacterClassKey, CharacterClass>,
    pub monsters: Collection<MonsterKey, MonsterDefinition>,
    pub drop_item_groups: Collection<DropGroupKey, DropItemGroup>,
    pub jewel_mixes: Collection<JewelMixKey, JewelMix>,
    pub cash_shop_categories: Collection<CashShopCategoryKey, CashShopCategory>,
    pub client_definitions: Collection<ClientDefinitionKey, GameClientDefinition>,
}

/// Committed entity counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphCounts {
    pub item_categories: usize,
    pub items: usize,
    pub item_option_types: usize,
    pub item_options: usize,
    pub skills: usize,
    pub maps: usize,
    pub character_classes: usize,
    pub monsters: usize,
    pub drop_item_groups: usize,
    pub jewel_mixes: usize,
    pub cash_shop_categories: usize,
    pub client_definitions: usize,
}

impl GraphCounts {
    pub fn total(&self) -> usize {
        self.item_categories
            + self.items
            + self.item_option_types
            + self.item_options
            + self.skills
            + self.maps
            + self.character_classes
            + self.monsters
            + self.drop_item_groups
            + self.jewel_mixes
            + self.cash_shop_categories
            + self.client_definitions
    }
}

/// Applies the same statement to every collection of a graph.
macro_rules! for_each_collection {
    ($graph:expr, $c:ident => $body:expr) => {{
        let g = $graph;
        {
            let $c = &mut g.item_categories;
            $body;
        }
        {
            let $c = &mut g.items;
            $body;
        }
        {
            let $c = &mut g.item_option_types;
            $body;
        }
        {
            let $c = &mut g.item_options;
            $body;
        }
        {
            let $c = &mut g.skills;
            $body;
        }
        {
            let $c = &mut g.maps;
            $body;
        }
        {
            let $c = &mut g.character_classes;
            $body;
        }
        {
            let $c = &mut g.monsters;
            $body;
        }
        {
            let $c = &mut g.drop_item_groups;
            $body;
        }
        {
            let $c = &mut g.jewel_mixes;
            $body;
        }
        {
            let $c = &mut g.cash_shop_categories;
            $body;
        }
        {
            let $c = &mut g.client_definitions;
            $body;
        }
    }};
}

impl ConfigurationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish every collection's stage. Returns the number of records made
    /// visible.
    pub fn commit_staged(&mut self) -> usize {
        let mut published = 0;
        for_each_collection!(self, c => published += c.commit_staged());
        published
    }

    /// Discard every record created since the last commit. Returns the number
    /// of appended records dropped.
    pub fn rollback_staged(&mut self) -> usize {
        let mut dropped = 0;
        for_each_collection!(self, c => dropped += c.rollback_staged());
        dropped
    }

    /// Whether any collection holds uncommitted records.
    pub fn has_staged(&self) -> bool {
        self.item_categories.has_staged()
            || self.items.has_staged()
            || self.item_option_types.has_staged()
            || self.item_options.has_staged()
            || self.skills.has_staged()
            || self.maps.has_staged()
            || self.character_classes.has_staged()
            || self.monsters.has_staged()
            || self.drop_item_groups.has_staged()
            || self.jewel_mixes.has_staged()
            || self.cash_shop_categories.has_staged()
            || self.client_definitions.has_staged()
    }

    pub fn counts(&self) -> GraphCounts {
        GraphCounts {
            item_categories: self.item_categories.len(),
            items: self.items.len(),
            item_option_types: self.item_option_types.len(),
            item_options: self.item_options.len(),
            skills: self.skills.len(),
            maps: self.maps.len(),
            character_classes: self.character_classes.len(),
            monsters: self.monsters.len(),
            drop_item_groups: self.drop_item_groups.len(),
            jewel_mixes: self.jewel_mixes.len(),
            cash_shop_categories: self.cash_shop_categories.len(),
            client_definitions: self.client_definitions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDefinition;
    use crate::monster::MonsterDefinition;

    #[test]
    fn new_graph_is_empty() {
        let g = ConfigurationGraph::new();
        assert_eq!(g.counts().total(), 0);
        assert!(!g.has_staged());
    }

    #[test]
    fn commit_spans_all_collections() {
        let mut g = ConfigurationGraph::new();
        let item = g.items.insert_new(ItemDefinition::default());
        g.items.append(item).unwrap();
        let monster = g.monsters.insert_new(MonsterDefinition::default());
        g.monsters.append(monster).unwrap();
        assert!(g.has_staged());

        assert_eq!(g.commit_staged(), 2);
        assert!(!g.has_staged());
        assert_eq!(g.counts().items, 1);
        assert_eq!(g.counts().monsters, 1);
        assert_eq!(g.counts().total(), 2);
    }

    #[test]
    fn rollback_spans_all_collections() {
        let mut g = ConfigurationGraph::new();
        let item = g.items.insert_new(ItemDefinition::default());
        g.items.append(item).unwrap();
        g.commit_staged();

        let monster = g.monsters.insert_new(MonsterDefinition::default());
        g.monsters.append(monster).unwrap();
        let skill = g.skills.create_new();
        g.skills.append(skill).unwrap();

        assert_eq!(g.rollback_staged(), 2);
        assert!(!g.has_staged());
        assert_eq!(g.counts().total(), 1);
    }
}
