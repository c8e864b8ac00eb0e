//! Natural-key lookup resolver.
//!
//! Builders run in separate stages and share nothing but the graph, so a
//! builder that needs an entity created elsewhere finds it by its visible
//! fields. Resolution scans the committed records in collection order and
//! returns the first match; a miss is [`LookupError::ReferenceNotFound`].
//!
//! The `exists_*` guards additionally look at the calling builder's own
//! staged records. Composite builders use them to skip entities that are
//! already present before creating anything.

use crate::graph::ConfigurationGraph;
use crate::id::*;
use crate::item::ItemOptionKind;
use std::fmt;

// ---------------------------------------------------------------------------
// Natural keys
// ---------------------------------------------------------------------------

/// A combination of visible fields identifying one entity of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NaturalKey {
    Item(ItemNumber),
    Skill(u16),
    Monster(u16),
    Map(u8),
    CharacterClass(u8),
    DropGroup(String),
    ItemOptionType(ItemOptionKind),
    JewelMix(u8),
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaturalKey::Item(n) => write!(f, "item (group {}, number {})", n.group, n.number),
            NaturalKey::Skill(n) => write!(f, "skill {n}"),
            NaturalKey::Monster(n) => write!(f, "monster {n}"),
            NaturalKey::Map(n) => write!(f, "map {n}"),
            NaturalKey::CharacterClass(n) => write!(f, "character class {n}"),
            NaturalKey::DropGroup(d) => write!(f, "drop group '{d}'"),
            NaturalKey::ItemOptionType(k) => write!(f, "item option type {}", k.name()),
            NaturalKey::JewelMix(n) => write!(f, "jewel mix {n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Either the build order was violated or upstream data is incomplete.
    #[error("reference not found: {key}")]
    ReferenceNotFound { key: NaturalKey },
}

impl LookupError {
    pub fn key(&self) -> &NaturalKey {
        match self {
            LookupError::ReferenceNotFound { key } => key,
        }
    }
}

fn not_found(key: NaturalKey) -> LookupError {
    LookupError::ReferenceNotFound { key }
}

// ---------------------------------------------------------------------------
// Resolution (committed records only)
// ---------------------------------------------------------------------------

pub fn resolve_item(
    graph: &ConfigurationGraph,
    number: ItemNumber,
) -> Result<ItemKey, LookupError> {
    graph
        .items
        .iter()
        .find(|(_, item)| {
            item.group == number.group && item.number == number.number
        })
        .map(|(key, _)| key)
        .ok_or_else(|| not_found(NaturalKey::Item(number)))
}

pub fn resolve_skill(graph: &ConfigurationGraph, number: u16) -> Result<SkillKey, LookupError> {
    graph
        .skills
        .iter()
        .find(|(_, skill)| skill.number == number)
        .map(|(key, _)| key)
        .ok_or_else(|| not_found(NaturalKey::Skill(number)))
}

pub fn resolve_monster(graph: &ConfigurationGraph, number: u16) -> Result<MonsterKey, LookupError> {
    graph
        .monsters
        .iter()
        .find(|(_, monster)| monster.number == number)
        .map(|(key, _)| key)
        .ok_or_else(|| not_found(NaturalKey::Monster(number)))
}

pub fn resolve_map(graph: &ConfigurationGraph, number: u8) -> Result<MapKey, LookupError> {
    graph
        .maps
        .iter()
        .find(|(_, map)| map.number == number)
        .map(|(key, _)| key)
        .ok_or_else(|| not_found(NaturalKey::Map(number)))
}

pub fn resolve_character_class(
    graph: &ConfigurationGraph,
    number: u8,
) -> Result<CharacterClassKey, LookupError> {
    graph
        .character_classes
        .iter()
        .find(|(_, class)| class.number == number)
        .map(|(key, _)| key)
        .ok_or_else(|| not_found(NaturalKey::CharacterClass(number)))
}

pub fn resolve_drop_group(
    graph: &ConfigurationGraph,
    description: &str,
) -> Result<DropGroupKey, LookupError> {
    graph
        .drop_item_groups
        .iter()
        .find(|(_, group)| group.description == description)
        .map(|(key, _)| key)
        .ok_or_else(|| not_found(NaturalKey::DropGroup(description.to_string())))
}

pub fn resolve_option_type(
    graph: &ConfigurationGraph,
    kind: ItemOptionKind,
) -> Result<ItemOptionTypeKey, LookupError> {
    graph
        .item_option_types
        .iter()
        .find(|(_, t)| t.kind == kind)
        .map(|(key, _)| key)
        .ok_or_else(|| not_found(NaturalKey::ItemOptionType(kind)))
}

// ---------------------------------------------------------------------------
// Existence guards (committed and own staged records)
// ---------------------------------------------------------------------------

/// Find a monster by number, including records staged by the current builder.
pub fn find_monster(graph: &ConfigurationGraph, number: u16) -> Option<MonsterKey> {
    graph
        .monsters
        .iter_all()
        .find(|(_, monster)| monster.number == number)
        .map(|(key, _)| key)
}

/// Find a drop group by description, including the current builder's stage.
pub fn find_drop_group(graph: &ConfigurationGraph, description: &str) -> Option<DropGroupKey> {
    graph
        .drop_item_groups
        .iter_all()
        .find(|(_, group)| group.description == description)
        .map(|(key, _)| key)
}

pub fn exists(graph: &ConfigurationGraph, key: &NaturalKey) -> bool {
    match key {
        NaturalKey::Item(n) => graph
            .items
            .iter_all()
            .any(|(_, i)| i.group == n.group && i.number == n.number),
        NaturalKey::Skill(n) => graph.skills.iter_all().any(|(_, s)| s.number == *n),
        NaturalKey::Monster(n) => find_monster(graph, *n).is_some(),
        NaturalKey::Map(n) => graph.maps.iter_all().any(|(_, m)| m.number == *n),
        NaturalKey::CharacterClass(n) => graph
            .character_classes
            .iter_all()
            .any(|(_, c)| c.number == *n),
        NaturalKey::DropGroup(d) => find_drop_group(graph, d).is_some(),
        NaturalKey::ItemOptionType(k) => graph
            .item_option_types
            .iter_all()
            .any(|(_, t)| t.kind == *k),
        NaturalKey::JewelMix(n) => graph.jewel_mixes.iter_all().any(|(_, m)| m.number == *n),
    }
}
