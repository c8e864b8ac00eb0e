//! Structural integrity checks over a completed configuration graph.
//!
//! Verifies identifier uniqueness per kind, natural-key uniqueness, that every
//! relation points at an appended entity, and that monster/drop-group
//! relations can be navigated from both sides.

use crate::collection::{Collection, Entity};
use crate::graph::ConfigurationGraph;
use crate::id::ItemNumber;
use crate::lookup::NaturalKey;
use slotmap::Key;
use std::collections::HashSet;
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Issue types
// ---------------------------------------------------------------------------

/// One integrity problem found in a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityIssue {
    #[error("{kind} identifier {id} is used more than once")]
    DuplicateId { kind: &'static str, id: u32 },
    #[error("{0} exists more than once")]
    DuplicateKey(NaturalKey),
    #[error("{from} references a {kind} that is not in the graph")]
    DanglingReference { from: String, kind: &'static str },
    #[error("monster {monster} and drop group '{group}' do not reference each other")]
    OneSidedRelation { monster: u16, group: String },
}

/// Result of [`check_integrity`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

fn check_ids<K: Key, T: Entity>(collection: &Collection<K, T>, issues: &mut Vec<IntegrityIssue>) {
    let mut seen = HashSet::new();
    for (id, _) in collection.iter_with_ids() {
        if !seen.insert(id) {
            issues.push(IntegrityIssue::DuplicateId { kind: T::KIND, id });
        }
    }
}

fn check_keys<K: Key, T: Entity, N: Eq + Hash + Clone>(
    collection: &Collection<K, T>,
    natural: impl Fn(&T) -> N,
    describe: impl Fn(N) -> NaturalKey,
    issues: &mut Vec<IntegrityIssue>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for (_, record) in collection.iter() {
        let key = natural(record);
        if !seen.insert(key.clone()) && reported.insert(key.clone()) {
            issues.push(IntegrityIssue::DuplicateKey(describe(key)));
        }
    }
}

/// Run every integrity check over the committed records of `graph`.
pub fn check_integrity(graph: &ConfigurationGraph) -> IntegrityReport {
    let mut issues = Vec::new();

    check_ids(&graph.item_categories, &mut issues);
    check_ids(&graph.items, &mut issues);
    check_ids(&graph.item_option_types, &mut issues);
    check_ids(&graph.item_options, &mut issues);
    check_ids(&graph.skills, &mut issues);
    check_ids(&graph.maps, &mut issues);
    check_ids(&graph.character_classes, &mut issues);
    check_ids(&graph.monsters, &mut issues);
    check_ids(&graph.drop_item_groups, &mut issues);
    check_ids(&graph.jewel_mixes, &mut issues);
    check_ids(&graph.cash_shop_categories, &mut issues);
    check_ids(&graph.client_definitions, &mut issues);

    check_keys(
        &graph.items,
        |i| (i.group, i.number),
        |(group, number)| NaturalKey::Item(ItemNumber::new(group, number)),
        &mut issues,
    );
    check_keys(&graph.skills, |s| s.number, NaturalKey::Skill, &mut issues);
    check_keys(
        &graph.monsters,
        |m| m.number,
        NaturalKey::Monster,
        &mut issues,
    );
    check_keys(&graph.maps, |m| m.number, NaturalKey::Map, &mut issues);
    check_keys(
        &graph.character_classes,
        |c| c.number,
        NaturalKey::CharacterClass,
        &mut issues,
    );
    check_keys(
        &graph.drop_item_groups,
        |g| g.description.clone(),
        NaturalKey::DropGroup,
        &mut issues,
    );
    check_keys(
        &graph.jewel_mixes,
        |m| m.number,
        NaturalKey::JewelMix,
        &mut issues,
    );
    check_keys(
        &graph.item_option_types,
        |t| t.kind,
        NaturalKey::ItemOptionType,
        &mut issues,
    );

    check_references(graph, &mut issues);

    IntegrityReport { issues }
}

fn check_references(graph: &ConfigurationGraph, issues: &mut Vec<IntegrityIssue>) {
    let mut dangling = |from: String, kind: &'static str| {
        issues.push(IntegrityIssue::DanglingReference { from, kind });
    };

    for (_, monster) in graph.monsters.iter() {
        if let Some(skill) = monster.attack_skill {
            if !graph.skills.contains(skill) {
                dangling(format!("monster {}", monster.number), "skill");
            }
        }
        for &group in &monster.drop_item_groups {
            if !graph.drop_item_groups.contains(group) {
                dangling(format!("monster {}", monster.number), "drop item group");
            }
        }
    }

    for (_, group) in graph.drop_item_groups.iter() {
        for &item in &group.possible_items {
            if !graph.items.contains(item) {
                dangling(format!("drop group '{}'", group.description), "item");
            }
        }
        if let Some(monster) = group.monster {
            if !graph.monsters.contains(monster) {
                dangling(format!("drop group '{}'", group.description), "monster");
            }
        }
    }

    for (_, mix) in graph.jewel_mixes.iter() {
        for item in [mix.single_jewel, mix.mixed_jewel] {
            if !graph.items.contains(item) {
                dangling(format!("jewel mix {}", mix.number), "item");
            }
        }
    }

    for (_, class) in graph.character_classes.iter() {
        if let Some(map) = class.home_map {
            if !graph.maps.contains(map) {
                dangling(format!("character class {}", class.number), "map");
            }
        }
        if let Some(next) = class.next_generation_class {
            if !graph.character_classes.contains(next) {
                dangling(
                    format!("character class {}", class.number),
                    "character class",
                );
            }
        }
    }

    // Monster <-> drop group navigability.
    for (monster_key, monster) in graph.monsters.iter() {
        for &group_key in &monster.drop_item_groups {
            if let Some(group) = graph.drop_item_groups.get(group_key) {
                if group.monster.is_some_and(|owner| owner != monster_key) {
                    issues.push(IntegrityIssue::OneSidedRelation {
                        monster: monster.number,
                        group: group.description.clone(),
                    });
                }
            }
        }
    }
    for (group_key, group) in graph.drop_item_groups.iter() {
        let Some(owner) = group.monster else { continue };
        if let Some(monster) = graph.monsters.get(owner) {
            if !monster.drop_item_groups.contains(&group_key) {
                issues.push(IntegrityIssue::OneSidedRelation {
                    monster: monster.number,
                    group: group.description.clone(),
                });
            }
        }
    }
}
