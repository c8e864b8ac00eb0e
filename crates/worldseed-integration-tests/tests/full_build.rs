//! Full Season 6 build: referential integrity, uniqueness and relations.

use std::collections::HashSet;
use worldseed_core::graph::ConfigurationGraph;
use worldseed_core::id::ItemNumber;
use worldseed_core::lookup::{resolve_drop_group, resolve_item, resolve_monster};
use worldseed_core::validation::{IntegrityIssue, check_integrity};
use worldseed_season6::white_wizard::WHITE_WIZARD;
use worldseed_season6::{DataInitialization, Season6Error};

fn full_graph() -> ConfigurationGraph {
    DataInitialization::new()
        .build_graph()
        .expect("season 6 builds")
        .0
}

#[test]
fn full_build_passes_integrity_check() {
    let graph = full_graph();
    let report = check_integrity(&graph);
    assert!(report.is_clean(), "issues: {:?}", report.issues);
}

#[test]
fn item_numbers_are_unique() {
    let graph = full_graph();
    let mut seen = HashSet::new();
    for (_, item) in graph.items.iter() {
        assert!(
            seen.insert(item.item_number()),
            "duplicate item {}",
            item.item_number()
        );
    }
}

#[test]
fn explicit_ids_follow_natural_numbers() {
    let graph = full_graph();
    for (id, monster) in graph.monsters.iter_with_ids() {
        assert_eq!(id, u32::from(monster.number));
    }
    for (id, mix) in graph.jewel_mixes.iter_with_ids() {
        assert_eq!(id, u32::from(mix.number));
    }
    for (id, category) in graph.item_categories.iter_with_ids() {
        assert_eq!(id, u32::from(category.group));
    }
}

#[test]
fn drop_groups_point_back_at_their_monster() {
    let graph = full_graph();
    let wizard = resolve_monster(&graph, WHITE_WIZARD).unwrap();
    let jewels = resolve_drop_group(&graph, "White Wizard - Jewels").unwrap();

    let group = graph.drop_item_groups.get(jewels).unwrap();
    assert_eq!(group.monster, Some(wizard));
    assert!(
        graph
            .monsters
            .get(wizard)
            .unwrap()
            .drop_item_groups
            .contains(&jewels)
    );
    let bless = resolve_item(&graph, ItemNumber::new(14, 13)).unwrap();
    assert!(group.possible_items.contains(&bless));
}

#[test]
fn every_class_has_a_home_map() {
    let graph = full_graph();
    assert!(!graph.character_classes.is_empty());
    for (_, class) in graph.character_classes.iter() {
        let map = class.home_map.expect("home map assigned");
        assert!(graph.maps.contains(map));
    }
}

#[test]
fn duplicated_monster_fails_verification() {
    let (mut graph, _) = DataInitialization::new()
        .verify(false)
        .build_graph()
        .unwrap();
    let copy = graph
        .monsters
        .get(resolve_monster(&graph, WHITE_WIZARD).unwrap())
        .unwrap()
        .clone();
    let key = graph.monsters.insert_new(copy);
    graph.monsters.append(key).unwrap();
    graph.commit_staged();

    let report = check_integrity(&graph);
    assert!(report.issues.iter().any(|issue| matches!(
        issue,
        IntegrityIssue::DuplicateKey(worldseed_core::lookup::NaturalKey::Monster(135))
    )));
}

#[test]
fn integrity_error_reports_issue_count() {
    let err = Season6Error::Integrity(worldseed_core::validation::IntegrityReport {
        issues: vec![IntegrityIssue::DuplicateId {
            kind: "monster",
            id: 135,
        }],
    });
    assert_eq!(err.to_string(), "integrity check found 1 issue(s)");
}
