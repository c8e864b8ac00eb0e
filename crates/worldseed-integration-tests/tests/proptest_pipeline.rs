//! Property-based tests for the Season 6 pipeline.
//!
//! Leaf builders own disjoint slices of the catalog, so any leaf order must
//! produce the same graph. Composite builders skip what already exists, so
//! rerunning them in any sequence must not change the graph.

use proptest::prelude::*;
use worldseed_core::attribute::UpsertAttributes;
use worldseed_core::builder::Builder;
use worldseed_core::graph::{ConfigurationGraph, GraphCounts};
use worldseed_core::pipeline::{Pipeline, run_staged};
use worldseed_core::validation::check_integrity;
use worldseed_season6::classes::CharacterClasses;
use worldseed_season6::game_configuration_pipeline;
use worldseed_season6::home_maps::CharacterClassHomeMaps;
use worldseed_season6::invasion_mobs::InvasionMobs;
use worldseed_season6::items::*;
use worldseed_season6::jewel_mixes::JewelMixes;
use worldseed_season6::maps::Maps;
use worldseed_season6::skills::Skills;
use worldseed_season6::white_wizard::WhiteWizard;

// ===========================================================================
// Helpers
// ===========================================================================

const LEAF_COUNT: usize = 18;

fn leaf(index: usize) -> Box<dyn Builder> {
    match index {
        0 => Box::new(ItemCategories),
        1 => Box::new(Orbs),
        2 => Box::new(Scrolls),
        3 => Box::new(Wings),
        4 => Box::new(Pets),
        5 => Box::new(Armors),
        6 => Box::new(Weapons),
        7 => Box::new(Potions),
        8 => Box::new(Jewels),
        9 => Box::new(PackedJewels),
        10 => Box::new(Misc),
        11 => Box::new(ItemOptionTypes),
        12 => Box::new(ExcellentOptions),
        13 => Box::new(HarmonyOptions),
        14 => Box::new(GuardianOptions),
        15 => Box::new(Skills),
        16 => Box::new(Maps),
        _ => Box::new(CharacterClasses),
    }
}

fn composite(index: usize) -> Box<dyn Builder> {
    match index % 4 {
        0 => Box::new(JewelMixes),
        1 => Box::new(InvasionMobs::season6()),
        2 => Box::new(WhiteWizard),
        _ => Box::new(CharacterClassHomeMaps),
    }
}

fn canonical() -> (ConfigurationGraph, GraphCounts) {
    let mut graph = ConfigurationGraph::new();
    game_configuration_pipeline()
        .unwrap()
        .run(&mut graph)
        .unwrap();
    let counts = graph.counts();
    (graph, counts)
}

fn arb_leaf_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..LEAF_COUNT).collect::<Vec<_>>()).prop_shuffle()
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Shuffling the leaf stage does not change what gets built.
    #[test]
    fn leaf_order_is_irrelevant(order in arb_leaf_order()) {
        let (_, expected) = canonical();

        let mut pipeline = Pipeline::new();
        for &i in &order {
            pipeline.add_leaf(leaf(i)).unwrap();
        }
        for i in 0..4 {
            pipeline.add_composite(composite(i)).unwrap();
        }

        let mut graph = ConfigurationGraph::new();
        pipeline.run(&mut graph).unwrap();
        prop_assert_eq!(graph.counts(), expected);
        prop_assert!(check_integrity(&graph).is_clean());
    }

    /// Rerunning composite builders after a full build commits nothing.
    #[test]
    fn composite_reruns_are_idempotent(
        reruns in proptest::collection::vec(0..4usize, 1..=8)
    ) {
        let (mut graph, expected) = canonical();

        for i in reruns {
            let outcome = run_staged(&mut graph, composite(i).as_ref(), &UpsertAttributes).unwrap();
            prop_assert_eq!(outcome.committed, 0);
        }
        prop_assert_eq!(graph.counts(), expected);
        prop_assert!(check_integrity(&graph).is_clean());
    }
}
