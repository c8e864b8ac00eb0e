//! Season 6 Episode 3 version initializer.
//!
//! Creates the root records, then runs the catalog pipeline: every leaf
//! builder first, then the composite builders in dependency order.

use crate::classes::CharacterClasses;
use crate::home_maps::CharacterClassHomeMaps;
use crate::invasion_mobs::InvasionMobs;
use crate::items::{
    Armors, ExcellentOptions, GuardianOptions, HarmonyOptions, ItemCategories, ItemOptionTypes,
    Jewels, Misc, Orbs, PackedJewels, Pets, Potions, Scrolls, Weapons, Wings,
};
use crate::jewel_mixes::JewelMixes;
use crate::maps::Maps;
use crate::root::{CashShopCategories, ClientDefinitions};
use crate::skills::Skills;
use crate::white_wizard::WhiteWizard;
use tracing::{info, info_span, warn};
use worldseed_core::attribute::UpsertAttributes;
use worldseed_core::builder::Builder;
use worldseed_core::graph::ConfigurationGraph;
use worldseed_core::persistence::CommitReceipt;
use worldseed_core::pipeline::{BuildReport, Pipeline, PipelineError, run_staged};
use worldseed_core::validation::{IntegrityReport, check_integrity};
use worldseed_core::version::{SeedError, VersionCatalog, VersionInitializer, seed};
use worldseed_data::{DataLoadError, FileStore, SeedSettings, StoreError};

pub const VERSION_KEY: &str = "season6";
pub const CAPTION: &str = "Season 6 Episode 3";

// ===========================================================================
// Errors
// ===========================================================================

#[derive(Debug, thiserror::Error)]
pub enum Season6Error {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("integrity check found {} issue(s)", .0.issues.len())]
    Integrity(IntegrityReport),
}

/// Failures of a settings driven seed run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Settings(#[from] DataLoadError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Seed(#[from] SeedError),
}

// ===========================================================================
// Pipeline assembly
// ===========================================================================

/// The catalog pipeline in run order.
pub fn game_configuration_pipeline() -> Result<Pipeline, PipelineError> {
    let mut pipeline = Pipeline::new();

    pipeline.add_leaf(Box::new(ItemCategories))?;
    pipeline.add_leaf(Box::new(Orbs))?;
    pipeline.add_leaf(Box::new(Scrolls))?;
    pipeline.add_leaf(Box::new(Wings))?;
    pipeline.add_leaf(Box::new(Pets))?;
    pipeline.add_leaf(Box::new(Armors))?;
    pipeline.add_leaf(Box::new(Weapons))?;
    pipeline.add_leaf(Box::new(Potions))?;
    pipeline.add_leaf(Box::new(Jewels))?;
    pipeline.add_leaf(Box::new(PackedJewels))?;
    pipeline.add_leaf(Box::new(Misc))?;
    pipeline.add_leaf(Box::new(ItemOptionTypes))?;
    pipeline.add_leaf(Box::new(ExcellentOptions))?;
    pipeline.add_leaf(Box::new(HarmonyOptions))?;
    pipeline.add_leaf(Box::new(GuardianOptions))?;
    pipeline.add_leaf(Box::new(Skills))?;
    pipeline.add_leaf(Box::new(Maps))?;
    pipeline.add_leaf(Box::new(CharacterClasses))?;

    pipeline.add_composite(Box::new(JewelMixes))?;
    pipeline.add_composite(Box::new(InvasionMobs::season6()))?;
    pipeline.add_composite(Box::new(WhiteWizard))?;
    pipeline.add_composite(Box::new(CharacterClassHomeMaps))?;

    Ok(pipeline)
}

// ===========================================================================
// DataInitialization
// ===========================================================================

#[derive(Debug, Clone, Copy)]
pub struct DataInitialization {
    verify: bool,
}

impl Default for DataInitialization {
    fn default() -> Self {
        Self { verify: true }
    }
}

impl DataInitialization {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the integrity check after the build.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Build the complete graph and report what each builder committed.
    pub fn build_graph(&self) -> Result<(ConfigurationGraph, BuildReport), Season6Error> {
        let _span = info_span!("version", key = VERSION_KEY).entered();
        let mut graph = ConfigurationGraph::new();
        let mut report = BuildReport::default();

        for root in [
            &ClientDefinitions as &dyn Builder,
            &CashShopCategories,
        ] {
            report
                .outcomes
                .push(run_staged(&mut graph, root, &UpsertAttributes)?);
        }

        let catalog = game_configuration_pipeline()?.run(&mut graph)?;
        report.outcomes.extend(catalog.outcomes);

        if self.verify {
            let integrity = check_integrity(&graph);
            if !integrity.is_clean() {
                for issue in &integrity.issues {
                    warn!(%issue, "integrity issue");
                }
                return Err(Season6Error::Integrity(integrity));
            }
        }

        info!(
            entities = graph.counts().total(),
            builders = report.outcomes.len(),
            "{CAPTION} configuration built"
        );
        Ok((graph, report))
    }
}

impl VersionInitializer for DataInitialization {
    fn key(&self) -> &'static str {
        VERSION_KEY
    }

    fn caption(&self) -> &'static str {
        CAPTION
    }

    fn build(&self) -> Result<ConfigurationGraph, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.build_graph()?.0)
    }
}

// ===========================================================================
// Host entry points
// ===========================================================================

/// Every version this crate provides.
pub fn catalog(verify: bool) -> Result<VersionCatalog, SeedError> {
    let mut catalog = VersionCatalog::new();
    catalog.register(Box::new(DataInitialization::new().verify(verify)))?;
    Ok(catalog)
}

/// Seed the version named in `settings` into the configured snapshot file.
pub fn seed_with_settings(settings: &SeedSettings) -> Result<CommitReceipt, RunError> {
    let catalog = catalog(settings.verify)?;
    let initializer = catalog.require(&settings.version)?;
    let mut store = FileStore::with_format(settings.output.clone(), settings.resolved_format()?)?
        .overwrite(settings.overwrite);
    Ok(seed(initializer, &mut store)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldseed_core::persistence::MemoryStore;

    #[test]
    fn schedule_runs_leaves_before_composites() {
        let schedule = game_configuration_pipeline().unwrap().schedule();
        assert_eq!(schedule.len(), 22);
        assert_eq!(&schedule[18..], &[
            "jewel_mixes",
            "invasion_mobs",
            "white_wizard",
            "character_class_home_maps"
        ]);
    }

    #[test]
    fn full_build_is_clean() {
        let (graph, report) = DataInitialization::new().build_graph().unwrap();
        assert!(check_integrity(&graph).is_clean());
        assert_eq!(report.outcomes.len(), 24);
        assert_eq!(report.committed_by("cash_shop_categories"), Some(5));
        assert_eq!(report.committed_by("jewel_mixes"), Some(10));
        assert_eq!(graph.client_definitions.len(), 1);
        assert!(!graph.has_staged());
    }

    #[test]
    fn catalog_exposes_key_and_caption() {
        let catalog = catalog(true).unwrap();
        assert_eq!(catalog.list(), vec![("season6", "Season 6 Episode 3")]);
    }

    #[test]
    fn seed_commits_to_memory() {
        let mut store = MemoryStore::new();
        let receipt = seed(&DataInitialization::new(), &mut store).unwrap();
        assert_eq!(receipt.version_key, VERSION_KEY);
        assert_eq!(receipt.counts.monsters, 7);
    }
}
