//! Worldseed Season 6 -- the Season 6 Episode 3 game configuration.
//!
//! Provides the builders that populate a
//! [`ConfigurationGraph`](worldseed_core::graph::ConfigurationGraph) with the
//! content of this game version, and the [`DataInitialization`] entry point
//! that wires them into a pipeline.
//!
//! # Builders
//!
//! - [`items`] -- leaf builders for the item catalog and item options.
//! - [`skills`], [`maps`], [`classes`] -- leaf builders for the world.
//! - [`jewel_mixes`] -- links single jewels to their packed bundles.
//! - [`invasion_mobs`] -- golden invasion monsters and their box drops.
//! - [`white_wizard`] -- the invasion boss and its drop groups.
//! - [`home_maps`] -- assigns each character class a starting map.
//! - [`root`] -- client definition and cash shop categories.
//!
//! # Seeding
//!
//! ```rust,ignore
//! let settings = worldseed_data::load_settings(Path::new("."))?;
//! let receipt = worldseed_season6::seed_with_settings(&settings)?;
//! ```

pub mod classes;
pub mod home_maps;
pub mod initializer;
pub mod invasion_mobs;
pub mod items;
pub mod jewel_mixes;
pub mod maps;
pub mod monsters;
pub mod root;
pub mod skills;
pub mod white_wizard;

pub use initializer::{
    CAPTION, DataInitialization, RunError, Season6Error, VERSION_KEY, catalog,
    game_configuration_pipeline, seed_with_settings,
};
