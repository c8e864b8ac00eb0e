//! Worldseed Core -- the configuration build pipeline for game-world seeding.
//!
//! A game version's configuration (item catalog, monster roster, drop
//! tables, jewel mixes, cash shop, client definitions) is assembled once into
//! a [`graph::ConfigurationGraph`] and handed to a persistence collaborator.
//! This crate owns the mechanics of that assembly; the content lives in the
//! per-version crates.
//!
//! # Build Pass
//!
//! A [`pipeline::Pipeline`] runs its builders in a fixed dependency order:
//!
//! 1. **Leaf builders** -- each writes one disjoint slice of the catalog and
//!    never looks anything up.
//! 2. **Composite builders** -- resolve entities created by earlier builders
//!    by natural key ([`lookup`]), skip entities that already exist, create
//!    the rest and link them.
//!
//! Every builder runs in a staging scope. Its records become visible to later
//! builders only when it returns successfully:
//!
//! ```rust,ignore
//! let mut pipeline = Pipeline::new();
//! pipeline.add_leaf(Box::new(Jewels))?;
//! pipeline.add_leaf(Box::new(PackedJewels))?;
//! pipeline.add_composite(Box::new(JewelMixes))?;
//! let report = pipeline.run(&mut graph)?;
//! ```
//!
//! # Key Types
//!
//! - [`collection::Collection`] -- per-kind entity factory with staged appends.
//! - [`graph::ConfigurationGraph`] -- the root aggregate of all collections.
//! - [`lookup`] -- natural-key resolution, `ReferenceNotFound` on a miss.
//! - [`builder::Builder`] -- the seam every stage implements.
//! - [`attribute::AttributeAssigner`] -- stores attribute maps on entities.
//! - [`persistence::Persistence`] -- atomic hand-off of a finished graph.
//! - [`version::VersionInitializer`] -- `(key, caption, build)` per version.
//! - [`validation::check_integrity`] -- uniqueness and referential checks.

pub mod attribute;
pub mod builder;
pub mod client;
pub mod collection;
pub mod graph;
pub mod id;
pub mod item;
pub mod lookup;
pub mod monster;
pub mod persistence;
pub mod pipeline;
pub mod validation;
pub mod version;
pub mod world;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
