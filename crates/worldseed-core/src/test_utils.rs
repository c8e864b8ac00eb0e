//! Shared test helpers for unit tests, integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::attribute::{AttributeAssigner, AttributeKind, HasAttributes, UpsertAttributes};
use crate::builder::{BuildContext, BuildError, Builder};
use crate::graph::ConfigurationGraph;
use crate::id::*;
use crate::item::ItemDefinition;
use crate::monster::MonsterDefinition;
use crate::world::{GameMapDefinition, Skill};
use std::cell::Cell;
use std::rc::Rc;

// ===========================================================================
// Entity constructors
// ===========================================================================

pub fn item(group: u8, number: u16, name: &str) -> ItemDefinition {
    ItemDefinition {
        group,
        number,
        name: name.to_string(),
        width: 1,
        height: 1,
        drops_from_monsters: true,
        ..Default::default()
    }
}

pub fn monster(number: u16, designation: &str) -> MonsterDefinition {
    MonsterDefinition {
        number,
        designation: designation.to_string(),
        ..Default::default()
    }
}

pub fn skill(number: u16, name: &str) -> Skill {
    Skill {
        number,
        name: name.to_string(),
        ..Default::default()
    }
}

pub fn map(number: u8, name: &str) -> GameMapDefinition {
    GameMapDefinition {
        number,
        name: name.to_string(),
        exp_multiplier: 1.0,
    }
}

// ===========================================================================
// Graph helpers
// ===========================================================================

/// Create, append and commit an item. Returns its handle.
pub fn add_item(graph: &mut ConfigurationGraph, group: u8, number: u16, name: &str) -> ItemKey {
    let key = graph.items.insert_new(item(group, number, name));
    graph
        .items
        .append(key)
        .expect("fresh handle appends");
    graph.commit_staged();
    key
}

/// Create, append and commit a skill. Returns its handle.
pub fn add_skill(graph: &mut ConfigurationGraph, number: u16, name: &str) -> SkillKey {
    let key = graph.skills.insert_new(skill(number, name));
    graph
        .skills
        .append(key)
        .expect("fresh handle appends");
    graph.commit_staged();
    key
}

/// Number of committed monsters with the given number.
pub fn monster_count(graph: &ConfigurationGraph, number: u16) -> usize {
    graph
        .monsters
        .iter()
        .filter(|(_, m)| m.number == number)
        .count()
}

// ===========================================================================
// Builders
// ===========================================================================

/// A leaf builder defined by a closure over the build context.
pub struct FnBuilder<F> {
    pub name: &'static str,
    pub f: F,
}

impl<F> FnBuilder<F>
where
    F: Fn(&mut BuildContext<'_>) -> Result<(), BuildError>,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> Builder for FnBuilder<F>
where
    F: Fn(&mut BuildContext<'_>) -> Result<(), BuildError>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        (self.f)(ctx)
    }
}

// ===========================================================================
// Attribute collaborator doubles
// ===========================================================================

/// Counts assignments and forwards them to [`UpsertAttributes`].
///
/// Clones share their counters, so one clone can be boxed into a pipeline
/// while the test keeps another.
#[derive(Debug, Default, Clone)]
pub struct CountingAssigner {
    calls: Rc<Cell<usize>>,
    pairs: Rc<Cell<usize>>,
}

impl CountingAssigner {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn pairs(&self) -> usize {
        self.pairs.get()
    }
}

impl AttributeAssigner for CountingAssigner {
    fn assign(&self, target: &mut dyn HasAttributes, attributes: &[(AttributeKind, f32)]) {
        self.calls.set(self.calls.get() + 1);
        self.pairs.set(self.pairs.get() + attributes.len());
        UpsertAttributes.assign(target, attributes);
    }
}
