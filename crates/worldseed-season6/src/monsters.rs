//! Shared monster construction for composite builders.
//!
//! A monster is created only if no monster with its number exists yet. Its
//! drop groups are de-duplicated by description and linked from both sides.

use std::time::Duration;
use tracing::{debug, warn};
use worldseed_core::attribute::AttributeKind::{
    self, AttackRatePvm, DefenseBase, DefenseRatePvm, Level, MaximumHealth, MaximumPhysBaseDmg,
    MinimumPhysBaseDmg,
};
use worldseed_core::builder::{BuildContext, BuildError};
use worldseed_core::id::{DropGroupKey, ItemNumber, MonsterKey};
use worldseed_core::lookup::{find_drop_group, find_monster, resolve_item, resolve_skill};
use worldseed_core::monster::{DropItemGroup, MonsterDefinition, NpcObjectKind, SpecialItemType};

/// Combat stats stored through the attribute collaborator.
#[derive(Debug, Clone, Copy)]
pub struct MonsterStats {
    pub level: f32,
    pub health: f32,
    pub min_damage: f32,
    pub max_damage: f32,
    pub defense: f32,
    pub attack_rate: f32,
    pub defense_rate: f32,
}

impl MonsterStats {
    pub fn attributes(&self) -> [(AttributeKind, f32); 7] {
        [
            (Level, self.level),
            (MaximumHealth, self.health),
            (MinimumPhysBaseDmg, self.min_damage),
            (MaximumPhysBaseDmg, self.max_damage),
            (DefenseBase, self.defense),
            (AttackRatePvm, self.attack_rate),
            (DefenseRatePvm, self.defense_rate),
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DropSpec {
    pub description: &'static str,
    pub chance: f64,
    pub item_type: SpecialItemType,
    pub item_level: Option<u8>,
    pub items: &'static [ItemNumber],
}

#[derive(Debug, Clone, Copy)]
pub struct MonsterSpec {
    pub number: u16,
    pub designation: &'static str,
    pub move_range: u8,
    pub attack_range: u8,
    pub view_range: u8,
    pub move_delay: Duration,
    pub attack_delay: Duration,
    pub respawn_delay: Duration,
    pub attribute: u8,
    pub number_of_maximum_item_drops: u8,
    pub attack_skill: Option<u16>,
    pub stats: MonsterStats,
    pub drops: &'static [DropSpec],
}

/// Create `spec` unless a monster with its number already exists.
///
/// Returns the new monster's handle, or `None` if creation was skipped.
pub fn add_monster(
    ctx: &mut BuildContext<'_>,
    spec: &MonsterSpec,
) -> Result<Option<MonsterKey>, BuildError> {
    if find_monster(ctx.graph, spec.number).is_some() {
        warn!(
            number = spec.number,
            designation = spec.designation,
            "monster already exists, skipping"
        );
        return Ok(None);
    }

    let attack_skill = spec
        .attack_skill
        .map(|number| resolve_skill(ctx.graph, number))
        .transpose()?;

    let mut monster = MonsterDefinition {
        number: spec.number,
        designation: spec.designation.to_string(),
        object_kind: NpcObjectKind::Monster,
        move_range: spec.move_range,
        attack_range: spec.attack_range,
        view_range: spec.view_range,
        move_delay: spec.move_delay,
        attack_delay: spec.attack_delay,
        respawn_delay: spec.respawn_delay,
        attribute: spec.attribute,
        number_of_maximum_item_drops: spec.number_of_maximum_item_drops,
        attack_skill,
        ..Default::default()
    };
    ctx.add_attributes(&mut monster, &spec.stats.attributes());

    let key = ctx.graph.monsters.insert_new(monster);
    ctx.graph.monsters.set_explicit_id(key, u32::from(spec.number))?;

    for drop in spec.drops {
        let group = drop_group(ctx, drop, key)?;
        ctx.graph
            .monsters
            .get_mut(key)
            .ok_or(BuildError::DanglingHandle { kind: "monster" })?
            .drop_item_groups
            .push(group);
    }

    ctx.graph.monsters.append(key)?;
    debug!(
        number = spec.number,
        designation = spec.designation,
        "monster created"
    );
    Ok(Some(key))
}

/// Reuse the drop group with `spec.description`, or create it for `owner`.
fn drop_group(
    ctx: &mut BuildContext<'_>,
    spec: &DropSpec,
    owner: MonsterKey,
) -> Result<DropGroupKey, BuildError> {
    if let Some(existing) = find_drop_group(ctx.graph, spec.description) {
        debug!(group = spec.description, "reusing existing drop group");
        let group = ctx
            .graph
            .drop_item_groups
            .get_mut(existing)
            .ok_or(BuildError::DanglingHandle {
                kind: "drop item group",
            })?;
        match group.monster {
            Some(other) if other != owner => {
                return Err(BuildError::ForeignDropGroup {
                    description: spec.description.to_string(),
                });
            }
            _ => group.monster = Some(owner),
        }
        return Ok(existing);
    }

    let possible_items = spec
        .items
        .iter()
        .map(|&number| resolve_item(ctx.graph, number))
        .collect::<Result<Vec<_>, _>>()?;

    let key = ctx.graph.drop_item_groups.insert_new(DropItemGroup {
        description: spec.description.to_string(),
        chance: spec.chance,
        item_type: spec.item_type,
        item_level: spec.item_level,
        minimum_monster_level: None,
        maximum_monster_level: None,
        possible_items,
        monster: Some(owner),
    });
    ctx.graph.drop_item_groups.append(key)?;
    Ok(key)
}
