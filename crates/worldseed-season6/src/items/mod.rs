//! Item catalog leaf builders.
//!
//! Each builder owns a disjoint range of `(group, number)` pairs, so the
//! builders can run in any order relative to each other.

pub mod armors;
pub mod categories;
pub mod jewels;
pub mod misc;
pub mod options;
pub mod orbs;
pub mod pets;
pub mod potions;
pub mod scrolls;
pub mod weapons;
pub mod wings;

pub use armors::Armors;
pub use categories::ItemCategories;
pub use jewels::{Jewels, PackedJewels};
pub use misc::Misc;
pub use options::{ExcellentOptions, GuardianOptions, HarmonyOptions, ItemOptionTypes};
pub use orbs::Orbs;
pub use pets::Pets;
pub use potions::Potions;
pub use scrolls::Scrolls;
pub use weapons::Weapons;
pub use wings::Wings;

use tracing::debug;
use worldseed_core::attribute::{AttributeKind, AttributeValue};
use worldseed_core::builder::{BuildContext, BuildError};
use worldseed_core::id::ItemKey;
use worldseed_core::item::ItemDefinition;

/// A fresh item with the fields every item sets.
pub(crate) fn item(group: u8, number: u16, name: &str, width: u8, height: u8) -> ItemDefinition {
    ItemDefinition {
        group,
        number,
        name: name.to_string(),
        width,
        height,
        durability: 1,
        drops_from_monsters: true,
        ..Default::default()
    }
}

pub(crate) fn requirement(kind: AttributeKind, value: f32) -> AttributeValue {
    AttributeValue { kind, value }
}

/// Level and stat requirements, skipping zero values.
pub(crate) fn requirements(pairs: &[(AttributeKind, f32)]) -> Vec<AttributeValue> {
    pairs
        .iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|&(kind, value)| requirement(kind, value))
        .collect()
}

/// Attach `attributes`, then create and append the item.
pub(crate) fn add_item(
    ctx: &mut BuildContext<'_>,
    mut item: ItemDefinition,
    attributes: &[(AttributeKind, f32)],
) -> Result<ItemKey, BuildError> {
    if !attributes.is_empty() {
        ctx.add_attributes(&mut item, attributes);
    }
    let number = item.item_number();
    let key = ctx.graph.items.insert_new(item);
    ctx.graph.items.append(key)?;
    debug!(item = %number, "item created");
    Ok(key)
}
