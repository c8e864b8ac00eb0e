//! Jewels and their packed (bundled) variants.
//!
//! Item group codes are kept as the hexadecimal literals of the client's
//! item table: `0xE` for the single jewels, `0xC` for the bundles and the
//! Jewel of Chaos.

use super::{add_item, item};
use worldseed_core::builder::{BuildContext, BuildError, Builder};

/// `(group, number, name, value)` of every single jewel, in mix number order.
pub const SINGLE_JEWELS: [(u8, u16, &str, u32); 10] = [
    (0xE, 13, "Jewel of Bless", 9_000_000),
    (0xE, 14, "Jewel of Soul", 6_000_000),
    (0xE, 16, "Jewel of Life", 45_000_000),
    (0xE, 22, "Jewel of Creation", 36_000_000),
    (0xE, 31, "Jewel of Guardian", 60_000_000),
    (0xE, 41, "Gemstone", 18_600_000),
    (0xE, 42, "Jewel of Harmony", 18_600_000),
    (0xC, 15, "Jewel of Chaos", 810_000),
    (0xE, 43, "Lower Refine Stone", 300_000),
    (0xE, 44, "Higher Refine Stone", 1_000_000),
];

/// `(group, number, name)` of every packed jewel, in mix number order.
pub const PACKED_JEWELS: [(u8, u16, &str); 10] = [
    (0xC, 30, "Packed Jewel of Bless"),
    (0xC, 31, "Packed Jewel of Soul"),
    (0xC, 136, "Packed Jewel of Life"),
    (0xC, 137, "Packed Jewel of Creation"),
    (0xC, 138, "Packed Jewel of Guardian"),
    (0xC, 139, "Packed Gemstone"),
    (0xC, 140, "Packed Jewel of Harmony"),
    (0xC, 141, "Packed Jewel of Chaos"),
    (0xC, 142, "Packed Lower Refine Stone"),
    (0xC, 143, "Packed Higher Refine Stone"),
];

pub struct Jewels;

impl Builder for Jewels {
    fn name(&self) -> &'static str {
        "jewels"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (group, number, name, value) in SINGLE_JEWELS {
            let mut jewel = item(group, number, name, 1, 1);
            jewel.value = value;
            jewel.drop_level = 25;
            add_item(ctx, jewel, &[])?;
        }
        Ok(())
    }
}

/// Bundles of 10, 20 or 30 jewels; the item level selects the bundle size.
pub struct PackedJewels;

impl Builder for PackedJewels {
    fn name(&self) -> &'static str {
        "packed_jewels"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (group, number, name) in PACKED_JEWELS {
            let mut bundle = item(group, number, name, 1, 1);
            bundle.maximum_item_level = 2;
            bundle.drops_from_monsters = false;
            add_item(ctx, bundle, &[])?;
        }
        Ok(())
    }
}
