use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::item::ItemCategory;

const CATEGORIES: [(u8, &str); 16] = [
    (0, "Swords"),
    (1, "Axes"),
    (2, "Maces and Scepters"),
    (3, "Spears"),
    (4, "Bows and Crossbows"),
    (5, "Staffs"),
    (6, "Shields"),
    (7, "Helms"),
    (8, "Armors"),
    (9, "Pants"),
    (10, "Gloves"),
    (11, "Boots"),
    (12, "Wings, Orbs and Jewels"),
    (13, "Pets, Rings and Pendants"),
    (14, "Potions and Jewels"),
    (15, "Scrolls"),
];

/// One category per item group.
pub struct ItemCategories;

impl Builder for ItemCategories {
    fn name(&self) -> &'static str {
        "item_categories"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (group, name) in CATEGORIES {
            let key = ctx.graph.item_categories.insert_new(ItemCategory {
                group,
                name: name.to_string(),
            });
            ctx.graph.item_categories.set_explicit_id(key, u32::from(group))?;
            ctx.graph.item_categories.append(key)?;
        }
        Ok(())
    }
}
