//! Version scoped root records: the supported game client and the cash shop
//! category taxonomy. These are created before the catalog build runs.

use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::client::{CashShopCategory, ClientLanguage, GameClientDefinition};

/// Protocol version bytes sent by the client ("10404").
pub const CLIENT_VERSION: [u8; 5] = [0x31, 0x30, 0x34, 0x30, 0x34];

/// Client serial.
pub const CLIENT_SERIAL: &[u8; 16] = b"k1Pk2jcET48mxL3b";

pub const CASH_SHOP_CATEGORIES: [&str; 5] = [
    "Special Offers",
    "Consumables",
    "Buffs",
    "Pets and Mounts",
    "Costumes",
];

pub struct ClientDefinitions;

impl Builder for ClientDefinitions {
    fn name(&self) -> &'static str {
        "client_definitions"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let key = ctx.graph.client_definitions.insert_new(GameClientDefinition {
            season: 6,
            episode: 3,
            language: ClientLanguage::English,
            version: CLIENT_VERSION.to_vec(),
            serial: CLIENT_SERIAL.to_vec(),
            description: "Season 6 Episode 3 GMO client".to_string(),
        });
        ctx.graph.client_definitions.append(key)?;
        Ok(())
    }
}

/// Five visible categories, identifiers 1 to 5, display orders 10 to 50.
pub struct CashShopCategories;

impl Builder for CashShopCategories {
    fn name(&self) -> &'static str {
        "cash_shop_categories"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (id, name) in (1u16..).zip(CASH_SHOP_CATEGORIES) {
            let key = ctx.graph.cash_shop_categories.insert_new(CashShopCategory {
                name: name.to_string(),
                display_order: id * 10,
                is_visible: true,
            });
            ctx.graph.cash_shop_categories.set_explicit_id(key, u32::from(id))?;
            ctx.graph.cash_shop_categories.append(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldseed_core::builder::run_builder;
    use worldseed_core::graph::ConfigurationGraph;

    #[test]
    fn cash_shop_categories_are_ordered_by_id() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &CashShopCategories).unwrap();

        let rows: Vec<(u32, u16, bool)> = g
            .cash_shop_categories
            .iter_with_ids()
            .map(|(id, c)| (id, c.display_order, c.is_visible))
            .collect();
        assert_eq!(
            rows,
            vec![
                (1, 10, true),
                (2, 20, true),
                (3, 30, true),
                (4, 40, true),
                (5, 50, true)
            ]
        );
    }

    #[test]
    fn client_definition_bytes() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &ClientDefinitions).unwrap();
        let (_, client) = g.client_definitions.iter().next().unwrap();
        assert_eq!(client.version, b"10404");
        assert_eq!(client.serial, b"k1Pk2jcET48mxL3b");
        assert_eq!((client.season, client.episode), (6, 3));
    }
}
