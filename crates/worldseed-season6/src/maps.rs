use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::world::GameMapDefinition;

pub const LORENCIA: u8 = 0;
pub const NORIA: u8 = 3;
pub const ELVELAND: u8 = 51;

const MAPS: [(u8, &str, f64); 8] = [
    (LORENCIA, "Lorencia", 1.0),
    (1, "Dungeon", 1.0),
    (2, "Devias", 1.0),
    (NORIA, "Noria", 1.0),
    (4, "Lost Tower", 1.0),
    (7, "Atlans", 1.0),
    (8, "Tarkan", 1.0),
    (ELVELAND, "Elveland", 1.0),
];

pub struct Maps;

impl Builder for Maps {
    fn name(&self) -> &'static str {
        "maps"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, name, exp_multiplier) in MAPS {
            let key = ctx.graph.maps.insert_new(GameMapDefinition {
                number,
                name: name.to_string(),
                exp_multiplier,
            });
            ctx.graph.maps.append(key)?;
        }
        Ok(())
    }
}
