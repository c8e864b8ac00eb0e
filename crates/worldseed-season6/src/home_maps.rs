//! Assigns every character class its home map.

use crate::maps::{ELVELAND, LORENCIA, NORIA};
use tracing::debug;
use worldseed_core::builder::{BuildContext, BuildError, Builder, BuilderKind};
use worldseed_core::lookup::resolve_map;

/// Home map number of a class, by class number.
pub fn home_map_of(class_number: u8) -> u8 {
    match class_number {
        8..=11 => NORIA,
        20..=23 => ELVELAND,
        _ => LORENCIA,
    }
}

pub struct CharacterClassHomeMaps;

impl Builder for CharacterClassHomeMaps {
    fn name(&self) -> &'static str {
        "character_class_home_maps"
    }

    fn kind(&self) -> BuilderKind {
        BuilderKind::Composite
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["character_classes", "maps"]
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        let pending: Vec<_> = ctx
            .graph
            .character_classes
            .iter()
            .filter(|(_, class)| class.home_map.is_none())
            .map(|(key, class)| (key, class.number))
            .collect();

        for (key, number) in pending {
            let map = resolve_map(ctx.graph, home_map_of(number))?;
            if let Some(class) = ctx.graph.character_classes.get_mut(key) {
                class.home_map = Some(map);
                debug!(
                    class = number,
                    map = home_map_of(number),
                    "home map assigned"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::CharacterClasses;
    use crate::maps::Maps;
    use worldseed_core::builder::run_builder;
    use worldseed_core::graph::ConfigurationGraph;
    use worldseed_core::lookup::resolve_character_class;

    #[test]
    fn elves_start_in_noria_and_summoners_in_elveland() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &Maps).unwrap();
        run_builder(&mut g, &CharacterClasses).unwrap();
        run_builder(&mut g, &CharacterClassHomeMaps).unwrap();

        let home = |class: u8| {
            let key = resolve_character_class(&g, class).unwrap();
            let map = g.character_classes.get(key).unwrap().home_map.unwrap();
            g.maps.get(map).unwrap().name.clone()
        };
        assert_eq!(home(8), "Noria");
        assert_eq!(home(22), "Elveland");
        assert_eq!(home(4), "Lorencia");
    }

    #[test]
    fn missing_map_fails() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &CharacterClasses).unwrap();
        assert!(run_builder(&mut g, &CharacterClassHomeMaps).is_err());
    }
}
