//! Character classes and their evolution chains.
//!
//! Each chain is listed from the highest generation down so a class can link
//! to its successor, which was created just before it in the same stage.

use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::world::CharacterClass;

// (number, name, creatable, level required to create)
type ClassRow = (u8, &'static str, bool, u16);

/// Evolution chains, highest generation first.
const CHAINS: [&[ClassRow]; 7] = [
    &[
        (3, "Grand Master", false, 0),
        (2, "Soul Master", false, 0),
        (0, "Dark Wizard", true, 1),
    ],
    &[
        (7, "Blade Master", false, 0),
        (6, "Blade Knight", false, 0),
        (4, "Dark Knight", true, 1),
    ],
    &[
        (11, "High Elf", false, 0),
        (10, "Muse Elf", false, 0),
        (8, "Fairy Elf", true, 1),
    ],
    &[(13, "Duel Master", false, 0), (12, "Magic Gladiator", true, 220)],
    &[(17, "Lord Emperor", false, 0), (16, "Dark Lord", true, 250)],
    &[
        (23, "Dimension Master", false, 0),
        (22, "Bloody Summoner", false, 0),
        (20, "Summoner", true, 1),
    ],
    &[(25, "Fist Master", false, 0), (24, "Rage Fighter", true, 150)],
];

pub struct CharacterClasses;

impl Builder for CharacterClasses {
    fn name(&self) -> &'static str {
        "character_classes"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for chain in CHAINS {
            let mut successor = None;
            for &(number, name, can_get_created, level) in chain {
                let key = ctx.graph.character_classes.insert_new(CharacterClass {
                    number,
                    name: name.to_string(),
                    can_get_created,
                    level_requirement_by_creation: level,
                    next_generation_class: successor,
                    home_map: None,
                });
                ctx.graph.character_classes.append(key)?;
                successor = Some(key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldseed_core::builder::run_builder;
    use worldseed_core::graph::ConfigurationGraph;
    use worldseed_core::lookup::resolve_character_class;

    #[test]
    fn evolution_links_point_to_the_next_generation() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &CharacterClasses).unwrap();
        assert_eq!(g.character_classes.len(), 18);

        let dw = resolve_character_class(&g, 0).unwrap();
        let sm = resolve_character_class(&g, 2).unwrap();
        let gm = resolve_character_class(&g, 3).unwrap();
        let next = |key| g.character_classes.get(key).unwrap().next_generation_class;
        assert_eq!(next(dw), Some(sm));
        assert_eq!(next(sm), Some(gm));
        assert_eq!(next(gm), None);

        let creatable: Vec<u8> = g
            .character_classes
            .iter()
            .filter(|(_, c)| c.can_get_created)
            .map(|(_, c)| c.number)
            .collect();
        assert_eq!(creatable, vec![0, 4, 8, 12, 16, 20, 24]);
    }
}
