use worldseed_core::builder::{BuildContext, BuildError, Builder};
use worldseed_core::world::{DamageType, Skill, SkillType};

use DamageType::{None as NoDamage, Physical, Wizardry};
use SkillType::{
    AreaSkillAutomaticHits, AreaSkillExplicitHits, Buff, DirectHit, Other, Regeneration,
};

// (number, name, type, damage type, damage, mana cost, range)
const SKILLS: [(u16, &str, SkillType, DamageType, u32, u32, u8); 25] = [
    (1, "Poison", DirectHit, Wizardry, 12, 42, 6),
    (2, "Meteorite", DirectHit, Wizardry, 21, 12, 6),
    (3, "Lightning", DirectHit, Wizardry, 17, 15, 6),
    (4, "Fire Ball", DirectHit, Wizardry, 8, 3, 6),
    (5, "Flame", AreaSkillExplicitHits, Wizardry, 25, 50, 6),
    (6, "Teleport", Other, NoDamage, 0, 30, 6),
    (7, "Ice", DirectHit, Wizardry, 10, 38, 6),
    (8, "Twister", AreaSkillExplicitHits, Wizardry, 35, 60, 6),
    (9, "Evil Spirit", AreaSkillAutomaticHits, Wizardry, 45, 90, 0),
    (10, "Hellfire", AreaSkillAutomaticHits, Wizardry, 60, 160, 0),
    (11, "Power Wave", DirectHit, Wizardry, 14, 5, 6),
    (12, "Aqua Beam", AreaSkillAutomaticHits, Wizardry, 80, 140, 6),
    (13, "Cometfall", AreaSkillExplicitHits, Wizardry, 70, 90, 3),
    (14, "Inferno", AreaSkillAutomaticHits, Wizardry, 100, 200, 0),
    (17, "Energy Ball", DirectHit, Wizardry, 3, 1, 6),
    (18, "Defense", Buff, NoDamage, 0, 30, 0),
    (19, "Falling Slash", DirectHit, Physical, 0, 9, 2),
    (20, "Lunge", DirectHit, Physical, 0, 9, 2),
    (21, "Uppercut", DirectHit, Physical, 0, 8, 2),
    (22, "Cyclone", DirectHit, Physical, 0, 9, 2),
    (23, "Slash", DirectHit, Physical, 0, 10, 2),
    (24, "Triple Shot", AreaSkillExplicitHits, Physical, 0, 5, 6),
    (26, "Heal", Regeneration, NoDamage, 0, 20, 6),
    (27, "Greater Defense", Buff, NoDamage, 0, 30, 6),
    (28, "Greater Damage", Buff, NoDamage, 0, 40, 6),
];

pub struct Skills;

impl Builder for Skills {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, name, skill_type, damage_type, attack_damage, mana_cost, range) in SKILLS {
            let key = ctx.graph.skills.insert_new(Skill {
                number,
                name: name.to_string(),
                skill_type,
                damage_type,
                attack_damage,
                mana_cost,
                range,
            });
            ctx.graph.skills.append(key)?;
        }
        Ok(())
    }
}
