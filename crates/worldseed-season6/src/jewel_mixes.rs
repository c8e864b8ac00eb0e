//! Jewel mixes: pack ten single jewels into one bundle and back.
//!
//! Mix `n` links the `n`-th single jewel to the `n`-th packed jewel. The mix
//! number doubles as the mix's identifier.

use crate::items::jewels::{PACKED_JEWELS, SINGLE_JEWELS};
use tracing::{debug, warn};
use worldseed_core::builder::{BuildContext, BuildError, Builder, BuilderKind};
use worldseed_core::id::{ItemNumber, JewelMixKey};
use worldseed_core::item::JewelMix;
use worldseed_core::lookup::{NaturalKey, exists, resolve_item};

/// Create jewel mix `number` linking `single` to `packed`, unless it exists.
pub fn create_jewel_mix(
    ctx: &mut BuildContext<'_>,
    number: u8,
    single: ItemNumber,
    packed: ItemNumber,
) -> Result<Option<JewelMixKey>, BuildError> {
    if exists(ctx.graph, &NaturalKey::JewelMix(number)) {
        warn!(number, "jewel mix already exists, skipping");
        return Ok(None);
    }

    let single_jewel = resolve_item(ctx.graph, single)?;
    let mixed_jewel = resolve_item(ctx.graph, packed)?;

    let key = ctx.graph.jewel_mixes.insert_new(JewelMix {
        number,
        single_jewel,
        mixed_jewel,
    });
    ctx.graph.jewel_mixes.set_explicit_id(key, u32::from(number))?;
    ctx.graph.jewel_mixes.append(key)?;
    debug!(number, %single, %packed, "jewel mix created");
    Ok(Some(key))
}

pub struct JewelMixes;

impl Builder for JewelMixes {
    fn name(&self) -> &'static str {
        "jewel_mixes"
    }

    fn kind(&self) -> BuilderKind {
        BuilderKind::Composite
    }

    fn depends_on(&self) -> &'static [&'static str] {
        &["jewels", "packed_jewels"]
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
        for (number, (single, packed)) in
            (0u8..).zip(SINGLE_JEWELS.iter().zip(PACKED_JEWELS.iter()))
        {
            create_jewel_mix(
                ctx,
                number,
                ItemNumber::new(single.0, single.1),
                ItemNumber::new(packed.0, packed.1),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Jewels, PackedJewels};
    use worldseed_core::attribute::UpsertAttributes;
    use worldseed_core::builder::run_builder;
    use worldseed_core::graph::ConfigurationGraph;
    use worldseed_core::lookup::LookupError;
    use worldseed_core::validation::check_integrity;

    #[test]
    fn ten_mixes_with_mix_number_ids() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &Jewels).unwrap();
        run_builder(&mut g, &PackedJewels).unwrap();
        assert_eq!(run_builder(&mut g, &JewelMixes).unwrap(), 10);

        let ids: Vec<u32> = g.jewel_mixes.iter_with_ids().map(|(id, _)| id).collect();
        assert_eq!(ids, (0..10).collect::<Vec<u32>>());
        assert_eq!(run_builder(&mut g, &JewelMixes).unwrap(), 0);
        assert_eq!(g.jewel_mixes.len(), 10);
    }

    #[test]
    fn missing_bundle_is_reported_by_its_item_number() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &Jewels).unwrap();
        let err = run_builder(&mut g, &JewelMixes).unwrap_err();
        assert_eq!(
            err,
            BuildError::Lookup(LookupError::ReferenceNotFound {
                key: NaturalKey::Item(ItemNumber::new(0xC, 30))
            })
        );
        assert!(g.jewel_mixes.is_empty());
    }

    #[test]
    fn existing_mix_is_skipped_and_the_rest_created() {
        let mut g = ConfigurationGraph::new();
        run_builder(&mut g, &Jewels).unwrap();
        run_builder(&mut g, &PackedJewels).unwrap();
        {
            let mut ctx = BuildContext::new(&mut g, &UpsertAttributes);
            let (group, number, _, _) = SINGLE_JEWELS[4];
            let (packed_group, packed_number, _) = PACKED_JEWELS[4];
            create_jewel_mix(
                &mut ctx,
                4,
                ItemNumber::new(group, number),
                ItemNumber::new(packed_group, packed_number),
            )
            .unwrap();
        }
        g.commit_staged();

        assert_eq!(run_builder(&mut g, &JewelMixes).unwrap(), 9);
        let mut ids: Vec<u32> = g.jewel_mixes.iter_with_ids().map(|(id, _)| id).collect();
        assert_eq!(ids[0], 4);
        ids.sort_unstable();
        assert_eq!(ids, (0..10).collect::<Vec<u32>>());
        assert!(check_integrity(&g).is_clean());
    }
}
