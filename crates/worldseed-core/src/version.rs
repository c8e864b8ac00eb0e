//! Version registration surface.
//!
//! Each supported game version exposes a stable `(key, caption)` pair and a
//! `build` entry point. A host picks one from a [`VersionCatalog`] and hands
//! the result to [`seed`], which builds and commits in one step.

use crate::graph::ConfigurationGraph;
use crate::persistence::{CommitReceipt, PersistError, Persistence};
use tracing::info;

/// Builds the configuration graph of one game version.
pub trait VersionInitializer {
    /// Stable identifier, e.g. `"season6"`.
    fn key(&self) -> &'static str;

    /// Human readable caption, e.g. `"Season 6 Episode 3"`.
    fn caption(&self) -> &'static str;

    fn build(&self) -> Result<ConfigurationGraph, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("building version '{key}' failed: {source}")]
    Build {
        key: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("unknown version '{0}'")]
    UnknownVersion(String),
    #[error("version '{0}' is already registered")]
    DuplicateVersion(&'static str),
}

/// Build the graph of `initializer` and submit it to `store` as a whole.
pub fn seed(
    initializer: &dyn VersionInitializer,
    store: &mut dyn Persistence,
) -> Result<CommitReceipt, SeedError> {
    let key = initializer.key();
    info!(
        version = key,
        caption = initializer.caption(),
        "seeding configuration"
    );
    let graph = initializer
        .build()
        .map_err(|source| SeedError::Build { key, source })?;
    let receipt = store.commit(key, &graph)?;
    info!(
        version = key,
        entities = receipt.counts.total(),
        location = %receipt.location,
        "configuration committed"
    );
    Ok(receipt)
}

/// Registered version initializers, discoverable by key.
#[derive(Default)]
pub struct VersionCatalog {
    versions: Vec<Box<dyn VersionInitializer>>,
}

impl VersionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, initializer: Box<dyn VersionInitializer>) -> Result<(), SeedError> {
        if self.get(initializer.key()).is_some() {
            return Err(SeedError::DuplicateVersion(initializer.key()));
        }
        self.versions.push(initializer);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&dyn VersionInitializer> {
        self.versions
            .iter()
            .find(|v| v.key() == key)
            .map(|v| v.as_ref())
    }

    /// Look up a version or fail with [`SeedError::UnknownVersion`].
    pub fn require(&self, key: &str) -> Result<&dyn VersionInitializer, SeedError> {
        self.get(key)
            .ok_or_else(|| SeedError::UnknownVersion(key.to_string()))
    }

    /// `(key, caption)` of every registered version, in registration order.
    pub fn list(&self) -> Vec<(&'static str, &'static str)> {
        self.versions
            .iter()
            .map(|v| (v.key(), v.caption()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDefinition;
    use crate::persistence::MemoryStore;

    struct Tiny;

    impl VersionInitializer for Tiny {
        fn key(&self) -> &'static str {
            "tiny"
        }

        fn caption(&self) -> &'static str {
            "Tiny Test Version"
        }

        fn build(&self) -> Result<ConfigurationGraph, Box<dyn std::error::Error + Send + Sync>> {
            let mut g = ConfigurationGraph::new();
            let key = g.items.insert_new(ItemDefinition::default());
            g.items.append(key)?;
            g.commit_staged();
            Ok(g)
        }
    }

    struct Broken;

    impl VersionInitializer for Broken {
        fn key(&self) -> &'static str {
            "broken"
        }

        fn caption(&self) -> &'static str {
            "Broken"
        }

        fn build(&self) -> Result<ConfigurationGraph, Box<dyn std::error::Error + Send + Sync>> {
            Err("no data".into())
        }
    }

    #[test]
    fn catalog_lists_registered_versions() {
        let mut catalog = VersionCatalog::new();
        catalog.register(Box::new(Tiny)).unwrap();
        catalog.register(Box::new(Broken)).unwrap();
        assert_eq!(
            catalog.list(),
            vec![("tiny", "Tiny Test Version"), ("broken", "Broken")]
        );
        assert!(catalog.get("tiny").is_some());
        assert!(matches!(
            catalog.require("season0"),
            Err(SeedError::UnknownVersion(ref k)) if k == "season0"
        ));
    }

    #[test]
    fn duplicate_version_is_rejected() {
        let mut catalog = VersionCatalog::new();
        catalog.register(Box::new(Tiny)).unwrap();
        assert!(matches!(
            catalog.register(Box::new(Tiny)),
            Err(SeedError::DuplicateVersion("tiny"))
        ));
    }

    #[test]
    fn seed_builds_and_commits() {
        let mut store = MemoryStore::new();
        let receipt = seed(&Tiny, &mut store).unwrap();
        assert_eq!(receipt.version_key, "tiny");
        assert_eq!(receipt.counts.items, 1);
        assert!(store.get("tiny").is_some());
    }

    #[test]
    fn failed_build_commits_nothing() {
        let mut store = MemoryStore::new();
        let err = seed(&Broken, &mut store).unwrap_err();
        assert!(matches!(err, SeedError::Build { key: "broken", .. }));
        assert!(store.is_empty());
    }
}
