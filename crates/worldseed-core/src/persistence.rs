//! Persistence hand-off.
//!
//! The pipeline never performs durable I/O. A finished graph is submitted to a
//! [`Persistence`] implementation in one piece; either the whole graph is
//! committed or the seed is considered not to have happened.

use crate::graph::{ConfigurationGraph, GraphCounts};

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The graph still holds records from an unfinished builder stage.
    #[error("graph has uncommitted staged records")]
    PendingStage,
    #[error("a configuration for version '{0}' is already stored")]
    VersionExists(String),
    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// Proof of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    pub version_key: String,
    pub counts: GraphCounts,
    /// Backend specific location, e.g. a file path.
    pub location: String,
}

/// Durable storage for completed configuration graphs.
pub trait Persistence {
    fn commit(
        &mut self,
        version_key: &str,
        graph: &ConfigurationGraph,
    ) -> Result<CommitReceipt, PersistError>;
}

/// Keeps committed graphs in memory. One graph per version key.
#[derive(Debug, Default)]
pub struct MemoryStore {
    committed: Vec<(String, ConfigurationGraph)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, version_key: &str) -> Option<&ConfigurationGraph> {
        self.committed
            .iter()
            .find(|(key, _)| key == version_key)
            .map(|(_, graph)| graph)
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

impl Persistence for MemoryStore {
    fn commit(
        &mut self,
        version_key: &str,
        graph: &ConfigurationGraph,
    ) -> Result<CommitReceipt, PersistError> {
        if graph.has_staged() {
            return Err(PersistError::PendingStage);
        }
        if self.get(version_key).is_some() {
            return Err(PersistError::VersionExists(version_key.to_string()));
        }
        self.committed
            .push((version_key.to_string(), graph.clone()));
        Ok(CommitReceipt {
            version_key: version_key.to_string(),
            counts: graph.counts(),
            location: format!("memory:{version_key}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDefinition;

    fn one_item_graph() -> ConfigurationGraph {
        let mut g = ConfigurationGraph::new();
        let key = g.items.insert_new(ItemDefinition::default());
        g.items.append(key).unwrap();
        g.commit_staged();
        g
    }

    #[test]
    fn commit_stores_graph() {
        let mut store = MemoryStore::new();
        let receipt = store.commit("season6", &one_item_graph()).unwrap();
        assert_eq!(receipt.version_key, "season6");
        assert_eq!(receipt.counts.items, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("season6").unwrap().items.len(), 1);
    }

    #[test]
    fn staged_graph_is_rejected() {
        let mut store = MemoryStore::new();
        let mut g = ConfigurationGraph::new();
        let key = g.items.create_new();
        g.items.append(key).unwrap();
        assert!(matches!(
            store.commit("season6", &g),
            Err(PersistError::PendingStage)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn second_commit_of_a_version_is_rejected() {
        let mut store = MemoryStore::new();
        store.commit("season6", &one_item_graph()).unwrap();
        let err = store.commit("season6", &one_item_graph()).unwrap_err();
        assert!(matches!(err, PersistError::VersionExists(ref v) if v == "season6"));
        assert_eq!(store.len(), 1);
    }
}
