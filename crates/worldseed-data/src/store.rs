//! File-backed persistence for completed configuration graphs.
//!
//! A snapshot is a header (magic number, format version, version key, entity
//! counts) followed by the graph. Snapshots are written to a temporary file
//! next to the destination and renamed into place, so a reader never sees a
//! partially written snapshot.

use crate::loader::{DataLoadError, Format, deserialize_bytes, detect_format};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use worldseed_core::graph::{ConfigurationGraph, GraphCounts};
use worldseed_core::persistence::{CommitReceipt, PersistError, Persistence};

/// Magic number identifying a world snapshot.
pub const SNAPSHOT_MAGIC: u32 = 0x5EED_0006;

/// Current snapshot format version.
pub const FORMAT_VERSION: u32 = 1;

// ===========================================================================
// Errors
// ===========================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("snapshots cannot be stored as {0:?}")]
    UnsupportedFormat(Format),
    #[error("encoding failed: {0}")]
    Encode(String),
    #[error(transparent)]
    Load(#[from] DataLoadError),
    #[error("invalid magic number: expected 0x{:08X}, got 0x{:08X}", SNAPSHOT_MAGIC, .0)]
    InvalidMagic(u32),
    #[error("snapshot from future format version {0} (this build supports up to {FORMAT_VERSION})")]
    FutureVersion(u32),
    #[error("unsupported format version: expected {}, got {}", FORMAT_VERSION, .0)]
    UnsupportedVersion(u32),
    #[error("snapshot header says {header} entities but the graph holds {graph}")]
    CountMismatch { header: usize, graph: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for PersistError {
    fn from(e: StoreError) -> Self {
        PersistError::Backend(e.to_string())
    }
}

// ===========================================================================
// Snapshot
// ===========================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotHeader {
    pub magic: u32,
    pub version: u32,
    /// Game version the graph was built for, e.g. `"season6"`.
    pub version_key: String,
    pub counts: GraphCounts,
}

impl SnapshotHeader {
    pub fn new(version_key: &str, counts: GraphCounts) -> Self {
        Self {
            magic: SNAPSHOT_MAGIC,
            version: FORMAT_VERSION,
            version_key: version_key.to_string(),
            counts,
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.magic != SNAPSHOT_MAGIC {
            return Err(StoreError::InvalidMagic(self.magic));
        }
        if self.version > FORMAT_VERSION {
            return Err(StoreError::FutureVersion(self.version));
        }
        if self.version < FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(self.version));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    header: SnapshotHeader,
    graph: &'a ConfigurationGraph,
}

#[derive(Deserialize)]
struct Snapshot {
    header: SnapshotHeader,
    graph: ConfigurationGraph,
}

/// Encode a graph as a snapshot in `format`.
pub fn encode_snapshot(
    version_key: &str,
    graph: &ConfigurationGraph,
    format: Format,
) -> Result<Vec<u8>, StoreError> {
    let snapshot = SnapshotRef {
        header: SnapshotHeader::new(version_key, graph.counts()),
        graph,
    };
    let encode = |e: &dyn std::fmt::Display| StoreError::Encode(e.to_string());
    match format {
        Format::Ron => ron::ser::to_string_pretty(&snapshot, ron::ser::PrettyConfig::default())
            .map(String::into_bytes)
            .map_err(|e| encode(&e)),
        Format::Json => serde_json::to_vec_pretty(&snapshot).map_err(|e| encode(&e)),
        Format::Bitcode => bitcode::serialize(&snapshot).map_err(|e| encode(&e)),
        Format::Toml => Err(StoreError::UnsupportedFormat(format)),
    }
}

/// Read a snapshot file, validating its header before trusting the graph.
pub fn read_snapshot(path: &Path) -> Result<(SnapshotHeader, ConfigurationGraph), StoreError> {
    let format = detect_format(path)?;
    if format == Format::Toml {
        return Err(StoreError::UnsupportedFormat(format));
    }
    let bytes = std::fs::read(path)?;
    let snapshot: Snapshot = deserialize_bytes(format, &bytes, path)?;
    snapshot.header.validate()?;

    let header_total = snapshot.header.counts.total();
    let graph_total = snapshot.graph.counts().total();
    if header_total != graph_total {
        return Err(StoreError::CountMismatch {
            header: header_total,
            graph: graph_total,
        });
    }
    Ok((snapshot.header, snapshot.graph))
}

// ===========================================================================
// FileStore
// ===========================================================================

/// Writes one snapshot file per store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: Format,
    overwrite: bool,
}

impl FileStore {
    /// Store at `path`, with the format inferred from its extension.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let format = detect_format(&path)?;
        Self::with_format(path, format)
    }

    pub fn with_format(path: impl Into<PathBuf>, format: Format) -> Result<Self, StoreError> {
        if format == Format::Toml {
            return Err(StoreError::UnsupportedFormat(format));
        }
        Ok(Self {
            path: path.into(),
            format,
            overwrite: false,
        })
    }

    /// Allow replacing an existing snapshot.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Read back the stored snapshot.
    pub fn load(&self) -> Result<(SnapshotHeader, ConfigurationGraph), StoreError> {
        read_snapshot(&self.path)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        debug!(temp = %temp.display(), bytes = bytes.len(), "writing snapshot");
        if let Err(e) = std::fs::write(&temp, bytes) {
            let _ = std::fs::remove_file(&temp);
            return Err(e.into());
        }
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl Persistence for FileStore {
    fn commit(
        &mut self,
        version_key: &str,
        graph: &ConfigurationGraph,
    ) -> Result<CommitReceipt, PersistError> {
        if graph.has_staged() {
            return Err(PersistError::PendingStage);
        }
        if !self.overwrite && self.path.exists() {
            return Err(PersistError::VersionExists(version_key.to_string()));
        }

        let bytes = encode_snapshot(version_key, graph, self.format)?;
        self.write_atomic(&bytes)?;

        let counts = graph.counts();
        info!(
            version = version_key,
            path = %self.path.display(),
            entities = counts.total(),
            "snapshot written"
        );
        Ok(CommitReceipt {
            version_key: version_key.to_string(),
            counts,
            location: self.path.display().to_string(),
        })
    }
}
