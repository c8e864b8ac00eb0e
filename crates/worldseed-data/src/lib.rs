pub mod loader;
pub mod settings;
pub mod store;

pub use loader::{DataLoadError, Format};
pub use settings::{SeedSettings, load_settings};
pub use store::{FileStore, SnapshotHeader, StoreError, read_snapshot};
