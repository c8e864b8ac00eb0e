//! Seeding a version into a snapshot file through the settings surface.

use std::path::PathBuf;
use worldseed_core::persistence::PersistError;
use worldseed_core::version::SeedError;
use worldseed_data::{Format, SeedSettings, read_snapshot};
use worldseed_season6::{RunError, VERSION_KEY, catalog, seed_with_settings};

fn test_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "worldseed_seeding_test_{suffix}_{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn settings(dir: &std::path::Path, file: &str) -> SeedSettings {
    SeedSettings {
        output: dir.join(file),
        ..SeedSettings::default()
    }
}

#[test]
fn seed_writes_a_readable_snapshot() {
    let dir = test_dir("ron");
    let settings = settings(&dir, "world.ron");

    let receipt = seed_with_settings(&settings).unwrap();
    let (header, graph) = read_snapshot(&settings.output).unwrap();

    assert_eq!(receipt.version_key, VERSION_KEY);
    assert_eq!(header.version_key, VERSION_KEY);
    assert_eq!(header.counts, receipt.counts);
    assert_eq!(graph.counts(), receipt.counts);
    assert_eq!(graph.jewel_mixes.len(), 10);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn bitcode_snapshot_matches_text_snapshot() {
    let dir = test_dir("bin");
    let text = seed_with_settings(&settings(&dir, "world.json")).unwrap();
    let mut binary = settings(&dir, "world.bin");
    binary.format = Some(Format::Bitcode);
    let bin = seed_with_settings(&binary).unwrap();
    assert_eq!(text.counts, bin.counts);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn existing_snapshot_is_kept_without_overwrite() {
    let dir = test_dir("overwrite");
    let mut settings = settings(&dir, "world.ron");

    seed_with_settings(&settings).unwrap();
    let err = seed_with_settings(&settings).unwrap_err();
    let RunError::Seed(SeedError::Persist(PersistError::VersionExists(key))) = &err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(key, VERSION_KEY);

    settings.overwrite = true;
    assert!(seed_with_settings(&settings).is_ok());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_version_is_rejected() {
    let dir = test_dir("unknown");
    let mut settings = settings(&dir, "world.ron");
    settings.version = "season99".to_string();

    let err = seed_with_settings(&settings).unwrap_err();
    assert!(matches!(err, RunError::Seed(SeedError::UnknownVersion(ref v)) if v == "season99"));
    assert!(!settings.output.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn catalog_lists_season6() {
    let catalog = catalog(true).unwrap();
    assert_eq!(catalog.list(), vec![("season6", "Season 6 Episode 3")]);
}
