use std::fs;

use heimdall::{
    Config, ConfigThreshold, DEFAULT_MATCH_THRESHOLD, FixedThreshold, ThresholdSource,
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_reads_threshold_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "threshold": 0.5 }"#);

    let config = Config::load(Some(&path));
    assert_eq!(config.threshold, 0.5);
    // Unspecified fields keep their defaults.
    assert_eq!(config.hold_duration_secs, 5.0);
}

#[test]
fn load_ignores_unparsable_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "not json at all {");

    assert_eq!(Config::load(Some(&path)), Config::default());
}

#[test]
fn load_sanitizes_out_of_range_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "threshold": 1.5, "hold_duration_secs": 0.0 }"#);

    let config = Config::load(Some(&path));
    assert_eq!(config.threshold, DEFAULT_MATCH_THRESHOLD);
    assert_eq!(config.hold_duration_secs, 5.0);
}

#[test]
fn load_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    assert_eq!(Config::load(Some(&path)), Config::default());
}

#[test]
fn config_threshold_tracks_file_edits() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "threshold": 0.8 }"#);
    let source = ConfigThreshold::at(&path);

    assert_eq!(source.match_threshold(), 0.8);

    // Settings edits take effect on the next read, no restart needed.
    fs::write(&path, r#"{ "threshold": 0.6 }"#).unwrap();
    assert_eq!(source.match_threshold(), 0.6);
}

#[test]
fn config_threshold_degrades_to_default() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "threshold": -3.0 }"#);
    let source = ConfigThreshold::at(&path);

    assert_eq!(source.match_threshold(), DEFAULT_MATCH_THRESHOLD);
}

#[test]
fn fixed_threshold_is_constant() {
    assert_eq!(FixedThreshold(0.7).match_threshold(), 0.7);
}
