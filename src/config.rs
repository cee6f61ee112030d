//! Configuration loading.
//!
//! Settings live in a small JSON file edited by an external settings tool:
//!
//! ```json
//! { "threshold": 0.95 }
//! ```
//!
//! Resolution order:
//! 1. explicit path (if provided)
//! 2. `~/.heimdall/config.json` (user)
//! 3. `/etc/heimdall/config.json` (system)
//!
//! Bad configuration never fails the pipeline: a missing file, unparsable
//! JSON, or out-of-range values degrade to the defaults with a warning.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

use serde::Deserialize;
use tracing::warn;

use crate::ThresholdSource;

/// Default match threshold for verification-mode matching.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.95;

/// Default confidence floor below which classification reports unknown.
pub const DEFAULT_CLASSIFIER_FLOOR: f32 = 0.6;

/// Default continuous-hold duration in seconds.
pub const DEFAULT_HOLD_DURATION_SECS: f32 = 5.0;

/// Engine configuration.
///
/// The match threshold and the classifier floor are deliberately two
/// independent values: the threshold gates verification, the floor gates
/// attribution. They are never unified.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Match threshold in `[0, 1]` for verification-mode matching.
    #[serde(default = "default_threshold")]
    pub threshold: f32,

    /// Required continuous-hold duration, in seconds.
    #[serde(default = "default_hold_duration")]
    pub hold_duration_secs: f32,

    /// Classification confidence floor in `[0, 1]`.
    #[serde(default = "default_classifier_floor")]
    pub classifier_floor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            hold_duration_secs: DEFAULT_HOLD_DURATION_SECS,
            classifier_floor: DEFAULT_CLASSIFIER_FLOOR,
        }
    }
}

fn default_threshold() -> f32 {
    DEFAULT_MATCH_THRESHOLD
}

fn default_hold_duration() -> f32 {
    DEFAULT_HOLD_DURATION_SECS
}

fn default_classifier_floor() -> f32 {
    DEFAULT_CLASSIFIER_FLOOR
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Never fails: when no file is found the defaults apply, and a file
    /// that cannot be read or parsed is reported and ignored. Out-of-range
    /// values are sanitized back to their defaults.
    pub fn load(explicit_path: Option<&Path>) -> Self {
        let Some(path) = Self::resolve_config_path(explicit_path) else {
            return Self::default();
        };
        let config = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Config>(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unparsable config, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }
        };
        config.sanitized()
    }

    /// Replace out-of-range values with their defaults.
    pub fn sanitized(self) -> Self {
        Self {
            threshold: sanitize_threshold(self.threshold),
            hold_duration_secs: if self.hold_duration_secs > 0.0 {
                self.hold_duration_secs
            } else {
                warn!(
                    value = self.hold_duration_secs,
                    "hold duration out of range, using default"
                );
                DEFAULT_HOLD_DURATION_SECS
            },
            classifier_floor: if (0.0..=1.0).contains(&self.classifier_floor) {
                self.classifier_floor
            } else {
                warn!(
                    value = self.classifier_floor,
                    "classifier floor out of range, using default"
                );
                DEFAULT_CLASSIFIER_FLOOR
            },
        }
    }

    /// The configured hold duration.
    pub fn hold_duration(&self) -> Duration {
        Duration::from_secs_f32(self.hold_duration_secs)
    }

    /// Resolve the config file path, `None` when no candidate exists.
    fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".heimdall").join("config.json");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        let system_config = PathBuf::from("/etc/heimdall/config.json");
        if system_config.exists() {
            return Some(system_config);
        }

        None
    }
}

/// Force a threshold reading into `[0, 1]`, degrading to the default.
pub fn sanitize_threshold(raw: f32) -> f32 {
    if (0.0..=1.0).contains(&raw) {
        raw
    } else {
        warn!(value = raw, "match threshold out of range, using default");
        DEFAULT_MATCH_THRESHOLD
    }
}

/// A constant match threshold.
#[derive(Debug, Clone, Copy)]
pub struct FixedThreshold(pub f32);

impl ThresholdSource for FixedThreshold {
    fn match_threshold(&self) -> f32 {
        self.0
    }
}

/// Match threshold backed by the config file.
///
/// Re-reads the file on every call so threshold edits apply on the next
/// frame without restarting the engine.
#[derive(Debug, Clone, Default)]
pub struct ConfigThreshold {
    path: Option<PathBuf>,
}

impl ConfigThreshold {
    /// Use the standard config resolution order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the threshold from a specific file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl ThresholdSource for ConfigThreshold {
    fn match_threshold(&self) -> f32 {
        Config::load(self.path.as_deref()).threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.threshold, 0.95);
        assert_eq!(config.hold_duration_secs, 5.0);
        assert_eq!(config.classifier_floor, 0.6);
        assert_eq!(config.hold_duration(), Duration::from_secs(5));
    }

    #[test]
    fn parse_minimal_config() {
        let config: Config = serde_json::from_str(r#"{ "threshold": 0.8 }"#).unwrap();
        assert_eq!(config.threshold, 0.8);
        // Defaults preserved
        assert_eq!(config.hold_duration_secs, 5.0);
        assert_eq!(config.classifier_floor, 0.6);
    }

    #[test]
    fn parse_full_config() {
        let config: Config = serde_json::from_str(
            r#"{ "threshold": 0.9, "hold_duration_secs": 3.0, "classifier_floor": 0.5 }"#,
        )
        .unwrap();
        assert_eq!(config.threshold, 0.9);
        assert_eq!(config.hold_duration_secs, 3.0);
        assert_eq!(config.classifier_floor, 0.5);
    }

    #[test]
    fn sanitize_rejects_out_of_range_threshold() {
        assert_eq!(sanitize_threshold(1.5), DEFAULT_MATCH_THRESHOLD);
        assert_eq!(sanitize_threshold(-0.1), DEFAULT_MATCH_THRESHOLD);
        assert_eq!(sanitize_threshold(f32::NAN), DEFAULT_MATCH_THRESHOLD);
        assert_eq!(sanitize_threshold(0.0), 0.0);
        assert_eq!(sanitize_threshold(1.0), 1.0);
    }

    #[test]
    fn sanitized_config_restores_defaults() {
        let config = Config {
            threshold: 2.0,
            hold_duration_secs: -1.0,
            classifier_floor: 7.0,
        }
        .sanitized();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/config.json")));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn fixed_threshold_returns_value() {
        assert_eq!(FixedThreshold(0.9).match_threshold(), 0.9);
    }
}
