//! Game settings and preferences
//!
//! Stored as JSON next to the binary. Missing fields take their defaults, so a
//! file only needs the values it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all sound
    pub muted: bool,

    // === Simulation ===
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
    /// Stop the headless runner after this many frames
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            seed: None,
            max_frames: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    /// Read settings, falling back to defaults if the file is missing or bad
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("brick_breaker_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "muted": true, "seed": 7 }"#).expect("valid json");
        assert!(settings.muted);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.max_frames, None);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            sfx_volume: 0.5,
            max_frames: Some(600),
            ..Default::default()
        };
        settings.save_to(&path).expect("write settings");
        let loaded = Settings::load_from(&path).expect("read settings");
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_path("missing");
        assert!(matches!(Settings::load_from(&path), Err(Error::Io(_))));
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let path = temp_path("bad");
        fs::write(&path, "{ not json").expect("write file");
        let result = Settings::load_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
