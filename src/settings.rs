//! Presentation settings
//!
//! Persisted as JSON next to the working directory. Missing or unreadable
//! files fall back to defaults; gameplay has no knobs here.

use std::fs;
use std::io;

use serde::{Deserialize, Serialize};

/// Settings file name in the working directory
const SETTINGS_FILE: &str = "doodle-hop.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Colored sprites and overlays (plain monochrome when off)
    pub color: bool,
    /// Show a frame counter in the corner
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Load from the settings file, falling back to defaults
    pub fn load() -> Self {
        match fs::read_to_string(SETTINGS_FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {SETTINGS_FILE}");
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {SETTINGS_FILE}: {err}");
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                log::warn!("could not read {SETTINGS_FILE}: {err}");
                Self::default()
            }
        }
    }

    /// Write the settings file
    pub fn save(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(SETTINGS_FILE, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.color);
        assert!(!settings.show_fps);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"show_fps": true}"#).unwrap();
        assert!(settings.color);
        assert!(settings.show_fps);
    }

    #[test]
    fn test_roundtrip() {
        let settings = Settings {
            color: false,
            show_fps: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.color, settings.color);
        assert_eq!(back.show_fps, settings.show_fps);
    }
}
