//! Window settings shared by all the demos.

use log::{debug, warn};
use serde::Deserialize;

pub const SETTINGS_PATH: &str = "res/settings.json";

/// Settings read from `res/settings.json`. The file is optional and may
/// name any subset of the fields; everything else falls back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            vsync: true,
        }
    }
}

impl Settings {
    /// Loads the settings file, falling back to defaults when it is missing
    /// or unreadable. A malformed file is reported but never fatal.
    pub fn load() -> Self {
        match std::fs::read_to_string(SETTINGS_PATH) {
            Ok(text) => Self::parse(&text).unwrap_or_else(|e| {
                warn!("ignoring invalid {SETTINGS_PATH}: {e}");
                Self::default()
            }),
            Err(_) => {
                debug!("no {SETTINGS_PATH}, using defaults");
                Self::default()
            }
        }
    }

    fn parse(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let settings = Settings::parse(r#"{"width": 1280, "height": 720, "vsync": false}"#).unwrap();
        assert_eq!(
            settings,
            Settings {
                width: 1280,
                height: 720,
                vsync: false,
            }
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::parse(r#"{"width": 800}"#).unwrap();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, Settings::default().height);
        assert!(settings.vsync);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::parse("not json").is_err());
    }
}
