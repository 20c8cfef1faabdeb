//! Game settings
//!
//! Read once at startup from an optional JSON file in the working directory.
//! Gameplay geometry is fixed in [`crate::consts`]; only input handling and
//! loop timing are configurable.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_INTERVAL_MS};
use crate::error::{Error, Result};

/// How arrow keys turn into paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputModel {
    /// One step per key-down event, host key-repeat included
    Discrete,
    /// Key state polled every tick, repeating at a fixed tick interval
    #[default]
    Continuous,
}

impl InputModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputModel::Discrete => "discrete",
            InputModel::Continuous => "continuous",
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arrow key handling
    pub input_model: InputModel,
    /// Ticks between repeated steps while a key is held (continuous model)
    pub key_repeat_ticks: u32,
    /// Milliseconds per simulation tick
    pub tick_interval_ms: u64,
    /// Most ticks run in a single frame before dropping the backlog
    pub max_substeps: u32,
    /// Sync presentation to the display refresh
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_model: InputModel::Continuous,
            key_repeat_ticks: 3,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_substeps: MAX_SUBSTEPS,
            vsync: true,
        }
    }
}

impl Settings {
    /// File looked up by [`Settings::load`]
    pub const FILE_NAME: &'static str = "brick-breaker.json";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load settings from the working directory, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Duration of one simulation tick (at least 1ms)
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Effective key repeat interval (at least one tick)
    pub fn repeat_ticks(&self) -> u32 {
        self.key_repeat_ticks.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.input_model, InputModel::Continuous);
        assert_eq!(settings.tick_interval(), Duration::from_millis(10));
        assert_eq!(settings.max_substeps, 8);
        assert!(settings.vsync);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "input_model": "discrete" }"#).unwrap();
        assert_eq!(settings.input_model, InputModel::Discrete);
        assert_eq!(settings.key_repeat_ticks, 3);
        assert_eq!(settings.tick_interval_ms, 10);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Settings::from_json(r#"{ "input_model": "telepathy" }"#),
            Err(Error::SettingsParse(_))
        ));
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Settings::load_from("definitely/not/here/brick-breaker.json");
        assert!(matches!(result, Err(Error::SettingsIo { .. })));
    }

    #[test]
    fn test_zero_intervals_are_clamped() {
        let settings = Settings::from_json(r#"{ "tick_interval_ms": 0, "key_repeat_ticks": 0 }"#)
            .unwrap();
        assert_eq!(settings.tick_interval(), Duration::from_millis(1));
        assert_eq!(settings.repeat_ticks(), 1);
    }

    #[test]
    fn test_input_model_names_match_json() {
        for model in [InputModel::Discrete, InputModel::Continuous] {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.as_str()));
        }
    }
}
