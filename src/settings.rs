//! Layout settings
//!
//! Persisted as JSON. Only the settings are stored, never the grid contents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::field::{GridError, WriteMode};

/// Errors raised while loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),

    #[error("cannot build grid: {0}")]
    Grid(#[from] GridError),
}

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    // === Field ===
    /// Samples along x
    pub width: usize,
    /// Samples along y
    pub height: usize,
    /// Seed for the initial field
    pub seed: u64,

    // === Classification ===
    /// Corners strictly above this value are closed
    pub threshold: f32,

    // === Collisions ===
    /// Samples below this value are never hit
    pub collision_floor: f32,
    /// Value stored by a collision
    pub write_mode: WriteMode,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            seed: DEFAULT_SEED,

            threshold: DEFAULT_THRESHOLD,

            collision_floor: COLLISION_VALUE_FLOOR,
            write_mode: WriteMode::Zero,
        }
    }
}

impl LayoutSettings {
    /// Settings for a grid size, other fields default
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Reject settings no layout can be built from
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.threshold.is_finite() {
            return Err(SettingsError::Invalid(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        if !self.collision_floor.is_finite() {
            return Err(SettingsError::Invalid(format!(
                "collision floor must be finite, got {}",
                self.collision_floor
            )));
        }
        Ok(())
    }

    /// Parse and validate settings JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let settings = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let settings = LayoutSettings {
            width: 24,
            height: 16,
            seed: 7,
            threshold: 0.4,
            collision_floor: 0.25,
            write_mode: WriteMode::Requested,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(LayoutSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = LayoutSettings::from_json(r#"{ "width": 4 }"#).unwrap();
        assert_eq!(settings.width, 4);
        assert_eq!(settings.height, DEFAULT_GRID_HEIGHT);
        assert_eq!(settings.threshold, DEFAULT_THRESHOLD);
        assert_eq!(settings.write_mode, WriteMode::Zero);
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let err = LayoutSettings::from_json(r#"{ "height": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let mut settings = LayoutSettings::default();
        settings.threshold = f32::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            LayoutSettings::from_json("{ width: "),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "marching_tiles_settings_{}.json",
            std::process::id()
        ));
        let settings = LayoutSettings::with_size(5, 3);
        settings.save(&path).unwrap();
        assert_eq!(LayoutSettings::load(&path).unwrap(), settings);
        let _ = fs::remove_file(&path);

        // Missing file falls back to defaults
        assert_eq!(
            LayoutSettings::load_or_default(&path),
            LayoutSettings::default()
        );
    }
}
