//! Device settings with TOML loading.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Tuning knobs for one pointer device.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PointerSettings {
    /// Maximum press-to-release duration that still counts as a click.
    pub click_window_ms: i64,
    /// Scale applied to raw axis values before the wheel deadzone check.
    pub wheel_scale: f32,
    /// Minimum scaled axis-pair magnitude that produces a wheel event.
    pub wheel_deadzone: f32,
    pub haptics: HapticSettings,
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self {
            click_window_ms: 300,
            wheel_scale: 10.0,
            wheel_deadzone: 0.1,
            haptics: HapticSettings::default(),
        }
    }
}

/// Pulse parameters for interaction feedback.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HapticSettings {
    pub click_intensity: f32,
    pub click_duration_ms: f32,
    pub hover_intensity: f32,
    pub hover_duration_ms: f32,
}

impl Default for HapticSettings {
    fn default() -> Self {
        Self {
            click_intensity: 1.0,
            click_duration_ms: 20.0,
            hover_intensity: 0.3,
            hover_duration_ms: 10.0,
        }
    }
}

// Config errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting: {0}")]
    Invalid(String),
}

impl PointerSettings {
    /// Reject values the device logic cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.click_window_ms <= 0 {
            return Err(ConfigError::Invalid(format!(
                "click_window_ms must be positive, got {}",
                self.click_window_ms
            )));
        }
        if !self.wheel_scale.is_finite() {
            return Err(ConfigError::Invalid("wheel_scale must be finite".into()));
        }
        if !self.wheel_deadzone.is_finite() || self.wheel_deadzone < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "wheel_deadzone must be non-negative, got {}",
                self.wheel_deadzone
            )));
        }
        for (name, value) in [
            ("haptics.click_intensity", self.haptics.click_intensity),
            ("haptics.hover_intensity", self.haptics.hover_intensity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Load settings from a TOML file. A missing file is not an error and
    /// yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&raw)?;
        settings.validate()?;
        debug!("loaded pointer settings: {:?}", settings);
        Ok(settings)
    }
}
