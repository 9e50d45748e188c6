use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("damping must be a positive number of seconds")]
    InvalidDamping,
    #[error("wheel step must be a positive number of pixels")]
    InvalidWheelStep,
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the scene is framed before any section-specific pose is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera_position: [f32; 3],
    pub fov: f32,
    pub background: String,
    pub shadows: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_position: [3.0, 3.0, 3.0],
            fov: 30.0,
            background: "#ececec".to_string(),
            shadows: true,
        }
    }
}

/// Site-wide settings. Every field has a default, so a partial JSON file is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// Smooth time of the scroll animation, in seconds.
    pub damping: f64,
    /// Wheel travel, in pixels, that scrolls one page.
    pub wheel_step_px: f64,
    pub scene: SceneConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            damping: 0.1,
            wheel_step_px: 900.0,
            scene: SceneConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and any validation error.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Normalize the title and check numeric ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when damping or wheel step is not a positive finite number,
    /// or the title is blank.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if !(self.damping.is_finite() && self.damping > 0.0) {
            return Err(ConfigError::InvalidDamping);
        }
        if !(self.wheel_step_px.is_finite() && self.wheel_step_px > 0.0) {
            return Err(ConfigError::InvalidWheelStep);
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        self.title = title.to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default().validate().unwrap();
        assert_eq!(config.damping, 0.1);
        assert_eq!(config.scene.camera_position, [3.0, 3.0, 3.0]);
        assert_eq!(config.scene.background, "#ececec");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "title": "  Jane Doe  ", "scene": { "fov": 45 } }"#)
            .unwrap();
        assert_eq!(config.title, "Jane Doe");
        assert_eq!(config.scene.fov, 45.0);
        assert_eq!(config.scene.camera_position, [3.0, 3.0, 3.0]);
        assert_eq!(config.wheel_step_px, 900.0);
    }

    #[test]
    fn rejects_bad_values() {
        let err = SiteConfig::from_json(r#"{ "damping": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDamping));

        let err = SiteConfig::from_json(r#"{ "wheel_step_px": -3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWheelStep));

        let err = SiteConfig::from_json(r#"{ "title": "   " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTitle));

        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
