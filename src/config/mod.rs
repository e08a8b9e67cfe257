//! Configuration for a toast registry.
//!
//! Handles persistence and loading of the registry settings: where toasts
//! are anchored, how long they live by default, how many may be shown at
//! once and in which order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_toasts`; larger values are clamped
pub const MAX_TOASTS_LIMIT: usize = 100;

/// Registry configuration, supplied once at initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Screen anchor for the toast stack
    #[serde(default)]
    pub position: ToastPosition,

    /// Default auto-dismiss delay in milliseconds (0 = persistent)
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Maximum concurrent toasts (0 = unlimited)
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,

    /// Show the newest toast closest to the anchor edge
    #[serde(default)]
    pub newest_on_top: bool,
}

fn default_duration_ms() -> u64 {
    5000
}

fn default_max_toasts() -> usize {
    5
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::default(),
            duration_ms: default_duration_ms(),
            max_toasts: default_max_toasts(),
            newest_on_top: false,
        }
    }
}

impl ToastConfig {
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_max_toasts(mut self, max_toasts: usize) -> Self {
        self.max_toasts = max_toasts;
        self
    }

    pub fn with_newest_on_top(mut self, newest_on_top: bool) -> Self {
        self.newest_on_top = newest_on_top;
        self
    }

    /// Clamp values to their supported range
    pub fn validate(&mut self) {
        self.max_toasts = self.max_toasts.min(MAX_TOASTS_LIMIT);
    }

    /// Load configuration from the user config directory, or the default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or the default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no toast config, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: ToastConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate();

        Ok(config)
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;

        Ok(config_dir.join("toastline").join("config.json"))
    }
}

/// Where the toast stack is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    #[default]
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    BottomCenter,
}

/// Horizontal alignment of a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopRight,
        ToastPosition::TopCenter,
        ToastPosition::BottomLeft,
        ToastPosition::BottomRight,
        ToastPosition::BottomCenter,
    ];

    /// Bottom positions grow upward from the bottom edge
    pub fn is_bottom(&self) -> bool {
        matches!(
            self,
            ToastPosition::BottomLeft | ToastPosition::BottomRight | ToastPosition::BottomCenter
        )
    }

    pub fn horizontal(&self) -> HorizontalAnchor {
        match self {
            ToastPosition::TopLeft | ToastPosition::BottomLeft => HorizontalAnchor::Left,
            ToastPosition::TopCenter | ToastPosition::BottomCenter => HorizontalAnchor::Center,
            ToastPosition::TopRight | ToastPosition::BottomRight => HorizontalAnchor::Right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopRight => "top-right",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomRight => "bottom-right",
            ToastPosition::BottomCenter => "bottom-center",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToastConfig::default();
        assert_eq!(config.position, ToastPosition::TopRight);
        assert_eq!(config.duration_ms, 5000);
        assert_eq!(config.max_toasts, 5);
        assert!(!config.newest_on_top);
    }

    #[test]
    fn test_validate_clamps_max_toasts() {
        let mut config = ToastConfig::default().with_max_toasts(10_000);
        config.validate();
        assert_eq!(config.max_toasts, MAX_TOASTS_LIMIT);

        let mut config = ToastConfig::default().with_max_toasts(0);
        config.validate();
        assert_eq!(config.max_toasts, 0);
    }

    #[test]
    fn test_position_serializes_kebab_case() {
        for position in ToastPosition::ALL {
            let json = serde_json::to_string(&position).unwrap();
            assert_eq!(json, format!("\"{}\"", position.as_str()));
        }
    }

    #[test]
    fn test_position_geometry() {
        assert!(ToastPosition::BottomCenter.is_bottom());
        assert!(!ToastPosition::TopCenter.is_bottom());
        assert_eq!(ToastPosition::TopLeft.horizontal(), HorizontalAnchor::Left);
        assert_eq!(ToastPosition::BottomCenter.horizontal(), HorizontalAnchor::Center);
        assert_eq!(ToastPosition::BottomRight.horizontal(), HorizontalAnchor::Right);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ToastConfig = serde_json::from_str(r#"{"position":"bottom-left"}"#).unwrap();
        assert_eq!(config.position, ToastPosition::BottomLeft);
        assert_eq!(config.duration_ms, 5000);
        assert_eq!(config.max_toasts, 5);
    }

    #[test]
    fn test_save_and_load_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = ToastConfig::default()
            .with_position(ToastPosition::BottomCenter)
            .with_duration_ms(0)
            .with_max_toasts(0)
            .with_newest_on_top(true);
        config.save_to(&path).unwrap();

        let loaded = ToastConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ToastConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, ToastConfig::default());
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ToastConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
