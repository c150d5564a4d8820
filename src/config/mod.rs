//! Configuration file support for uxstream.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/ux-gui-stream/config.toml`. Settings include the default output
//! canvas and the default brush used by stream ops that leave brush fields unset.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, StrokeConfig};

use crate::draw::{Brush, Color};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest surface edge accepted for rendering, in pixels.
pub const MAX_CANVAS_EDGE: i32 = 16384;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
///
/// [stroke]
/// default_color = [32, 32, 32]
/// default_width = 3.0
/// default_cap = "round"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Output surface defaults
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Default brush for stroke and fill ops
    #[serde(default)]
    pub stroke: StrokeConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    /// - `stroke.default_width`: 0.1 - 100.0
    ///
    /// Unknown background colors are dropped; an unknown default color becomes black.
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        // NaN fails the range check but survives clamp, so reset it outright
        if self.stroke.default_width.is_nan() {
            log::warn!("Invalid stroke default_width NaN, using 2.0");
            self.stroke.default_width = 2.0;
        } else if !(0.1..=100.0).contains(&self.stroke.default_width) {
            log::warn!(
                "Invalid stroke default_width {:.1}, clamping to 0.1-100.0 range",
                self.stroke.default_width
            );
            self.stroke.default_width = self.stroke.default_width.clamp(0.1, 100.0);
        }

        if let Some(background) = &self.canvas.background {
            if background.try_to_color().is_none() {
                log::warn!(
                    "Invalid canvas background {:?}, leaving the surface transparent",
                    background
                );
                self.canvas.background = None;
            }
        }

        if self.stroke.default_color.try_to_color().is_none() {
            log::warn!(
                "Invalid stroke default_color {:?}, falling back to black",
                self.stroke.default_color
            );
            self.stroke.default_color = ColorSpec::Name("black".to_string());
        }
    }

    /// The brush stream ops fall back to for unset color, width and cap.
    pub fn default_brush(&self) -> Brush {
        Brush {
            color: self.stroke.default_color.to_color(),
            width: self.stroke.default_width,
            cap: self.stroke.default_cap,
        }
    }

    /// Configured background color, if any.
    pub fn background(&self) -> Option<Color> {
        self.canvas.background.as_ref().map(ColorSpec::to_color)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/ux-gui-stream/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("ux-gui-stream");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path, or if
    /// the directory or file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}
