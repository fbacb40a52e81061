//! Configuration file support for bmpedit.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/bmpedit/config.toml`. Settings cover the initial brush and how
//! images are written on `save`.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{BrushConfig, SaveConfig};

use crate::draw::{Brush, brush::MAX_BRUSH_SIZE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [brush]
/// default_color = "red"
/// default_size = 3
///
/// [save]
/// atomic = true
/// backup = false
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial brush color and size
    #[serde(default)]
    pub brush: BrushConfig,

    /// File writing behaviour
    #[serde(default)]
    pub save: SaveConfig,
}

impl Config {
    /// Corrects out-of-range values, logging a warning for each.
    ///
    /// - `default_size`: clamped to 1 - 255, then rounded down to an odd number
    /// - `default_color`: unknown names fall back to black
    fn validate_and_clamp(&mut self) {
        let max = i64::from(MAX_BRUSH_SIZE);
        if !(1..=max).contains(&self.brush.default_size) {
            warn!(
                "Invalid brush default_size {}, clamping to 1-{} range",
                self.brush.default_size, max
            );
            self.brush.default_size = self.brush.default_size.clamp(1, max);
        }

        if self.brush.default_size % 2 == 0 {
            warn!(
                "Brush default_size {} must be odd, using {}",
                self.brush.default_size,
                self.brush.default_size - 1
            );
            self.brush.default_size -= 1;
        }

        if !self.brush.default_color.is_known() {
            warn!(
                "Unknown brush default_color {:?}, falling back to black",
                self.brush.default_color
            );
            self.brush.default_color = ColorSpec::Name("black".to_string());
        }
    }

    /// Brush described by the `[brush]` table.
    pub fn initial_brush(&self) -> Brush {
        let color = self.brush.default_color.to_color();
        Brush::new(color, self.brush.default_size).unwrap_or_else(|err| {
            warn!("Ignoring brush default_size: {}", err);
            Brush {
                color,
                ..Brush::default()
            }
        })
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("bmpedit");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, which must exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists there or it cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
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
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema of the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
