//! Configuration for TurtleKit
//!
//! Sections:
//! - `session`: default construction inputs and replay speed
//! - `canvas`: drawing surface size and background colour
//! - `view`: initial zoom and pan
//! - `output`: where the headless runner writes its SVG
//!
//! Files are JSON or TOML, chosen by extension. Missing sections and fields
//! take their defaults.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use turtlekit_core::constants::{
    DEFAULT_LENGTH, DEFAULT_SIDES, DEFAULT_SPEED, MAX_SIDES, MAX_SPEED, MIN_SIDES, MIN_SPEED,
};
use turtlekit_core::Color;

const APP_DIR: &str = "turtlekit";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (expected .json or .toml)",
                path.display()
            ))),
        }
    }
}

/// Construction inputs used when no prompt supplies them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Base side length in world units
    pub length: f64,
    /// Polygon side count
    pub sides: u32,
    /// Replay speed, 1 (slowest) to 10
    pub speed: u8,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            sides: DEFAULT_SIDES,
            speed: DEFAULT_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
    /// Also the colour of the erasing run
    pub background: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub svg_path: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            svg_path: PathBuf::from("turtlekit.svg"),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub session: SessionSettings,
    pub canvas: CanvasSettings,
    pub view: ViewSettings,
    pub output: OutputSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::SaveError(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Load from the default location if a file exists there, else defaults.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> SettingsResult<()> {
        let session = &self.session;
        if !(session.length.is_finite() && session.length > 0.0) {
            return Err(SettingsError::invalid(
                "session.length",
                format!("must be a positive number, got {}", session.length),
            ));
        }
        if !(MIN_SIDES..=MAX_SIDES).contains(&session.sides) {
            return Err(SettingsError::invalid(
                "session.sides",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_SIDES, MAX_SIDES, session.sides
                ),
            ));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&session.speed) {
            return Err(SettingsError::invalid(
                "session.speed",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_SPEED, MAX_SPEED, session.speed
                ),
            ));
        }

        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(SettingsError::invalid(
                "canvas",
                format!(
                    "dimensions must be > 0, got {}x{}",
                    self.canvas.width, self.canvas.height
                ),
            ));
        }

        if !(self.view.scale.is_finite() && self.view.scale > 0.0) {
            return Err(SettingsError::invalid(
                "view.scale",
                format!("must be > 0, got {}", self.view.scale),
            ));
        }
        if !(self.view.pan_x.is_finite() && self.view.pan_y.is_finite()) {
            return Err(SettingsError::invalid("view.pan", "must be finite"));
        }

        if self.output.svg_path.as_os_str().is_empty() {
            return Err(SettingsError::invalid("output.svg_path", "must not be empty"));
        }

        Ok(())
    }
}

/// `<config dir>/turtlekit`
pub fn config_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}

/// `<config dir>/turtlekit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}
