//! TurtleKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{
    config_dir, default_config_path, CanvasSettings, Config, OutputSettings, SessionSettings,
    ViewSettings,
};
pub use error::{SettingsError, SettingsResult};
