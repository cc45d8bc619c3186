//! Application configuration.
//!
//! Handles loading and validating `devbelt.toml`. Configuration is
//! process-wide: loaded once at startup, then passed explicitly to the tools
//! that consume it. There is no ambient global state.
//!
//! ## Config File Location
//!
//! `devbelt.toml` is looked up in the current directory unless an explicit
//! path is given with `--config`. A missing file is not an error — every
//! option has a default.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [markdown]
//! theme = "light"       # Preview page theme: "light" or "dark"
//!
//! [photo]
//! dpi = 300             # Print resolution for passport sheets
//! margin_px = 20        # Gap between tiles on the print sheet
//! jpeg_quality = 90     # JPEG encoding quality (1-100)
//!
//! [lorem]
//! paragraphs = 3        # Default paragraph count for `devbelt lorem`
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only switch the preview theme
//! [markdown]
//! theme = "dark"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Application configuration loaded from `devbelt.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Markdown preview settings.
    pub markdown: MarkdownConfig,
    /// Passport-photo compositor settings.
    pub photo: PhotoConfig,
    /// Lorem ipsum generator settings.
    pub lorem: LoremConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.photo.jpeg_quality == 0 || self.photo.jpeg_quality > 100 {
            return Err(ConfigError::Validation(
                "photo.jpeg_quality must be 1-100".into(),
            ));
        }
        if self.photo.dpi < 72 || self.photo.dpi > 1200 {
            return Err(ConfigError::Validation("photo.dpi must be 72-1200".into()));
        }
        if self.lorem.paragraphs == 0 {
            return Err(ConfigError::Validation(
                "lorem.paragraphs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Markdown preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkdownConfig {
    /// Preview page theme.
    pub theme: Theme,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
        }
    }
}

/// Color scheme for the generated preview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Passport-photo compositor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhotoConfig {
    /// Print resolution in dots per inch.
    pub dpi: u32,
    /// Gap between tiles (and around the sheet edge) in pixels.
    pub margin_px: u32,
    /// JPEG encoding quality (1-100).
    pub jpeg_quality: u8,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            margin_px: 20,
            jpeg_quality: 90,
        }
    }
}

/// Lorem ipsum generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoremConfig {
    /// Default number of paragraphs to generate.
    pub paragraphs: u32,
}

impl Default for LoremConfig {
    fn default() -> Self {
        Self { paragraphs: 3 }
    }
}

/// Load configuration from an explicit path, or from `devbelt.toml` in the
/// current directory if present.
///
/// A missing default file yields stock defaults; a missing explicit path is
/// an error (the user asked for that specific file).
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let content = match explicit {
        Some(path) => fs::read_to_string(path)?,
        None => match fs::read_to_string("devbelt.toml") {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(AppConfig::default());
            }
            Err(e) => return Err(e.into()),
        },
    };
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Stock `devbelt.toml` with every option documented.
///
/// Printed by `devbelt gen-config`; kept in sync with the defaults by a
/// round-trip test below.
pub fn stock_config_toml() -> &'static str {
    r#"# devbelt configuration
# All options are optional - the values below are the defaults.

[markdown]
# Preview page theme: "light" or "dark"
theme = "light"

[photo]
# Print resolution for passport sheets
dpi = 300
# Gap between tiles (and around the sheet edge) in pixels
margin_px = 20
# JPEG encoding quality (1-100)
jpeg_quality = 90

[lorem]
# Default paragraph count for `devbelt lorem`
paragraphs = 3
"#
}
