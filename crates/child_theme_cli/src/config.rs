//! Configuration management for the child theme CLI.
//!
//! This module provides functionality for loading and saving the CLI
//! configuration file. The configuration supplies defaults for the theme
//! metadata, the location of the theme root, and where activation is
//! recorded. Every value can be overridden on the command line.
//!
//! The configuration is stored in TOML format and can be loaded from a
//! specified file path or from the default location in the current directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use child_theme_core::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "child-theme.toml";

/// Default file the active theme is recorded in
pub const DEFAULT_STATE_FILENAME: &str = "active-theme.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the child theme CLI application.
///
/// # Example TOML Configuration
///
/// ```toml
/// theme_root = "/srv/wp-content/themes"
///
/// [defaults]
/// author = "Jane Doe"
/// author_uri = "https://example.com"
/// tags = "blog, one-column"
///
/// [activation]
/// enabled = true
/// state_file = "active-theme.toml"
///
/// [listing]
/// max_depth = 10
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory new child themes are created in. Defaults to the directory
    /// containing the parent theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_root: Option<PathBuf>,

    /// Defaults for theme metadata not given on the command line
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub activation: ActivationConfig,

    #[serde(default)]
    pub listing: ListingConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// This function will return `Error::Config` if:
    /// - The specified file does not exist
    /// - The file cannot be read due to permissions or I/O issues
    /// - The file contains invalid TOML or does not match the schema
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use child_theme_cli::config::AppConfig;
    ///
    /// let config_path = Path::new("./child-theme.toml");
    /// match AppConfig::load(&config_path) {
    ///     Ok(config) => println!("Theme root: {:?}", config.theme_root),
    ///     Err(e) => eprintln!("Failed to load config: {}", e),
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration named on the command line, or the default file.
    ///
    /// An explicitly given file must exist. When no file is given and the
    /// default file is absent, the built-in defaults are used.
    pub fn load_or_default(config_path: Option<&str>) -> Result<Self, Error> {
        let path = get_config_path(config_path);

        if config_path.is_none() && !path.exists() {
            debug!("No configuration file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Saves the configuration to a TOML file at the specified path.
    ///
    /// Parent directories are created as needed and an existing file is
    /// overwritten.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }
}

/// Default theme metadata.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_uri: Option<String>,

    /// Comma-separated tag list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Configuration for activating generated child themes.
///
/// # Fields
///
/// * `enabled` - Whether new child themes are activated (defaults to true)
/// * `state_file` - TOML file the active theme is recorded in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationConfig {
    #[serde(default = "ActivationConfig::default_enabled")]
    pub enabled: bool,

    #[serde(default = "ActivationConfig::default_state_file")]
    pub state_file: PathBuf,
}

impl ActivationConfig {
    fn default_enabled() -> bool {
        true
    }

    fn default_state_file() -> PathBuf {
        PathBuf::from(DEFAULT_STATE_FILENAME)
    }
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            state_file: Self::default_state_file(),
        }
    }
}

/// Configuration for listing parent theme files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "ListingConfig::default_max_depth")]
    pub max_depth: usize,
}

impl ListingConfig {
    fn default_max_depth() -> usize {
        DEFAULT_MAX_DEPTH
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::default_max_depth(),
        }
    }
}

/// Resolves the path to the configuration file.
///
/// - If `config_path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `config_path` is `None`, returns `./child-theme.toml` in the current directory
/// - Falls back to the current directory if unable to determine the working directory
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
