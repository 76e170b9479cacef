//! Resolved tool settings
//!
//! Settings merge from three sources with increasing precedence: built-in
//! defaults, an optional `.premock.toml` file, and command-line flags.

use crate::error::{PremockError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".premock.toml";

/// Default mount-point name for named exports
pub const DEFAULT_MOUNT_NAME: &str = "preload";

/// Fully resolved settings for a generation run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Path to the plugin manifest
    pub manifest_path: PathBuf,
    /// Global name the named exports mount under
    pub mount_name: String,
    /// Whether mock scaffolding is generated
    pub mock_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("plugin.json"),
            mount_name: DEFAULT_MOUNT_NAME.to_string(),
            mock_enabled: true,
        }
    }
}

/// Partially specified settings from one configuration source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    /// Path to the plugin manifest
    pub manifest: Option<PathBuf>,
    /// Mount-point name for named exports
    pub name: Option<String>,
    /// Whether mock scaffolding is generated
    pub mock: Option<bool>,
}

impl PartialSettings {
    /// Merge another partial configuration over this one; fields set in
    /// `other` take precedence
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.manifest.is_some() {
            self.manifest = other.manifest;
        }
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.mock.is_some() {
            self.mock = other.mock;
        }
    }

    /// Fill unset fields with defaults
    pub fn into_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            manifest_path: self.manifest.unwrap_or(defaults.manifest_path),
            mount_name: self.name.unwrap_or(defaults.mount_name),
            mock_enabled: self.mock.unwrap_or(defaults.mock_enabled),
        }
    }
}

/// Parse a TOML settings file
pub fn parse_config_file(path: &Path) -> Result<PartialSettings> {
    let content = fs::read_to_string(path).map_err(|source| PremockError::ConfigRead {
        path: path.to_path_buf(),
        source,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })?;
    parse_config_content(&content, path)
}

/// Parse TOML settings content
pub fn parse_config_content(content: &str, path: &Path) -> Result<PartialSettings> {
    toml::from_str(content).map_err(|source| PremockError::ConfigParse {
        path: path.to_path_buf(),
        source: Box::new(source),
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })
}

/// Look for the default settings file in the working directory
pub fn find_default_config() -> Option<PartialSettings> {
    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if path.exists() {
        parse_config_file(&path).ok()
    } else {
        None
    }
}

/// Write a default settings file
pub fn create_default_config(path: &Path) -> Result<()> {
    let content = format!(
        "# premock configuration\n\
         \n\
         # Path to the plugin manifest\n\
         manifest = \"plugin.json\"\n\
         \n\
         # Global name the named exports mount under\n\
         name = \"{}\"\n\
         \n\
         # Generate the mock scaffold alongside the preload entry\n\
         mock = true\n",
        DEFAULT_MOUNT_NAME
    );
    fs::write(path, content).map_err(|source| PremockError::output_write(path, source))
}
