//! Plugin manifest loading and validation
//!
//! The manifest is the `plugin.json`-style file that names the preload entry
//! module, the plugin logo, and the descriptive metadata. Loading resolves
//! the referenced paths against the manifest's directory and verifies they
//! exist; a manifest that fails validation is a fatal configuration error.

use crate::error::{PremockError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed plugin manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub preload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(rename = "pluginName", skip_serializing_if = "Option::is_none")]
    pub plugin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<serde_json::Value>,
}

/// A manifest whose required fields are present and whose referenced files
/// exist, with paths resolved against the manifest's directory
#[derive(Debug, Clone)]
pub struct ResolvedManifest {
    pub name: String,
    pub logo: PathBuf,
    pub preload: PathBuf,
    pub manifest: PluginManifest,
}

impl PluginManifest {
    /// Load and validate a manifest file
    pub fn load(path: &Path) -> Result<ResolvedManifest> {
        let content = fs::read_to_string(path).map_err(|source| PremockError::ConfigRead {
            path: path.to_path_buf(),
            source,
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        })?;

        let manifest: PluginManifest = serde_json::from_str(&content)
            .map_err(|source| PremockError::json_parse_error(path, source))?;

        manifest.resolve(path)
    }

    /// Validate required fields and resolve referenced paths against the
    /// manifest's directory
    pub fn resolve(self, manifest_path: &Path) -> Result<ResolvedManifest> {
        let require = |field: Option<&String>, key: &str| -> Result<String> {
            match field {
                Some(value) if !value.is_empty() => Ok(value.clone()),
                _ => Err(PremockError::invalid_manifest(
                    manifest_path,
                    format!("missing required field '{}'", key),
                )),
            }
        };

        let name = require(self.name.as_ref(), "name")?;
        let logo = require(self.logo.as_ref(), "logo")?;
        let preload = require(self.preload.as_ref(), "preload")?;

        let dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
        let logo = dir.join(logo);
        let preload = dir.join(preload);

        for (path, key) in [(&preload, "preload"), (&logo, "logo")] {
            if !path.exists() {
                return Err(PremockError::invalid_manifest(
                    manifest_path,
                    format!("'{}' file {} does not exist", key, path.display()),
                ));
            }
        }

        Ok(ResolvedManifest {
            name,
            logo,
            preload,
            manifest: self,
        })
    }
}

impl ResolvedManifest {
    /// The preload entry's file stem, without a `.ts`/`.js` extension. Used
    /// to name the generated sibling files.
    pub fn module_id(&self) -> String {
        module_id_of(&self.preload)
    }
}

/// File stem of a source path, with a trailing `.ts`/`.js` extension removed
pub fn module_id_of(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    base.strip_suffix(".ts")
        .or_else(|| base.strip_suffix(".js"))
        .map(str::to_string)
        .unwrap_or(base)
}
