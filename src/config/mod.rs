//! Configuration management

pub mod manifest;
pub mod settings;

pub use manifest::{module_id_of, PluginManifest, ResolvedManifest};
pub use settings::{
    create_default_config, find_default_config, parse_config_file, PartialSettings, Settings,
    DEFAULT_CONFIG_FILE, DEFAULT_MOUNT_NAME,
};
