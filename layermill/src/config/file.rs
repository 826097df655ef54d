//! Run configuration file handling for ~/.layermill/config.ini.
//!
//! Settings structs live in [`super::settings`], parsing in
//! [`super::parser`]. A missing file is not an error: the CLI can supply
//! everything a config file would, so absent config means defaults.

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::RunConfig;

/// Run configuration errors.
///
/// All of these surface at setup time and are fatal to the run; nothing
/// here is raised per feature.
#[derive(Debug, Error)]
pub enum RunConfigError {
    /// Failed to read or parse the config file
    #[error("Failed to read config file: {0}")]
    Read(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// A section is missing a required key
    #[error("Invalid configuration: [{section}] is missing required key '{key}'")]
    MissingKey { section: String, key: String },

    /// A section name outside the known set
    #[error("Invalid configuration: unknown section [{section}]")]
    UnknownSection { section: String },
}

impl RunConfig {
    /// Load configuration from the default path (~/.layermill/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, RunConfigError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, RunConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }
}

/// Get the path to the config directory (~/.layermill).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".layermill")
}

/// Get the path to the config file (~/.layermill/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = RunConfig::default();

        assert!(config.profile.is_none());
        assert!(config.output.is_none());
        assert!(config.sources.is_empty());
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = RunConfig::load_from(&config_path).unwrap();

        assert!(config.profile.is_none());
        assert!(config.sources.is_empty());
    }

    #[test]
    fn test_config_file_path_is_under_home() {
        let path = config_file_path();
        assert!(path.ends_with(".layermill/config.ini"));
    }
}
