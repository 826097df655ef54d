//! INI parsing logic for converting `Ini` → `RunConfig`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::RunConfigError;
use super::settings::{RunConfig, SourceBinding, SourceFormat};

/// Parse an `Ini` object into a `RunConfig`.
///
/// Starts from `RunConfig::default()` and overlays any values found in
/// the INI. The whole load fails on the first unknown section or invalid
/// binding, so a typo never silently drops a source.
pub(super) fn parse_ini(ini: &Ini) -> Result<RunConfig, RunConfigError> {
    let mut config = RunConfig::default();

    for (section, _) in ini.iter() {
        let name = match section {
            Some(name) => name,
            None => continue,
        };
        if name != "profile" && name != "output" && !name.starts_with("source.") {
            return Err(RunConfigError::UnknownSection {
                section: name.to_string(),
            });
        }
    }

    // [profile] section
    if let Some(section) = ini.section(Some("profile")) {
        if let Some(v) = section.get("name") {
            let v = v.trim();
            if !v.is_empty() {
                config.profile = Some(v.to_string());
            }
        }
    }

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("path") {
            let v = v.trim();
            if !v.is_empty() {
                config.output = Some(expand_tilde(v));
            }
        }
    }

    // [source.<id>] sections, kept in file order
    for (section, properties) in ini.iter() {
        let name = match section {
            Some(name) => name,
            None => continue,
        };
        let id = match name.strip_prefix("source.") {
            Some(id) => id,
            None => continue,
        };

        if id.is_empty() {
            return Err(RunConfigError::InvalidValue {
                section: name.to_string(),
                key: "id".to_string(),
                value: String::new(),
                reason: "source id must not be empty".to_string(),
            });
        }
        if config.sources.iter().any(|binding| binding.id == id) {
            return Err(RunConfigError::InvalidValue {
                section: name.to_string(),
                key: "id".to_string(),
                value: id.to_string(),
                reason: "source id is bound more than once".to_string(),
            });
        }

        let format = match properties.get("format") {
            Some(v) => v
                .parse::<SourceFormat>()
                .map_err(|_| RunConfigError::InvalidValue {
                    section: name.to_string(),
                    key: "format".to_string(),
                    value: v.to_string(),
                    reason: "must be one of: osm, geopackage, shapefile".to_string(),
                })?,
            None => {
                return Err(RunConfigError::MissingKey {
                    section: name.to_string(),
                    key: "format".to_string(),
                });
            }
        };

        let path = match properties.get("path").map(str::trim) {
            Some(v) if !v.is_empty() => expand_tilde(v),
            _ => {
                return Err(RunConfigError::MissingKey {
                    section: name.to_string(),
                    key: "path".to_string(),
                });
            }
        };

        let layer = properties
            .get("layer")
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        config.sources.push(SourceBinding {
            id: id.to_string(),
            format,
            path,
            layer,
        });
    }

    Ok(config)
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
