//! Settings structs for the run configuration.
//!
//! Each struct represents one `[section]` of the INI run config.
//! These are pure data types with no parsing logic.

use std::path::PathBuf;

/// Complete run configuration loaded from config.ini.
///
/// Everything is optional: the command line can supply the profile, and a
/// run that reads features from stdin needs no source bindings at all.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Catalog profile to run. `None` defers to the command line.
    pub profile: Option<String>,
    /// Output path for the classified feature stream.
    pub output: Option<PathBuf>,
    /// Source bindings, in file order.
    pub sources: Vec<SourceBinding>,
}

impl RunConfig {
    /// Look up a source binding by id.
    pub fn source(&self, id: &str) -> Option<&SourceBinding> {
        self.sources.iter().find(|binding| binding.id == id)
    }

    /// Ids of all bound sources, in file order.
    pub fn source_ids(&self) -> Vec<&str> {
        self.sources
            .iter()
            .map(|binding| binding.id.as_str())
            .collect()
    }
}

/// One `[source.<id>]` section: where a logical source id gets its data.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBinding {
    /// Logical source id, as profiles subscribe to it ("osm", "contours", ...).
    pub id: String,
    /// On-disk format of the bound data.
    pub format: SourceFormat,
    /// Path to the data file.
    pub path: PathBuf,
    /// Named layer within the file, for container formats.
    pub layer: Option<String>,
}

/// Data formats a source can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// OpenStreetMap PBF extract.
    Osm,
    /// OGC GeoPackage container.
    Geopackage,
    /// ESRI shapefile.
    Shapefile,
}

impl SourceFormat {
    /// Convert format to its config-file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Osm => "osm",
            Self::Geopackage => "geopackage",
            Self::Shapefile => "shapefile",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SourceFormat {
    type Err = ();

    /// Parse a format from a string (case-insensitive).
    ///
    /// Valid values: "osm", "geopackage", "shapefile"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "osm" => Ok(Self::Osm),
            "geopackage" => Ok(Self::Geopackage),
            "shapefile" => Ok(Self::Shapefile),
            _ => Err(()),
        }
    }
}
