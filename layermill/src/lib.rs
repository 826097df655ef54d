//! Layermill - Feature classification and profile composition for tiled maps
//!
//! This library provides the core machinery for turning raw geospatial
//! source features into classified output-layer features: routing by
//! source id, tag-driven layer rules, attribute derivation, and a layer
//! registry that lets a derived profile override, remove, or chain the
//! behavior of a base profile without modifying it.
//!
//! # High-Level API
//!
//! For most use cases, the [`profiles`] catalog plus [`Profile::process`]
//! is all that is needed:
//!
//! ```
//! use layermill::collect::FeatureCollector;
//! use layermill::feature::MemoryFeature;
//! use layermill::profiles;
//!
//! let profile = profiles::outdoor().build();
//!
//! let peak = MemoryFeature::point("osm")
//!     .with_tag("natural", "peak")
//!     .with_tag("name", "Camel's Hump")
//!     .with_tag("ele", "1244");
//!
//! let mut out = FeatureCollector::new();
//! profile.process(&peak, &mut out);
//! assert_eq!(out.features()[0].layer, "outdoor_poi");
//! ```
//!
//! Custom schemas implement [`handler::LayerHandler`] and register with a
//! [`profile::ProfileBuilder`] directly.
//!
//! [`Profile::process`]: profile::Profile::process

pub mod collect;
pub mod config;
pub mod derive;
pub mod feature;
pub mod handler;
pub mod layers;
pub mod logging;
pub mod profile;
pub mod profiles;

/// Version of the Layermill library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty(), "Version should be set from Cargo.toml");
    }

    #[test]
    fn test_catalog_module_exists() {
        // Verify the profiles catalog is accessible
        let profile = profiles::contour().build();
        assert_eq!(profile.name(), "Contour Lines");
    }
}
