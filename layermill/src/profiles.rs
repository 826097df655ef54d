//! The built-in profile catalog.
//!
//! Three ready-made profiles, from narrowest to widest:
//!
//! - [`contour`] - contour lines only
//! - [`outdoor`] - hiking layers: contours, trails, points of interest,
//!   protected areas
//! - [`basemap`] - the outdoor layer set with road coverage folded into
//!   the transportation layer
//!
//! Each returns a [`ProfileBuilder`] rather than a finished [`Profile`],
//! so a downstream product can rework the layer set before freezing it.
//! [`ProfileKind`] names the catalog entries for CLI and configuration
//! selection.
//!
//! # Example
//!
//! ```
//! use layermill::profiles::ProfileKind;
//!
//! let profile = "outdoor".parse::<ProfileKind>().unwrap().build();
//! assert_eq!(profile.name(), "Outdoor Hiking Map");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::handler::HandlerChain;
use crate::layers::{
    ContourHandler, OutdoorPoiHandler, ProtectedAreaHandler, RoadHandler, TrailHandler,
};
use crate::profile::{Profile, ProfileBuilder, ProfileError};

/// Attribution carried by profiles that consume OpenStreetMap data.
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Contour lines from local elevation data, nothing else.
pub fn contour() -> ProfileBuilder {
    let mut builder = ProfileBuilder::new("Contour Lines")
        .with_description("A map of contour lines from local data.");
    builder.register("contour", &["contours"], Arc::new(ContourHandler));
    builder
}

/// The hiking-focused layer set: contours, trails, outdoor points of
/// interest, and protected areas.
pub fn outdoor() -> ProfileBuilder {
    let mut builder = ProfileBuilder::new("Outdoor Hiking Map");
    builder.register("contour", &["contours"], Arc::new(ContourHandler));
    builder.register("transportation", &["osm"], Arc::new(TrailHandler));
    builder.register("outdoor_poi", &["osm"], Arc::new(OutdoorPoiHandler));
    builder.register(
        "protected_area",
        &["protected_areas"],
        Arc::new(ProtectedAreaHandler::new()),
    );
    builder
}

/// The outdoor layer set widened into a general basemap.
///
/// Reuses [`outdoor`] and reworks the transportation entry into a chain
/// of the trail and road handlers, so both rule sets feed one logical
/// layer from the same source.
pub fn basemap() -> ProfileBuilder {
    let mut builder = outdoor()
        .with_name("Layermill Outdoor Basemap")
        .with_description("A combined basemap with road coverage and custom contour lines.")
        .with_attribution(OSM_ATTRIBUTION);
    builder.register(
        "transportation",
        &["osm"],
        Arc::new(HandlerChain::pair(
            Arc::new(TrailHandler),
            Arc::new(RoadHandler),
        )),
    );
    builder
}

/// Selects a catalog profile by key.
///
/// Parsed from CLI arguments and run configuration; unknown keys fail at
/// setup with the valid alternatives listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    /// Contour lines only.
    Contour,
    /// Hiking layers over contour, OSM, and protected-area sources.
    Outdoor,
    /// Outdoor layers plus roads in the transportation layer.
    Basemap,
}

impl ProfileKind {
    /// Every catalog entry, in catalog order.
    pub const ALL: [ProfileKind; 3] = [
        ProfileKind::Contour,
        ProfileKind::Outdoor,
        ProfileKind::Basemap,
    ];

    /// The catalog key, as written on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            ProfileKind::Contour => "contour",
            ProfileKind::Outdoor => "outdoor",
            ProfileKind::Basemap => "basemap",
        }
    }

    /// The profile builder for this kind, ready to rework.
    pub fn builder(&self) -> ProfileBuilder {
        match self {
            ProfileKind::Contour => contour(),
            ProfileKind::Outdoor => outdoor(),
            ProfileKind::Basemap => basemap(),
        }
    }

    /// Build the ready-to-run profile for this kind.
    pub fn build(&self) -> Profile {
        self.builder().build()
    }

    fn valid_keys() -> String {
        ProfileKind::ALL
            .iter()
            .map(|kind| kind.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ProfileKind {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contour" => Ok(ProfileKind::Contour),
            "outdoor" => Ok(ProfileKind::Outdoor),
            "basemap" => Ok(ProfileKind::Basemap),
            _ => Err(ProfileError::UnknownProfile {
                name: s.to_string(),
                valid: ProfileKind::valid_keys(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::FeatureCollector;
    use crate::feature::MemoryFeature;
    use crate::layers::{CONTOUR_SORT_KEY, ROAD_SORT_KEY, TRAIL_SORT_KEY};

    #[test]
    fn test_contour_profile_metadata() {
        let profile = contour().build();
        assert_eq!(profile.name(), "Contour Lines");
        assert_eq!(profile.description(), "A map of contour lines from local data.");
        assert_eq!(profile.layer_names(), vec!["contour"]);
        assert_eq!(profile.source_ids(), vec!["contours".to_string()]);
    }

    #[test]
    fn test_outdoor_profile_layer_set() {
        let profile = outdoor().build();
        assert_eq!(profile.name(), "Outdoor Hiking Map");
        assert_eq!(
            profile.layer_names(),
            vec!["contour", "transportation", "outdoor_poi", "protected_area"]
        );
        assert_eq!(
            profile.source_ids(),
            vec![
                "contours".to_string(),
                "osm".to_string(),
                "protected_areas".to_string()
            ]
        );
    }

    #[test]
    fn test_basemap_keeps_outdoor_layers_and_renames() {
        let profile = basemap().build();
        assert_eq!(profile.name(), "Layermill Outdoor Basemap");
        assert_eq!(profile.attribution(), OSM_ATTRIBUTION);
        assert_eq!(
            profile.layer_names(),
            vec!["contour", "transportation", "outdoor_poi", "protected_area"],
            "reworking transportation must not move or duplicate it"
        );
    }

    #[test]
    fn test_outdoor_ignores_roads() {
        let profile = outdoor().build();
        let motorway = MemoryFeature::line("osm").with_tag("highway", "motorway");

        let mut out = FeatureCollector::new();
        profile.process(&motorway, &mut out);

        assert!(
            out.is_empty(),
            "the outdoor profile has no rule for motorways"
        );
    }

    #[test]
    fn test_basemap_classifies_both_trails_and_roads() {
        let profile = basemap().build();

        let trail = MemoryFeature::line("osm").with_tag("highway", "path");
        let motorway = MemoryFeature::line("osm").with_tag("highway", "motorway");

        let mut out = FeatureCollector::new();
        profile.process(&trail, &mut out);
        profile.process(&motorway, &mut out);

        let features = out.take();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].layer, "transportation");
        assert_eq!(features[0].attr_text("class"), Some("path"));
        assert_eq!(features[0].sort_key, Some(TRAIL_SORT_KEY));
        assert_eq!(features[1].layer, "transportation");
        assert_eq!(features[1].attr_text("class"), Some("road"));
        assert_eq!(features[1].attr_text("subclass"), Some("motorway"));
        assert_eq!(features[1].sort_key, Some(ROAD_SORT_KEY));
    }

    #[test]
    fn test_basemap_draw_order_is_roads_below_trails_below_contours() {
        assert!(ROAD_SORT_KEY < TRAIL_SORT_KEY);
        assert!(TRAIL_SORT_KEY < CONTOUR_SORT_KEY);
    }

    #[test]
    fn test_profile_kind_parses_case_insensitively() {
        assert_eq!("outdoor".parse::<ProfileKind>().unwrap(), ProfileKind::Outdoor);
        assert_eq!("Basemap".parse::<ProfileKind>().unwrap(), ProfileKind::Basemap);
        assert_eq!(" contour ".parse::<ProfileKind>().unwrap(), ProfileKind::Contour);
    }

    #[test]
    fn test_profile_kind_rejects_unknown_names() {
        let err = "topographic".parse::<ProfileKind>().unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("topographic") && message.contains("contour, outdoor, basemap"),
            "error should name the input and the valid keys: {}",
            message
        );
    }

    #[test]
    fn test_profile_kind_builds_matching_profile() {
        for kind in ProfileKind::ALL {
            let profile = kind.build();
            assert!(
                !profile.name().is_empty(),
                "{} should build a named profile",
                kind
            );
        }
    }
}
