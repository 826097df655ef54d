//! Elevation contour lines.

use crate::collect::FeatureCollector;
use crate::derive::elevation_feet;
use crate::feature::SourceFeature;
use crate::handler::LayerHandler;

/// Zoom at which contour lines first appear.
pub const CONTOUR_MIN_ZOOM: u8 = 11;

/// Draw order for contour lines; renders above trail and road linework.
pub const CONTOUR_SORT_KEY: i32 = 100;

/// Emits contour lines into the `contour` layer.
///
/// Expects line features from an elevation-processing source whose
/// records carry a metric `elev` tag. The metric value passes through as
/// `ele`; `ele_ft` carries the truncated imperial conversion and is
/// omitted when `elev` is missing or unparseable.
#[derive(Debug, Default)]
pub struct ContourHandler;

impl ContourHandler {
    pub fn new() -> Self {
        Self
    }
}

impl LayerHandler for ContourHandler {
    fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
        if !feature.can_be_line() {
            return;
        }

        out.line("contour")
            .set_attr("ele", feature.tag("elev"))
            .set_attr("ele_ft", elevation_feet(feature, "elev"))
            .set_min_zoom(CONTOUR_MIN_ZOOM)
            .set_sort_key(CONTOUR_SORT_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::AttrValue;
    use crate::feature::MemoryFeature;

    #[test]
    fn test_emits_metric_and_imperial_elevation() {
        let handler = ContourHandler::new();
        let feature = MemoryFeature::line("contours").with_tag("elev", "1219.1");

        let mut out = FeatureCollector::new();
        handler.process(&feature, &mut out);

        assert_eq!(out.len(), 1);
        let contour = &out.features()[0];
        assert_eq!(contour.layer, "contour");
        assert_eq!(contour.attr_text("ele"), Some("1219.1"));
        assert_eq!(contour.attr("ele_ft"), Some(&AttrValue::Integer(3999)));
        assert_eq!(contour.min_zoom, Some(CONTOUR_MIN_ZOOM));
        assert_eq!(contour.sort_key, Some(CONTOUR_SORT_KEY));
    }

    #[test]
    fn test_missing_elevation_omits_both_attrs() {
        let handler = ContourHandler::new();
        let feature = MemoryFeature::line("contours");

        let mut out = FeatureCollector::new();
        handler.process(&feature, &mut out);

        assert_eq!(out.len(), 1, "the contour still emits");
        let contour = &out.features()[0];
        assert!(contour.attr("ele").is_none());
        assert!(contour.attr("ele_ft").is_none());
    }

    #[test]
    fn test_unparseable_elevation_keeps_passthrough_only() {
        let handler = ContourHandler::new();
        let feature = MemoryFeature::line("contours").with_tag("elev", "n/a");

        let mut out = FeatureCollector::new();
        handler.process(&feature, &mut out);

        let contour = &out.features()[0];
        assert_eq!(contour.attr_text("ele"), Some("n/a"));
        assert!(
            contour.attr("ele_ft").is_none(),
            "failed derivation must stay absent"
        );
    }

    #[test]
    fn test_points_are_ignored() {
        let handler = ContourHandler::new();
        let feature = MemoryFeature::point("contours").with_tag("elev", "1500");

        let mut out = FeatureCollector::new();
        handler.process(&feature, &mut out);

        assert!(out.is_empty());
    }
}
