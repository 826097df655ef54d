//! Protected area classification.

use crate::collect::FeatureCollector;
use crate::derive::TextClassifier;
use crate::feature::SourceFeature;
use crate::handler::LayerHandler;

/// Zoom at which protected areas first appear.
pub const PROTECTED_AREA_MIN_ZOOM: u8 = 6;

/// Emits protected areas into the `protected_area` layer.
///
/// Matches polygon features and derives `class` by classifying the free
/// text `name` tag against ordered designation rules. Designation
/// vocabularies are inconsistent across agencies ("Green Mountain
/// National Forest Unit", "GMNF"), so classification is substring based;
/// areas whose name matches no rule still emit, with `class` absent.
pub struct ProtectedAreaHandler {
    designations: TextClassifier,
}

impl ProtectedAreaHandler {
    /// Handler with the default designation rules.
    pub fn new() -> Self {
        Self::with_designations(TextClassifier::new([
            ("national forest", "national_forest"),
            ("national park", "national_park"),
            ("state park", "state_park"),
            ("state forest", "state_forest"),
            ("wilderness", "wilderness"),
            ("wildlife refuge", "wildlife_refuge"),
        ]))
    }

    /// Handler with caller-supplied designation rules.
    ///
    /// Rule order is match priority.
    pub fn with_designations(designations: TextClassifier) -> Self {
        Self { designations }
    }
}

impl Default for ProtectedAreaHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerHandler for ProtectedAreaHandler {
    fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
        if !feature.can_be_polygon() {
            return;
        }

        let name = feature.tag("name");
        out.polygon("protected_area")
            .set_attr("name", name)
            .set_attr("class", self.designations.classify_opt(name))
            .set_min_zoom(PROTECTED_AREA_MIN_ZOOM);
    }
}
