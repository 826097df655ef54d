//! Outdoor points of interest.

use crate::collect::FeatureCollector;
use crate::feature::SourceFeature;
use crate::handler::LayerHandler;

/// Natural-feature values emitted as outdoor POIs.
pub const POI_NATURAL_VALUES: [&str; 3] = ["spring", "peak", "saddle"];

/// Tourism values emitted as outdoor POIs.
pub const POI_TOURISM_VALUES: [&str; 3] = ["viewpoint", "wilderness_hut", "alpine_hut"];

/// Emits outdoor points of interest into the `outdoor_poi` layer.
///
/// Two independent rules over point features: natural features (springs,
/// peaks, saddles) carry `class`, `name`, and `ele`; tourism features
/// (viewpoints, huts) carry `class` and `name`. A point tagged for both
/// rules emits twice.
#[derive(Debug, Default)]
pub struct OutdoorPoiHandler;

impl OutdoorPoiHandler {
    pub fn new() -> Self {
        Self
    }
}

impl LayerHandler for OutdoorPoiHandler {
    fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
        if !feature.is_point() {
            return;
        }

        if feature.has_tag("natural", &POI_NATURAL_VALUES) {
            out.point("outdoor_poi")
                .set_attr("class", feature.tag("natural"))
                .set_attr("name", feature.tag("name"))
                .set_attr("ele", feature.tag("ele"));
        }

        if feature.has_tag("tourism", &POI_TOURISM_VALUES) {
            out.point("outdoor_poi")
                .set_attr("class", feature.tag("tourism"))
                .set_attr("name", feature.tag("name"));
        }
    }
}
