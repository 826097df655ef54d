//! Trail and path classification.

use crate::collect::FeatureCollector;
use crate::feature::SourceFeature;
use crate::handler::LayerHandler;

/// Highway values classified as trails.
pub const TRAIL_HIGHWAY_VALUES: [&str; 5] = ["path", "track", "footway", "cycleway", "steps"];

/// Draw order for trails; renders above road linework.
pub const TRAIL_SORT_KEY: i32 = 10;

/// Emits hiking and cycling trails into the `transportation` layer.
///
/// Matches line features whose `highway` tag is one of
/// [`TRAIL_HIGHWAY_VALUES`]. All trails share `class=path`; the raw
/// highway value lands in `subclass`. Difficulty gradings (`sac_scale`,
/// `mtb:scale`, `trail_visibility`) pass through when tagged.
#[derive(Debug, Default)]
pub struct TrailHandler;

impl TrailHandler {
    pub fn new() -> Self {
        Self
    }
}

impl LayerHandler for TrailHandler {
    fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
        if !feature.can_be_line() || !feature.has_tag("highway", &TRAIL_HIGHWAY_VALUES) {
            return;
        }

        out.line("transportation")
            .set_attr("transportation_name", feature.tag("name"))
            .set_attr("class", "path")
            .set_attr("subclass", feature.tag("highway"))
            .set_attr("surface", feature.tag("surface"))
            .set_attr("ref", feature.tag("ref"))
            .set_attr("network", feature.tag("network"))
            .set_attr("operator", feature.tag("operator"))
            .set_attr("sac_scale", feature.tag("sac_scale"))
            .set_attr("mtb_scale", feature.tag("mtb:scale"))
            .set_attr("trail_visibility", feature.tag("trail_visibility"))
            .set_sort_key(TRAIL_SORT_KEY);
    }
}
