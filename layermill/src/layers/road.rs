//! Road classification for the basemap.

use crate::collect::FeatureCollector;
use crate::feature::SourceFeature;
use crate::handler::LayerHandler;

/// Highway values classified as roads.
pub const ROAD_HIGHWAY_VALUES: [&str; 8] = [
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "residential",
    "service",
    "unclassified",
];

/// Major road values that appear at low zoom.
const MAJOR_HIGHWAY_VALUES: [&str; 3] = ["motorway", "trunk", "primary"];

/// Zoom at which major roads first appear.
pub const MAJOR_ROAD_MIN_ZOOM: u8 = 5;

/// Zoom at which minor roads first appear.
pub const MINOR_ROAD_MIN_ZOOM: u8 = 9;

/// Draw order for roads; renders below trail linework.
pub const ROAD_SORT_KEY: i32 = 5;

/// Emits motor roads into the `transportation` layer.
///
/// The basemap chains this handler after [`TrailHandler`] under the same
/// registered entry, so one osm feed populates both road and trail
/// classes of the layer. Shares the layer's attribute vocabulary:
/// `class=road`, raw highway value in `subclass`.
///
/// [`TrailHandler`]: super::TrailHandler
#[derive(Debug, Default)]
pub struct RoadHandler;

impl RoadHandler {
    pub fn new() -> Self {
        Self
    }
}

impl LayerHandler for RoadHandler {
    fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
        if !feature.can_be_line() || !feature.has_tag("highway", &ROAD_HIGHWAY_VALUES) {
            return;
        }

        let min_zoom = if feature.has_tag("highway", &MAJOR_HIGHWAY_VALUES) {
            MAJOR_ROAD_MIN_ZOOM
        } else {
            MINOR_ROAD_MIN_ZOOM
        };

        out.line("transportation")
            .set_attr("transportation_name", feature.tag("name"))
            .set_attr("class", "road")
            .set_attr("subclass", feature.tag("highway"))
            .set_attr("surface", feature.tag("surface"))
            .set_attr("ref", feature.tag("ref"))
            .set_min_zoom(min_zoom)
            .set_sort_key(ROAD_SORT_KEY);
    }
}
