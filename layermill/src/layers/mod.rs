//! Built-in layer handlers.
//!
//! One module per handler. Each implements
//! [`LayerHandler`](crate::handler::LayerHandler) for a fixed rule set;
//! profiles in [`crate::profiles`] wire them to sources. Downstream users
//! with their own schemas implement the trait directly instead.

mod contour;
mod outdoor_poi;
mod protected_area;
mod road;
mod trail;

pub use contour::{ContourHandler, CONTOUR_MIN_ZOOM, CONTOUR_SORT_KEY};
pub use outdoor_poi::{OutdoorPoiHandler, POI_NATURAL_VALUES, POI_TOURISM_VALUES};
pub use protected_area::{ProtectedAreaHandler, PROTECTED_AREA_MIN_ZOOM};
pub use road::{
    RoadHandler, MAJOR_ROAD_MIN_ZOOM, MINOR_ROAD_MIN_ZOOM, ROAD_HIGHWAY_VALUES, ROAD_SORT_KEY,
};
pub use trail::{TrailHandler, TRAIL_HIGHWAY_VALUES, TRAIL_SORT_KEY};
