//! Output side of classification: attribute values, the output feature,
//! and the collector handlers emit into.
//!
//! # Example
//!
//! ```
//! use layermill::collect::FeatureCollector;
//!
//! let mut out = FeatureCollector::new();
//! out.point("outdoor_poi")
//!     .set_attr("class", "peak")
//!     .set_attr("name", Some("Mount Mansfield"))
//!     .set_min_zoom(10);
//!
//! assert_eq!(out.len(), 1);
//! ```

mod collector;
mod output;
mod value;

pub use collector::FeatureCollector;
pub use output::OutputFeature;
pub use value::{AttrInput, AttrValue};
