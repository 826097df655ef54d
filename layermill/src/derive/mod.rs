//! Attribute derivation: unit conversions and free-text classification.
//!
//! Every derivation is per-attribute and non-fatal; a failed derivation
//! yields `None`, which `set_attr` drops, leaving the attribute absent.

mod classify;
mod units;

pub use classify::TextClassifier;
pub use units::{elevation_feet, meters_to_feet, FEET_PER_METER};
