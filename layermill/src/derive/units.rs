//! Unit conversions for derived attributes.

use crate::feature::SourceFeature;

/// Feet per meter, used for elevation attributes on imperial-unit maps.
pub const FEET_PER_METER: f64 = 3.28084;

/// Convert meters to whole feet, truncating toward zero.
///
/// Truncation, not round-to-nearest: 1219.1 m is 3999 ft even though the
/// product is 3999.67.
pub fn meters_to_feet(meters: f64) -> i64 {
    (meters * FEET_PER_METER) as i64
}

/// Elevation in whole feet derived from a metric elevation tag.
///
/// Returns `None` when the tag is missing, unparseable, or not finite.
/// Derivation never fails the feature; callers pass the result straight
/// to `set_attr`.
pub fn elevation_feet(feature: &dyn SourceFeature, key: &str) -> Option<i64> {
    let raw = feature.tag(key)?;
    let meters: f64 = raw.trim().parse().ok()?;
    if !meters.is_finite() {
        return None;
    }
    Some(meters_to_feet(meters))
}
