//! Owned in-memory feature.
//!
//! Real readers implement [`SourceFeature`] over their own storage; this
//! type exists for tests and for adapters that deserialize records into
//! memory before dispatch.

use std::collections::BTreeMap;

use super::geometry::SourceGeometry;
use super::source::SourceFeature;

/// A [`SourceFeature`] backed by owned data.
///
/// # Example
///
/// ```
/// use layermill::feature::{MemoryFeature, SourceFeature};
///
/// let peak = MemoryFeature::point("osm")
///     .with_tag("natural", "peak")
///     .with_tag("name", "Camel's Hump");
///
/// assert!(peak.is_point());
/// assert_eq!(peak.tag("natural"), Some("peak"));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFeature {
    source: String,
    geometry: SourceGeometry,
    tags: BTreeMap<String, String>,
}

impl MemoryFeature {
    /// Create a feature with an explicit geometry.
    pub fn new(source: impl Into<String>, geometry: SourceGeometry) -> Self {
        Self {
            source: source.into(),
            geometry,
            tags: BTreeMap::new(),
        }
    }

    /// A point feature from `source`.
    pub fn point(source: impl Into<String>) -> Self {
        Self::new(source, SourceGeometry::Point)
    }

    /// An open line feature from `source`.
    pub fn line(source: impl Into<String>) -> Self {
        Self::new(source, SourceGeometry::Line)
    }

    /// A polygon feature from `source`.
    pub fn polygon(source: impl Into<String>) -> Self {
        Self::new(source, SourceGeometry::Polygon)
    }

    /// Add a tag, replacing any existing value for the key.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Replace the full tag map.
    pub fn with_tags(mut self, tags: BTreeMap<String, String>) -> Self {
        self.tags = tags;
        self
    }
}

impl SourceFeature for MemoryFeature {
    fn source(&self) -> &str {
        &self.source
    }

    fn geometry(&self) -> SourceGeometry {
        self.geometry
    }

    fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}
