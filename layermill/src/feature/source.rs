//! The read-only contract between source readers and the classification
//! engine.
//!
//! Readers own parsing, reprojection, and geometry validity; the engine
//! only ever sees this view. Everything a handler can ask about a feature
//! goes through here, which keeps handlers testable against in-memory
//! fixtures.

use super::geometry::SourceGeometry;

/// A single record delivered by a source reader.
///
/// Tag keys are opaque, case-sensitive strings. Namespaced keys such as
/// `mtb:scale` are looked up verbatim, never split on the colon.
pub trait SourceFeature {
    /// Logical source identifier this record came from (e.g. "osm").
    fn source(&self) -> &str;

    /// Geometry as delivered by the reader.
    fn geometry(&self) -> SourceGeometry;

    /// Raw tag lookup. `None` when the key is absent.
    fn tag(&self, key: &str) -> Option<&str>;

    /// True for point features.
    fn is_point(&self) -> bool {
        self.geometry().is_point()
    }

    /// True when the feature may be emitted as a line.
    fn can_be_line(&self) -> bool {
        self.geometry().can_be_line()
    }

    /// True when the feature may be emitted as a polygon.
    fn can_be_polygon(&self) -> bool {
        self.geometry().can_be_polygon()
    }

    /// Tag parsed as a float, or `default` when absent or unparseable.
    fn tag_double(&self, key: &str, default: f64) -> f64 {
        self.tag(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Tag parsed as an integer, or `default` when absent or unparseable.
    fn tag_integer(&self, key: &str, default: i64) -> i64 {
        self.tag(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// True when the tag is present and equals one of `values`.
    ///
    /// Set membership, not substring match. An empty candidate list tests
    /// key presence alone.
    fn has_tag(&self, key: &str, values: &[&str]) -> bool {
        match self.tag(key) {
            Some(v) => values.is_empty() || values.contains(&v),
            None => false,
        }
    }
}
