//! Geometry classification for input and output features.
//!
//! Input geometry carries capability semantics rather than coordinates: a
//! closed line can legally become either a line or a polygon, so both
//! capability predicates hold for it. Output geometry is the concrete kind
//! a handler chose to emit.

use serde::Serialize;
use std::fmt;

/// Geometry of an input feature as delivered by a source reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceGeometry {
    /// A single coordinate.
    Point,
    /// An open linestring.
    Line,
    /// A linestring whose first and last coordinates coincide.
    ClosedLine,
    /// An explicit areal geometry.
    Polygon,
}

impl SourceGeometry {
    /// True for point features.
    pub fn is_point(&self) -> bool {
        matches!(self, SourceGeometry::Point)
    }

    /// True when the feature may be emitted as a line.
    pub fn can_be_line(&self) -> bool {
        matches!(self, SourceGeometry::Line | SourceGeometry::ClosedLine)
    }

    /// True when the feature may be emitted as a polygon.
    ///
    /// Closed lines satisfy both this and [`can_be_line`](Self::can_be_line).
    pub fn can_be_polygon(&self) -> bool {
        matches!(self, SourceGeometry::ClosedLine | SourceGeometry::Polygon)
    }

    /// Stable lowercase name, as used in record formats.
    pub fn name(&self) -> &'static str {
        match self {
            SourceGeometry::Point => "point",
            SourceGeometry::Line => "line",
            SourceGeometry::ClosedLine => "closed_line",
            SourceGeometry::Polygon => "polygon",
        }
    }

    /// Parse a geometry from its stable name.
    ///
    /// Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<SourceGeometry> {
        match name {
            "point" => Some(SourceGeometry::Point),
            "line" => Some(SourceGeometry::Line),
            "closed_line" => Some(SourceGeometry::ClosedLine),
            "polygon" => Some(SourceGeometry::Polygon),
            _ => None,
        }
    }
}

impl fmt::Display for SourceGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Geometry of an emitted output feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    Point,
    Line,
    Polygon,
}

impl GeometryKind {
    /// Stable lowercase name, as used in record formats.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "point",
            GeometryKind::Line => "line",
            GeometryKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
