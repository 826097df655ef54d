//! Per-dispatch buffer for emitted features.

use crate::feature::GeometryKind;

use super::output::OutputFeature;

/// Collects the output features emitted while classifying input.
///
/// One collector serves a dispatch run, or one worker of a parallel batch;
/// [`take`](Self::take) drains the buffer for the downstream engine and
/// [`merge`](Self::merge) folds per-worker collectors back together in
/// order.
#[derive(Debug, Default)]
pub struct FeatureCollector {
    features: Vec<OutputFeature>,
}

impl FeatureCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a point feature in `layer`.
    pub fn point(&mut self, layer: impl Into<String>) -> &mut OutputFeature {
        self.begin(layer, GeometryKind::Point)
    }

    /// Start a line feature in `layer`.
    pub fn line(&mut self, layer: impl Into<String>) -> &mut OutputFeature {
        self.begin(layer, GeometryKind::Line)
    }

    /// Start a polygon feature in `layer`.
    pub fn polygon(&mut self, layer: impl Into<String>) -> &mut OutputFeature {
        self.begin(layer, GeometryKind::Polygon)
    }

    /// Start a feature with an explicit geometry kind.
    pub fn begin(
        &mut self,
        layer: impl Into<String>,
        geometry: GeometryKind,
    ) -> &mut OutputFeature {
        let index = self.features.len();
        self.features.push(OutputFeature::new(layer, geometry));
        &mut self.features[index]
    }

    /// Number of features collected so far.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Read-only view of the collected features, in emission order.
    pub fn features(&self) -> &[OutputFeature] {
        &self.features
    }

    /// Drain the collected features, leaving the collector empty.
    pub fn take(&mut self) -> Vec<OutputFeature> {
        std::mem::take(&mut self.features)
    }

    /// Append everything collected by `other`, preserving its order.
    pub fn merge(&mut self, mut other: FeatureCollector) {
        self.features.append(&mut other.features);
    }
}
