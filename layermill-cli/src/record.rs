//! JSON Lines input records.
//!
//! Each input line is one [`FeatureRecord`]; output lines are
//! [`OutputFeature`](layermill::collect::OutputFeature)s serialized as-is,
//! so only the input side needs an adapter type.

use layermill::feature::{MemoryFeature, SourceGeometry};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One input feature as parsed from a JSON line.
#[derive(Debug, Deserialize)]
pub struct FeatureRecord {
    /// Logical source id the feature arrived from.
    pub source: String,
    /// Input geometry: "point", "line", "closed_line", or "polygon".
    pub geometry: String,
    /// Raw key-value tags.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl FeatureRecord {
    /// Adapt the record into an in-memory source feature.
    ///
    /// Fails when the geometry name is not one the engine knows.
    pub fn into_feature(self) -> Result<MemoryFeature, String> {
        let geometry = SourceGeometry::from_name(&self.geometry)
            .ok_or_else(|| format!("unknown geometry '{}'", self.geometry))?;
        Ok(MemoryFeature::new(self.source, geometry).with_tags(self.tags))
    }
}
