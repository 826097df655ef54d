//! The assembled, ready-to-run profile.
//!
//! A [`Profile`] is produced by [`ProfileBuilder::build`] and is immutable:
//! its routing table is frozen at build time, so classification never
//! observes a half-configured layer set. Single features go through
//! [`Profile::process`]; whole extracts go through [`Profile::process_batch`],
//! which fans work out across a rayon thread pool while keeping the output
//! in input order.
//!
//! [`ProfileBuilder::build`]: super::ProfileBuilder::build

use rayon::prelude::*;

use crate::collect::{FeatureCollector, OutputFeature};
use crate::feature::SourceFeature;

use super::registry::{LayerEntry, LayerRegistry};
use super::router::SourceRouter;

/// An immutable classification profile.
///
/// Holds the profile metadata (name, description, attribution) alongside
/// the frozen source-to-handler routing table. Create one with
/// [`ProfileBuilder`](super::ProfileBuilder).
pub struct Profile {
    name: String,
    description: String,
    attribution: String,
    registry: LayerRegistry,
    router: SourceRouter,
}

impl Profile {
    /// Assemble a profile from a finished builder.
    ///
    /// Only called from `ProfileBuilder::build`, which guarantees the
    /// router was derived from this exact registry.
    pub(crate) fn assemble(
        name: String,
        description: String,
        attribution: String,
        registry: LayerRegistry,
        router: SourceRouter,
    ) -> Self {
        Self {
            name,
            description,
            attribution,
            registry,
            router,
        }
    }

    /// Profile name, as written into output metadata.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description of what the profile produces.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attribution string for the data sources this profile consumes.
    ///
    /// Empty when the profile carries no attribution requirement.
    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    /// Names of the registered layers, in registration order.
    pub fn layer_names(&self) -> Vec<&str> {
        self.registry.layer_names()
    }

    /// The registered layer entries, in registration order.
    pub fn layers(&self) -> &[LayerEntry] {
        self.registry.entries()
    }

    /// Distinct source ids this profile subscribes to, in first-seen order.
    pub fn source_ids(&self) -> Vec<String> {
        self.registry.source_ids()
    }

    /// Number of registered layers.
    pub fn layer_count(&self) -> usize {
        self.registry.len()
    }

    /// Classify a single source feature.
    ///
    /// Every handler subscribed to the feature's source runs in
    /// registration order, appending whatever output features it decides
    /// to emit into `out`. A feature from a source no layer subscribes to
    /// produces nothing.
    pub fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
        self.router.dispatch(feature, out);
    }

    /// Classify a batch of features in parallel.
    ///
    /// Features are distributed across the rayon thread pool, each worker
    /// collecting into its own [`FeatureCollector`]. The per-feature
    /// results are then merged back in input order, so the returned
    /// features appear exactly as a sequential run would produce them.
    pub fn process_batch<F>(&self, features: &[F]) -> Vec<OutputFeature>
    where
        F: SourceFeature + Sync,
    {
        let collected: Vec<FeatureCollector> = features
            .par_iter()
            .map(|feature| {
                let mut out = FeatureCollector::new();
                self.router.dispatch(feature, &mut out);
                out
            })
            .collect();

        let mut merged = FeatureCollector::new();
        for out in collected {
            merged.merge(out);
        }
        merged.take()
    }

    /// The frozen routing table, for callers that drive dispatch directly.
    pub fn router(&self) -> &SourceRouter {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use crate::collect::FeatureCollector;
    use crate::feature::MemoryFeature;
    use crate::handler::FnHandler;
    use crate::profile::ProfileBuilder;
    use std::sync::Arc;

    fn elevation_profile() -> crate::profile::Profile {
        let mut builder = ProfileBuilder::new("Elevation")
            .with_description("Contour lines only")
            .with_attribution("local survey data");
        builder.register(
            "contour",
            &["contours"],
            Arc::new(FnHandler::new(
                |feature: &dyn crate::feature::SourceFeature,
                 out: &mut FeatureCollector| {
                    out.line("contour").set_attr("ele", feature.tag("elev"));
                },
            )),
        );
        builder.build()
    }

    #[test]
    fn test_profile_exposes_metadata() {
        let profile = elevation_profile();

        assert_eq!(profile.name(), "Elevation");
        assert_eq!(profile.description(), "Contour lines only");
        assert_eq!(profile.attribution(), "local survey data");
        assert_eq!(profile.layer_count(), 1);
        assert_eq!(profile.layer_names(), vec!["contour"]);
        assert_eq!(profile.source_ids(), vec!["contours".to_string()]);
    }

    #[test]
    fn test_process_routes_by_source() {
        let profile = elevation_profile();

        let contour = MemoryFeature::line("contours").with_tag("elev", "200");
        let road = MemoryFeature::line("osm").with_tag("highway", "path");

        let mut out = FeatureCollector::new();
        profile.process(&contour, &mut out);
        assert_eq!(out.len(), 1, "subscribed source should emit one feature");

        let mut out = FeatureCollector::new();
        profile.process(&road, &mut out);
        assert!(
            out.is_empty(),
            "feature from an unsubscribed source should emit nothing"
        );
    }

    #[test]
    fn test_process_batch_preserves_input_order() {
        let profile = elevation_profile();

        let features: Vec<MemoryFeature> = (0..64)
            .map(|i| MemoryFeature::line("contours").with_tag("elev", i.to_string()))
            .collect();

        let batch = profile.process_batch(&features);

        assert_eq!(batch.len(), 64, "every feature should produce one output");
        for (i, feature) in batch.iter().enumerate() {
            assert_eq!(
                feature.attr_text("ele"),
                Some(i.to_string().as_str()),
                "output {i} should correspond to input {i}"
            );
        }
    }

    #[test]
    fn test_process_batch_matches_sequential_run() {
        let profile = elevation_profile();

        let features: Vec<MemoryFeature> = (0..16)
            .map(|i| MemoryFeature::line("contours").with_tag("elev", (i * 100).to_string()))
            .collect();

        let mut sequential = FeatureCollector::new();
        for feature in &features {
            profile.process(feature, &mut sequential);
        }

        let parallel = profile.process_batch(&features);

        assert_eq!(
            parallel,
            sequential.take(),
            "parallel batch should be indistinguishable from a sequential run"
        );
    }

    #[test]
    fn test_process_batch_skips_unrouted_features() {
        let profile = elevation_profile();

        let features = vec![
            MemoryFeature::line("contours").with_tag("elev", "100"),
            MemoryFeature::line("weather").with_tag("wind", "12"),
            MemoryFeature::line("contours").with_tag("elev", "300"),
        ];

        let batch = profile.process_batch(&features);

        assert_eq!(batch.len(), 2, "unrouted source should contribute nothing");
        assert_eq!(batch[0].attr_text("ele"), Some("100"));
        assert_eq!(batch[1].attr_text("ele"), Some("300"));
    }
}
