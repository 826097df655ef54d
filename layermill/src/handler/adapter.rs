//! Closure adapter for ad-hoc handlers.

use crate::collect::FeatureCollector;
use crate::feature::SourceFeature;

use super::LayerHandler;

/// Adapts a closure into a [`LayerHandler`].
///
/// Covers one-off rules during profile assembly and test fixtures
/// without declaring a struct. The closure receives the same arguments
/// as [`LayerHandler::process`].
///
/// # Example
///
/// ```
/// use layermill::collect::FeatureCollector;
/// use layermill::feature::SourceFeature;
/// use layermill::handler::FnHandler;
///
/// let glaciers = FnHandler::new(|f: &dyn SourceFeature, out: &mut FeatureCollector| {
///     if f.can_be_polygon() && f.has_tag("natural", &["glacier"]) {
///         out.polygon("ice").set_attr("name", f.tag("name"));
///     }
/// });
/// ```
pub struct FnHandler<F>
where
    F: Fn(&dyn SourceFeature, &mut FeatureCollector) + Send + Sync,
{
    f: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&dyn SourceFeature, &mut FeatureCollector) + Send + Sync,
{
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> LayerHandler for FnHandler<F>
where
    F: Fn(&dyn SourceFeature, &mut FeatureCollector) + Send + Sync,
{
    fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
        (self.f)(feature, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::MemoryFeature;

    #[test]
    fn test_closure_is_invoked_with_the_feature() {
        let handler = FnHandler::new(|f: &dyn SourceFeature, out: &mut FeatureCollector| {
            if f.is_point() {
                out.point("poi").set_attr("source", f.source());
            }
        });

        let feature = MemoryFeature::point("osm");
        let mut out = FeatureCollector::new();
        handler.process(&feature, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out.features()[0].attr_text("source"), Some("osm"));
    }

    #[test]
    fn test_non_matching_closure_emits_nothing() {
        let handler = FnHandler::new(|f: &dyn SourceFeature, out: &mut FeatureCollector| {
            if f.can_be_polygon() {
                out.polygon("area");
            }
        });

        let feature = MemoryFeature::line("osm");
        let mut out = FeatureCollector::new();
        handler.process(&feature, &mut out);

        assert!(out.is_empty());
    }
}
