//! The layer handler seam.
//!
//! A handler is the unit of classification logic: given one input feature,
//! it emits zero or more output features into named layers. Handlers for
//! the built-in layers live in [`crate::layers`]; this module defines the
//! trait and the composition pieces.

use std::sync::Arc;

use crate::collect::FeatureCollector;
use crate::feature::SourceFeature;

mod adapter;
mod chain;

pub use adapter::FnHandler;
pub use chain::HandlerChain;

/// Shared handler reference, as stored by the registry and router.
pub type SharedHandler = Arc<dyn LayerHandler>;

/// Classification rules invoked for every feature routed to an entry.
///
/// Implementations must be stateless per call: configuration is fixed at
/// construction and no feature-specific state survives an invocation, so
/// one instance is safe to share across batch workers.
///
/// # Implementing a Handler
///
/// 1. Check geometry capability and tag predicates for each rule.
/// 2. Start an output feature on the collector for every rule that
///    matches. Rules are independent conjunctions; a feature satisfying
///    two rules emits twice, unless the handler writes them as if/else.
/// 3. Derive attributes with `set_attr`, which drops failed derivations.
///
/// # Example
///
/// ```
/// use layermill::collect::FeatureCollector;
/// use layermill::feature::SourceFeature;
/// use layermill::handler::LayerHandler;
///
/// struct Springs;
///
/// impl LayerHandler for Springs {
///     fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
///         if feature.is_point() && feature.has_tag("natural", &["spring"]) {
///             out.point("water_poi").set_attr("name", feature.tag("name"));
///         }
///     }
/// }
/// ```
pub trait LayerHandler: Send + Sync {
    /// Classify one feature, emitting into `out` for each matching rule.
    fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector);
}
