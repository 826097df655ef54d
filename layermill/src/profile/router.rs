//! Source-id dispatch.

use std::collections::HashMap;

use tracing::trace;

use crate::collect::FeatureCollector;
use crate::feature::SourceFeature;
use crate::handler::SharedHandler;

use super::registry::LayerRegistry;

/// Frozen routing table from source id to subscribed handlers.
///
/// Built once from a registry when the profile is finalized. The router
/// holds its own handler references, so registry mutation after build is
/// not observable here, and the table is shared read-only across batch
/// workers.
pub struct SourceRouter {
    routes: HashMap<String, Vec<SharedHandler>>,
}

impl SourceRouter {
    /// Snapshot the registry's routing table.
    pub fn from_registry(registry: &LayerRegistry) -> Self {
        let mut routes = HashMap::new();
        for source_id in registry.source_ids() {
            let handlers = registry.route_source(&source_id);
            routes.insert(source_id, handlers);
        }
        Self { routes }
    }

    /// Dispatch one feature to every handler subscribed to its source.
    ///
    /// Handlers run synchronously in registration order; none can stop
    /// propagation to the rest. A source id with no subscribers matches
    /// zero handlers and the feature is dropped, which lets a profile
    /// consume a strict subset of a multi-source feed.
    pub fn dispatch(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
        match self.routes.get(feature.source()) {
            Some(handlers) => {
                for handler in handlers {
                    handler.process(feature, out);
                }
            }
            None => {
                trace!(source = %feature.source(), "no handlers subscribed to source");
            }
        }
    }

    /// Handlers subscribed to `source_id`; empty for unknown sources.
    pub fn handlers_for(&self, source_id: &str) -> &[SharedHandler] {
        self.routes
            .get(source_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Source ids with at least one subscriber, in arbitrary order.
    pub fn source_ids(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}
