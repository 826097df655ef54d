//! Ordered handler composition.

use crate::collect::FeatureCollector;
use crate::feature::SourceFeature;

use super::{LayerHandler, SharedHandler};

/// Runs several handlers in order against the same feature.
///
/// The result is the union of all emissions; earlier handlers cannot see
/// or suppress later ones. Two composition shapes use this type:
///
/// - extend: base handler first, additional rules second, giving
///   "inherit and add" without the base knowing about the extension;
/// - combine: sibling handlers for one physical source run under one
///   registered name, neither knowing about the other.
#[derive(Default)]
pub struct HandlerChain {
    handlers: Vec<SharedHandler>,
}

impl HandlerChain {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain of two handlers, base first.
    pub fn pair(base: SharedHandler, extension: SharedHandler) -> Self {
        Self {
            handlers: vec![base, extension],
        }
    }

    /// A chain over existing handlers, invoked in vector order.
    pub fn from_handlers(handlers: Vec<SharedHandler>) -> Self {
        Self { handlers }
    }

    /// Append a handler to the end of the chain.
    pub fn push(&mut self, handler: SharedHandler) {
        self.handlers.push(handler);
    }

    /// Builder-style append.
    pub fn with(mut self, handler: SharedHandler) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when the chain holds no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl LayerHandler for HandlerChain {
    fn process(&self, feature: &dyn SourceFeature, out: &mut FeatureCollector) {
        for handler in &self.handlers {
            handler.process(feature, out);
        }
    }
}
