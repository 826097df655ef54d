//! The ordered layer registry.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::handler::{HandlerChain, SharedHandler};

use super::error::ProfileError;

/// One registered entry: a named handler and its source subscriptions.
///
/// The name is the unit of override identity; the subscriptions are the
/// unit of routing identity. They are orthogonal: an entry may emit into
/// layers other than the name it is registered under.
#[derive(Clone)]
pub struct LayerEntry {
    name: String,
    sources: Vec<String>,
    handler: SharedHandler,
}

impl LayerEntry {
    /// Entry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source ids this entry subscribes to.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// The handler invoked for subscribed features.
    pub fn handler(&self) -> &SharedHandler {
        &self.handler
    }
}

/// Ordered name-keyed handler table, the sole authority on what handles
/// what.
///
/// Registration order is routing order, and it survives overrides:
/// re-using a name swaps the entry in place rather than moving it to the
/// end. Mutation happens only during profile setup; the router snapshots
/// the table when the profile is built.
#[derive(Default)]
pub struct LayerRegistry {
    entries: Vec<LayerEntry>,
}

impl LayerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, subscribed to `sources`.
    ///
    /// Upsert: a new name appends in registration order; an existing name
    /// swaps handler and subscriptions in place, keeping its position.
    pub fn register(&mut self, name: impl Into<String>, sources: &[&str], handler: SharedHandler) {
        let name = name.into();
        let sources: Vec<String> = sources.iter().map(|s| s.to_string()).collect();

        match self.position(&name) {
            Some(index) => {
                debug!(layer = %name, sources = ?sources, "re-registered layer entry");
                self.entries[index] = LayerEntry {
                    name,
                    sources,
                    handler,
                };
            }
            None => {
                debug!(layer = %name, sources = ?sources, "registered layer entry");
                self.entries.push(LayerEntry {
                    name,
                    sources,
                    handler,
                });
            }
        }
    }

    /// Swap the handler of an existing entry, keeping its name, position,
    /// and source subscriptions.
    ///
    /// # Errors
    ///
    /// [`ProfileError::UnknownLayer`] when `name` was never registered.
    pub fn replace(&mut self, name: &str, handler: SharedHandler) -> Result<(), ProfileError> {
        match self.position(name) {
            Some(index) => {
                debug!(layer = %name, "replaced layer handler");
                self.entries[index].handler = handler;
                Ok(())
            }
            None => Err(ProfileError::unknown_layer(name, "replace")),
        }
    }

    /// Deregister `name`; subsequent routing ignores the entry.
    ///
    /// Returns whether an entry was removed. Removing an unknown name
    /// warns and is otherwise a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                debug!(layer = %name, "removed layer entry");
                self.entries.remove(index);
                true
            }
            None => {
                warn!(layer = %name, "cannot remove unregistered layer");
                false
            }
        }
    }

    /// Chain `extension` after the existing handler of `name`, keeping
    /// name, position, and subscriptions. The base handler runs first.
    ///
    /// # Errors
    ///
    /// [`ProfileError::UnknownLayer`] when `name` was never registered.
    pub fn extend(&mut self, name: &str, extension: SharedHandler) -> Result<(), ProfileError> {
        match self.position(name) {
            Some(index) => {
                debug!(layer = %name, "extended layer handler");
                let base = Arc::clone(&self.entries[index].handler);
                self.entries[index].handler = Arc::new(HandlerChain::pair(base, extension));
                Ok(())
            }
            None => Err(ProfileError::unknown_layer(name, "extend")),
        }
    }

    /// Handlers subscribed to `source_id`, in registration order.
    pub fn route_source(&self, source_id: &str) -> Vec<SharedHandler> {
        self.entries
            .iter()
            .filter(|entry| entry.sources.iter().any(|s| s == source_id))
            .map(|entry| Arc::clone(&entry.handler))
            .collect()
    }

    /// Distinct source ids with at least one subscriber, in first-seen
    /// order.
    pub fn source_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for entry in &self.entries {
            for source in &entry.sources {
                if !ids.iter().any(|s| s == source) {
                    ids.push(source.clone());
                }
            }
        }
        ids
    }

    /// Registered entry names, in registration order.
    pub fn layer_names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// True when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[LayerEntry] {
        &self.entries
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }
}
