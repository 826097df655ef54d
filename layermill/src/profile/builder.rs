//! Fluent profile assembly.

use crate::handler::SharedHandler;

use super::error::ProfileError;
use super::profile::Profile;
use super::registry::LayerRegistry;
use super::router::SourceRouter;

/// A profile under assembly.
///
/// All registry mutation happens here; [`build`](Self::build) freezes
/// the result into an immutable [`Profile`]. The type split is what
/// guarantees setup completes before any dispatch begins.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use layermill::layers::ContourHandler;
/// use layermill::profile::ProfileBuilder;
///
/// let mut builder = ProfileBuilder::new("Contour Lines")
///     .with_description("A map of contour lines from local data.");
/// builder.register("contour", &["contours"], Arc::new(ContourHandler::new()));
///
/// let profile = builder.build();
/// assert_eq!(profile.layer_names(), vec!["contour"]);
/// ```
pub struct ProfileBuilder {
    name: String,
    description: String,
    attribution: String,
    registry: LayerRegistry,
}

impl ProfileBuilder {
    /// Start an empty profile named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            attribution: String::new(),
            registry: LayerRegistry::new(),
        }
    }

    /// Rename the profile, e.g. when deriving from a base profile.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the attribution string carried into output metadata.
    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    /// Register a handler under `name`, subscribed to `sources`.
    ///
    /// Upsert, like [`LayerRegistry::register`].
    pub fn register(&mut self, name: impl Into<String>, sources: &[&str], handler: SharedHandler) {
        self.registry.register(name, sources, handler);
    }

    /// Swap the handler of a registered entry, keeping its subscriptions.
    ///
    /// # Errors
    ///
    /// [`ProfileError::UnknownLayer`] when `name` was never registered.
    pub fn replace(&mut self, name: &str, handler: SharedHandler) -> Result<(), ProfileError> {
        self.registry.replace(name, handler)
    }

    /// Deregister an entry. Returns whether one was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.registry.remove(name)
    }

    /// Chain an extension after a registered entry's handler.
    ///
    /// # Errors
    ///
    /// [`ProfileError::UnknownLayer`] when `name` was never registered.
    pub fn extend(&mut self, name: &str, extension: SharedHandler) -> Result<(), ProfileError> {
        self.registry.extend(name, extension)
    }

    /// The registry as assembled so far.
    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// Freeze the profile: snapshot the routing table and discard
    /// mutability.
    pub fn build(self) -> Profile {
        let router = SourceRouter::from_registry(&self.registry);
        Profile::assemble(
            self.name,
            self.description,
            self.attribution,
            self.registry,
            router,
        )
    }
}
