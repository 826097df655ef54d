//! Profile assembly and source-to-handler routing.
//!
//! A profile maps source ids to the layer handlers that consume them. It
//! is assembled in two phases: a mutable [`ProfileBuilder`] collects and
//! reworks layer registrations, then [`ProfileBuilder::build`] freezes the
//! result into an immutable [`Profile`] whose [`SourceRouter`] dispatches
//! features for classification.
//!
//! # Components
//!
//! - [`LayerRegistry`] - Ordered layer registrations with override support
//! - [`SourceRouter`] - Frozen source id to handler lookup
//! - [`ProfileBuilder`] - Mutable assembly phase
//! - [`Profile`] - Immutable classification phase
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use layermill::layers::ContourHandler;
//! use layermill::profile::ProfileBuilder;
//!
//! let mut builder = ProfileBuilder::new("Contour Lines");
//! builder.register("contour", &["contours"], Arc::new(ContourHandler));
//!
//! let profile = builder.build();
//! assert_eq!(profile.layer_names(), vec!["contour"]);
//! ```

mod builder;
mod error;
mod profile;
mod registry;
mod router;

pub use builder::ProfileBuilder;
pub use error::ProfileError;
pub use profile::Profile;
pub use registry::{LayerEntry, LayerRegistry};
pub use router::SourceRouter;
