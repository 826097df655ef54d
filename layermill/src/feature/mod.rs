//! Input feature model.
//!
//! Defines what the engine can see of a source record: its logical source
//! id, its geometry capabilities, and its tag dictionary. Readers for
//! concrete formats live outside this crate and implement
//! [`SourceFeature`]; [`MemoryFeature`] covers tests and record adapters.

mod geometry;
mod memory;
mod source;

pub use geometry::{GeometryKind, SourceGeometry};
pub use memory::MemoryFeature;
pub use source::SourceFeature;
