//! Error types for profile setup.

use thiserror::Error;

/// Errors raised while assembling a profile.
///
/// All of these are setup-time configuration errors, fatal to the run.
/// Nothing here can occur during dispatch.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Replace or extend named a layer entry that was never registered,
    /// which indicates a profile mismatch.
    #[error("Layer '{name}' is not registered - cannot {operation} it")]
    UnknownLayer { name: String, operation: String },

    /// A profile name did not match the built-in catalog.
    #[error("Unknown profile '{name}' - valid profiles are: {valid}")]
    UnknownProfile { name: String, valid: String },
}

impl ProfileError {
    pub(crate) fn unknown_layer(name: &str, operation: &str) -> Self {
        ProfileError::UnknownLayer {
            name: name.to_string(),
            operation: operation.to_string(),
        }
    }
}
