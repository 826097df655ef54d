//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use layermill::profile::ProfileError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Profile selection or composition error
    Profile(ProfileError),
    /// Failed to read input records
    InputRead { path: String, error: std::io::Error },
    /// Failed to write output records
    OutputWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Profile(ProfileError::UnknownProfile { .. }) => {
                eprintln!();
                eprintln!("Run 'layermill profiles' to see the available profiles.");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Check the config file for typos in section and key names.");
                eprintln!("Run 'layermill sources' to review the configured bindings.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Profile(e) => write!(f, "Profile error: {}", e),
            CliError::InputRead { path, error } => {
                write!(f, "Failed to read input '{}': {}", path, error)
            }
            CliError::OutputWrite { path, error } => {
                write!(f, "Failed to write output '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Profile(e) => Some(e),
            CliError::InputRead { error, .. } => Some(error),
            CliError::OutputWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ProfileError> for CliError {
    fn from(e: ProfileError) -> Self {
        CliError::Profile(e)
    }
}
