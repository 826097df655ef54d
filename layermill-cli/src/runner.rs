//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading and logging initialization to reduce
//! duplication across command handlers.

use crate::error::CliError;
use layermill::config::RunConfig;
use layermill::logging::{self, init_logging_full, LoggingGuard};
use std::path::Path;
use tracing::info;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded run configuration
    config: RunConfig,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Explicit config file, or `None` for the default location
    /// * `stdout_logs` - Whether log output is mirrored to stdout; commands
    ///   that stream records to stdout pass `false` so log lines never mix
    ///   with the output
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn new(
        config_path: Option<&Path>,
        stdout_logs: bool,
        debug_mode: bool,
    ) -> Result<Self, CliError> {
        let config = load_config(config_path)?;

        let logging_guard = init_logging_full(
            logging::default_log_dir(),
            logging::default_log_file(),
            stdout_logs,
            debug_mode,
        )
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("Layermill v{}", layermill::VERSION);
        info!("Layermill CLI: {} command", command);
    }
}

/// Load the run configuration for a command.
///
/// An explicitly passed path must exist; the default location quietly
/// falls back to defaults when no file is present.
pub fn load_config(config_path: Option<&Path>) -> Result<RunConfig, CliError> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            RunConfig::load_from(path).map_err(|e| CliError::Config(e.to_string()))
        }
        None => RunConfig::load().map_err(|e| CliError::Config(e.to_string())),
    }
}
