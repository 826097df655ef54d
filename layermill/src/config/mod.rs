//! Run configuration: which profile to run and where its sources live.
//!
//! The core never embeds data paths or area names; they arrive from an
//! INI config file only. Parsing is strict at setup time: unknown
//! sections, unknown formats, and incomplete source bindings all fail
//! the load before any feature is processed.
//!
//! # Example
//!
//! ```no_run
//! use layermill::config::RunConfig;
//!
//! let config = RunConfig::load()?;
//! for binding in &config.sources {
//!     println!("{} <- {} ({})", binding.id, binding.path.display(), binding.format);
//! }
//! # Ok::<(), layermill::config::RunConfigError>(())
//! ```

mod file;
mod parser;
mod settings;

pub use file::{config_directory, config_file_path, RunConfigError};
pub use settings::{RunConfig, SourceBinding, SourceFormat};
