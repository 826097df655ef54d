//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`classify`] - Run a profile over a feature stream
//! - [`profiles`] - List the built-in profile catalog
//! - [`sources`] - Review source bindings against a profile

pub mod classify;
pub mod profiles;
pub mod sources;
