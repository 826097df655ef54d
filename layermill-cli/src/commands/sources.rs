//! Sources command - review source bindings against a profile.

use std::path::PathBuf;

use clap::Args;

use layermill::profiles::ProfileKind;

use crate::error::CliError;
use crate::runner::load_config;

/// Arguments for the sources command.
#[derive(Debug, Args)]
pub struct SourcesArgs {
    /// Config file path (defaults to ~/.layermill/config.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Profile whose subscriptions are checked (overrides the config file)
    #[arg(long)]
    pub profile: Option<String>,
}

/// Run the sources command.
pub fn run(args: SourcesArgs) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;

    println!("Source Bindings");
    println!("===============");
    println!();

    if config.sources.is_empty() {
        println!("(no sources bound)");
    }
    for binding in &config.sources {
        match &binding.layer {
            Some(layer) => println!(
                "  {} = {} ({}, layer {})",
                binding.id,
                binding.path.display(),
                binding.format,
                layer
            ),
            None => println!(
                "  {} = {} ({})",
                binding.id,
                binding.path.display(),
                binding.format
            ),
        }
    }

    // Cross-check only when a profile is selected, from the flag or config
    let Some(name) = args.profile.or_else(|| config.profile.clone()) else {
        return Ok(());
    };
    let kind: ProfileKind = name.parse().map_err(CliError::Profile)?;
    let profile = kind.build();

    println!();
    println!("Profile: {} ({})", profile.name(), kind.key());

    let subscribed = profile.source_ids();
    let bound = config.source_ids();

    let unbound: Vec<&str> = subscribed
        .iter()
        .map(String::as_str)
        .filter(|id| !bound.contains(id))
        .collect();
    let unused: Vec<&str> = bound
        .iter()
        .copied()
        .filter(|id| !subscribed.iter().any(|s| s == id))
        .collect();

    if unbound.is_empty() && unused.is_empty() {
        println!("All subscribed sources are bound.");
        return Ok(());
    }

    for id in &unbound {
        println!("  ! '{}' is subscribed but has no binding", id);
    }
    for id in &unused {
        println!("  ? '{}' is bound but no layer subscribes to it", id);
    }

    Ok(())
}
