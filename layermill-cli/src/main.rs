//! Layermill CLI - Command-line interface
//!
//! This binary provides a command-line interface to the Layermill library.

mod commands;
mod error;
mod record;
mod runner;

use clap::{Parser, Subcommand};

use commands::{classify, profiles, sources};

#[derive(Parser)]
#[command(name = "layermill")]
#[command(version = layermill::VERSION)]
#[command(about = "Classify map features through composable profiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a feature stream through a profile
    Classify(classify::ClassifyArgs),

    /// List the built-in profile catalog
    Profiles,

    /// Review source bindings against a profile's subscriptions
    Sources(sources::SourcesArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify(args) => classify::run(args),
        Commands::Profiles => profiles::run(),
        Commands::Sources(args) => sources::run(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
