//! Profiles command - list the built-in profile catalog.

use layermill::profiles::ProfileKind;

use crate::error::CliError;

/// Run the profiles command.
pub fn run() -> Result<(), CliError> {
    println!("Profile Catalog");
    println!("===============");

    for kind in ProfileKind::ALL {
        let profile = kind.build();

        println!();
        println!("{} - {}", kind.key(), profile.name());
        if !profile.description().is_empty() {
            println!("  {}", profile.description());
        }
        if !profile.attribution().is_empty() {
            println!("  Attribution: {}", profile.attribution());
        }
        println!("  Layers:");
        for entry in profile.layers() {
            println!("    {} <- {}", entry.name(), entry.sources().join(", "));
        }
    }

    Ok(())
}
