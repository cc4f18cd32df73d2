//! `pldump` CLI — dump a property-list file as an indented, kind-annotated
//! tree.
//!
//! ## Usage
//!
//! ```sh
//! # Dump ./collections.plist (the default name)
//! pldump
//!
//! # Dump ./settings.plist (extension optional)
//! pldump settings
//! pldump settings.plist
//!
//! # Dump a file somewhere else (a path is used verbatim)
//! pldump config/app
//! ```
//!
//! Load failures are printed as a single message and the process still
//! exits 0: a missing file reports `no <name>.plist file found`, an
//! unparseable file reports the deserializer's error.

use anyhow::Result;
use clap::Parser;
use pldump_core::{render, PrintOptions, Resolver};

#[derive(Parser)]
#[command(
    name = "pldump",
    version,
    about = "Indented, kind-annotated dump of a property-list file"
)]
struct Cli {
    /// Base name (or path) of the plist file to dump; extension optional
    #[arg(default_value = "collections")]
    name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let resolver = Resolver::default();

    match resolver.load(&cli.name) {
        Ok(root) => print!("{}", render(&root, &PrintOptions::default())),
        // Both load-failure cases end the run after one printed line.
        Err(err) => println!("{err}"),
    }

    Ok(())
}
