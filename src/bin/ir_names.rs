//! Inspect the protocol name catalog for a build configuration.
//!
//! Usage:
//!   ir-names lookup 3
//!   ir-names dump --config configs/minimal.json
//!   ir-names packed > catalog.bin

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ircatalog::{BuildConfig, NameCatalog, PROTOCOL_ROSTER};
use serde_json::json;
use std::io::{Write, stdout};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ir-names")]
#[command(about = "Inspect the protocol display-name catalog")]
struct Cli {
    /// Build configuration JSON; every feature is enabled when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print the display name for one ordinal.
    Lookup { ordinal: usize },
    /// Print every catalog entry as a JSON array.
    Dump,
    /// Write the packed firmware-image blob to stdout.
    Packed,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::full(),
    };
    let catalog = NameCatalog::build(&config).context("building name catalog")?;

    match cli.command {
        CliCommand::Lookup { ordinal } => {
            println!("{}", catalog.lookup(ordinal));
        }
        CliCommand::Dump => {
            let records: Vec<_> = catalog
                .iter()
                .map(|(ordinal, name)| {
                    json!({
                        "ordinal": ordinal,
                        "tag": PROTOCOL_ROSTER[ordinal].tag,
                        "name": name,
                        "compiled_in": catalog.is_compiled_in(ordinal),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        CliCommand::Packed => {
            stdout()
                .write_all(&catalog.packed())
                .context("writing packed catalog to stdout")?;
        }
    }
    Ok(())
}
