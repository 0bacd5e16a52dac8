//! modpart CLI — compute the module sets to enable/disable per extension.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use modpart_core::Extension;

#[derive(Parser)]
#[command(
    name = "modpart",
    version,
    about = "Compute enabled/disabled module sets per product extension"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve all extensions, partition the universe, and write the outputs
    Compute {
        /// Module catalog file (TOML)
        #[arg(long)]
        catalog: PathBuf,
        /// Configuration file whose disabled.modules key is rewritten.
        /// When omitted the whole computation is skipped (a no-op).
        #[arg(long)]
        target_properties: Option<PathBuf>,
        /// Directory for the plain-text listings
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
    },
    /// Resolve and print one extension's closure
    Closure {
        /// Extension name (lite, maven, gradle)
        extension: Extension,
        /// Module catalog file (TOML)
        #[arg(long)]
        catalog: PathBuf,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Resolve every extension and report diagnostics without writing outputs
    Check {
        /// Module catalog file (TOML)
        #[arg(long)]
        catalog: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Compute {
            catalog,
            target_properties,
            out_dir,
        } => commands::compute::run(&catalog, target_properties.as_deref(), &out_dir),

        Commands::Closure {
            extension,
            catalog,
            format,
        } => commands::closure::run(extension, &catalog, format.as_deref()),

        Commands::Check { catalog } => commands::check::run(&catalog),
    }
}
