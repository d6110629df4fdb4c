//! CLI for the drex MASS-to-DRS extraction tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_extract, run_translate};

/// Top-level CLI for the drex extraction tool.
#[derive(Debug, Parser)]
#[command(name = "drex")]
#[command(about = "drex: restore CMORised datasets from MASS into a DRS tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Restore every NetCDF file listed in the catalogue into the DRS tree.
    Extract {
        /// Path to the YAML run configuration.
        config: PathBuf,

        /// List source -> destination pairs without retrieving anything.
        #[arg(long)]
        dry_run: bool,

        /// Leave entries alone when the destination file already exists.
        #[arg(long)]
        skip_existing: bool,
    },

    /// Translate one archive path to its DRS form and print it.
    Translate {
        /// Archive-relative path, or a full URI when --mass-root is given.
        path: String,

        /// Archive root prefix to strip before translating.
        #[arg(long, value_name = "PREFIX")]
        mass_root: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Extract {
                config,
                dry_run,
                skip_existing,
            } => run_extract(&config, dry_run, skip_existing)?,
            CliCommand::Translate { path, mass_root } => {
                run_translate(&path, mass_root.as_deref())?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
