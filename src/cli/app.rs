//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::query;
use crate::domain::Body;
use crate::storage::{Config, MapFile};

#[derive(Parser)]
#[command(name = "orbit-map")]
#[command(author, version, about = "Counts orbits and orbital transfers in an orbit map")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "ORBIT_MAP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count direct and indirect orbits across the map
    Total {
        /// Orbit map file, one CENTER)SATELLITE record per line
        path: PathBuf,
    },

    /// Count transfers between the bodies two objects orbit
    Hops {
        /// Orbit map file, one CENTER)SATELLITE record per line
        path: PathBuf,

        /// Object to transfer from (defaults to the configured body)
        #[arg(long)]
        from: Option<String>,

        /// Object to transfer to (defaults to the configured body)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show the ancestors of a body, nearest first
    Chain {
        /// Orbit map file, one CENTER)SATELLITE record per line
        path: PathBuf,

        /// Body whose ancestors to list
        body: String,

        /// Stop after reaching this ancestor
        #[arg(long)]
        stop: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or_else(|| config.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose("Orbit map starting");

    match cli.command {
        Commands::Total { path } => query::total(&output, &MapFile::new(path))?,

        Commands::Hops { path, from, to } => {
            let from = Body::new(from.unwrap_or(config.from));
            let to = Body::new(to.unwrap_or(config.to));
            query::hops(&output, &MapFile::new(path), &from, &to)?
        }

        Commands::Chain { path, body, stop } => {
            let body = Body::new(body);
            let stop = stop.map(Body::new);
            query::chain(&output, &MapFile::new(path), &body, stop.as_ref())?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
