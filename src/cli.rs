// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docker-facts")]
#[command(about = "Container engine facts: daemon info, versions, live networks, join tokens")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: discovered in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve facts and print them
    Resolve {
        /// Facts to print (default: all)
        facts: Vec<String>,

        /// Print one JSON object
        #[arg(long, conflicts_with = "quiet")]
        json: bool,

        /// Print bare values only
        #[arg(short, long)]
        quiet: bool,

        /// Comma-separated live interface names (overrides the interfaces fact)
        #[arg(long)]
        interfaces: Option<String>,

        /// JSON object of already-resolved host facts
        #[arg(long)]
        facts_file: Option<PathBuf>,
    },

    /// List the facts this tool publishes
    List,

    /// Write a docker-facts.yml template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
