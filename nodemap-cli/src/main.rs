//! NodeMap CLI - Command-line interface
//!
//! This binary provides a command-line interface to the NodeMap library:
//! load every layer from a node API, inspect clustering, and manage the
//! configuration file.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::common::{ApiOverrides, GlobalArgs};
use commands::config::ConfigCommands;

#[derive(Parser)]
#[command(name = "nodemap")]
#[command(version)]
#[command(about = "Load clustered node layers from a NodeMap API", long_about = None)]
struct Cli {
    /// Path to the config file (default: ~/.nodemap/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every layer and print a summary
    Load {
        #[command(flatten)]
        api: ApiOverrides,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the clusters of one layer at a zoom level
    Clusters {
        /// Layer name as listed by the API
        #[arg(long)]
        layer: String,

        #[command(flatten)]
        api: ApiOverrides,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Create a default configuration file
    Init,
}

fn main() {
    let cli = Cli::parse();
    let globals = GlobalArgs::new(cli.config, cli.verbose);

    let result = match cli.command {
        Commands::Load { api, json } => commands::load::run(&globals, api, json),
        Commands::Clusters { layer, api } => commands::clusters::run(&globals, &layer, api),
        Commands::Config { command } => commands::config::run(&globals, command),
        Commands::Init => commands::init::run(&globals),
    };

    if let Err(e) = result {
        e.exit();
    }
}
