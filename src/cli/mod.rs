//! Command-line interface for fighterdb.

mod commands;

pub use commands::{cmd_list_fighters, cmd_seed};

use clap::{Parser, Subcommand};

/// Street Fighter roster service
#[derive(Parser)]
#[command(name = "fighterdb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed the roster (if enabled) and serve the HTTP API
    #[command(alias = "daemon")]
    Serve,

    /// Insert the default roster and exit
    Seed {
        /// Seed even when fighters are already stored
        #[arg(long)]
        force: bool,
    },

    /// Print every stored fighter
    #[command(alias = "ls")]
    List,

    /// Create default config file
    Init,
}
