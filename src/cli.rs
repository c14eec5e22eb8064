//! Command-line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ghsearch",
    version,
    about = "Search GitHub users and repositories together, and browse repository files"
)]
pub struct Cli {
    /// Path to a settings file (overrides GHSEARCH_SETTINGS_PATH)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search users and repositories matching a query
    Search {
        /// Search text (at least the configured minimum length)
        query: String,

        /// Print the resulting state as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the contents of a repository directory
    Browse {
        owner: String,
        repo: String,

        /// Directory inside the repository
        #[arg(default_value = "")]
        path: String,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Type queries line by line and browse results
    Interactive,
}
