//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Salem - a recipe book with serving scaling and cultural notes
#[derive(Parser, Debug)]
#[command(name = "salem")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SALEM_CONFIG")]
    pub config: Option<String>,

    /// Recipe dataset path (overrides the configuration)
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the category index
    List {
        /// Only recipes whose title, category, or cuisine contains this text
        #[arg(short, long, default_value = "")]
        filter: String,
    },

    /// Show a recipe
    Show {
        /// Recipe id
        id: u32,

        /// Serving count to scale ingredients to (defaults to the recipe's own)
        #[arg(short, long)]
        servings: Option<u32>,
    },

    /// Scale a single amount
    Scale {
        /// Amount for the base serving count
        amount: f64,
        /// Serving count the amount is authored for
        base: u32,
        /// Serving count to scale to
        target: u32,
    },

    /// Resolve a URL fragment (or a full URL) against the dataset
    Route {
        /// Fragment such as `3` or `tips-section`, or a URL containing `#`
        fragment: String,

        /// Treat a view as already active
        #[arg(short, long)]
        active: bool,
    },

    /// Fetch a cultural note about a recipe
    Fact {
        /// Recipe id
        id: u32,
    },

    /// Read commands from stdin and drive an interactive session
    Browse,

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a default configuration file
    Init {
        /// Target file (defaults to the resolved path)
        #[arg(short, long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
