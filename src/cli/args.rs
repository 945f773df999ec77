//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Composite inventory explorer: priced item trees with uniform leaf/composite handling
#[derive(Parser, Debug)]
#[command(name = "rsinv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Wait for Enter before exiting
    #[arg(long, env = "RSINV_PAUSE", global = true)]
    pub pause: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the demo building with depth indentation (default)
    Show,

    /// Print the demo building as a box-drawing tree
    Tree,

    /// List leaf items only
    Leaves,

    /// List all root-to-bottom branches linearly
    Branches,

    /// Show inventory statistics
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
