//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Assemble CHANGELOG.md from change-note files and compute the next version.
#[derive(Debug, Parser)]
#[command(name = "changenote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge change notes into the changelog and compute the next version
    Merge(commands::merge::MergeArgs),

    /// Create a new change note
    Add(commands::add::AddArgs),

    /// List pending change notes or configured categories
    List(commands::list::ListArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Merge(args) => commands::merge::run(args),
            Commands::Add(args) => commands::add::run(args),
            Commands::List(args) => commands::list::run(args),
        }
    }
}
