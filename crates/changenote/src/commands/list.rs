//! List command.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use changenote_config::find_config_from;
use changenote_core::{find_nearest_changes_dir, list_note_names};

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub target: ListTarget,
}

/// What to list.
#[derive(Debug, Subcommand)]
pub enum ListTarget {
    /// List the change notes waiting in the nearest changes directory
    Changes,

    /// List the categories allowed by the configuration
    Categories,
}

/// Runs the list command.
pub fn run(args: ListArgs) -> Result<()> {
    let working_dir = std::env::current_dir().context("failed to read the working directory")?;

    match args.target {
        ListTarget::Changes => {
            let changes_dir = find_nearest_changes_dir(&working_dir)
                .context("failed to find a 'changes' directory")?;
            let notes = list_note_names(&changes_dir)?;

            if notes.is_empty() {
                println!("There are no new changes");
            }
            for (name, _) in notes {
                println!("{name}");
            }
        }
        ListTarget::Categories => {
            let config =
                find_config_from(&working_dir).context("failed to load configuration")?;

            match config.filter(|config| !config.categories.is_empty()) {
                Some(config) => {
                    for category in &config.categories {
                        println!("{category}");
                    }
                }
                None => println!(
                    "There are no categories explicitly set by the configuration. You can specify anything!"
                ),
            }
        }
    }

    Ok(())
}
