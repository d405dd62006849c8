//! Merge command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use tracing::info;

use changenote_bumper_semver::SemverBumper;
use changenote_config::find_config_from;
use changenote_core::{ManifestTarget, Pipeline, ReleaseManager, ReleaseOptions};
use changenote_formatter_keepachangelog::KeepAChangelogFormatter;
use changenote_parser_filename::FilenameParser;

/// Arguments for the merge command.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Directory containing CHANGELOG.md (and optionally .changelog.json)
    pub changelog_dir: PathBuf,

    /// Directory containing the change notes
    pub changes_dir: PathBuf,

    /// Stamp the new version into a manifest (package.json or a .csproj in
    /// the working directory unless a path is given)
    #[arg(long, value_name = "MANIFEST_PATH", num_args = 0..=1, require_equals = true)]
    pub set_version: Option<Option<PathBuf>>,

    /// Fourth version component written to the manifest
    #[arg(short, long, requires = "set_version")]
    pub revision: Option<u64>,

    /// Write the changelog and delete the merged notes
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub merge_changelog: bool,
}

/// Runs the merge command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: MergeArgs) -> Result<()> {
    let config = find_config_from(&args.changelog_dir).context("failed to load configuration")?;

    let pipeline = Pipeline::new(
        Box::new(FilenameParser::new()),
        Box::new(SemverBumper::from_config(config.as_ref())),
        Box::new(KeepAChangelogFormatter::new()),
    );

    let mut options = ReleaseOptions::new()
        .with_revision(args.revision)
        .with_merge_changelog(args.merge_changelog);

    if let Some(manifest) = &args.set_version {
        let target = match manifest {
            Some(path) => ManifestTarget::Explicit(path.clone()),
            None => ManifestTarget::Detect(
                std::env::current_dir().context("failed to read the working directory")?,
            ),
        };
        options = options.with_manifest(target);
    }

    let outcome = ReleaseManager::new(&args.changelog_dir, &args.changes_dir)
        .release(&pipeline, config.as_ref(), &options)
        .context("failed to merge change notes")?;

    info!(
        version = %outcome.next_version,
        bump = %outcome.bump_type,
        changes = outcome.changes.len(),
        "merge completed"
    );
    print!("{}", outcome.section);

    Ok(())
}
