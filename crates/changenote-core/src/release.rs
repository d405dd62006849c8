//! Release orchestration.

use std::fs;
use std::path::PathBuf;

use changenote_change::ChangeSet;
use changenote_config::Config;
use changenote_plugin::{BumpType, Release};
use chrono::NaiveDate;
use semver::Version;
use tracing::{debug, info};

use crate::{
    CoreError, CoreResult, ManifestError, ManifestTarget, Pipeline, StampOutcome,
    VersionManager, locate_changelog, remove_change_files, splice_section, stamp_manifest,
};

/// Options for a single release run.
#[derive(Debug, Clone)]
pub struct ReleaseOptions {
    /// Manifest to stamp with the new version, if any.
    pub manifest: Option<ManifestTarget>,
    /// Explicit fourth version component for the manifest.
    pub revision: Option<u64>,
    /// Whether to write the changelog and delete the merged notes.
    pub merge_changelog: bool,
    /// Date of the release heading; today when unset.
    pub date: Option<NaiveDate>,
}

impl Default for ReleaseOptions {
    fn default() -> Self {
        Self {
            manifest: None,
            revision: None,
            merge_changelog: true,
            date: None,
        }
    }
}

impl ReleaseOptions {
    /// Creates default options: merge, no manifest, today's date.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps the new version into the given manifest.
    #[must_use]
    pub fn with_manifest(mut self, manifest: ManifestTarget) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Sets the revision written to the manifest.
    #[must_use]
    pub fn with_revision(mut self, revision: Option<u64>) -> Self {
        self.revision = revision;
        self
    }

    /// Enables or disables the changelog merge.
    #[must_use]
    pub fn with_merge_changelog(mut self, merge_changelog: bool) -> Self {
        self.merge_changelog = merge_changelog;
        self
    }

    /// Fixes the release date.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// What a release run did.
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Version read from the changelog.
    pub previous_version: Version,
    /// Version of the new section.
    pub next_version: Version,
    /// The bump that was applied.
    pub bump_type: BumpType,
    /// The rendered section.
    pub section: String,
    /// The accepted changes.
    pub changes: ChangeSet,
    /// The manifest stamp, when requested.
    pub manifest: Option<StampOutcome>,
    /// Number of note files deleted.
    pub removed: usize,
}

/// Manages the release process.
pub struct ReleaseManager {
    changelog_dir: PathBuf,
    changes_dir: PathBuf,
    version_manager: VersionManager,
}

impl ReleaseManager {
    /// Creates a new release manager.
    #[must_use]
    pub fn new(changelog_dir: impl Into<PathBuf>, changes_dir: impl Into<PathBuf>) -> Self {
        Self {
            changelog_dir: changelog_dir.into(),
            changes_dir: changes_dir.into(),
            version_manager: VersionManager::new(),
        }
    }

    /// Executes a release with the given pipeline.
    ///
    /// Nothing is written until every input has been read and the new
    /// changelog text computed. Note files are deleted only after the
    /// changelog and the manifest have both been written.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory, the changelog, its heading, or the
    /// manifest is missing, or if any file operation fails.
    pub fn release(
        &self,
        pipeline: &Pipeline,
        config: Option<&Config>,
        options: &ReleaseOptions,
    ) -> CoreResult<ReleaseOutcome> {
        info!("starting release process");
        let (parser, bumper, formatter) = pipeline.plugin_names();
        debug!(parser, bumper, formatter, "using plugins");

        let changelog_path = self.check_preconditions(options)?;
        let document = fs::read_to_string(&changelog_path)?;

        let previous_version = self.version_manager.from_changelog(&document)?;
        debug!(%previous_version, "found previous version");

        let changes = pipeline.collect(&self.changes_dir, config)?;

        let bump_type = pipeline.determine_bump(&changes);
        info!(%bump_type, "determined bump type");

        let next_version = self.version_manager.bump(&previous_version, bump_type)?;
        info!(
            previous = %previous_version,
            next = %next_version,
            "calculated new version"
        );

        let release = match options.date {
            Some(date) => Release::new(next_version.clone(), date, changes),
            None => Release::today(next_version.clone(), changes),
        };
        let section = pipeline.render(&release);
        debug!(section_len = section.len(), "rendered section");

        let updated_changelog = if options.merge_changelog {
            let updated = splice_section(&document, &section)
                .ok_or_else(|| CoreError::NoVersionHeading(changelog_path.clone()))?;
            Some(updated)
        } else {
            None
        };

        let manifest = options
            .manifest
            .as_ref()
            .map(|target| stamp_manifest(target, &next_version, options.revision))
            .transpose()?;

        let mut removed = 0;
        if let Some(updated) = updated_changelog {
            fs::write(&changelog_path, updated)?;
            info!(path = ?changelog_path, "changelog updated");

            removed = remove_change_files(&release.changes)?;
            info!(removed, "removed merged change notes");
        }

        info!(version = %next_version, "release completed");
        Ok(ReleaseOutcome {
            previous_version,
            next_version,
            bump_type,
            section,
            changes: release.changes,
            manifest,
            removed,
        })
    }

    fn check_preconditions(&self, options: &ReleaseOptions) -> CoreResult<PathBuf> {
        if !self.changes_dir.is_dir() {
            return Err(CoreError::ChangesDirNotFound(self.changes_dir.clone()));
        }

        let changelog_path = locate_changelog(&self.changelog_dir)?;

        if let Some(ManifestTarget::Explicit(path)) = &options.manifest
            && !path.is_file()
        {
            return Err(ManifestError::NotFound(path.clone()).into());
        }

        Ok(changelog_path)
    }
}
