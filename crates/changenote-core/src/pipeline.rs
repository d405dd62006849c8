//! Plugin pipeline execution.

use std::path::Path;

use changenote_change::ChangeSet;
use changenote_config::Config;
use changenote_plugin::{BumpStrategy, BumpType, ChangeParser, ChangelogFormatter, Release};

use crate::{CoreResult, collect_changes};

/// Orchestrates plugin execution.
pub struct Pipeline {
    parser: Box<dyn ChangeParser>,
    bumper: Box<dyn BumpStrategy>,
    formatter: Box<dyn ChangelogFormatter>,
}

impl Pipeline {
    /// Creates a new pipeline with the given plugins.
    #[must_use]
    pub fn new(
        parser: Box<dyn ChangeParser>,
        bumper: Box<dyn BumpStrategy>,
        formatter: Box<dyn ChangelogFormatter>,
    ) -> Self {
        Self {
            parser,
            bumper,
            formatter,
        }
    }

    /// Collects the accepted change notes of a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist or cannot be read.
    pub fn collect(&self, changes_dir: &Path, config: Option<&Config>) -> CoreResult<ChangeSet> {
        collect_changes(self.parser.as_ref(), changes_dir, config)
    }

    /// Determines the bump type using the configured bumper.
    pub fn determine_bump(&self, changes: &ChangeSet) -> BumpType {
        self.bumper.determine(changes)
    }

    /// Renders a release section using the configured formatter.
    pub fn render(&self, release: &Release) -> String {
        self.formatter.format(release)
    }

    /// Returns the names of the plugins in use, as `(parser, bumper, formatter)`.
    pub fn plugin_names(&self) -> (&'static str, &'static str, &'static str) {
        (
            self.parser.name(),
            self.bumper.name(),
            self.formatter.name(),
        )
    }
}
