//! Changelog formatter trait.

use changenote_change::ChangeSet;
use chrono::NaiveDate;
use semver::Version;

use super::Plugin;

/// A release to be formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// The release version.
    pub version: Version,

    /// The release date, in the local calendar.
    pub date: NaiveDate,

    /// The accepted changes.
    pub changes: ChangeSet,
}

impl Release {
    /// Creates a new release.
    #[must_use]
    pub fn new(version: Version, date: NaiveDate, changes: ChangeSet) -> Self {
        Self {
            version,
            date,
            changes,
        }
    }

    /// Creates a release dated today.
    #[must_use]
    pub fn today(version: Version, changes: ChangeSet) -> Self {
        Self::new(version, chrono::Local::now().date_naive(), changes)
    }
}

/// Formats changelog output.
pub trait ChangelogFormatter: Plugin {
    /// Renders a release into a changelog section.
    fn format(&self, release: &Release) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_new() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let release = Release::new(Version::new(1, 2, 3), date, ChangeSet::new());

        assert_eq!(release.version, Version::new(1, 2, 3));
        assert_eq!(release.date, date);
        assert!(release.changes.is_empty());
    }

    #[test]
    fn test_release_today() {
        let release = Release::today(Version::new(0, 1, 0), ChangeSet::new());
        assert_eq!(release.date, chrono::Local::now().date_naive());
    }
}
