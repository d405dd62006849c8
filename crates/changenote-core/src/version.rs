//! Version management.

use std::sync::LazyLock;

use changenote_plugin::BumpType;
use regex::Regex;
use semver::Version;

use crate::{CoreError, CoreResult};

static HEADING_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^##\s+\[(\d+)\.(\d+)\.(\d+)\]").expect("invalid regex")
});

/// Manages version operations.
pub struct VersionManager;

impl VersionManager {
    /// Creates a new version manager.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Bumps a version according to the bump type.
    ///
    /// Lower components are reset; pre-release and build metadata are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::VersionOverflow`] if the bumped component is
    /// already `u64::MAX`.
    pub fn bump(&self, version: &Version, bump_type: BumpType) -> CoreResult<Version> {
        let overflow = || CoreError::VersionOverflow(version.clone());
        let mut new_version = version.clone();

        match bump_type {
            BumpType::Major => {
                new_version.major = version.major.checked_add(1).ok_or_else(overflow)?;
                new_version.minor = 0;
                new_version.patch = 0;
            }
            BumpType::Minor => {
                new_version.minor = version.minor.checked_add(1).ok_or_else(overflow)?;
                new_version.patch = 0;
            }
            BumpType::Patch => {
                new_version.patch = version.patch.checked_add(1).ok_or_else(overflow)?;
            }
            BumpType::None => return Ok(new_version),
        }

        new_version.pre = semver::Prerelease::EMPTY;
        new_version.build = semver::BuildMetadata::EMPTY;
        Ok(new_version)
    }

    /// Parses an externally supplied version string.
    ///
    /// Library entry point for callers that set the version themselves
    /// instead of deriving it from the changelog.
    ///
    /// # Errors
    ///
    /// Returns an error if the version string is invalid.
    pub fn parse(&self, version: &str) -> Result<Version, semver::Error> {
        Version::parse(version.trim())
    }

    /// Reads the latest released version from changelog text.
    ///
    /// Uses the first `## [x.y.z]` heading; `0.0.0` when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidVersionHeading`] if that heading has a
    /// component too large for `u64`.
    pub fn from_changelog(&self, text: &str) -> CoreResult<Version> {
        let Some(captures) = HEADING_VERSION_RE.captures(text) else {
            return Ok(Version::new(0, 0, 0));
        };

        let component = |index: usize| {
            captures[index]
                .parse::<u64>()
                .map_err(|_| CoreError::InvalidVersionHeading(captures[0].to_string()))
        };
        Ok(Version::new(component(1)?, component(2)?, component(3)?))
    }
}

impl Default for VersionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANGELOG: &str = "# Changelog\n\
        All notable changes to this project will be documented in this file.\n\
        \n\
        The format is based on [Keep a Changelog](http://keepachangelog.com/en/1.0.0/)\n\
        and this project adheres to [Semantic Versioning](http://semver.org/spec/v2.0.0.html).\n\
        \n\
        ## [1.0.0] - 2018-08-13\n\
        ### Changed\n\
        - Migrated from .NET Framework 4.5 to .NET Standard 2.0\n";

    #[test]
    fn test_bump_major() {
        let vm = VersionManager::new();
        let bumped = vm.bump(&Version::new(1, 2, 3), BumpType::Major).unwrap();
        assert_eq!(bumped, Version::new(2, 0, 0));
    }

    #[test]
    fn test_bump_minor() {
        let vm = VersionManager::new();
        let bumped = vm.bump(&Version::new(1, 2, 3), BumpType::Minor).unwrap();
        assert_eq!(bumped, Version::new(1, 3, 0));
    }

    #[test]
    fn test_bump_patch() {
        let vm = VersionManager::new();
        let bumped = vm.bump(&Version::new(1, 2, 3), BumpType::Patch).unwrap();
        assert_eq!(bumped, Version::new(1, 2, 4));
    }

    #[test]
    fn test_bump_none() {
        let vm = VersionManager::new();
        let bumped = vm.bump(&Version::new(1, 2, 3), BumpType::None).unwrap();
        assert_eq!(bumped, Version::new(1, 2, 3));
    }

    #[test]
    fn test_bump_clears_prerelease() {
        let vm = VersionManager::new();
        let version = Version::parse("1.2.3-alpha.1").unwrap();
        let bumped = vm.bump(&version, BumpType::Patch).unwrap();
        assert_eq!(bumped, Version::new(1, 2, 4));
        assert!(bumped.pre.is_empty());
    }

    #[test]
    fn test_bump_overflow() {
        let vm = VersionManager::new();
        let version = Version::new(1, u64::MAX, 3);

        let err = vm.bump(&version, BumpType::Minor).unwrap_err();
        assert!(matches!(err, CoreError::VersionOverflow(ref v) if *v == version));
        assert_eq!(err.kind(), crate::ErrorKind::InvalidFormat);

        assert_eq!(
            vm.bump(&version, BumpType::Major).unwrap(),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_parse_valid() {
        let vm = VersionManager::new();
        assert_eq!(vm.parse(" 2.0.0 ").unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_parse_invalid() {
        let vm = VersionManager::new();
        assert!(vm.parse("not-a-version").is_err());
        assert!(vm.parse("1.2").is_err());
    }

    #[test]
    fn test_from_changelog() {
        let vm = VersionManager::new();
        assert_eq!(vm.from_changelog(CHANGELOG).unwrap(), Version::new(1, 0, 0));
    }

    #[test]
    fn test_from_changelog_uses_first_heading() {
        let vm = VersionManager::new();
        let text = "# Changelog\n\n## [1.2.3] - 2024-01-01\n- a\n\n## [1.2.2] - 2023-12-01\n- b\n";
        assert_eq!(vm.from_changelog(text).unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_from_changelog_ignores_links_in_prose() {
        let vm = VersionManager::new();
        let text = "See [2.0.0] in prose\n\n## [0.4.1] - 2024-01-01\n";
        assert_eq!(vm.from_changelog(text).unwrap(), Version::new(0, 4, 1));
    }

    #[test]
    fn test_from_changelog_without_heading() {
        let vm = VersionManager::new();
        assert_eq!(vm.from_changelog("# Changelog\n").unwrap(), Version::new(0, 0, 0));
        assert_eq!(vm.from_changelog("## [Unreleased]\n").unwrap(), Version::new(0, 0, 0));
    }

    #[test]
    fn test_from_changelog_rejects_oversized_heading() {
        let vm = VersionManager::new();
        let text = "# Changelog\n\n## [99999999999999999999.1.0] - 2024-01-01\n- a\n";

        let err = vm.from_changelog(text).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidVersionHeading(ref heading) if heading == "## [99999999999999999999.1.0]"
        ));
        assert_eq!(err.kind(), crate::ErrorKind::InvalidFormat);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn bump_type() -> impl Strategy<Value = BumpType> {
            prop_oneof![
                Just(BumpType::Major),
                Just(BumpType::Minor),
                Just(BumpType::Patch),
                Just(BumpType::None),
            ]
        }

        proptest! {
            #[test]
            fn bump_increments_exactly_one_component(
                major in 0u64..1000,
                minor in 0u64..1000,
                patch in 0u64..1000,
                bump in bump_type(),
            ) {
                let before = Version::new(major, minor, patch);
                let after = VersionManager::new().bump(&before, bump).unwrap();

                match bump {
                    BumpType::Major => {
                        prop_assert_eq!(after.major, major + 1);
                        prop_assert_eq!((after.minor, after.patch), (0, 0));
                    }
                    BumpType::Minor => {
                        prop_assert_eq!(after.major, major);
                        prop_assert_eq!(after.minor, minor + 1);
                        prop_assert_eq!(after.patch, 0);
                    }
                    BumpType::Patch => {
                        prop_assert_eq!((after.major, after.minor), (major, minor));
                        prop_assert_eq!(after.patch, patch + 1);
                    }
                    BumpType::None => prop_assert_eq!(&after, &before),
                }
                prop_assert!(after >= before);
            }
        }
    }
}
