//! SemVer bump strategy plugin.

use changenote_change::{ChangeSet, ChangeType};
use changenote_config::{BumpingRule, Config, NO_CHANGES};
use changenote_plugin::{BumpStrategy, BumpType, Plugin};
use tracing::debug;

/// SemVer bump strategy.
///
/// Tiers are checked in order major, minor, patch; the first tier that
/// matches wins. A tier matches when one of its entries names a change type
/// present in the set, or is `NoChanges` and the set is empty. The breaking
/// keyword, found in any description ignoring case, selects major.
///
/// Without configuration the built-in policy applies:
/// - `breaking change` in a description → Major
/// - Added, Changed, Deprecated, Removed, or no changes at all → Minor
/// - Fixed, Security → Patch
pub struct SemverBumper {
    rule: BumpingRule,
}

impl SemverBumper {
    /// Creates a bumper using the built-in policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rule: BumpingRule {
                breaking_keyword: "breaking change".to_string(),
                major: Vec::new(),
                minor: [
                    ChangeType::Added.as_str(),
                    ChangeType::Changed.as_str(),
                    ChangeType::Removed.as_str(),
                    ChangeType::Deprecated.as_str(),
                    NO_CHANGES,
                ]
                .map(String::from)
                .to_vec(),
                patch: [ChangeType::Fixed.as_str(), ChangeType::Security.as_str()]
                    .map(String::from)
                    .to_vec(),
            },
        }
    }

    /// Creates a bumper driven by configured rules.
    #[must_use]
    pub fn with_rule(rule: BumpingRule) -> Self {
        Self { rule }
    }

    /// Picks the configured rules when present, the built-in policy otherwise.
    #[must_use]
    pub fn from_config(config: Option<&Config>) -> Self {
        match config.and_then(|config| config.bumping_rule.clone()) {
            Some(rule) => Self::with_rule(rule),
            None => Self::new(),
        }
    }

    /// The rules in effect.
    #[must_use]
    pub fn rule(&self) -> &BumpingRule {
        &self.rule
    }

    fn has_breaking_keyword(&self, changes: &ChangeSet) -> bool {
        let keyword = self.rule.breaking_keyword.to_lowercase();
        changes
            .records()
            .any(|record| record.description().to_lowercase().contains(&keyword))
    }
}

impl Default for SemverBumper {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SemverBumper {
    fn name(&self) -> &'static str {
        "semver"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Determines version bump from change types and a breaking keyword"
    }
}

impl BumpStrategy for SemverBumper {
    fn determine(&self, changes: &ChangeSet) -> BumpType {
        let bump = if self.has_breaking_keyword(changes) || tier_matches(&self.rule.major, changes) {
            BumpType::Major
        } else if tier_matches(&self.rule.minor, changes) {
            BumpType::Minor
        } else if tier_matches(&self.rule.patch, changes) {
            BumpType::Patch
        } else {
            BumpType::None
        };

        debug!(%bump, changes = changes.len(), "bump determined");
        bump
    }
}

fn tier_matches(entries: &[String], changes: &ChangeSet) -> bool {
    entries.iter().any(|entry| {
        if entry.trim().eq_ignore_ascii_case(NO_CHANGES) {
            changes.is_empty()
        } else {
            ChangeType::from_name(entry.trim())
                .is_some_and(|change_type| changes.contains_type(change_type))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use changenote_change::ChangeRecord;

    fn make_changes(notes: &[(ChangeType, &str)]) -> ChangeSet {
        notes
            .iter()
            .map(|(change_type, description)| {
                ChangeRecord::new(*change_type, *description, *description)
            })
            .collect()
    }

    fn rule(major: &[&str], minor: &[&str], patch: &[&str]) -> BumpingRule {
        BumpingRule {
            major: major.iter().map(ToString::to_string).collect(),
            minor: minor.iter().map(ToString::to_string).collect(),
            patch: patch.iter().map(ToString::to_string).collect(),
            ..BumpingRule::default()
        }
    }

    #[test]
    fn test_default_fixed_and_security_is_patch() {
        let bumper = SemverBumper::new();
        let changes = make_changes(&[
            (ChangeType::Fixed, "[BE] Fixed example 1"),
            (ChangeType::Security, "[API] Security example 1"),
        ]);

        assert_eq!(bumper.determine(&changes), BumpType::Patch);
    }

    #[test]
    fn test_default_breaking_change_is_major() {
        let bumper = SemverBumper::new();
        let changes = make_changes(&[
            (ChangeType::Fixed, "[BE] Fixed example 1"),
            (ChangeType::Deprecated, "[FE] BREAKING CHANGE 1"),
        ]);

        assert_eq!(bumper.determine(&changes), BumpType::Major);
    }

    #[test]
    fn test_default_breaking_change_ignores_case() {
        let bumper = SemverBumper::new();
        let changes = make_changes(&[(ChangeType::Fixed, "this is a Breaking Change here")]);

        assert_eq!(bumper.determine(&changes), BumpType::Major);
    }

    #[test]
    fn test_default_minor_types() {
        let bumper = SemverBumper::new();
        for change_type in [
            ChangeType::Added,
            ChangeType::Changed,
            ChangeType::Removed,
            ChangeType::Deprecated,
        ] {
            let changes = make_changes(&[(ChangeType::Fixed, "fix"), (change_type, "x")]);
            assert_eq!(bumper.determine(&changes), BumpType::Minor, "{change_type}");
        }
    }

    #[test]
    fn test_default_empty_is_minor() {
        let bumper = SemverBumper::new();
        assert_eq!(bumper.determine(&ChangeSet::new()), BumpType::Minor);
    }

    #[test]
    fn test_rule_major_added() {
        let bumper = SemverBumper::with_rule(rule(&["Added"], &["Fixed"], &["Security"]));
        let changes = make_changes(&[(ChangeType::Added, "[API] New endpoint")]);

        assert_eq!(bumper.determine(&changes), BumpType::Major);
    }

    #[test]
    fn test_rule_priority_major_before_minor() {
        let bumper = SemverBumper::with_rule(rule(&["Added"], &["Fixed"], &["Security"]));
        let changes = make_changes(&[(ChangeType::Fixed, "f"), (ChangeType::Added, "a")]);

        assert_eq!(bumper.determine(&changes), BumpType::Major);
    }

    #[test]
    fn test_rule_minor_and_patch() {
        let bumper = SemverBumper::with_rule(rule(&["Added"], &["Fixed"], &["Security"]));

        let fixed = make_changes(&[(ChangeType::Fixed, "f"), (ChangeType::Security, "s")]);
        assert_eq!(bumper.determine(&fixed), BumpType::Minor);

        let security = make_changes(&[(ChangeType::Security, "s")]);
        assert_eq!(bumper.determine(&security), BumpType::Patch);
    }

    #[test]
    fn test_rule_no_match_is_none() {
        let bumper = SemverBumper::with_rule(rule(&["Added"], &[], &[]));
        let changes = make_changes(&[(ChangeType::Removed, "r")]);

        assert_eq!(bumper.determine(&changes), BumpType::None);
        assert_eq!(bumper.determine(&ChangeSet::new()), BumpType::None);
    }

    #[test]
    fn test_rule_no_changes_sentinel() {
        let bumper = SemverBumper::with_rule(rule(&[], &[], &["NoChanges"]));
        assert_eq!(bumper.determine(&ChangeSet::new()), BumpType::Patch);

        let changes = make_changes(&[(ChangeType::Added, "a")]);
        assert_eq!(bumper.determine(&changes), BumpType::None);
    }

    #[test]
    fn test_rule_entries_ignore_case() {
        let bumper = SemverBumper::with_rule(rule(&[], &["fixed"], &["nochanges"]));
        let changes = make_changes(&[(ChangeType::Fixed, "f")]);
        assert_eq!(bumper.determine(&changes), BumpType::Minor);
        assert_eq!(bumper.determine(&ChangeSet::new()), BumpType::Patch);
    }

    #[test]
    fn test_rule_custom_breaking_keyword() {
        let mut custom = rule(&[], &[], &["Fixed"]);
        custom.breaking_keyword = "!!breaks".to_string();
        let bumper = SemverBumper::with_rule(custom);

        let changes = make_changes(&[(ChangeType::Fixed, "[API] !!BREAKS the client")]);
        assert_eq!(bumper.determine(&changes), BumpType::Major);

        let changes = make_changes(&[(ChangeType::Fixed, "BREAKING CHANGE ignored")]);
        assert_eq!(bumper.determine(&changes), BumpType::Patch);
    }

    #[test]
    fn test_rule_default_breaking_keyword() {
        let bumper = SemverBumper::with_rule(rule(&[], &[], &["Fixed"]));
        let changes = make_changes(&[(ChangeType::Fixed, "breaking change in parser")]);

        assert_eq!(bumper.determine(&changes), BumpType::Major);
    }

    #[test]
    fn test_empty_breaking_keyword_matches_any_change() {
        let mut custom = rule(&[], &[], &["Fixed"]);
        custom.breaking_keyword = String::new();
        let bumper = SemverBumper::with_rule(custom);

        let changes = make_changes(&[(ChangeType::Fixed, "anything")]);
        assert_eq!(bumper.determine(&changes), BumpType::Major);
        assert_eq!(bumper.determine(&ChangeSet::new()), BumpType::None);
    }

    #[test]
    fn test_breaking_keyword_is_not_trimmed() {
        let mut custom = rule(&[], &[], &["Fixed"]);
        custom.breaking_keyword = " BREAKING ".to_string();
        let bumper = SemverBumper::with_rule(custom);

        let changes = make_changes(&[(ChangeType::Fixed, "breaking: parser")]);
        assert_eq!(bumper.determine(&changes), BumpType::Patch);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            categories: Vec::new(),
            bumping_rule: Some(rule(&["Added"], &[], &[])),
        };
        let bumper = SemverBumper::from_config(Some(&config));
        assert_eq!(bumper.rule().major, vec!["Added"]);

        let without_rule = Config::default();
        let bumper = SemverBumper::from_config(Some(&without_rule));
        assert_eq!(bumper.determine(&ChangeSet::new()), BumpType::Minor);

        let bumper = SemverBumper::from_config(None);
        assert_eq!(bumper.rule().breaking_keyword, "breaking change");
    }

    #[test]
    fn test_plugin_metadata() {
        let bumper = SemverBumper::new();
        assert_eq!(bumper.name(), "semver");
        assert_eq!(bumper.version(), env!("CARGO_PKG_VERSION"));
    }
}
