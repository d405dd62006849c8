//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Keyword that marks a breaking change when no other keyword is configured.
pub const DEFAULT_BREAKING_KEYWORD: &str = "BREAKING CHANGE";

/// Rule entry that matches a run with no accepted changes.
pub const NO_CHANGES: &str = "NoChanges";

/// Contents of a `.changelog.json` file.
///
/// ```json
/// {
///   "categories": ["API", "FE"],
///   "bumpingRule": {
///     "breakingKeyword": "BREAKING CHANGE",
///     "major": [],
///     "minor": ["Added", "Changed", "NoChanges"],
///     "patch": ["Fixed", "Security"]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Allowed categories. Empty means any category (or none) is accepted.
    #[serde(default, alias = "Categories")]
    pub categories: Vec<String>,

    /// Custom bump rules. `None` selects the built-in policy.
    #[serde(default, alias = "BumpingRule", skip_serializing_if = "Option::is_none")]
    pub bumping_rule: Option<BumpingRule>,
}

impl Config {
    /// Returns true if neither categories nor bump rules are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.bumping_rule.is_none()
    }

    /// Returns true if a record with this category may be accepted.
    ///
    /// With no configured categories everything is valid; otherwise the
    /// category must be present and match one entry ignoring case.
    #[must_use]
    pub fn is_valid_category(&self, category: Option<&str>) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        category.is_some_and(|category| self.canonical_category(category).is_some())
    }

    /// Returns the configured spelling of a category, matched ignoring case.
    #[must_use]
    pub fn canonical_category(&self, category: &str) -> Option<&str> {
        let category = category.trim();
        self.categories
            .iter()
            .find(|configured| configured.eq_ignore_ascii_case(category))
            .map(String::as_str)
    }
}

/// Maps change types to the version component they bump.
///
/// Entries are change type names (`"Added"`, `"Fixed"`, ...) or the
/// [`NO_CHANGES`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BumpingRule {
    /// Description substring (case-insensitive) that forces a major bump.
    #[serde(default = "default_breaking_keyword", alias = "BreakingKeyword")]
    pub breaking_keyword: String,

    /// Entries triggering a major bump.
    #[serde(default, alias = "Major")]
    pub major: Vec<String>,

    /// Entries triggering a minor bump.
    #[serde(default, alias = "Minor")]
    pub minor: Vec<String>,

    /// Entries triggering a patch bump.
    #[serde(default, alias = "Patch")]
    pub patch: Vec<String>,
}

impl Default for BumpingRule {
    fn default() -> Self {
        Self {
            breaking_keyword: default_breaking_keyword(),
            major: Vec::new(),
            minor: Vec::new(),
            patch: Vec::new(),
        }
    }
}

fn default_breaking_keyword() -> String {
    DEFAULT_BREAKING_KEYWORD.to_string()
}
