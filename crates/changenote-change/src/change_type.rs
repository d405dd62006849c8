//! Change type enumeration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The kind of a change, following the Keep a Changelog sections.
///
/// Variants are declared in alphabetical order of their canonical names, so
/// the derived `Ord` matches the order in which sections are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChangeType {
    /// New features.
    Added,
    /// Changes in existing functionality.
    Changed,
    /// Soon-to-be removed features.
    Deprecated,
    /// Bug fixes.
    Fixed,
    /// Removed features.
    Removed,
    /// Vulnerability fixes.
    Security,
}

/// Error returned when a string does not name a change type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown change type '{0}', expected one of: Added, Changed, Deprecated, Removed, Fixed, Security")]
pub struct ParseChangeTypeError(pub String);

impl ChangeType {
    /// Every change type, in rendering order.
    pub const ALL: [Self; 6] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Fixed,
        Self::Removed,
        Self::Security,
    ];

    /// Returns the canonical name (first letter upper case, rest lower case).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Fixed => "Fixed",
            Self::Removed => "Removed",
            Self::Security => "Security",
        }
    }

    /// Looks up a change type by its full name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|change_type| change_type.as_str().eq_ignore_ascii_case(name))
    }

    /// Looks up a change type by its full name or its one-letter alias.
    ///
    /// Aliases are the lower-case initials: `a`, `c`, `d`, `r`, `f`, `s`.
    #[must_use]
    pub fn from_alias(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "a" => Some(Self::Added),
            "c" => Some(Self::Changed),
            "d" => Some(Self::Deprecated),
            "r" => Some(Self::Removed),
            "f" => Some(Self::Fixed),
            "s" => Some(Self::Security),
            _ => Self::from_name(input),
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = ParseChangeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| ParseChangeTypeError(s.to_string()))
    }
}
