//! Bump strategy trait.

use changenote_change::ChangeSet;

use super::Plugin;

/// Version bump type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpType {
    /// Major version bump (breaking changes).
    Major,
    /// Minor version bump (new features).
    Minor,
    /// Patch version bump (bug fixes).
    Patch,
    /// No version bump.
    None,
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Determines the version bump type from the accepted changes.
pub trait BumpStrategy: Plugin {
    /// Determines the bump type for the given change set.
    fn determine(&self, changes: &ChangeSet) -> BumpType;
}
