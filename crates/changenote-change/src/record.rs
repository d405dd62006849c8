//! A single change note after parsing.

use std::path::{Path, PathBuf};

use crate::ChangeType;

/// A change note accepted by a parser.
///
/// Records are built once by a parser and never mutated afterwards; the
/// source path is kept so the note file can be removed after a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    change_type: ChangeType,
    category: Option<String>,
    description: String,
    source_path: PathBuf,
}

impl ChangeRecord {
    /// Creates a record from an already normalized description.
    ///
    /// The category is taken from a leading `[...]` tag in the description.
    #[must_use]
    pub fn new(
        change_type: ChangeType,
        description: impl Into<String>,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        let description = description.into();
        let category = category_of(&description).map(str::to_string);
        Self {
            change_type,
            category,
            description,
            source_path: source_path.into(),
        }
    }

    /// The change type.
    #[must_use]
    pub fn change_type(&self) -> ChangeType {
        self.change_type
    }

    /// The category tag, without brackets.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The description as rendered in the changelog, including any category tag.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The note file this record was read from.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// Extracts the category from a leading `[...]` tag.
///
/// Returns `None` when the text does not start with a bracketed, non-empty tag.
#[must_use]
pub fn category_of(description: &str) -> Option<&str> {
    let rest = description.strip_prefix('[')?;
    let end = rest.find(']')?;
    let category = rest[..end].trim();
    (!category.is_empty()).then_some(category)
}

/// Builds the file name of a change note.
///
/// The result is `"<Type> [<Category>] <Description>"`, or
/// `"<Type> <Description>"` when no category is given.
#[must_use]
pub fn note_file_name(
    change_type: ChangeType,
    category: Option<&str>,
    description: &str,
) -> String {
    let description = description.trim();
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => format!("{change_type} [{category}] {description}"),
        None => format!("{change_type} {description}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_extracts_category() {
        let record = ChangeRecord::new(
            ChangeType::Added,
            "[API] Added example 1",
            "/tmp/changes/Added [API] Added example 1",
        );

        assert_eq!(record.change_type(), ChangeType::Added);
        assert_eq!(record.category(), Some("API"));
        assert_eq!(record.description(), "[API] Added example 1");
        assert_eq!(
            record.source_path(),
            Path::new("/tmp/changes/Added [API] Added example 1")
        );
    }

    #[test]
    fn test_new_without_category() {
        let record = ChangeRecord::new(ChangeType::Fixed, "Crash on startup", "x");
        assert_eq!(record.category(), None);
        assert_eq!(record.description(), "Crash on startup");
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("[FE] Button color"), Some("FE"));
        assert_eq!(category_of("[Front End] Button color"), Some("Front End"));
        assert_eq!(category_of("[] Nothing"), None);
        assert_eq!(category_of("No tag [FE]"), None);
        assert_eq!(category_of("[unterminated"), None);
    }

    #[test]
    fn test_note_file_name_with_category() {
        assert_eq!(
            note_file_name(ChangeType::Added, Some("API"), "New endpoint"),
            "Added [API] New endpoint"
        );
    }

    #[test]
    fn test_note_file_name_without_category() {
        assert_eq!(
            note_file_name(ChangeType::Security, None, "  Patched XSS "),
            "Security Patched XSS"
        );
        assert_eq!(
            note_file_name(ChangeType::Fixed, Some("  "), "Typo"),
            "Fixed Typo"
        );
    }
}
