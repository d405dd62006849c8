//! Change parser trait.

use std::path::Path;

use changenote_change::ChangeRecord;

use super::Plugin;

/// Turns change-note file names into records.
pub trait ChangeParser: Plugin {
    /// Parses the file name of a change note.
    ///
    /// `source_path` is stored on the record so the note can be deleted later;
    /// only `file_name` is inspected. Returns `None` when the name is not a
    /// valid change note. Rejection is an expected outcome, not an error.
    fn parse(&self, file_name: &str, source_path: &Path) -> Option<ChangeRecord>;

    /// Returns whether the file name would be accepted.
    fn can_parse(&self, file_name: &str) -> bool {
        self.parse(file_name, Path::new(file_name)).is_some()
    }
}
