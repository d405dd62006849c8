//! Changelog lookup and section splicing.

use std::path::{Path, PathBuf};

use changenote_config::find_entry_ignore_case;
use tracing::{debug, warn};

use crate::{CoreError, CoreResult};

/// Conventional changelog file name, matched ignoring case.
pub const CHANGELOG_FILE_NAME: &str = "CHANGELOG.md";

const HEADING_MARKER: &str = "## ";

/// Resolves `CHANGELOG.md` inside `changelog_dir`, ignoring case.
///
/// # Errors
///
/// Returns [`CoreError::ChangelogNotFound`] if no such file exists.
pub fn locate_changelog(changelog_dir: &Path) -> CoreResult<PathBuf> {
    find_entry_ignore_case(changelog_dir, CHANGELOG_FILE_NAME)
        .filter(|path| path.is_file())
        .inspect(|path| debug!(?path, "changelog located"))
        .ok_or_else(|| CoreError::ChangelogNotFound(changelog_dir.to_path_buf()))
}

/// Inserts a rendered section above the first `## ` heading.
///
/// The line just before that heading, normally a blank separator, is
/// replaced by a blank line, the section, and another blank line. Every
/// other line is kept byte for byte, line endings included. Returns `None`
/// when the document has no `## ` heading.
#[must_use]
pub fn splice_section(document: &str, section: &str) -> Option<String> {
    let newline = if document.contains("\r\n") { "\r\n" } else { "\n" };
    let mut lines: Vec<&str> = document.split(newline).collect();
    let heading = lines.iter().position(|line| line.starts_with(HEADING_MARKER))?;

    let mut insert: Vec<&str> = section.lines().collect();
    insert.push("");

    if heading == 0 {
        lines.splice(0..0, insert);
    } else {
        let removed = lines[heading - 1];
        if !removed.trim().is_empty() {
            warn!(line = removed, "replacing a non-blank line above the latest heading");
        }
        insert.insert(0, "");
        lines.splice(heading - 1..heading, insert);
    }
    debug!(line = heading, "section spliced");

    Some(lines.join(newline))
}
