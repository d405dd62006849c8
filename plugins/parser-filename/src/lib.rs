//! Change-note file name parser plugin.
//!
//! A change note is an empty file whose name reads
//! `"<Type> [<Category>] <Description>"` or `"<Type> <Description>"`.

use std::path::Path;
use std::sync::LazyLock;

use changenote_change::{ChangeRecord, ChangeType};
use changenote_plugin::{ChangeParser, Plugin};
use regex::Regex;
use tracing::trace;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid regex"));

static BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*([^\[\]]*?)\s*\]").expect("invalid regex"));

/// Parser for change-note file names.
pub struct FilenameParser;

impl FilenameParser {
    /// Creates a new file name parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FilenameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for FilenameParser {
    fn name(&self) -> &'static str {
        "filename"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Parses change types, categories and descriptions from note file names"
    }
}

impl ChangeParser for FilenameParser {
    fn parse(&self, file_name: &str, source_path: &Path) -> Option<ChangeRecord> {
        let Some((type_word, rest)) = file_name.trim_start().split_once(char::is_whitespace) else {
            trace!(file_name, "single word");
            return None;
        };

        let Some(change_type) = ChangeType::from_name(type_word) else {
            trace!(file_name, type_word, "unknown change type");
            return None;
        };

        let description = normalize_description(rest);
        if description.is_empty() {
            trace!(file_name, "empty description");
            return None;
        }

        Some(ChangeRecord::new(change_type, description, source_path))
    }
}

/// Collapses whitespace runs to one space and tightens `[...]` tags.
#[must_use]
pub fn normalize_description(raw: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(raw.trim(), " ");
    BRACKET_RE.replace_all(&collapsed, "[${1}]").into_owned()
}
