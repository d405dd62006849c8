//! Keep a Changelog formatter plugin.

use std::fmt::Write;

use changenote_plugin::{ChangelogFormatter, Plugin, Release};

/// Bullet emitted when a release has no accepted changes.
pub const NO_CHANGES_BULLET: &str = "- No new changes";

/// Keep a Changelog formatter.
///
/// Formats a release section following the [Keep a Changelog](https://keepachangelog.com/)
/// convention:
///
/// ```text
/// ## [1.3.0] - 2024-01-15
/// ### Added
/// - [API] New endpoint
///
/// ### Fixed
/// - Crash on startup
/// ```
pub struct KeepAChangelogFormatter;

impl KeepAChangelogFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeepAChangelogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for KeepAChangelogFormatter {
    fn name(&self) -> &'static str {
        "keepachangelog"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Formats changelog following Keep a Changelog convention"
    }
}

impl ChangelogFormatter for KeepAChangelogFormatter {
    fn format(&self, release: &Release) -> String {
        let mut output = String::new();

        let version = &release.version;
        _ = writeln!(
            output,
            "## [{}.{}.{}] - {}",
            version.major,
            version.minor,
            version.patch,
            release.date.format("%Y-%m-%d")
        );

        if release.changes.is_empty() {
            _ = writeln!(output, "{NO_CHANGES_BULLET}");
            return output;
        }

        for (index, (change_type, records)) in release.changes.groups().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            _ = writeln!(output, "### {change_type}");
            for record in records {
                _ = writeln!(output, "- {}", record.description());
            }
        }

        output
    }
}
