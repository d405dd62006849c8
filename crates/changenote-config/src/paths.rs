//! Directory search helpers.

use std::path::{Path, PathBuf};

/// Walks from `start` up to the filesystem root and returns the first
/// directory for which `predicate` holds.
///
/// `start` itself is tested first.
pub fn find_ancestor_containing<P>(start: &Path, predicate: P) -> Option<PathBuf>
where
    P: Fn(&Path) -> bool,
{
    start
        .ancestors()
        .find(|dir| predicate(dir))
        .map(Path::to_path_buf)
}

/// Returns the path of the entry in `dir` whose name equals `name`, ignoring
/// ASCII case.
///
/// An exact match is preferred over a case-insensitive one. Unreadable
/// directories yield `None`.
pub fn find_entry_ignore_case(dir: &Path, name: &str) -> Option<PathBuf> {
    let exact = dir.join(name);
    if exact.exists() {
        return Some(exact);
    }

    std::fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .find(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|entry_name| entry_name.eq_ignore_ascii_case(name))
        })
        .map(|entry| entry.path())
}
