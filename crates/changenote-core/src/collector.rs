//! Change-note collection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use changenote_change::ChangeSet;
use changenote_config::Config;
use changenote_plugin::ChangeParser;
use tracing::{debug, info, warn};

use crate::{CoreError, CoreResult};

/// Conventional name of the directory holding change notes.
pub const CHANGES_DIR_NAME: &str = "changes";

/// Returns the file names and paths of the notes in a changes directory, sorted by name.
///
/// Only regular files directly inside `changes_dir` are listed; names that
/// are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns [`CoreError::ChangesDirNotFound`] if the directory does not exist.
pub fn list_note_names(changes_dir: &Path) -> CoreResult<Vec<(String, PathBuf)>> {
    if !changes_dir.is_dir() {
        return Err(CoreError::ChangesDirNotFound(changes_dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(changes_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push((name, entry.path())),
            Err(name) => debug!(?name, "skipping non UTF-8 file name"),
        }
    }
    names.sort();

    Ok(names)
}

/// Parses every note in `changes_dir` and keeps the accepted ones.
///
/// Rejected names and notes with a category outside the configured list are
/// left on disk and only logged.
///
/// # Errors
///
/// Returns [`CoreError::ChangesDirNotFound`] if the directory does not exist.
pub fn collect_changes(
    parser: &dyn ChangeParser,
    changes_dir: &Path,
    config: Option<&Config>,
) -> CoreResult<ChangeSet> {
    let notes = list_note_names(changes_dir)?;
    let total = notes.len();
    let mut changes = ChangeSet::new();

    for (name, path) in notes {
        let Some(record) = parser.parse(&name, &path) else {
            debug!(file = %name, "rejected change note");
            continue;
        };

        if let Some(config) = config
            && !config.is_valid_category(record.category())
        {
            debug!(file = %name, category = ?record.category(), "category not allowed");
            continue;
        }

        changes.insert(record);
    }

    info!(
        accepted = changes.len(),
        rejected = total - changes.len(),
        dir = %changes_dir.display(),
        "collected change notes"
    );

    Ok(changes)
}

/// Deletes the note file of every accepted record.
///
/// Files that are already gone are skipped. Returns the number removed.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be removed.
pub fn remove_change_files(changes: &ChangeSet) -> CoreResult<usize> {
    let mut removed = 0;
    for record in changes.records() {
        let path = record.source_path();
        match fs::remove_file(path) {
            Ok(()) => {
                debug!(?path, "removed change note");
                removed += 1;
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(?path, "change note already removed");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(removed)
}

/// Finds the `changes` directory closest in depth to `start`.
///
/// Candidates are `changes` directories directly inside `start` or any of its
/// ancestors, and any `changes` directory below `start`. The candidate whose
/// parent depth differs least from the depth of `start` wins; ties go to the
/// ancestor closest to the root, then to the first descendant found.
///
/// # Errors
///
/// Returns [`CoreError::ChangesDirNotFound`] if no candidate exists.
pub fn find_nearest_changes_dir(start: &Path) -> CoreResult<PathBuf> {
    let mut candidates: Vec<PathBuf> = start
        .ancestors()
        .map(|dir| dir.join(CHANGES_DIR_NAME))
        .filter(|candidate| candidate.is_dir())
        .collect();
    candidates.reverse();
    // `start/changes` is found by both walks.
    candidates.extend(
        find_descendant_dirs(start, CHANGES_DIR_NAME)
            .into_iter()
            .filter(|candidate| candidate.parent() != Some(start)),
    );

    let start_depth = start.components().count();
    candidates
        .into_iter()
        .min_by_key(|candidate| {
            let parent_depth = candidate.components().count() - 1;
            parent_depth.abs_diff(start_depth)
        })
        .inspect(|dir| debug!(?dir, "nearest changes directory"))
        .ok_or_else(|| CoreError::ChangesDirNotFound(start.join(CHANGES_DIR_NAME)))
}

fn find_descendant_dirs(root: &Path, name: &str) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        let mut children: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|file_type| file_type.is_dir()))
            .map(|entry| entry.path())
            .collect();
        children.sort();

        for child in children.into_iter().rev() {
            if child.file_name().is_some_and(|file_name| file_name == name) {
                found.push(child.clone());
            }
            pending.push(child);
        }
    }

    found
}
