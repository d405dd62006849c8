//! Core library for changenote.
//!
//! This crate provides the orchestration of a release: collecting change
//! notes, computing the next version, rendering and splicing the changelog
//! section, and stamping the version into a manifest.

mod changelog;
mod collector;
mod error;
mod manifest;
mod pipeline;
mod release;
mod version;

pub use changelog::{CHANGELOG_FILE_NAME, locate_changelog, splice_section};
pub use collector::{
    CHANGES_DIR_NAME, collect_changes, find_nearest_changes_dir, list_note_names,
    remove_change_files,
};
pub use error::{CoreError, CoreResult, ErrorKind};
pub use manifest::{
    ManifestError, ManifestResult, ManifestTarget, StampOutcome, detect_manifest, stamp_manifest,
    stamp_version,
};
pub use pipeline::Pipeline;
pub use release::{ReleaseManager, ReleaseOptions, ReleaseOutcome};
pub use version::VersionManager;
