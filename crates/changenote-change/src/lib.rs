//! Change-note types for changenote.
//!
//! This crate provides the types shared by every stage of a release:
//! - [`ChangeType`]: one of the six Keep a Changelog sections
//! - [`ChangeRecord`]: a single change note after parsing
//! - [`ChangeSet`]: accepted records grouped by type

mod change_set;
mod change_type;
mod record;

pub use change_set::ChangeSet;
pub use change_type::{ChangeType, ParseChangeTypeError};
pub use record::{ChangeRecord, category_of, note_file_name};
