//! Strategy traits for changenote.
//!
//! Each stage of a release is a pluggable strategy:
//! - [`Plugin`]: Base trait for all plugins
//! - [`ChangeParser`]: Turns a change-note file name into a record
//! - [`BumpStrategy`]: Determines the version bump type
//! - [`ChangelogFormatter`]: Renders a release section

mod traits;

pub use traits::Plugin;
pub use traits::bumper::{BumpStrategy, BumpType};
pub use traits::formatter::{ChangelogFormatter, Release};
pub use traits::parser::ChangeParser;
