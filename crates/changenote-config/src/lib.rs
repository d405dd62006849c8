//! Configuration management for changenote.
//!
//! This crate handles discovering and loading the optional `.changelog.json`
//! rules file, plus the upward directory search shared with the changelog
//! lookup.

mod error;
mod loader;
mod paths;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_config_from, load_config};
pub use paths::{find_ancestor_containing, find_entry_ignore_case};
pub use schema::{BumpingRule, Config, DEFAULT_BREAKING_KEYWORD, NO_CHANGES};
