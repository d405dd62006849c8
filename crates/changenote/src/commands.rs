//! Subcommands.

pub mod add;
pub mod list;
pub mod merge;
