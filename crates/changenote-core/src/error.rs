//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::ManifestError;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The changes directory does not exist.
    #[error("changes directory not found: {0}")]
    ChangesDirNotFound(PathBuf),

    /// No changelog file in the given directory.
    #[error("changelog file not found in {0}")]
    ChangelogNotFound(PathBuf),

    /// The changelog has no `## ` heading to insert above.
    #[error("changelog {0} has no version heading to insert above")]
    NoVersionHeading(PathBuf),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] changenote_config::ConfigError),

    /// Manifest error.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// The latest version heading in the changelog cannot be parsed.
    #[error("invalid version heading: {0}")]
    InvalidVersionHeading(String),

    /// Bumping would overflow a version component.
    #[error("cannot bump version {0}: component overflow")]
    VersionOverflow(semver::Version),

    /// Version parsing error.
    #[error("version error: {0}")]
    Version(#[from] semver::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required file or directory is missing.
    NotFound,
    /// Input could not be parsed.
    InvalidFormat,
    /// Any other filesystem failure.
    Io,
}

impl CoreError {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ChangesDirNotFound(_)
            | Self::ChangelogNotFound(_)
            | Self::NoVersionHeading(_)
            | Self::Config(changenote_config::ConfigError::NotFound(_))
            | Self::Manifest(ManifestError::NotDetected { .. } | ManifestError::NotFound(_)) => {
                ErrorKind::NotFound
            }
            Self::Config(changenote_config::ConfigError::InvalidJson { .. })
            | Self::InvalidVersionHeading(_)
            | Self::VersionOverflow(_)
            | Self::Version(_) => ErrorKind::InvalidFormat,
            Self::Config(changenote_config::ConfigError::Io(_))
            | Self::Manifest(ManifestError::Io(_))
            | Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
