//! Manifest version stamping.
//!
//! A single pattern recognizes a version number right after one of several
//! key phrases, so the same code stamps:
//! - `package.json` (`"version": "1.2.3"`)
//! - MSBuild projects (`<Version>`, `<PackageVersion>`)
//! - assembly attributes (`[assembly: AssemblyVersion("1.2.3.0")]`)
//! - app manifests (`<Identity ... Version="1.2.3.0"`)
//! - free text headers (`Version: 1.2.3`)

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use semver::Version;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Package descriptor looked up first during detection.
pub const PACKAGE_JSON: &str = "package.json";

/// Key phrases that may precede a version number, matched ignoring case.
const KEY_PHRASES: &[&str] = &[
    r#""version"\s*:\s*""#,
    r"<Version>",
    r"<PackageVersion>",
    r#"\[assembly:\s*AssemblyVersion\(""#,
    r#"<Identity[^>]*\sVersion=""#,
    r"Version:\s*",
];

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let keys = KEY_PHRASES.join("|");
    Regex::new(&format!(
        r"(?i)(?P<key>{keys})(?P<version>\d+\.\d+\.\d+)(?:\.(?P<revision>\d+))?"
    ))
    .expect("invalid regex")
});

static MSBUILD_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<Version>").expect("invalid regex"));

/// Errors that can occur when stamping a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Nothing to stamp was found in the search directory.
    #[error(
        "could not find a 'package.json' file or a '.csproj' file with a 'Version' tag in {dir}"
    )]
    NotDetected {
        /// The directory that was searched.
        dir: PathBuf,
    },

    /// The given manifest does not exist.
    #[error("could not find the given project file: {0}")]
    NotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Which manifest to stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestTarget {
    /// Detect a manifest in this directory.
    Detect(PathBuf),
    /// Stamp this file.
    Explicit(PathBuf),
}

impl ManifestTarget {
    /// Resolves the target to a file path.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::NotFound`] for a missing explicit file, or
    /// [`ManifestError::NotDetected`] when detection finds nothing.
    pub fn resolve(&self) -> ManifestResult<PathBuf> {
        match self {
            Self::Detect(dir) => detect_manifest(dir),
            Self::Explicit(path) if path.is_file() => Ok(path.clone()),
            Self::Explicit(path) => Err(ManifestError::NotFound(path.clone())),
        }
    }
}

/// Result of stamping a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    /// The stamped file.
    pub path: PathBuf,
    /// The text that replaced the old version, e.g. `1.2.4` or `1.2.4.7`.
    pub stamped: Option<String>,
    /// Whether the file content changed.
    pub changed: bool,
}

/// Finds a manifest in `dir`.
///
/// `package.json` wins; otherwise the first `*.csproj` (by name) that
/// contains a `<Version>` element.
///
/// # Errors
///
/// Returns [`ManifestError::NotDetected`] if neither exists.
pub fn detect_manifest(dir: &Path) -> ManifestResult<PathBuf> {
    let package_json = dir.join(PACKAGE_JSON);
    if package_json.is_file() {
        debug!(path = ?package_json, "detected package descriptor");
        return Ok(package_json);
    }

    let not_detected = || ManifestError::NotDetected {
        dir: dir.to_path_buf(),
    };
    let Ok(entries) = fs::read_dir(dir) else {
        return Err(not_detected());
    };

    let mut projects: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|extension| extension.to_str())
                    .is_some_and(|extension| extension.eq_ignore_ascii_case("csproj"))
        })
        .collect();
    projects.sort();

    projects
        .into_iter()
        .find(|path| {
            fs::read_to_string(path).is_ok_and(|content| MSBUILD_VERSION_RE.is_match(&content))
        })
        .inspect(|path| debug!(?path, "detected build project"))
        .ok_or_else(not_detected)
}

/// Replaces the first recognized version in `text`.
///
/// The revision written is `revision` when given, otherwise the revision
/// already present, otherwise none. Returns the new text and the stamped
/// version string, or `None` when no version was recognized.
#[must_use]
pub fn stamp_version(
    text: &str,
    version: &Version,
    revision: Option<u64>,
) -> Option<(String, String)> {
    let captures = VERSION_RE.captures(text)?;
    let base = format!("{}.{}.{}", version.major, version.minor, version.patch);
    let stamped = match revision.map(|revision| revision.to_string()) {
        Some(revision) => format!("{base}.{revision}"),
        None => match captures.name("revision") {
            Some(existing) => format!("{base}.{}", existing.as_str()),
            None => base,
        },
    };

    let updated = VERSION_RE.replacen(text, 1, |captures: &Captures| {
        format!("{}{stamped}", &captures["key"])
    });
    Some((updated.into_owned(), stamped))
}

/// Stamps `version` into the manifest chosen by `target`.
///
/// The file is written only when its content changes. A manifest without a
/// recognizable version is left untouched.
///
/// # Errors
///
/// Returns [`ManifestError::NotFound`] if the manifest is missing or
/// unreadable, or an IO error if writing it fails.
pub fn stamp_manifest(
    target: &ManifestTarget,
    version: &Version,
    revision: Option<u64>,
) -> ManifestResult<StampOutcome> {
    let path = target.resolve()?;
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(error) => {
            warn!(?path, %error, "manifest is not readable");
            return Err(ManifestError::NotFound(path));
        }
    };

    let Some((updated, stamped)) = stamp_version(&content, version, revision) else {
        warn!(?path, "no version found in manifest");
        return Ok(StampOutcome {
            path,
            stamped: None,
            changed: false,
        });
    };

    let changed = updated != content;
    if changed {
        fs::write(&path, updated)?;
    }
    info!(?path, %stamped, changed, "manifest stamped");

    Ok(StampOutcome {
        path,
        stamped: Some(stamped),
        changed,
    })
}
