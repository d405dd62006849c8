//! Add command.

use std::fs;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;

use changenote_change::{ChangeType, note_file_name};
use changenote_config::{Config, find_config_from};
use changenote_core::find_nearest_changes_dir;

/// Arguments for the add command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Change type: Added, Changed, Deprecated, Removed, Fixed, Security
    /// (or a, c, d, r, f, s)
    pub change_type: ChangeType,

    /// Description of the change (quote it when it has several words)
    pub description: String,

    /// Category of the change, e.g. API or FE
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Runs the add command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: AddArgs) -> Result<()> {
    let working_dir = std::env::current_dir().context("failed to read the working directory")?;
    let config = find_config_from(&working_dir).context("failed to load configuration")?;

    let description = args.description.trim();
    if description.is_empty() {
        bail!("the description must not be empty");
    }
    if description.contains(std::path::is_separator) {
        bail!("the description must not contain path separators");
    }

    let category = resolve_category(config.as_ref(), args.category.as_deref())?;

    let changes_dir = find_nearest_changes_dir(&working_dir)
        .context("failed to find a 'changes' directory")?;
    let path = changes_dir.join(note_file_name(
        args.change_type,
        category.as_deref(),
        description,
    ));

    fs::File::create(&path)
        .with_context(|| format!("failed to create change note {}", path.display()))?;
    info!(?path, "change note created");
    println!("{}", path.display());

    Ok(())
}

/// Validates a category against the configured list.
///
/// With configured categories the category is required and the configured
/// spelling is returned.
fn resolve_category(config: Option<&Config>, category: Option<&str>) -> Result<Option<String>> {
    let category = category.map(str::trim).filter(|category| !category.is_empty());

    let Some(config) = config.filter(|config| !config.categories.is_empty()) else {
        return Ok(category.map(str::to_string));
    };

    let allowed = config.categories.join(", ");
    let Some(category) = category else {
        bail!("a category is required, expected one of: {allowed}");
    };

    config
        .canonical_category(category)
        .map(|canonical| Some(canonical.to_string()))
        .with_context(|| format!("unknown category '{category}', expected one of: {allowed}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(categories: &[&str]) -> Config {
        Config {
            categories: categories.iter().map(ToString::to_string).collect(),
            bumping_rule: None,
        }
    }

    #[test]
    fn test_resolve_category_without_config() {
        assert_eq!(resolve_category(None, None).unwrap(), None);
        assert_eq!(
            resolve_category(None, Some(" API ")).unwrap(),
            Some("API".to_string())
        );
        assert_eq!(resolve_category(None, Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_resolve_category_uses_configured_spelling() {
        let config = config(&["API", "Front End"]);
        assert_eq!(
            resolve_category(Some(&config), Some("front end")).unwrap(),
            Some("Front End".to_string())
        );
    }

    #[test]
    fn test_resolve_category_required() {
        let config = config(&["API"]);
        let err = resolve_category(Some(&config), None).unwrap_err();
        assert!(err.to_string().contains("a category is required"));
    }

    #[test]
    fn test_resolve_category_unknown() {
        let config = config(&["API"]);
        let err = resolve_category(Some(&config), Some("BE")).unwrap_err();
        assert!(err.to_string().contains("unknown category 'BE'"));
    }

    #[test]
    fn test_resolve_category_empty_list_accepts_anything() {
        let config = config(&[]);
        assert_eq!(
            resolve_category(Some(&config), Some("Whatever")).unwrap(),
            Some("Whatever".to_string())
        );
    }
}
