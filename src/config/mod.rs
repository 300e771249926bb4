//! Site settings discovery from a JSON or TOML file.

use crate::bundler::Site;
use crate::error::{BundlerError, CliError, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings file layout: either a bare list of sites or a table holding one.
#[derive(Deserialize)]
#[serde(untagged)]
enum SitesFile {
    List(Vec<Site>),
    Table { sites: Vec<Site> },
}

impl SitesFile {
    fn into_sites(self) -> Vec<Site> {
        match self {
            SitesFile::List(sites) | SitesFile::Table { sites } => sites,
        }
    }
}

/// Load the site list from `path`.
///
/// The format follows the extension: `.json` or `.toml`.
///
/// ```toml
/// [[sites]]
/// name = "blog"
/// packages = ["@frontity/mars-theme", "@frontity/wp-source"]
///
/// [[sites]]
/// name = "blog-amp"
/// mode = "amp"
/// packages = ["@frontity/mars-theme"]
/// ```
pub fn load_sites(path: &Path) -> Result<Vec<Site>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_settings".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let file: SitesFile = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)?,
        Some("toml") => toml::from_str(&content)?,
        _ => {
            return Err(BundlerError::Cli(CliError::InvalidArguments {
                reason: format!(
                    "Unsupported settings file {}: expected a .json or .toml file",
                    path.display()
                ),
            }));
        }
    };

    let sites = file.into_sites();
    log::debug!("Loaded {} sites from {}", sites.len(), path.display());
    Ok(sites)
}
