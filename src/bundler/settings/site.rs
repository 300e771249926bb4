//! Site definitions.

use super::target::DEFAULT_MODE;
use serde::{Deserialize, Deserializer};

/// One deployable front-end configuration.
///
/// A site names a mode and an ordered list of packages. The order of
/// `packages` is the import order in the generated entry points.
///
/// # Configuration
///
/// ```toml
/// [[sites]]
/// name = "blog"
/// mode = "amp"
/// packages = [
///     "@frontity/mars-theme",
///     { name = "@frontity/wp-source" },
///     { name = "@frontity/analytics", active = false },
/// ]
/// ```
///
/// `name` defaults to `"main"` and `mode` to `"default"`. Packages marked
/// `active = false` are dropped while loading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Site {
    /// Site name. Used as the client bundle name and output sub-directory.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Mode selecting `src/<mode>` overrides in packages.
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Package identifiers, in import order.
    #[serde(default, deserialize_with = "active_packages")]
    pub packages: Vec<String>,
}

impl Site {
    /// Creates a site from its parts.
    pub fn new<N, M, I, P>(name: N, mode: M, packages: I) -> Self
    where
        N: Into<String>,
        M: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            mode: mode.into(),
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }
}

fn default_site_name() -> String {
    "main".to_string()
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

fn enabled() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PackageEntry {
    Name(String),
    Table {
        name: String,
        #[serde(default = "enabled")]
        active: bool,
    },
}

fn active_packages<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<PackageEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            PackageEntry::Name(name) => Some(name),
            PackageEntry::Table { name, active } => active.then_some(name),
        })
        .collect())
}
