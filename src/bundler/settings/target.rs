//! Bundle targets and build modes.

use std::{fmt, str::FromStr};

/// Site mode that carries no mode-specific overrides.
///
/// Packages resolved under this mode skip the `src/<mode>/...` tiers entirely.
pub const DEFAULT_MODE: &str = "default";

/// The kind of bundle an entry point is resolved for.
///
/// `Client` and `Server` are the two bundles the orchestrator generates.
/// Resolution also accepts extension targets (for example `amp`), which look
/// for `src/<target>` but never fall back to a package's shared `index`.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_entrypoints::bundler::BundleTarget;
///
/// let target: BundleTarget = "server".parse().unwrap();
/// assert_eq!(target, BundleTarget::Server);
/// assert!(target.uses_index_fallback());
///
/// let amp: BundleTarget = "amp".parse().unwrap();
/// assert!(!amp.uses_index_fallback());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BundleTarget {
    /// Browser bundle, one per site.
    Client,
    /// Server renderer bundle covering every site.
    Server,
    /// Extension-defined target.
    Extension(String),
}

impl BundleTarget {
    /// Name used in package paths and as the runtime binding in generated source.
    pub fn as_str(&self) -> &str {
        match self {
            BundleTarget::Client => "client",
            BundleTarget::Server => "server",
            BundleTarget::Extension(name) => name,
        }
    }

    /// Whether a mode-level or package-level `index` can stand in for this target.
    pub fn uses_index_fallback(&self) -> bool {
        matches!(self, BundleTarget::Client | BundleTarget::Server)
    }
}

impl fmt::Display for BundleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BundleTarget {
    type Err = crate::bundler::Error;

    /// Extension names must be lowercase ASCII letters and digits starting with
    /// a letter, so they are usable as identifiers in generated source.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(BundleTarget::Client),
            "server" => Ok(BundleTarget::Server),
            _ => {
                let mut chars = s.chars();
                let valid = chars.next().is_some_and(|c| c.is_ascii_lowercase())
                    && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
                if valid {
                    Ok(BundleTarget::Extension(s.to_string()))
                } else {
                    Err(crate::bundler::Error::InvalidSettings(format!(
                        "invalid bundle target \"{s}\": use lowercase letters and digits"
                    )))
                }
            }
        }
    }
}

/// Build flavour requested by the caller.
///
/// Only `development` is special; every other mode name builds like
/// production.
///
/// ```
/// use kodegen_bundler_entrypoints::bundler::BuildMode;
///
/// assert_eq!("Development".parse::<BuildMode>().unwrap(), BuildMode::Development);
/// assert_eq!("test".parse::<BuildMode>().unwrap(), BuildMode::Production);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildMode {
    /// Adds hot-module-reload wiring to client bundles.
    Development,
    /// Plain entry points.
    #[default]
    Production,
}

impl BuildMode {
    /// Whether client bundles get the HMR acceptance block.
    pub fn hot_reload(self) -> bool {
        self == BuildMode::Development
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => f.write_str("development"),
            BuildMode::Production => f.write_str("production"),
        }
    }
}

impl FromStr for BuildMode {
    type Err = crate::bundler::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = s.trim();
        if mode.is_empty() {
            Err(crate::bundler::Error::InvalidSettings(
                "build mode cannot be empty".to_string(),
            ))
        } else if mode.eq_ignore_ascii_case("development") {
            Ok(BuildMode::Development)
        } else {
            Ok(BuildMode::Production)
        }
    }
}
