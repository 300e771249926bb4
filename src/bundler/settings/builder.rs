//! Builder for constructing Settings.

use super::{BuildMode, Settings, Site, core::DEFAULT_RUNTIME_MODULE};
use crate::bundler::{
    Error, Result,
    error::{Context, ErrorExt},
};
use path_absolutize::Absolutize;
use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_entrypoints::bundler::{BuildMode, SettingsBuilder, Site};
///
/// # fn example() -> kodegen_bundler_entrypoints::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .sites(vec![Site::new("main", "default", ["@frontity/mars-theme"])])
///     .out_dir("build")
///     .build_mode(BuildMode::Development)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    sites: Vec<Site>,
    out_dir: Option<PathBuf>,
    build_mode: BuildMode,
    runtime_module: Option<String>,
    project_root: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the sites to generate entry points for.
    ///
    /// # Required
    ///
    /// At least one site is required.
    pub fn sites(mut self, sites: Vec<Site>) -> Self {
        self.sites = sites;
        self
    }

    /// Sets the output root.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build mode.
    ///
    /// Default: [`BuildMode::Production`]
    pub fn build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = mode;
        self
    }

    /// Overrides the runtime module root.
    ///
    /// Default: `@frontity/core/src`
    pub fn runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = Some(module.into());
        self
    }

    /// Sets the project root whose `node_modules` holds the packages.
    ///
    /// Default: current directory
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `out_dir` is missing, if it is the project root,
    /// its `node_modules` or an ancestor of either (the output directory gets
    /// emptied), or if the sites are invalid: empty list, empty or duplicate
    /// names, names that are not a single path component, or empty package
    /// names.
    pub fn build(self) -> Result<Settings> {
        let out_dir = self.out_dir.context("out_dir is required")?;
        let project_root = self.project_root.unwrap_or_else(|| PathBuf::from("."));
        validate_out_dir(&out_dir, &project_root)?;
        validate_sites(&self.sites)?;

        let runtime_module = self
            .runtime_module
            .unwrap_or_else(|| DEFAULT_RUNTIME_MODULE.to_string());
        if runtime_module.trim().is_empty() {
            return Err(Error::InvalidSettings(
                "runtime module cannot be empty".to_string(),
            ));
        }

        Ok(Settings::new(
            self.sites,
            out_dir,
            self.build_mode,
            runtime_module.trim_end_matches('/').to_string(),
            project_root,
        ))
    }
}

fn validate_out_dir(out_dir: &Path, project_root: &Path) -> Result<()> {
    let out = out_dir
        .absolutize()
        .fs_context("resolving output directory", out_dir)?;
    let node_modules = project_root
        .join("node_modules")
        .absolutize()
        .fs_context("resolving project root", project_root)?
        .into_owned();

    if node_modules.starts_with(&out) {
        return Err(Error::InvalidSettings(format!(
            "output directory {} would erase {}",
            out.display(),
            node_modules.display()
        )));
    }

    Ok(())
}

fn validate_sites(sites: &[Site]) -> Result<()> {
    if sites.is_empty() {
        return Err(Error::InvalidSettings("no sites configured".to_string()));
    }

    let mut names = HashSet::new();
    for site in sites {
        if !is_single_component(&site.name) {
            return Err(Error::InvalidSettings(format!(
                "site name \"{}\" must be a plain directory name",
                site.name
            )));
        }
        if !names.insert(site.name.as_str()) {
            return Err(Error::InvalidSettings(format!(
                "site name \"{}\" is used more than once",
                site.name
            )));
        }
        if site.mode.is_empty() {
            return Err(Error::InvalidSettings(format!(
                "site \"{}\" has an empty mode",
                site.name
            )));
        }
        if site.packages.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::InvalidSettings(format!(
                "site \"{}\" lists an empty package name",
                site.name
            )));
        }
    }

    Ok(())
}

fn is_single_component(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
