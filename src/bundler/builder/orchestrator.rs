//! Main entry-point orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that checks installation,
//! resolves package sets and writes one server entry point plus one client
//! entry point per site.

use crate::bundler::{
    Bundle, Result,
    resolve::{EntryProbe, NodeModulesProbe, check_installed, resolve_packages},
    settings::{BundleTarget, Settings, Site},
    template::EntryTemplate,
    utils::fs,
};
use futures::future::try_join_all;
use std::iter;

/// Main entry-point orchestrator.
///
/// Generic over the [`EntryProbe`] used for existence checks; [`Bundler::new`]
/// probes the project's `node_modules`.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_entrypoints::bundler::{Bundler, SettingsBuilder, Site};
///
/// # async fn example() -> kodegen_bundler_entrypoints::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .sites(vec![Site::new("main", "default", ["@frontity/mars-theme"])])
///     .out_dir("build")
///     .build()?;
///
/// let bundler = Bundler::new(settings)?;
/// bundler.prepare_out_dir().await?;
///
/// for bundle in bundler.generate_entry_points().await? {
///     println!("{}: {}", bundle.name, bundle.path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler<P = NodeModulesProbe> {
    settings: Settings,
    probe: P,
    template: EntryTemplate,
}

impl Bundler<NodeModulesProbe> {
    /// Creates a bundler probing `<project_root>/node_modules`.
    pub fn new(settings: Settings) -> Result<Self> {
        let probe = NodeModulesProbe::new(settings.node_modules_dir());
        Self::with_probe(settings, probe)
    }
}

impl<P: EntryProbe> Bundler<P> {
    /// Creates a bundler with a custom probe.
    pub fn with_probe(settings: Settings, probe: P) -> Result<Self> {
        let template = EntryTemplate::new(settings.runtime_module())?;
        Ok(Self {
            settings,
            probe,
            template,
        })
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resets the output root for a fresh build.
    ///
    /// Run once per full build, before [`Bundler::generate_entry_points`].
    pub async fn prepare_out_dir(&self) -> Result<()> {
        super::prepare::prepare_out_dir(self.settings.out_dir()).await
    }

    /// Generates every entry point and returns the bundles to build.
    ///
    /// Fails before writing anything if a package is not installed. The
    /// result lists client bundles in site order followed by the server bundle.
    pub async fn generate_entry_points(&self) -> Result<Vec<Bundle>> {
        check_installed(&self.probe, self.settings.sites()).await?;

        let (server, clients) = futures::try_join!(
            self.generate_server_entry_point(),
            self.generate_client_entry_points()
        )?;

        Ok(clients.into_iter().chain(iter::once(server)).collect())
    }

    /// Writes the server entry point covering all sites.
    ///
    /// Never includes hot-reload wiring.
    pub async fn generate_server_entry_point(&self) -> Result<Bundle> {
        let target = BundleTarget::Server;
        let packages = resolve_packages(&self.probe, self.settings.sites(), &target).await?;
        if packages.is_empty() {
            log::warn!("No package exposes a server entry point; writing an empty server bundle");
        }

        let source = self.template.imports(&packages, &target)?;

        let dir = self.settings.entry_points_dir();
        fs::create_dir_all(&dir).await?;
        let path = self.settings.server_entry_path();
        fs::write_file(&path, &source).await?;

        log::info!(
            "✓ Generated server entry point ({} packages): {}",
            packages.len(),
            path.display()
        );

        Ok(Bundle {
            name: "server".to_string(),
            path,
        })
    }

    /// Writes one client entry point per site that has client packages.
    pub async fn generate_client_entry_points(&self) -> Result<Vec<Bundle>> {
        let bundles = try_join_all(
            self.settings
                .sites()
                .iter()
                .map(|site| self.generate_client_entry_point(site)),
        )
        .await?;

        Ok(bundles.into_iter().flatten().collect())
    }

    /// Writes the client entry point for `site`.
    ///
    /// Returns `None`, without writing, when no package of the site has a
    /// client entry point.
    async fn generate_client_entry_point(&self, site: &Site) -> Result<Option<Bundle>> {
        let target = BundleTarget::Client;
        let packages = resolve_packages(&self.probe, iter::once(site), &target).await?;
        if packages.is_empty() {
            log::debug!("Site {} has no client packages; skipping", site.name);
            return Ok(None);
        }

        let mut source = self.template.imports(&packages, &target)?;
        if self.settings.build_mode().hot_reload() {
            source = self.template.with_hot_reload(source, &packages)?;
        }

        let path = self.settings.client_entry_path(site);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        fs::write_file(&path, &source).await?;

        log::info!(
            "✓ Generated client entry point for {} ({} packages): {}",
            site.name,
            packages.len(),
            path.display()
        );

        Ok(Some(Bundle {
            name: site.name.clone(),
            path,
        }))
    }
}
