//! Core Settings struct and implementations.

use super::{BuildMode, Site};
use std::path::{Path, PathBuf};

/// Runtime module root imported by generated entry points.
///
/// The runtime entry for a target is `<root>/<target>`, e.g.
/// `@frontity/core/src/client`.
pub const DEFAULT_RUNTIME_MODULE: &str = "@frontity/core/src";

/// Directory under the output root that receives generated entry points.
const ENTRY_POINTS_DIR: [&str; 2] = ["bundling", "entry-points"];

/// Main settings for entry-point generation.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), which validates
/// the site list.
///
/// # Output layout
///
/// ```text
/// <out_dir>/bundling/entry-points/server.ts
/// <out_dir>/bundling/entry-points/<site>/client.ts
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Sites to generate entry points for.
    sites: Vec<Site>,

    /// Output root.
    out_dir: PathBuf,

    /// Development builds get HMR wiring in client bundles.
    build_mode: BuildMode,

    /// Runtime module root.
    runtime_module: String,

    /// Project root holding `node_modules`.
    project_root: PathBuf,
}

impl Settings {
    /// Returns the configured sites.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Returns the output root.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Returns the build mode.
    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    /// Returns the runtime module root.
    pub fn runtime_module(&self) -> &str {
        &self.runtime_module
    }

    /// Returns `<project_root>/node_modules`.
    pub fn node_modules_dir(&self) -> PathBuf {
        self.project_root.join("node_modules")
    }

    /// Returns the directory that receives generated entry points.
    pub fn entry_points_dir(&self) -> PathBuf {
        entry_points_dir(&self.out_dir)
    }

    /// Path of the server entry point.
    pub fn server_entry_path(&self) -> PathBuf {
        self.entry_points_dir().join("server.ts")
    }

    /// Path of the client entry point for `site`.
    pub fn client_entry_path(&self, site: &Site) -> PathBuf {
        self.entry_points_dir().join(&site.name).join("client.ts")
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        sites: Vec<Site>,
        out_dir: PathBuf,
        build_mode: BuildMode,
        runtime_module: String,
        project_root: PathBuf,
    ) -> Self {
        Self {
            sites,
            out_dir,
            build_mode,
            runtime_module,
            project_root,
        }
    }
}

/// `<out_dir>/bundling/entry-points`.
pub fn entry_points_dir(out_dir: &Path) -> PathBuf {
    ENTRY_POINTS_DIR
        .iter()
        .fold(out_dir.to_path_buf(), |path, part| path.join(part))
}
