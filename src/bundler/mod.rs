//! Entry-point resolution and generation.
//!
//! Resolves, for every configured site, the source file each package exposes
//! for the client and server bundles, then writes the entry-point files that
//! register those packages with the rendering runtime.
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_entrypoints::bundler::{BuildMode, Bundler, SettingsBuilder, Site};
//!
//! # async fn example() -> kodegen_bundler_entrypoints::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .sites(vec![
//!         Site::new("blog", "default", ["@frontity/mars-theme", "@frontity/wp-source"]),
//!         Site::new("blog-amp", "amp", ["@frontity/mars-theme"]),
//!     ])
//!     .out_dir("build")
//!     .build_mode(BuildMode::Development)
//!     .build()?;
//!
//! let bundler = Bundler::new(settings)?;
//! bundler.prepare_out_dir().await?;
//! let bundles = bundler.generate_entry_points().await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod resolve;
pub mod settings;
pub mod template;
pub mod utils;

pub use builder::{Bundler, prepare_out_dir};
pub use error::{Error, Result};
pub use resolve::{EntryProbe, NodeModulesProbe, ResolvedPackage};
pub use settings::{BuildMode, BundleTarget, DEFAULT_MODE, Settings, SettingsBuilder, Site};

use std::path::PathBuf;

/// A generated entry point handed to the downstream bundler.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Bundle {
    /// Bundle name: the site name for client bundles, `server` for the server bundle.
    pub name: String,
    /// Path of the generated entry-point file.
    pub path: PathBuf,
}
