//! Configuration structures for entry-point generation.
//!
//! This module provides the site definitions, bundle targets and build modes,
//! and the [`Settings`] / [`SettingsBuilder`] pair that carries them into the
//! orchestrator.

mod builder;
mod core;
mod site;
mod target;

pub use builder::SettingsBuilder;
pub use self::core::{DEFAULT_RUNTIME_MODULE, Settings, entry_points_dir};
pub use site::Site;
pub use target::{BuildMode, BundleTarget, DEFAULT_MODE};
