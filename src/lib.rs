//! Entry-point generation library for multi-site front-end builds
//!
//! This library resolves which source file each package exposes for a site's
//! mode and bundle target, and synthesizes the entry points that wire those
//! packages into the rendering runtime:
//! - One server entry point covering every site
//! - One client entry point per site, with hot-reload wiring in development
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
