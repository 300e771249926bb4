//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! that does not need the filesystem.

use crate::bundler::BuildMode;
use clap::Parser;
use std::path::PathBuf;

/// Entry-point generator for multi-site front-end builds
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_entrypoints",
    version,
    about = "Generates bundler entry points for every configured site",
    long_about = "Resolves the client and server entry point of every package listed in the site settings \
and writes the entry-point files the bundler consumes:

  <out-dir>/bundling/entry-points/server.ts
  <out-dir>/bundling/entry-points/<site>/client.ts

Usage:
  kodegen_bundler_entrypoints --settings frontity.settings.json
  kodegen_bundler_entrypoints --settings sites.toml --mode development --out-dir build

Exit code 0 = every listed bundle was written."
)]
pub struct Args {
    /// Site settings file (.json or .toml)
    #[arg(short = 's', long, value_name = "FILE")]
    pub settings: PathBuf,

    /// Output root for generated files
    #[arg(short = 'o', long, value_name = "DIR", default_value = "build")]
    pub out_dir: PathBuf,

    /// Build mode; development adds hot-reload wiring to client bundles,
    /// any other value builds for production
    #[arg(
        short,
        long,
        value_name = "MODE",
        default_value_t = BuildMode::Production,
        env = "KODEGEN_BUILD_MODE"
    )]
    pub mode: BuildMode,

    /// Project root containing node_modules
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Runtime module root imported by the entry points
    #[arg(long, value_name = "MODULE")]
    pub runtime: Option<String>,

    /// Keep the existing contents of the output directory
    #[arg(long)]
    pub no_clean: bool,

    /// Print the bundle list as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.settings.as_os_str().is_empty() {
            return Err("Settings path cannot be empty".to_string());
        }

        if self.out_dir.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }

        if self.runtime.as_deref().is_some_and(|r| r.trim().is_empty()) {
            return Err("Runtime module cannot be empty".to_string());
        }

        Ok(())
    }
}
