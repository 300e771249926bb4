//! Entry-point orchestration and output preparation.
//!
//! This module provides the main [`Bundler`] orchestrator that turns site
//! settings into generated entry-point files.
//!
//! # Overview
//!
//! The bundler:
//! 1. Checks that every referenced package is installed
//! 2. Resolves the server package set over all sites
//! 3. Resolves one client package set per site
//! 4. Renders the entry-point templates
//! 5. Writes the files and returns the [`Bundle`](crate::bundler::Bundle) list
//!
//! # Module Organization
//!
//! - [`orchestrator`] - Main [`Bundler`] struct and generation steps
//! - [`prepare`] - Output directory reset, run once per full build

pub mod orchestrator;
pub mod prepare;

pub use orchestrator::Bundler;
pub use prepare::prepare_out_dir;
