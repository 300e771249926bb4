//! Command line interface for the entry-point generator.
//!
//! Loads site settings, prepares the output directory and writes every entry
//! point, then reports the bundles for the downstream build.

mod args;

pub use args::Args;

use crate::bundler::{Bundle, Bundler, SettingsBuilder};
use crate::config;
use crate::error::{CliError, Result};
use path_absolutize::Absolutize;
use std::io::Write;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Execute a parsed command line.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let sites = config::load_sites(&args.settings)?;

    let project_root = args.root.absolutize()?.into_owned();
    let out_dir = args.out_dir.absolutize()?.into_owned();

    let mut builder = SettingsBuilder::new()
        .sites(sites)
        .out_dir(&out_dir)
        .build_mode(args.mode)
        .project_root(&project_root);
    if let Some(runtime) = &args.runtime {
        builder = builder.runtime_module(runtime.as_str());
    }
    let settings = builder.build()?;

    if !args.no_clean && args.settings.absolutize()?.starts_with(&out_dir) {
        return Err(CliError::InvalidArguments {
            reason: format!(
                "settings file {} is inside the output directory {}, which gets emptied",
                args.settings.display(),
                out_dir.display()
            ),
        }
        .into());
    }

    log::info!(
        "Generating {} entry points for {} sites into {}",
        settings.build_mode(),
        settings.sites().len(),
        out_dir.display()
    );

    let bundler = Bundler::new(settings)?;
    if args.no_clean {
        log::debug!("Keeping existing contents of {}", out_dir.display());
    } else {
        bundler.prepare_out_dir().await?;
    }

    let bundles = bundler.generate_entry_points().await?;
    print_bundles(&bundles, args.json)?;

    Ok(0)
}

fn print_bundles(bundles: &[Bundle], json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, bundles)?;
        writeln!(out)?;
    } else {
        for bundle in bundles {
            writeln!(out, "{}\t{}", bundle.name, bundle.path.display())?;
        }
    }

    Ok(())
}
