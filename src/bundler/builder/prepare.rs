//! Output directory preparation.

use crate::bundler::{Result, settings::entry_points_dir, utils::fs};
use std::path::Path;

/// Resets `out_dir` for a fresh build.
///
/// Creates `out_dir` if needed, removes everything inside it and pre-creates
/// `bundling/entry-points`. Running it twice leaves the same empty tree, so
/// entry points from a previous site configuration never survive into the
/// next build.
pub async fn prepare_out_dir(out_dir: &Path) -> Result<()> {
    fs::empty_dir(out_dir).await?;
    fs::create_dir_all(&entry_points_dir(out_dir)).await?;
    log::debug!("Prepared output directory {}", out_dir.display());
    Ok(())
}
