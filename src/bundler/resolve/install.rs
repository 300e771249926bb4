//! Installation check run before any resolution.

use super::probe::EntryProbe;
use crate::bundler::{Error, Result, settings::Site};
use futures::future::try_join_all;
use indexmap::IndexSet;

/// Fails with [`Error::MissingPackage`] if any package of `sites` is not installed.
///
/// Installation does not depend on the mode, so names are checked once each.
/// When several are missing, the first one in settings order is reported.
pub async fn check_installed<P: EntryProbe>(probe: &P, sites: &[Site]) -> Result<()> {
    let names: IndexSet<&str> = sites
        .iter()
        .flat_map(|site| site.packages.iter().map(String::as_str))
        .collect();

    let installed = try_join_all(names.iter().map(|name| probe.package_installed(name))).await?;

    match names
        .iter()
        .zip(installed)
        .find_map(|(name, ok)| (!ok).then_some(*name))
    {
        Some(name) => Err(Error::MissingPackage {
            name: name.to_string(),
        }),
        None => {
            log::debug!("{} packages installed", names.len());
            Ok(())
        }
    }
}
