//! Package set construction.

use super::{entry_point::resolve_entry_point, probe::EntryProbe};
use crate::bundler::{
    Result,
    settings::{BundleTarget, Site},
};
use futures::future::try_join_all;
use indexmap::IndexSet;

/// Deduplication key: a package as used by one mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackageRef {
    /// Package identifier.
    pub name: String,
    /// Mode of the site that references it.
    pub mode: String,
}

/// A package with the entry point it exposes for one target.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedPackage {
    /// Package identifier.
    pub name: String,
    /// Mode it was resolved for.
    pub mode: String,
    /// Module reference of the entry point, e.g. `pkg/src/client/index`.
    pub path: String,
}

/// Unique `(mode, name)` pairs across `sites`, in first-seen order.
pub fn package_refs<'a, I>(sites: I) -> IndexSet<PackageRef>
where
    I: IntoIterator<Item = &'a Site>,
{
    sites
        .into_iter()
        .flat_map(|site| {
            site.packages.iter().map(|name| PackageRef {
                name: name.clone(),
                mode: site.mode.clone(),
            })
        })
        .collect()
}

/// Resolves every distinct package of `sites` for `target`.
///
/// Each `(mode, name)` pair is resolved once, concurrently with the others.
/// Packages without an entry point for `target` are left out. The output
/// keeps first-seen order, which becomes the import order of the bundle.
pub async fn resolve_packages<'a, P, I>(
    probe: &P,
    sites: I,
    target: &BundleTarget,
) -> Result<Vec<ResolvedPackage>>
where
    P: EntryProbe,
    I: IntoIterator<Item = &'a Site>,
{
    let refs = package_refs(sites);

    let resolved = try_join_all(refs.into_iter().map(|PackageRef { name, mode }| async move {
        let path = resolve_entry_point(probe, &name, &mode, target).await?;
        Ok::<_, crate::bundler::Error>(path.map(|path| ResolvedPackage { name, mode, path }))
    }))
    .await?;

    Ok(resolved.into_iter().flatten().collect())
}
