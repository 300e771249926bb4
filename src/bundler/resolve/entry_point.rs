//! Entry-point resolution for a single package.
//!
//! A package picks its entry point purely through its file layout. For a
//! package `pkg`, mode `amp` and target `client`, the lookup order is:
//!
//! | # | candidate                 | when                          |
//! |---|---------------------------|-------------------------------|
//! | 1 | `pkg/src/amp/client`      | mode is not `default`         |
//! | 2 | `pkg/src/amp/client/index`| mode is not `default`         |
//! | 3 | `pkg/src/amp`             | mode is not `default`, client/server |
//! | 4 | `pkg/src/amp/index`       | mode is not `default`, client/server |
//! | 5 | `pkg/src/client`          | always                        |
//! | 6 | `pkg/src/client/index`    | always                        |
//! | 7 | `pkg/src/index`           | client/server                 |
//!
//! The first candidate the probe confirms wins and nothing after it is probed.

use super::probe::EntryProbe;
use crate::bundler::{
    Result,
    settings::{BundleTarget, DEFAULT_MODE},
};

/// Ordered module references to try for `(name, mode, target)`.
///
/// Most specific first. Pure; performs no I/O.
pub fn candidates(name: &str, mode: &str, target: &BundleTarget) -> Vec<String> {
    let index_fallback = target.uses_index_fallback();
    let target = target.as_str();
    let mut out = Vec::with_capacity(7);

    if mode != DEFAULT_MODE {
        out.push(format!("{name}/src/{mode}/{target}"));
        out.push(format!("{name}/src/{mode}/{target}/index"));
        if index_fallback {
            out.push(format!("{name}/src/{mode}"));
            out.push(format!("{name}/src/{mode}/index"));
        }
    }

    out.push(format!("{name}/src/{target}"));
    out.push(format!("{name}/src/{target}/index"));
    if index_fallback {
        out.push(format!("{name}/src/index"));
    }

    out
}

/// Resolves the entry point of package `name` for `mode` and `target`.
///
/// Returns `Ok(None)` when the package has no entry point for the target;
/// callers leave such packages out of the bundle.
///
/// # Errors
///
/// Probe failures other than "not found" are returned unchanged.
pub async fn resolve_entry_point<P: EntryProbe>(
    probe: &P,
    name: &str,
    mode: &str,
    target: &BundleTarget,
) -> Result<Option<String>> {
    for candidate in candidates(name, mode, target) {
        if probe.entry_exists(&candidate).await? {
            log::debug!("{name} ({mode}, {target}) -> {candidate}");
            return Ok(Some(candidate));
        }
    }

    log::debug!("{name} ({mode}, {target}) has no entry point");
    Ok(None)
}
