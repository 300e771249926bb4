//! Package entry-point resolution.
//!
//! - [`probe`] - filesystem existence checks behind the [`EntryProbe`] trait
//! - [`entry_point`] - the ordered fallback search for one package
//! - [`packages`] - deduplicated, concurrent resolution of a site set
//! - [`install`] - fail-fast check that every package is installed

pub mod entry_point;
pub mod install;
pub mod packages;
pub mod probe;

#[cfg(test)]
pub(crate) mod testing;

pub use entry_point::{candidates, resolve_entry_point};
pub use install::check_installed;
pub use packages::{PackageRef, ResolvedPackage, package_refs, resolve_packages};
pub use probe::{DEFAULT_EXTENSIONS, EntryProbe, NodeModulesProbe};
