//! Entry-point source generation.
//!
//! Turns a resolved package list into TypeScript source using Handlebars:
//! an imports-and-registry section for every bundle, plus a hot-module-reload
//! section for development client bundles.
//!
//! # Module Organization
//!
//! - `templates` - template source constants
//! - [`variable`] - identifier derivation for package bindings

mod templates;
pub mod variable;

pub use variable::package_variable;

use crate::bundler::{
    Error, Result,
    resolve::ResolvedPackage,
    settings::BundleTarget,
};
use handlebars::Handlebars;
use serde::Serialize;
use templates::{HOT_RELOAD_TEMPLATE, IMPORTS_TEMPLATE};

const IMPORTS: &str = "imports";
const HOT_RELOAD: &str = "hot-reload";

#[derive(Serialize)]
struct TemplateData<'a> {
    target: &'a str,
    runtime_entry: String,
    packages: Vec<PackageBinding>,
}

#[derive(Serialize)]
struct PackageBinding {
    variable: String,
    path: String,
}

/// Renders entry-point source for resolved packages.
///
/// Output depends only on the inputs, so identical package lists always
/// render byte-identical files.
pub struct EntryTemplate {
    handlebars: Handlebars<'static>,
    runtime_module: String,
}

impl std::fmt::Debug for EntryTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryTemplate")
            .field("runtime_module", &self.runtime_module)
            .finish_non_exhaustive()
    }
}

impl EntryTemplate {
    /// Registers the templates for runtime module root `runtime_module`
    /// (e.g. `@frontity/core/src`).
    pub fn new(runtime_module: impl Into<String>) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        handlebars
            .register_template_string(IMPORTS, IMPORTS_TEMPLATE)
            .map_err(|e| Error::Template(format!("failed to register imports template: {e}")))?;
        handlebars
            .register_template_string(HOT_RELOAD, HOT_RELOAD_TEMPLATE)
            .map_err(|e| {
                Error::Template(format!("failed to register hot-reload template: {e}"))
            })?;

        Ok(Self {
            handlebars,
            runtime_module: runtime_module.into(),
        })
    }

    /// Module reference of the runtime entry for `target`.
    pub fn runtime_entry(&self, target: &BundleTarget) -> String {
        format!("{}/{}", self.runtime_module, target)
    }

    /// Imports the runtime `target` function and every package, collects the
    /// packages into a `packages` registry and default-exports
    /// `target({ packages })`.
    pub fn imports(&self, packages: &[ResolvedPackage], target: &BundleTarget) -> Result<String> {
        let data = TemplateData {
            target: target.as_str(),
            runtime_entry: literal(&self.runtime_entry(target))?,
            packages: bindings(packages)?,
        };
        self.render(IMPORTS, &data)
    }

    /// Appends the HMR block to `template`.
    ///
    /// The block watches the runtime client entry and every package path. On
    /// update it requires them again, rebuilds the registry and calls the client
    /// entry with `isHmr: true`.
    pub fn with_hot_reload(&self, template: String, packages: &[ResolvedPackage]) -> Result<String> {
        let data = TemplateData {
            target: BundleTarget::Client.as_str(),
            runtime_entry: literal(&self.runtime_entry(&BundleTarget::Client))?,
            packages: bindings(packages)?,
        };
        let block = self.render(HOT_RELOAD, &data)?;

        let mut out = template;
        out.push_str(&block);
        Ok(out)
    }

    fn render(&self, name: &str, data: &TemplateData<'_>) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(|e| Error::Template(format!("failed to render {name} template: {e}")))
    }
}

fn bindings(packages: &[ResolvedPackage]) -> Result<Vec<PackageBinding>> {
    packages
        .iter()
        .map(|p| {
            Ok(PackageBinding {
                variable: package_variable(&p.name, &p.mode),
                path: literal(&p.path)?,
            })
        })
        .collect()
}

/// Quoted, escaped string literal valid in the generated source.
fn literal(value: &str) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| Error::Template(format!("failed to quote {value:?}: {e}")))
}
