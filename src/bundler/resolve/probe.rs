//! Filesystem existence probes.
//!
//! Resolution never touches the filesystem directly; it asks an
//! [`EntryProbe`]. The default [`NodeModulesProbe`] answers from a
//! `node_modules` directory.

use crate::bundler::{Error, Result};
use std::{
    future::Future,
    io,
    path::{Path, PathBuf},
};

/// Source extensions tried, in order, when probing a module reference.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];

/// Existence checks consumed by resolution and the installation check.
///
/// "Not found" is `Ok(false)`. Any other failure is an error and must not be
/// reported as absence.
pub trait EntryProbe: Sync {
    /// Whether a loadable source file exists for a module reference such as
    /// `@scope/pkg/src/client/index`.
    fn entry_exists(&self, module: &str) -> impl Future<Output = Result<bool>> + Send;

    /// Whether the package `name` is installed.
    fn package_installed(&self, name: &str) -> impl Future<Output = Result<bool>> + Send;
}

/// Probe backed by a `node_modules` directory.
#[derive(Clone, Debug)]
pub struct NodeModulesProbe {
    root: PathBuf,
    extensions: Vec<String>,
}

impl NodeModulesProbe {
    /// Probe rooted at `node_modules` with the default extensions.
    pub fn new(node_modules: impl Into<PathBuf>) -> Self {
        Self {
            root: node_modules.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replaces the extension list.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// The `node_modules` directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl EntryProbe for NodeModulesProbe {
    fn entry_exists(&self, module: &str) -> impl Future<Output = Result<bool>> + Send {
        let candidates: Vec<PathBuf> = self
            .extensions
            .iter()
            .map(|ext| self.root.join(format!("{module}{ext}")))
            .collect();

        async move {
            for path in candidates {
                if is_file(&path).await? {
                    log::trace!("found entry {}", path.display());
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }

    fn package_installed(&self, name: &str) -> impl Future<Output = Result<bool>> + Send {
        let path = self.root.join(name);
        async move {
            match tokio::fs::metadata(&path).await {
                Ok(meta) => Ok(meta.is_dir()),
                Err(e) if is_absent(&e) => Ok(false),
                Err(source) => Err(Error::Probe { path, source }),
            }
        }
    }
}

async fn is_file(path: &Path) -> Result<bool> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if is_absent(&e) => Ok(false),
        Err(source) => Err(Error::Probe {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// A path component that is a file (`src/server.ts` probed as `src/server/index`)
/// means absent, not broken.
fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
