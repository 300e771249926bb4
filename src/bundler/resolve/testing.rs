//! In-memory probe for unit tests.

use super::probe::EntryProbe;
use crate::bundler::{Error, Result};
use std::{
    collections::HashSet,
    future::{Future, ready},
    io,
    path::PathBuf,
    sync::Mutex,
};

#[derive(Default)]
pub struct MemoryProbe {
    entries: HashSet<String>,
    installed: Option<HashSet<String>>,
    failing: Option<String>,
    probed: Mutex<Vec<String>>,
}

impl MemoryProbe {
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Restricts installed packages to `names`. Without it everything is installed.
    pub fn installed<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.installed = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn failing_on(mut self, module: impl Into<String>) -> Self {
        self.failing = Some(module.into());
        self
    }

    /// Every module reference probed so far, in call order.
    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl EntryProbe for MemoryProbe {
    fn entry_exists(&self, module: &str) -> impl Future<Output = Result<bool>> + Send {
        if let Ok(mut probed) = self.probed.lock() {
            probed.push(module.to_string());
        }
        if self.failing.as_deref() == Some(module) {
            return ready(Err(Error::Probe {
                path: PathBuf::from(module),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }));
        }
        ready(Ok(self.entries.contains(module)))
    }

    fn package_installed(&self, name: &str) -> impl Future<Output = Result<bool>> + Send {
        ready(Ok(self
            .installed
            .as_ref()
            .is_none_or(|set| set.contains(name))))
    }
}
