//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway project with a `node_modules` tree.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root().join("build")
    }

    /// Installs `name` with no source files.
    pub fn install(&self, name: &str) -> &Self {
        fs::create_dir_all(self.root().join("node_modules").join(name)).unwrap();
        self
    }

    /// Installs `name` and writes a source file at `node_modules/<name>/<rel>`.
    pub fn source(&self, name: &str, rel: &str) -> &Self {
        let path = self.root().join("node_modules").join(name).join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export default {};\n").unwrap();
        self
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn entry_point(&self, rel: &str) -> PathBuf {
        self.out_dir().join("bundling/entry-points").join(rel)
    }

    pub fn read_entry_point(&self, rel: &str) -> String {
        fs::read_to_string(self.entry_point(rel)).unwrap()
    }
}
