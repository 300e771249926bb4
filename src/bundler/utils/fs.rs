//! File system utilities for entry-point output.
//!
//! Idempotent directory helpers and whole-file writes, each failure carrying
//! the path it happened on.

use crate::bundler::error::{ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes everything inside `path`, keeping `path` itself.
///
/// Creates `path` if it does not exist.
pub async fn empty_dir(path: &Path) -> Result<()> {
    create_dir_all(path).await?;

    let mut entries = fs::read_dir(path)
        .await
        .fs_context("reading directory", path)?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading directory", path)?
    {
        let child = entry.path();
        let file_type = entry
            .file_type()
            .await
            .fs_context("inspecting directory entry", &child)?;

        if file_type.is_dir() {
            remove_dir_all(&child).await?;
        } else {
            match fs::remove_file(&child).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e).fs_context("removing file", &child),
            }
        }
    }

    Ok(())
}

/// Writes `contents` to `path` in one operation, replacing any previous file.
///
/// The parent directory must exist.
pub async fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .await
        .fs_context("writing entry point", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as sync_fs;

    #[tokio::test]
    async fn empty_dir_keeps_root() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("build");
        sync_fs::create_dir_all(root.join("nested/deeper")).unwrap();
        sync_fs::write(root.join("stale.js"), "x").unwrap();
        sync_fs::write(root.join("nested/deeper/old.ts"), "x").unwrap();

        empty_dir(&root).await.unwrap();

        assert!(root.is_dir());
        assert_eq!(sync_fs::read_dir(&root).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn empty_dir_creates_missing_root() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("a/b");
        empty_dir(&root).await.unwrap();
        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn remove_missing_dir_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        remove_dir_all(&tmp.path().join("nope")).await.unwrap();
    }

    #[tokio::test]
    async fn write_into_missing_dir_fails_with_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing/server.ts");
        let err = write_file(&path, "x").await.unwrap_err();
        assert!(err.to_string().contains("server.ts"));
    }
}
