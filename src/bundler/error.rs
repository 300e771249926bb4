//! Error types for entry-point resolution and generation.
//!
//! Every failure here is fatal for the run. A package that has no entry point
//! for a target is not an error; it is reported as an absent resolution.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

/// Result type for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while resolving packages and writing entry points.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A package referenced by a site is not installed.
    #[error(
        "The package \"{name}\" doesn't seem to be installed. Make sure you did \"npm install {name}\""
    )]
    MissingPackage {
        /// Package name as written in the site settings
        name: String,
    },

    /// The existence probe failed for a reason other than "not found".
    #[error("failed to probe {}: {source}", path.display())]
    Probe {
        /// Path that was probed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A filesystem operation on the output tree failed.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An entry-point template could not be registered or rendered.
    #[error("template error: {0}")]
    Template(String),

    /// Site settings are malformed.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Catch-all with a message.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// The command that would fix this error, if there is one.
    pub fn install_hint(&self) -> Option<String> {
        match self {
            Error::MissingPackage { name } => Some(format!("npm install {name}")),
            _ => None,
        }
    }
}

/// Turn a missing value into an error.
pub trait Context<T> {
    /// Replace `None` with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Attach a path and an action to raw I/O errors.
pub trait ErrorExt<T> {
    /// Wrap an I/O error into [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}
