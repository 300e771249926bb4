//! Top-level error types for the CLI.
//!
//! This module defines the error returned by [`crate::cli::run`], with
//! actionable recovery suggestions for the user.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Resolution and generation errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as Engine;

        match self {
            BundlerError::Bundler(err @ Engine::MissingPackage { .. }) => {
                let mut suggestions = Vec::new();
                if let Some(hint) = err.install_hint() {
                    suggestions.push(format!("Run `{hint}` in the project root"));
                }
                suggestions.push("Check the package name in the site settings".to_string());
                suggestions
            }
            BundlerError::Bundler(Engine::Probe { .. }) => vec![
                "Check read permissions on node_modules".to_string(),
            ],
            BundlerError::Bundler(Engine::Fs { .. }) => vec![
                "Check that the output directory is writable".to_string(),
            ],
            BundlerError::Bundler(Engine::InvalidSettings(_))
            | BundlerError::Json(_)
            | BundlerError::Toml(_) => vec!["Fix the site settings file and retry".to_string()],
            BundlerError::Cli(_) => vec!["Run with --help to see the accepted arguments".to_string()],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
