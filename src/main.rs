//! Kodegen Bundler Entrypoints - entry-point generator for multi-site builds.
//!
//! This binary resolves package entry points for every configured site and
//! writes the server and client entry-point files consumed by the bundler.

use kodegen_bundler_entrypoints::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
