//! # Error Handling
//!
//! Centralized error type for the `repo-forge` library, built with
//! `thiserror`. The variants mirror the tool's two-tier failure model:
//! everything here is *fatal* when it reaches the top of the run; only the
//! remote-hosting step downgrades its failure to a warning, and it does so
//! before an `Error` ever escapes (see `hosting`).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for repo-forge operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing a descriptor configuration file.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An external command could not be spawned at all.
    ///
    /// Typically means the program (`git`, `gh`) is not installed or not
    /// on `PATH`.
    #[error("Failed to spawn `{program}`: {message}")]
    CommandSpawn { program: String, message: String },

    /// An external command ran but exited with a non-zero status.
    #[error("Command `{program} {}` failed in {}: {stderr}", args.join(" "), dir.display())]
    CommandFailed {
        program: String,
        args: Vec<String>,
        dir: PathBuf,
        stderr: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
