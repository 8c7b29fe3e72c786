//! # repo-forge Library
//!
//! Core functionality for the `repo-forge` command-line tool: one-shot
//! scaffolding of a fleet of repositories from a fixed descriptor list.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::PathBuf;
//! use repo_forge::descriptor::{Category, RepoDescriptor};
//! use repo_forge::generator::{generate, GenerateOptions, Outcome, RemoteStatus};
//! use repo_forge::output::OutputConfig;
//! use repo_forge::process::RecordingRunner;
//!
//! let repo = RepoDescriptor {
//!     name: "widgets".into(),
//!     description: "Widget helpers".into(),
//!     private: false,
//!     category: Category::Library,
//!     dependencies: vec!["@cfstudio/types".into()],
//! };
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let options = GenerateOptions {
//!     root: temp.path().to_path_buf(),
//!     org: "cfstudio".into(),
//!     skip_remote: true,
//!     quiet: true,
//! };
//!
//! // RecordingRunner stands in for git/gh
//! let runner = RecordingRunner::new();
//! let outcome = generate(&repo, &options, &runner, &OutputConfig::default()).unwrap();
//! assert_eq!(outcome, Outcome::Created { remote: RemoteStatus::Skipped });
//! assert!(temp.path().join("widgets/package.json").exists());
//! ```
//!
//! ## Core Concepts
//!
//! - **Descriptors (`descriptor`, `defaults`, `config`)**: the immutable
//!   input table: each entry names a repository, its visibility, a
//!   category, and optional dependencies. A built-in fleet is compiled in;
//!   a YAML file can replace it.
//! - **Templates (`templates`)**: pure string renderers, one per generated
//!   artifact (manifest, compiler config, source stub, ignore file, CI
//!   workflow, README, studio file).
//! - **Process seam (`process`, `vcs`, `hosting`)**: all external commands
//!   go through the `ProcessRunner` trait with discrete arguments, so the
//!   generator is testable without git or gh installed and nothing is ever
//!   interpolated into a shell string.
//! - **Generation (`generator`)**: the per-descriptor step sequence, with
//!   a structured `Outcome` distinguishing skipped targets, created
//!   repositories, and isolated remote-creation failures.
//! - **Reporting (`report`)**: the final public/private summary, computed
//!   from the descriptor list alone.

pub mod config;
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod hosting;
pub mod output;
pub mod process;
pub mod report;
pub mod templates;
pub mod vcs;
