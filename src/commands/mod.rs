//! # CLI Command Implementations
//!
//! One module per subcommand of the `repo-forge` tool. Each module defines
//! a clap-derived `Args` struct and an `execute` function that calls into
//! the `repo_forge` library to do the actual work.

pub mod completions;
pub mod generate;
pub mod list;
pub mod validate;
