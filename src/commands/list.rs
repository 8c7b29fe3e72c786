//! # List Command Implementation
//!
//! Prints the public/private summary of the descriptor list without
//! generating anything. A safe, read-only operation, the same report the
//! `generate` command ends with.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use repo_forge::config;
use repo_forge::defaults;
use repo_forge::output::OutputConfig;
use repo_forge::report;

/// Print the public/private summary of the descriptor list
#[derive(Args, Debug)]
pub struct ListArgs {
    /// YAML descriptor list replacing the built-in table
    #[arg(short, long, value_name = "FILE", env = "REPO_FORGE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    let forge_config = match &args.config {
        Some(path) => config::from_file(path)?,
        None => defaults::builtin_config(),
    };

    report::print(&forge_config.repositories, &out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_builtin_list() {
        let args = ListArgs { config: None };
        assert!(execute(args, "never").is_ok());
    }

    #[test]
    fn test_execute_with_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("forge.yaml");
        fs::write(
            &config_path,
            "repositories:\n  - name: solo\n    description: One repo\n    category: library\n",
        )
        .unwrap();

        let args = ListArgs {
            config: Some(config_path),
        };
        assert!(execute(args, "never").is_ok());
    }

    #[test]
    fn test_execute_missing_config_file() {
        let args = ListArgs {
            config: Some(PathBuf::from("/nonexistent/forge.yaml")),
        };
        assert!(execute(args, "never").is_err());
    }
}
