//! # Validate Command Implementation
//!
//! Lints a descriptor configuration file without generating anything:
//! parses it, then reports duplicate names, empty descriptions, and empty
//! lists as warnings. Warnings only fail the command under `--strict`,
//! matching the generator's behavior of relying solely on the
//! directory-existence skip at run time.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use repo_forge::config;
use repo_forge::defaults::DEFAULT_CONFIG_FILENAME;
use repo_forge::output::{marker, OutputConfig};

/// Lint a descriptor configuration file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the descriptor configuration file to validate
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILENAME,
        env = "REPO_FORGE_CONFIG"
    )]
    pub config: PathBuf,

    /// Fail on warnings
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    println!(
        "{} Validating descriptor list: {}",
        marker(&out, "🔍", "[SCAN]"),
        args.config.display()
    );

    let forge_config = match config::from_file(&args.config) {
        Ok(c) => c,
        Err(e) => {
            println!("{} {}", marker(&out, "❌", "[ERR]"), e);
            return Err(anyhow::anyhow!("Configuration parsing failed"));
        }
    };

    println!(
        "{} Parsed {} repositories for organization '{}'",
        marker(&out, "✅", "[OK]"),
        forge_config.repositories.len(),
        forge_config.organization
    );

    let warnings = config::lint(&forge_config);
    for warning in &warnings {
        println!("{} {}", marker(&out, "⚠️", "[WARN]"), warning);
    }

    if warnings.is_empty() {
        println!("{} No issues found", marker(&out, "✅", "[OK]"));
    } else if args.strict {
        anyhow::bail!("{} warning(s) found (strict mode)", warnings.len());
    }

    Ok(())
}
