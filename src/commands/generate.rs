//! # Generate Command Implementation
//!
//! The one-shot scaffolding run: iterate the descriptor list strictly in
//! order, create each repository locally, commit it, attempt remote
//! creation, and finish with the public/private summary.
//!
//! Fatal errors (directory creation, file writes, git commands) abort the
//! run immediately with no rollback; only the remote-hosting step is
//! reduced to a warning.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;
use std::time::Instant;

use repo_forge::config;
use repo_forge::defaults;
use repo_forge::generator::{self, GenerateOptions, Outcome, RemoteStatus};
use repo_forge::output::{marker, OutputConfig};
use repo_forge::process::SystemRunner;
use repo_forge::report;

/// Create every repository in the descriptor list
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Parent directory for created repositories
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// YAML descriptor list replacing the built-in table
    #[arg(short, long, value_name = "FILE", env = "REPO_FORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Hosting organization override
    #[arg(long, value_name = "ORG")]
    pub org: Option<String>,

    /// Do not create remote repositories (skip the hosting CLI entirely)
    #[arg(long)]
    pub skip_remote: bool,

    /// Proceed without the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `generate` command.
pub fn execute(args: GenerateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let start_time = Instant::now();

    let forge_config = match &args.config {
        Some(path) => config::from_file(path)?,
        None => defaults::builtin_config(),
    };
    let org = args.org.clone().unwrap_or(forge_config.organization.clone());

    if !args.quiet {
        println!(
            "{} Repo Forge: scaffolding {} repositories under {}",
            marker(&out, "🔨", "[FORGE]"),
            forge_config.repositories.len(),
            args.root.display()
        );
        println!();
    }

    if !confirmed(&args)? {
        println!("Aborted.");
        return Ok(());
    }

    let options = GenerateOptions {
        root: args.root.clone(),
        org,
        skip_remote: args.skip_remote,
        quiet: args.quiet,
    };

    let runner = SystemRunner;
    let outcomes =
        generator::generate_all(&forge_config.repositories, &options, &runner, &out)?;

    if !args.quiet {
        let created = outcomes
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Created { .. }))
            .count();
        let skipped = outcomes
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Skipped))
            .count();
        let warnings = outcomes
            .iter()
            .filter(|(_, o)| {
                matches!(
                    o,
                    Outcome::Created {
                        remote: RemoteStatus::Failed(_)
                    }
                )
            })
            .count();

        println!();
        println!(
            "{} Done in {:.2}s: {} created, {} skipped, {} remote warnings",
            marker(&out, "✅", "[DONE]"),
            start_time.elapsed().as_secs_f64(),
            created,
            skipped,
            warnings
        );
        println!();
        report::print(&forge_config.repositories, &out);
    }

    Ok(())
}

/// Ask for confirmation before touching the filesystem.
///
/// Skipped (treated as confirmed) for `--yes`, `--quiet`, and
/// non-interactive stdin, so scripted runs behave like the original
/// one-shot tool.
fn confirmed(args: &GenerateArgs) -> Result<bool> {
    if args.yes || args.quiet || !console::user_attended() {
        return Ok(true);
    }

    let proceed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Create the repositories listed above?")
        .default(true)
        .interact()?;
    Ok(proceed)
}
