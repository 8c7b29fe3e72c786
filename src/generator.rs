//! # Per-Descriptor Generation
//!
//! Turns one descriptor into a populated directory plus an optional remote
//! repository, in a fixed step order:
//!
//! 1. Skip entirely if the target directory already exists (the only
//!    idempotence guard).
//! 2. Create the directory tree.
//! 3. Initialize the git working tree.
//! 4. Write the category-dependent file set.
//! 5. Stage everything and create the initial snapshot commit.
//! 6. Attempt remote creation + push via the hosting CLI.
//!
//! Steps 2–5 are fatal on failure and abort the whole run with no rollback.
//! Step 6 is the isolated failure: errors become a warning recorded on the
//! returned `Outcome`, and processing continues with the next descriptor.
//!
//! The function reports progress on stdout (emoji with plain fallbacks) and
//! echoes every external command before running it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::RepoDescriptor;
use crate::error::Result;
use crate::hosting;
use crate::output::{marker, OutputConfig};
use crate::process::{display_command, ProcessRunner};
use crate::templates::{compiler, ignore, manifest, readme, source, studio, workflow};
use crate::vcs;

/// Options shared by every descriptor in a run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Parent directory; each repository is created at `<root>/<name>`.
    pub root: PathBuf,
    /// Hosting organization for remote creation and scoped dependencies.
    pub org: String,
    /// Skip the hosting-CLI step entirely.
    pub skip_remote: bool,
    /// Suppress progress output.
    pub quiet: bool,
}

/// What happened to the remote-creation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteStatus {
    /// `gh repo create … --push` succeeded.
    Created,
    /// Remote creation was not attempted (`--skip-remote`).
    Skipped,
    /// The hosting CLI failed; generation continued regardless.
    Failed(String),
}

/// Outcome of processing one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Target directory already existed; nothing was written.
    Skipped,
    /// Files written and committed; `remote` records the hosting step.
    Created { remote: RemoteStatus },
}

fn write_file(dir: &Path, relative: &str, content: &str) -> Result<()> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(())
}

fn echo_command(options: &GenerateOptions, program: &str, args: &[&str]) {
    let line = display_command(program, args);
    log::debug!("running: {}", line);
    if !options.quiet {
        println!("   $ {}", line);
    }
}

fn write_package_files(repo: &RepoDescriptor, dir: &Path, org: &str) -> Result<()> {
    write_file(dir, "package.json", &manifest::render(repo, org)?)?;
    write_file(dir, "tsconfig.json", &compiler::render()?)?;
    write_file(dir, "src/index.ts", &source::render(repo))?;
    Ok(())
}

fn write_configuration_files(repo: &RepoDescriptor, dir: &Path) -> Result<()> {
    write_file(dir, "cfstudio.yaml", &studio::render_studio_file(repo))?;
    write_file(dir, "USAGE.md", &studio::render_usage(repo))?;
    Ok(())
}

/// Process one descriptor.
///
/// Returns `Outcome::Skipped` when the target already exists; otherwise
/// creates, populates, and commits the repository, then attempts remote
/// creation unless disabled. Fatal errors propagate.
pub fn generate(
    repo: &RepoDescriptor,
    options: &GenerateOptions,
    runner: &dyn ProcessRunner,
    out: &OutputConfig,
) -> Result<Outcome> {
    let target = options.root.join(&repo.name);

    if target.exists() {
        if !options.quiet {
            println!(
                "{} Skipping {} (already exists)",
                marker(out, "⏭️", "[SKIP]"),
                repo.name
            );
        }
        return Ok(Outcome::Skipped);
    }

    if !options.quiet {
        println!(
            "{} Creating {} ({}, {})",
            marker(out, "📦", "[NEW]"),
            repo.name,
            repo.category,
            repo.visibility()
        );
    }

    fs::create_dir_all(&target)?;

    echo_command(options, "git", &["init"]);
    vcs::init(runner, &target)?;

    if repo.category.has_package() {
        write_package_files(repo, &target, &options.org)?;
    } else {
        write_configuration_files(repo, &target)?;
    }

    write_file(&target, ".gitignore", &ignore::render())?;
    write_file(&target, ".github/workflows/ci.yml", &workflow::render(repo))?;
    write_file(&target, "README.md", &readme::render(repo))?;

    echo_command(options, "git", &["add", "-A"]);
    vcs::stage_all(runner, &target)?;

    let message = vcs::initial_commit_message(&repo.name, &repo.description);
    echo_command(options, "git", &["commit", "-m", &message]);
    vcs::commit_initial(runner, &target, &repo.name, &repo.description)?;

    let remote = if options.skip_remote {
        RemoteStatus::Skipped
    } else {
        let args = hosting::create_args(&options.org, repo);
        let arg_refs: Vec<&str> = args.iter().map(|a| a.as_str()).collect();
        echo_command(options, "gh", &arg_refs);
        match hosting::create_and_push(runner, &target, &options.org, repo) {
            Ok(()) => RemoteStatus::Created,
            Err(e) => {
                log::warn!("remote creation failed for {}: {}", repo.name, e);
                if !options.quiet {
                    println!(
                        "   {} Remote creation failed for {} (may already exist)",
                        marker(out, "⚠️", "[WARN]"),
                        repo.name
                    );
                }
                RemoteStatus::Failed(e.to_string())
            }
        }
    };

    if !options.quiet {
        println!("   {} {} ready", marker(out, "✅", "[OK]"), repo.name);
    }

    Ok(Outcome::Created { remote })
}

/// Process a descriptor list strictly in order.
///
/// Stops at the first fatal error, leaving earlier repositories in
/// whatever state they reached; returns per-descriptor outcomes otherwise.
pub fn generate_all(
    repos: &[RepoDescriptor],
    options: &GenerateOptions,
    runner: &dyn ProcessRunner,
    out: &OutputConfig,
) -> Result<Vec<(String, Outcome)>> {
    let mut outcomes = Vec::with_capacity(repos.len());
    for repo in repos {
        let outcome = generate(repo, options, runner, out)?;
        outcomes.push((repo.name.clone(), outcome));
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Category;
    use crate::process::RecordingRunner;
    use tempfile::TempDir;

    fn descriptor(name: &str, category: Category) -> RepoDescriptor {
        RepoDescriptor {
            name: name.to_string(),
            description: format!("{} description", name),
            private: true,
            category,
            dependencies: vec!["@cfstudio/types".to_string(), "left-pad".to_string()],
        }
    }

    fn options(root: &Path) -> GenerateOptions {
        GenerateOptions {
            root: root.to_path_buf(),
            org: "cfstudio".to_string(),
            skip_remote: false,
            quiet: true,
        }
    }

    fn generated_files(dir: &Path) -> Vec<String> {
        fn walk(dir: &Path, base: &Path, acc: &mut Vec<String>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(&path, base, acc);
                } else {
                    acc.push(
                        path.strip_prefix(base)
                            .unwrap()
                            .to_string_lossy()
                            .into_owned(),
                    );
                }
            }
        }
        let mut files = Vec::new();
        walk(dir, dir, &mut files);
        files.sort();
        files
    }

    #[test]
    fn test_library_file_set() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let repo = descriptor("widgets", Category::Library);

        let outcome = generate(
            &repo,
            &options(temp.path()),
            &runner,
            &OutputConfig::without_color(),
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Created {
                remote: RemoteStatus::Created
            }
        );
        assert_eq!(
            generated_files(&temp.path().join("widgets")),
            vec![
                ".github/workflows/ci.yml",
                ".gitignore",
                "README.md",
                "package.json",
                "src/index.ts",
                "tsconfig.json",
            ]
        );
    }

    #[test]
    fn test_configuration_file_set() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let repo = descriptor("studio-config", Category::Configuration);

        generate(
            &repo,
            &options(temp.path()),
            &runner,
            &OutputConfig::without_color(),
        )
        .unwrap();

        assert_eq!(
            generated_files(&temp.path().join("studio-config")),
            vec![
                ".github/workflows/ci.yml",
                ".gitignore",
                "README.md",
                "USAGE.md",
                "cfstudio.yaml",
            ]
        );
    }

    #[test]
    fn test_existing_target_is_skipped_without_writes() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("widgets");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("keep.txt"), "precious").unwrap();

        let runner = RecordingRunner::new();
        let repo = descriptor("widgets", Category::Library);
        let outcome = generate(
            &repo,
            &options(temp.path()),
            &runner,
            &OutputConfig::without_color(),
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Skipped);
        // No commands ran and the directory is untouched
        assert!(runner.calls().is_empty());
        assert_eq!(generated_files(&target), vec!["keep.txt"]);
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let repo = descriptor("widgets", Category::Plugin);
        let opts = options(temp.path());
        let out = OutputConfig::without_color();

        let first = generate(&repo, &opts, &runner, &out).unwrap();
        let calls_after_first = runner.calls().len();
        let second = generate(&repo, &opts, &runner, &out).unwrap();

        assert!(matches!(first, Outcome::Created { .. }));
        assert_eq!(second, Outcome::Skipped);
        assert_eq!(runner.calls().len(), calls_after_first);
    }

    #[test]
    fn test_command_sequence_and_commit_message() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let repo = descriptor("widgets", Category::Library);

        generate(
            &repo,
            &options(temp.path()),
            &runner,
            &OutputConfig::without_color(),
        )
        .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0].args, vec!["init"]);
        assert_eq!(calls[1].args, vec!["add", "-A"]);
        assert_eq!(calls[2].args[0], "commit");
        assert_eq!(
            calls[2].args[2],
            "feat: initial setup for widgets\n\nwidgets description"
        );
        assert_eq!(calls[3].program, "gh");
        assert!(calls[3].args.contains(&"--private".to_string()));
        assert!(calls
            .iter()
            .all(|c| c.dir == temp.path().join("widgets")));
    }

    #[test]
    fn test_skip_remote_option() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let repo = descriptor("widgets", Category::Library);
        let mut opts = options(temp.path());
        opts.skip_remote = true;

        let outcome =
            generate(&repo, &opts, &runner, &OutputConfig::without_color()).unwrap();

        assert_eq!(
            outcome,
            Outcome::Created {
                remote: RemoteStatus::Skipped
            }
        );
        assert!(runner.calls().iter().all(|c| c.program == "git"));
    }

    #[test]
    fn test_remote_failure_is_isolated() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new().fail_program("gh");
        let repo = descriptor("widgets", Category::Library);

        let outcome = generate(
            &repo,
            &options(temp.path()),
            &runner,
            &OutputConfig::without_color(),
        )
        .unwrap();

        match outcome {
            Outcome::Created {
                remote: RemoteStatus::Failed(message),
            } => assert!(message.contains("gh")),
            other => panic!("expected failed remote, got {:?}", other),
        }
        // Local artifacts still exist
        assert!(temp.path().join("widgets/package.json").exists());
    }

    #[test]
    fn test_git_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new().fail_program("git");
        let repo = descriptor("widgets", Category::Library);

        let result = generate(
            &repo,
            &options(temp.path()),
            &runner,
            &OutputConfig::without_color(),
        );
        assert!(result.is_err());
        // No rollback: the directory created before the failure remains
        assert!(temp.path().join("widgets").exists());
    }

    #[test]
    fn test_generate_all_processes_in_order_and_stops_on_fatal() {
        let temp = TempDir::new().unwrap();
        let out = OutputConfig::without_color();
        let repos = vec![
            descriptor("alpha", Category::Library),
            descriptor("beta", Category::Docs),
        ];

        let runner = RecordingRunner::new();
        let outcomes = generate_all(&repos, &options(temp.path()), &runner, &out).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].0, "alpha");
        assert_eq!(outcomes[1].0, "beta");

        // A fatal git failure aborts before later descriptors are reached
        let temp2 = TempDir::new().unwrap();
        let failing = RecordingRunner::new().fail_program("git");
        let result = generate_all(&repos, &options(temp2.path()), &failing, &out);
        assert!(result.is_err());
        assert!(!temp2.path().join("beta").exists());
    }

    #[test]
    fn test_nested_workflow_directory_created() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let repo = descriptor("widgets", Category::Docs);

        generate(
            &repo,
            &options(temp.path()),
            &runner,
            &OutputConfig::without_color(),
        )
        .unwrap();

        let workflow = temp.path().join("widgets/.github/workflows/ci.yml");
        let content = fs::read_to_string(workflow).unwrap();
        assert!(content.contains("pnpm build"));
    }
}
