//! # Hosting-Platform Operations
//!
//! Creates the remote repository via the GitHub CLI (`gh`) and pushes the
//! initial commit in the same invocation. This is the only step in the
//! pipeline with isolated failure handling: the caller converts any error
//! into a warning and keeps going, since the most common failure is simply
//! that the remote already exists.

use std::path::Path;

use crate::descriptor::RepoDescriptor;
use crate::error::Result;
use crate::process::ProcessRunner;

/// Arguments for `gh repo create`, as discrete argv entries.
///
/// The description is one entry; it is never spliced into a shell line.
pub fn create_args(org: &str, repo: &RepoDescriptor) -> Vec<String> {
    let visibility = if repo.private { "--private" } else { "--public" };
    vec![
        "repo".to_string(),
        "create".to_string(),
        format!("{}/{}", org, repo.name),
        visibility.to_string(),
        "--description".to_string(),
        repo.description.clone(),
        "--source".to_string(),
        ".".to_string(),
        "--remote".to_string(),
        "origin".to_string(),
        "--push".to_string(),
    ]
}

/// Create the remote repository under the organization and push.
///
/// Runs from inside the newly created local directory so `--source .`
/// picks up the fresh commit.
pub fn create_and_push(
    runner: &dyn ProcessRunner,
    dir: &Path,
    org: &str,
    repo: &RepoDescriptor,
) -> Result<()> {
    let args = create_args(org, repo);
    let arg_refs: Vec<&str> = args.iter().map(|a| a.as_str()).collect();
    runner.run("gh", &arg_refs, dir)?;
    Ok(())
}
