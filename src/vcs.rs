//! # Version-Control Operations
//!
//! Git operations for a freshly scaffolded repository, expressed against
//! the `ProcessRunner` seam. This uses the system git command, which
//! automatically handles the user's identity, SSH keys, and credential
//! helpers; nothing here configures git beyond running it in the target
//! directory.
//!
//! All three operations are fatal on failure: a repository that cannot be
//! initialized or committed aborts the whole run, matching the tool's
//! two-tier failure model.

use std::path::Path;

use crate::error::Result;
use crate::process::{CommandOutput, ProcessRunner};

/// Build the fixed initial-commit message.
///
/// The description rides in the commit body, separated from the subject by
/// a blank line.
pub fn initial_commit_message(name: &str, description: &str) -> String {
    format!("feat: initial setup for {}\n\n{}", name, description)
}

/// `git init` in the target directory.
pub fn init(runner: &dyn ProcessRunner, dir: &Path) -> Result<CommandOutput> {
    runner.run("git", &["init"], dir)
}

/// `git add -A` in the target directory.
pub fn stage_all(runner: &dyn ProcessRunner, dir: &Path) -> Result<CommandOutput> {
    runner.run("git", &["add", "-A"], dir)
}

/// Create the initial snapshot commit.
///
/// The message is passed as a single argv entry, so descriptions with
/// quotes or shell metacharacters are committed verbatim.
pub fn commit_initial(
    runner: &dyn ProcessRunner,
    dir: &Path,
    name: &str,
    description: &str,
) -> Result<CommandOutput> {
    let message = initial_commit_message(name, description);
    runner.run("git", &["commit", "-m", &message], dir)
}
