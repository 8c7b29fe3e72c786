//! # External Process Invocation
//!
//! The seam between scaffolding logic and the external tools it drives
//! (`git`, `gh`). All process spawning goes through the `ProcessRunner`
//! trait so the generator can be exercised in tests without touching real
//! binaries, and so arguments are always passed as discrete argv entries:
//! descriptions and commit messages are never interpolated into a shell
//! string.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Captured result of a completed external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands with discrete arguments.
///
/// `run` succeeds only if the command spawned and exited zero; a non-zero
/// exit is an `Error::CommandFailed` carrying the captured stderr.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput>;
}

/// Render a command line for progress echo and logging.
///
/// Display only; the rendered string is never handed to a shell.
pub fn display_command(program: &str, args: &[&str]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        if arg.contains(' ') {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// `ProcessRunner` backed by `std::process::Command`.
///
/// Inherits the parent environment, so git picks up the user's identity
/// and credential configuration and `gh` its stored authentication.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| Error::CommandSpawn {
                program: program.to_string(),
                message: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
                dir: dir.to_path_buf(),
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

/// A recorded invocation, for asserting on what a run would execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub dir: PathBuf,
}

/// Test double that records every invocation instead of spawning.
///
/// Programs listed via `fail_program` return `CommandFailed`; everything
/// else succeeds with empty output. Lives outside `#[cfg(test)]` so
/// integration tests and downstream users can drive the generator without
/// real processes.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: std::cell::RefCell<Vec<RecordedCall>>,
    failing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` fail with the given stderr.
    pub fn fail_program(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// All invocations recorded so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            dir: dir.to_path_buf(),
        });

        if self.failing.iter().any(|p| p == program) {
            return Err(Error::CommandFailed {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
                dir: dir.to_path_buf(),
                stderr: "simulated failure".to_string(),
            });
        }

        Ok(CommandOutput {
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}
