//! External process module
//!
//! Every child process (version control, file opener) goes through
//! [`CommandRunner`], so tests can swap in a fake.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{PostError, Result};

/// What a finished child process reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stderr: String,
}

/// Runs a program to completion
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns `Err` only when the process could not be started.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Runs real processes from a fixed working directory
pub struct SystemRunner {
    working_dir: PathBuf,
}

impl SystemRunner {
    pub fn new(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        tracing::debug!(
            "Running {} in {}",
            command_line(program, args),
            self.working_dir.display()
        );

        // stdout stays attached so push progress and credential prompts show up
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| PostError::CommandFailed {
                command: command_line(program, args),
                stderr: e.to_string(),
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        })
    }
}

/// Render a command for messages, e.g. `git commit -m msg`
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command and turn a non-zero exit into [`PostError::CommandFailed`]
pub fn run_checked(runner: &dyn CommandRunner, program: &str, args: &[String]) -> Result<()> {
    let output = runner.run(program, args)?;
    if output.success {
        Ok(())
    } else {
        Err(PostError::CommandFailed {
            command: command_line(program, args),
            stderr: output.stderr,
        })
    }
}
