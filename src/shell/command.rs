//! External command execution.
//!
//! Programs are spawned directly (no intermediate shell) so that argument
//! lists like `HEAD...@{upstream}` reach the tool unmodified, and so a
//! missing executable can be told apart from a failing one.

use crate::error::{DeployCheckError, Result};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Stdout followed by stderr, trimmed.
    ///
    /// Tools like git report the interesting part of a failure on stderr,
    /// so this is what gets surfaced to the user.
    pub fn combined_output(&self) -> String {
        let mut combined = String::new();
        let stdout = self.stdout.trim_end();
        let stderr = self.stderr.trim_end();
        combined.push_str(stdout);
        if !stdout.is_empty() && !stderr.is_empty() {
            combined.push('\n');
        }
        combined.push_str(stderr);
        combined
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

/// Execute `program` with `args`, capturing stdout and stderr.
///
/// A non-zero exit is reported through [`CommandResult::success`], not as an
/// error. Errors are reserved for failing to start the process at all:
/// [`DeployCheckError::ToolNotFound`] when the executable is not on PATH,
/// [`DeployCheckError::Io`] for anything else.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Executing: {} {}", program, args.join(" "));

    let output = cmd.output().map_err(|e| match e.kind() {
        ErrorKind::NotFound => DeployCheckError::ToolNotFound {
            tool: program.to_string(),
        },
        _ => DeployCheckError::Io(e),
    })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        "{} {} exited with {:?} after {:?}",
        program,
        args.join(" "),
        output.status.code(),
        duration
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}
