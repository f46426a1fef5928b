//! Git access for the synchronization check.
//!
//! All git interaction goes through the [`GitClient`] trait so the sync
//! check can be exercised against scripted responses ([`MockGit`]) as well
//! as the real executable ([`GitCli`]).

pub mod mock;
pub mod sync;

pub use mock::MockGit;
pub use sync::{classify_status_summary, parse_left_right_counts, SyncState};

use std::path::{Path, PathBuf};

use crate::error::{DeployCheckError, Result};
use crate::shell::{execute, CommandOptions};

/// Runs git subcommands.
pub trait GitClient {
    /// Run git with `args` and return its stdout.
    ///
    /// # Errors
    ///
    /// - [`DeployCheckError::ToolNotFound`] if git is not on PATH
    /// - [`DeployCheckError::CommandFailed`] if git exits non-zero, carrying
    ///   its combined output
    fn run(&self, args: &[&str]) -> Result<String>;
}

/// [`GitClient`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    cwd: PathBuf,
}

impl GitCli {
    /// Create a client running `git` inside `cwd`.
    pub fn new(cwd: &Path) -> Self {
        Self::with_program("git", cwd)
    }

    /// Create a client running an alternative git executable.
    pub fn with_program(program: &str, cwd: &Path) -> Self {
        Self {
            program: program.to_string(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// The executable this client spawns.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl GitClient for GitCli {
    fn run(&self, args: &[&str]) -> Result<String> {
        let mut options = CommandOptions {
            cwd: Some(self.cwd.clone()),
            ..Default::default()
        };
        // Keep git's human-readable phrasing untranslated for the text fallback.
        options.env.insert("LC_ALL".to_string(), "C".to_string());
        options
            .env
            .insert("GIT_TERMINAL_PROMPT".to_string(), "0".to_string());

        let result = execute(&self.program, args, &options)?;

        if result.success {
            Ok(result.stdout)
        } else {
            Err(DeployCheckError::CommandFailed {
                command: format!("{} {}", self.program, args.join(" ")),
                code: result.exit_code,
                output: result.combined_output(),
            })
        }
    }
}
