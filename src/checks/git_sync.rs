//! Version-control synchronization check.
//!
//! Sub-steps run in order and the first failure ends the check:
//! 1. list remotes (and match the expected remote, if configured)
//! 2. `status --porcelain` must be empty; a dirty tree fails before any
//!    network access
//! 3. `fetch` (unless disabled)
//! 4. compare `HEAD` with its upstream via ahead/behind counts, falling back
//!    to the text of `status -uno` when no counts are available
//!
//! An unrecognized status text is a soft pass with a warning.

use crate::config::GitSettings;
use crate::error::{DeployCheckError, Result};
use crate::git::{classify_status_summary, parse_left_right_counts, GitClient, SyncState};

use super::{Check, CheckContext, CheckOutcome};

/// Porcelain lines quoted in the failure detail of a dirty tree.
const DIRTY_PREVIEW_LINES: usize = 10;

/// Passes when the working tree is clean and the branch matches upstream.
#[derive(Debug, Clone)]
pub struct GitSyncCheck {
    settings: GitSettings,
}

impl GitSyncCheck {
    /// Create the check from its settings.
    pub fn new(settings: GitSettings) -> Self {
        Self { settings }
    }

    fn evaluate(&self, git: &dyn GitClient) -> Result<CheckOutcome> {
        let remotes = git.run(&["remote", "-v"])?;
        tracing::debug!("Remotes:\n{}", remotes.trim_end());

        if let Some(expected) = &self.settings.expected_remote {
            if !remotes.contains(expected.as_str()) {
                return Ok(CheckOutcome::fail(format!(
                    "No git remote matches '{}'",
                    expected
                ))
                .with_hint(format!(
                    "Add the deployment repository with `git remote add origin <url containing {}>`",
                    expected
                ))
                .with_detail(remotes.trim_end()));
            }
        }

        let status = git.run(&["status", "--porcelain"])?;
        if !status.trim().is_empty() {
            return Ok(
                CheckOutcome::fail("Dirty working tree: uncommitted changes present")
                    .with_hint("Commit and push your changes")
                    .with_detail(dirty_preview(&status)),
            );
        }

        if self.settings.fetch {
            git.run(&["fetch"])?;
        } else {
            tracing::debug!("Skipping git fetch (disabled in config)");
        }

        let state = match git.run(&["rev-list", "--left-right", "--count", "HEAD...@{upstream}"]) {
            Ok(counts) => match parse_left_right_counts(&counts) {
                Some(state) => state,
                None => {
                    tracing::debug!("Unparseable rev-list output {:?}", counts);
                    classify_status_summary(&git.run(&["status", "-uno"])?)
                }
            },
            Err(e) => {
                tracing::debug!("Ahead/behind counts unavailable ({}), reading status text", e);
                classify_status_summary(&git.run(&["status", "-uno"])?)
            }
        };

        Ok(outcome_for(state))
    }
}

impl Check for GitSyncCheck {
    fn label(&self) -> String {
        "Git sync".to_string()
    }

    fn run(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        self.evaluate(ctx.git).unwrap_or_else(failure_outcome)
    }
}

fn outcome_for(state: SyncState) -> CheckOutcome {
    match state {
        SyncState::UpToDate => CheckOutcome::pass("Up to date with upstream"),
        SyncState::Ahead { commits } => CheckOutcome::fail(format!(
            "{} unpushed {} (push pending)",
            commits,
            plural(commits, "commit", "commits")
        ))
        .with_hint("Run `git push` to publish your local commits"),
        SyncState::Behind { commits } => CheckOutcome::fail(format!(
            "Local branch is {} {} behind upstream (pull needed)",
            commits,
            plural(commits, "commit", "commits")
        ))
        .with_hint("Run `git pull` to update your local branch"),
        SyncState::Diverged { ahead, behind } => CheckOutcome::fail(format!(
            "Local branch has diverged from upstream ({} ahead, {} behind)",
            ahead, behind
        ))
        .with_hint("Rebase or merge the upstream changes, then push"),
        SyncState::Indeterminate { summary } => {
            CheckOutcome::warn(format!("Uncertain git state: {}", summary))
        }
    }
}

fn failure_outcome(err: DeployCheckError) -> CheckOutcome {
    match err {
        DeployCheckError::ToolNotFound { tool } => {
            CheckOutcome::fail(format!("{} is not installed or not on PATH", tool))
                .with_hint("Install git and make sure it is on PATH")
        }
        DeployCheckError::CommandFailed {
            command, output, ..
        } => {
            let hint = if command.contains(" fetch") {
                "Check network access to the remote and your credentials"
            } else {
                "Make sure the project is a git repository"
            };
            CheckOutcome::fail(format!("Error running `{}`", command))
                .with_hint(hint)
                .with_detail(output)
        }
        other => CheckOutcome::fail(format!("Git check failed: {}", other)),
    }
}

fn dirty_preview(status: &str) -> String {
    let lines: Vec<&str> = status.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut preview = lines
        .iter()
        .take(DIRTY_PREVIEW_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    if lines.len() > DIRTY_PREVIEW_LINES {
        preview.push_str(&format!(
            "\n... and {} more",
            lines.len() - DIRTY_PREVIEW_LINES
        ));
    }
    preview
}

fn plural<'a>(n: u32, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
