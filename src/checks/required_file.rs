//! Required file check.

use std::path::{Path, PathBuf};

use super::{Check, CheckContext, CheckOutcome};

/// Passes when a file exists at the given path under the project root.
#[derive(Debug, Clone)]
pub struct RequiredFileCheck {
    path: PathBuf,
}

impl RequiredFileCheck {
    /// Require `path` (relative to the project root).
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Check for RequiredFileCheck {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn run(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        let full = ctx.project_root.join(&self.path);
        tracing::debug!("Looking for required file {}", full.display());

        if full.is_file() {
            CheckOutcome::pass(format!("{} found", self.path.display()))
        } else if full.exists() {
            CheckOutcome::fail(format!("{} exists but is not a file", self.path.display()))
                .with_hint(format!("Replace it with a {} file", self.path.display()))
        } else {
            CheckOutcome::fail(format!(
                "{} not found at the project root",
                self.path.display()
            ))
            .with_hint(format!(
                "Create {} with the deployment notes before deploying",
                self.path.display()
            ))
        }
    }
}
