//! Forbidden directory check. Absence is success.

use std::path::{Path, PathBuf};

use super::{Check, CheckContext, CheckOutcome};

/// Passes when nothing exists at the given path under the project root.
#[derive(Debug, Clone)]
pub struct ForbiddenDirCheck {
    path: PathBuf,
}

impl ForbiddenDirCheck {
    /// Forbid `path` (relative to the project root).
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Check for ForbiddenDirCheck {
    fn label(&self) -> String {
        format!("{} directory", self.path.display())
    }

    fn run(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        let full = ctx.project_root.join(&self.path);

        if full.exists() {
            CheckOutcome::fail(format!("{} still exists", self.path.display()))
                .with_hint(format!("Remove {} before deploying", self.path.display()))
        } else {
            CheckOutcome::pass(format!("{} is absent", self.path.display()))
        }
    }
}
