//! Orphans command implementation.
//!
//! The `deploy-check orphans` command lists source files whose names are
//! never mentioned by any other source file.

use std::path::{Path, PathBuf};

use crate::cli::args::OrphansArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::orphans::find_orphans;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The orphans command implementation.
pub struct OrphansCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: OrphansArgs,
}

impl OrphansCommand {
    /// Create a new orphans command.
    pub fn new(project_root: &Path, args: OrphansArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            args,
        }
    }

    /// Load configuration from an explicit file.
    pub fn with_config(mut self, config_path: Option<&Path>) -> Self {
        self.config_path = config_path.map(Path::to_path_buf);
        self
    }
}

impl Command for OrphansCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let src_dir = self
            .args
            .src
            .as_deref()
            .unwrap_or(config.orphans.src_dir.as_path());

        let orphans = find_orphans(&self.project_root, src_dir, &config.orphans)?;

        if orphans.is_empty() {
            ui.success("No orphans found.");
        } else {
            ui.message("Potential orphans found:");
            for path in &orphans {
                ui.message(&format!("  {}", path.display()));
            }
        }

        Ok(CommandResult::success())
    }
}
