//! Check command implementation.
//!
//! The `deploy-check check` command (also the default when no subcommand
//! is given) runs the fixed checklist and exits non-zero on any failure.

use std::path::{Path, PathBuf};

use crate::checks::{run_checks, standard_checks, CheckContext, Report};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, DeployCheckConfig};
use crate::error::Result;
use crate::git::{GitCli, GitClient};
use crate::ui::{NonInteractiveUI, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
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

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Run the checklist with the given git client.
    ///
    /// Progress lines and the banner go to `ui` unless JSON output was
    /// requested, in which case the report is printed to stdout instead.
    pub fn run_with(
        &self,
        config: &DeployCheckConfig,
        git: &dyn GitClient,
        ui: &mut dyn UserInterface,
    ) -> Result<Report> {
        let ctx = CheckContext::new(&self.project_root, git);
        let checks = standard_checks(config);

        if self.args.json {
            let mut sink = NonInteractiveUI::new(OutputMode::Silent);
            let report = run_checks(&checks, &ctx, &mut sink);
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(report);
        }

        ui.show_header("Pre-deployment check");
        let report = run_checks(&checks, &ctx, ui);
        ui.show_banner(&report);
        Ok(report)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let git = GitCli::with_program(&config.git.program, &self.project_root);

        let report = self.run_with(&config, &git, ui)?;

        if report.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}
