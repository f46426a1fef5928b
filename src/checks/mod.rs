//! Deployment readiness checks.
//!
//! Each check implements [`Check`]: it inspects the project directory (or
//! its git state) and returns a [`CheckOutcome`]. Checks never error and
//! never write anything; every failure mode is converted into an outcome so
//! the whole battery always runs.
//!
//! The battery is fixed. [`standard_checks`] returns, in order:
//! 1. [`RequiredFileCheck`] - a file must exist at the project root
//! 2. [`ConfigValueCheck`] - a config file must contain `key: value`
//! 3. [`ForbiddenDirCheck`] - a directory must not exist
//! 4. [`GitSyncCheck`] - the working tree is clean and matches upstream
//!
//! # Example
//!
//! ```
//! use deploy_check::checks::{run_checks, standard_checks, CheckContext};
//! use deploy_check::config::DeployCheckConfig;
//! use deploy_check::git::MockGit;
//! use deploy_check::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let git = MockGit::not_installed();
//! let ctx = CheckContext::new(temp.path(), &git);
//! let mut ui = MockUI::new();
//!
//! let report = run_checks(&standard_checks(&DeployCheckConfig::default()), &ctx, &mut ui);
//! assert_eq!(report.results().len(), 4);
//! assert!(!report.passed());
//! ```

pub mod config_value;
pub mod forbidden_dir;
pub mod git_sync;
pub mod required_file;
pub mod result;
pub mod runner;

pub use config_value::ConfigValueCheck;
pub use forbidden_dir::ForbiddenDirCheck;
pub use git_sync::GitSyncCheck;
pub use required_file::RequiredFileCheck;
pub use result::{CheckOutcome, CheckResult, Report};
pub use runner::run_checks;

use std::path::Path;

use crate::config::DeployCheckConfig;
use crate::git::GitClient;

/// Everything a check may look at.
pub struct CheckContext<'a> {
    /// Project root; relative check targets resolve against it.
    pub project_root: &'a Path,
    /// Git access for the sync check.
    pub git: &'a dyn GitClient,
}

impl<'a> CheckContext<'a> {
    /// Create a context for `project_root`.
    pub fn new(project_root: &'a Path, git: &'a dyn GitClient) -> Self {
        Self { project_root, git }
    }
}

/// A single deployment precondition.
pub trait Check {
    /// Short human-readable label shown in progress output.
    fn label(&self) -> String;

    /// Evaluate the precondition.
    fn run(&self, ctx: &CheckContext<'_>) -> CheckOutcome;
}

/// The fixed, ordered battery of checks for `config`.
pub fn standard_checks(config: &DeployCheckConfig) -> Vec<Box<dyn Check>> {
    vec![
        Box::new(RequiredFileCheck::new(&config.required_file)),
        Box::new(ConfigValueCheck::new(config.config_value.clone())),
        Box::new(ForbiddenDirCheck::new(&config.forbidden_dir)),
        Box::new(GitSyncCheck::new(config.git.clone())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_battery_has_four_checks_in_order() {
        let checks = standard_checks(&DeployCheckConfig::default());
        let labels: Vec<_> = checks.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "DEPLOYMENT.md",
                "port in vite.config.ts",
                ".lovable directory",
                "Git sync",
            ]
        );
    }

    #[test]
    fn labels_follow_configuration() {
        let mut config = DeployCheckConfig::default();
        config.required_file = "README.md".into();
        config.config_value.key = "base".to_string();
        config.forbidden_dir = "tmp".into();

        let labels: Vec<_> = standard_checks(&config)
            .iter()
            .map(|c| c.label())
            .collect();
        assert_eq!(labels[0], "README.md");
        assert_eq!(labels[1], "base in vite.config.ts");
        assert_eq!(labels[2], "tmp directory");
    }
}
