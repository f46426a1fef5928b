//! Scripted git client for testing.
//!
//! `MockGit` implements [`GitClient`] by looking up canned responses keyed
//! on the argument list, and records every invocation so tests can assert
//! which git commands ran (and which did not).
//!
//! # Example
//!
//! ```
//! use deploy_check::git::{GitClient, MockGit};
//!
//! let git = MockGit::new()
//!     .respond(&["status", "--porcelain"], "")
//!     .fail(&["fetch"], "fatal: unable to access remote");
//!
//! assert_eq!(git.run(&["status", "--porcelain"]).unwrap(), "");
//! assert!(git.run(&["fetch"]).is_err());
//! assert_eq!(git.calls(), vec!["status --porcelain", "fetch"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{DeployCheckError, Result};

use super::GitClient;

#[derive(Debug, Clone)]
enum MockResponse {
    Stdout(String),
    Failure { code: i32, output: String },
}

/// Git client returning pre-configured responses.
///
/// Unscripted commands fail with exit code 1, so a test notices when code
/// under test runs something it did not expect.
#[derive(Debug, Default)]
pub struct MockGit {
    responses: HashMap<String, MockResponse>,
    not_installed: bool,
    calls: RefCell<Vec<String>>,
}

impl MockGit {
    /// Create a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that behaves as if git were not on PATH.
    pub fn not_installed() -> Self {
        Self {
            not_installed: true,
            ..Default::default()
        }
    }

    /// Script a successful invocation printing `stdout`.
    pub fn respond(mut self, args: &[&str], stdout: &str) -> Self {
        self.responses
            .insert(args.join(" "), MockResponse::Stdout(stdout.to_string()));
        self
    }

    /// Script a failing invocation (exit code 128, git's usual fatal code).
    pub fn fail(self, args: &[&str], output: &str) -> Self {
        self.fail_with_code(args, 128, output)
    }

    /// Script a failing invocation with a specific exit code.
    pub fn fail_with_code(mut self, args: &[&str], code: i32, output: &str) -> Self {
        self.responses.insert(
            args.join(" "),
            MockResponse::Failure {
                code,
                output: output.to_string(),
            },
        );
        self
    }

    /// All invocations so far, as space-joined argument lists.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether a command starting with `prefix` was invoked.
    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(prefix))
    }
}

impl GitClient for MockGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());

        if self.not_installed {
            return Err(DeployCheckError::ToolNotFound {
                tool: "git".to_string(),
            });
        }

        match self.responses.get(&key) {
            Some(MockResponse::Stdout(stdout)) => Ok(stdout.clone()),
            Some(MockResponse::Failure { code, output }) => Err(DeployCheckError::CommandFailed {
                command: format!("git {}", key),
                code: Some(*code),
                output: output.clone(),
            }),
            None => Err(DeployCheckError::CommandFailed {
                command: format!("git {}", key),
                code: Some(1),
                output: format!("MockGit: no response scripted for `git {}`", key),
            }),
        }
    }
}
