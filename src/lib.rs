//! deploy-check - Pre-deployment checklist for web projects.
//!
//! deploy-check runs a fixed battery of readiness checks against a project
//! directory (a required file, a config value, a forbidden directory and
//! git synchronisation with upstream) and exits non-zero if any fails.
//!
//! # Modules
//!
//! - [`checks`] - The checks, their outcomes and the sequential runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.deploy-check.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`git`] - Git invocation and sync-state classification
//! - [`orphans`] - Unreferenced source file detection
//! - [`shell`] - Subprocess execution and CI detection
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use deploy_check::git::parse_left_right_counts;
//! use deploy_check::git::SyncState;
//!
//! let state = parse_left_right_counts("2\t0\n").unwrap();
//! assert_eq!(state, SyncState::Ahead { commits: 2 });
//! ```
//!
//! For end-to-end runs against real repositories, see the integration tests.

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod orphans;
pub mod shell;
pub mod ui;

pub use error::{DeployCheckError, Result};
