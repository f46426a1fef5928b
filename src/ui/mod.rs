//! Terminal output for check runs.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage (styled, with spinners)
//! - [`NonInteractiveUI`] for CI, pipes and redirected output
//! - [`MockUI`] capturing every call for tests
//!
//! # Example
//!
//! ```
//! use deploy_check::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Pre-deployment check");
//! ui.success("Ready to deploy");
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

use crate::checks::{CheckResult, Report};

/// Width of the separator printed above the final banner.
pub const BANNER_WIDTH: usize = 30;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Show the outcome of check `position` of `total` (1-based).
    fn show_check(&mut self, position: usize, total: usize, result: &CheckResult);

    /// Show the final pass/fail banner for a run.
    fn show_banner(&mut self, report: &Report);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Stop the spinner and erase its line.
    fn finish_clear(&mut self);
}

/// Indent applied to hint and detail lines under a check.
pub(crate) const DETAIL_INDENT: &str = "      ";

/// Prefix every line of `text` with the detail indent and a gutter.
pub(crate) fn indent_detail(text: &str, gutter: &str) -> Vec<String> {
    text.lines()
        .map(|line| format!("{}{} {}", DETAIL_INDENT, gutter, line))
        .collect()
}
