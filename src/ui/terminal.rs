//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::checks::{CheckResult, Report};

use super::{
    hints, indent_detail, should_use_colors, NonInteractiveUI, OutputMode, ProgressSpinner,
    SpinnerHandle, StatusKind, Theme, UserInterface, BANNER_WIDTH, DETAIL_INDENT,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    /// Create a terminal UI that never emits color codes.
    pub fn plain(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: Theme::plain(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn show_check(&mut self, position: usize, total: usize, result: &CheckResult) {
        let kind = StatusKind::from(&result.outcome);
        let visible = match kind {
            StatusKind::Failed => self.mode.shows_status(),
            _ => self.mode.shows_passing_checks(),
        };
        if !visible {
            return;
        }

        let message = match kind {
            StatusKind::Failed => self.theme.error.apply_to(result.outcome.message()),
            StatusKind::Warning => self.theme.warning.apply_to(result.outcome.message()),
            _ => self.theme.dim.apply_to(result.outcome.message()),
        };
        writeln!(
            self.term,
            "{} {} {}: {}",
            self.theme.format_counter(position, total),
            kind.styled(&self.theme),
            self.theme.highlight.apply_to(&result.label),
            message,
        )
        .ok();

        if let Some(hint) = result.outcome.hint() {
            writeln!(
                self.term,
                "{}{} {}",
                DETAIL_INDENT,
                self.theme.hint.apply_to("Hint:"),
                self.theme.hint.apply_to(hint)
            )
            .ok();
        }
        if let Some(detail) = result.outcome.detail() {
            let gutter = self.theme.border.apply_to("│").to_string();
            for line in indent_detail(detail, &gutter) {
                writeln!(self.term, "{}", line).ok();
            }
        }
    }

    fn show_banner(&mut self, report: &Report) {
        let rule = self.theme.border.apply_to("=".repeat(BANNER_WIDTH));
        if report.passed() {
            if self.mode.shows_status() {
                writeln!(self.term, "\n{}", rule).ok();
                writeln!(
                    self.term,
                    "{}",
                    self.theme.format_success(hints::after_successful_check())
                )
                .ok();
            }
        } else {
            if self.mode.shows_status() {
                writeln!(self.term, "\n{}", rule).ok();
            }
            writeln!(
                self.term,
                "{}",
                self.theme.format_error(hints::after_failed_check())
            )
            .ok();
            if self.mode.shows_passing_checks() {
                let failed: Vec<&str> = report.failures().map(|r| r.label.as_str()).collect();
                self.show_hint(&hints::rerun_after_fixing(&failed));
            }
        }

        if self.mode.shows_summary() {
            self.show_hint(&hints::run_summary(
                report.results().len(),
                report.passed_count(),
                report.warning_count(),
            ));
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
