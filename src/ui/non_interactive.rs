//! Non-interactive UI for CI, pipes and redirected output.
//!
//! Every line is plain text with bracketed status markers, so logs stay
//! readable and greppable. Check lines and both banners go to stdout;
//! stderr carries warnings and errors only.

use crate::checks::{CheckResult, Report};

use super::{
    hints, indent_detail, OutputMode, SpinnerHandle, StatusKind, UserInterface, BANNER_WIDTH,
    DETAIL_INDENT,
};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

/// Render the plain-text lines for one check result.
///
/// The first line is `[n/total] [status] label: message`; hint and detail
/// lines follow, indented.
pub fn render_check_lines(position: usize, total: usize, result: &CheckResult) -> Vec<String> {
    let kind = StatusKind::from(&result.outcome);
    let mut lines = vec![format!(
        "[{}/{}] {}",
        position,
        total,
        kind.format_plain(&format!("{}: {}", result.label, result.outcome.message()))
    )];
    if let Some(hint) = result.outcome.hint() {
        lines.push(format!("{}Hint: {}", DETAIL_INDENT, hint));
    }
    if let Some(detail) = result.outcome.detail() {
        lines.extend(indent_detail(detail, "|"));
    }
    lines
}

/// Render the separator, the banner and its follow-up lines for a report.
///
/// Silent mode keeps only the failure banner.
pub fn render_banner_lines(report: &Report, mode: OutputMode) -> Vec<String> {
    if !mode.shows_status() {
        return if report.passed() {
            Vec::new()
        } else {
            vec![format!("✗ {}", hints::after_failed_check())]
        };
    }

    let mut lines = vec![String::new(), "=".repeat(BANNER_WIDTH)];
    if report.passed() {
        lines.push(format!("✓ {}", hints::after_successful_check()));
    } else {
        lines.push(format!("✗ {}", hints::after_failed_check()));
        if mode.shows_passing_checks() {
            let failed: Vec<&str> = report.failures().map(|r| r.label.as_str()).collect();
            lines.push(format!("  {}", hints::rerun_after_fixing(&failed)));
        }
    }
    if mode.shows_summary() {
        lines.push(format!(
            "  {}",
            hints::run_summary(
                report.results().len(),
                report.passed_count(),
                report.warning_count()
            )
        ));
    }
    lines
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn show_check(&mut self, position: usize, total: usize, result: &CheckResult) {
        let visible = match StatusKind::from(&result.outcome) {
            StatusKind::Failed => self.mode.shows_status(),
            _ => self.mode.shows_passing_checks(),
        };
        if !visible {
            return;
        }
        for line in render_check_lines(position, total, result) {
            println!("{}", line);
        }
    }

    fn show_banner(&mut self, report: &Report) {
        for line in render_banner_lines(report, self.mode) {
            println!("{}", line);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints nothing.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckOutcome;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn passing_check_renders_single_line() {
        let result = CheckResult::new("DEPLOYMENT.md", CheckOutcome::pass("DEPLOYMENT.md found"));
        let lines = render_check_lines(1, 4, &result);
        assert_eq!(lines, vec!["[1/4] [ok] DEPLOYMENT.md: DEPLOYMENT.md found"]);
    }

    #[test]
    fn warning_check_uses_warn_marker() {
        let result = CheckResult::new("Git sync", CheckOutcome::warn("Uncertain git state: ?"));
        let lines = render_check_lines(4, 4, &result);
        assert!(lines[0].starts_with("[4/4] [warn] Git sync"));
    }

    #[test]
    fn failing_check_renders_hint_and_detail() {
        let result = CheckResult::new(
            "Git sync",
            CheckOutcome::fail("Dirty working tree: uncommitted changes present")
                .with_hint("Commit and push your changes")
                .with_detail(" M src/App.tsx\n?? notes.txt"),
        );
        let lines = render_check_lines(4, 4, &result);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("[4/4] [FAIL] Git sync: Dirty working tree"));
        assert_eq!(lines[1], "      Hint: Commit and push your changes");
        assert_eq!(lines[2], "      |  M src/App.tsx");
        assert_eq!(lines[3], "      | ?? notes.txt");
    }

    fn failed_report() -> Report {
        Report::new(vec![
            CheckResult::new("DEPLOYMENT.md", CheckOutcome::fail("DEPLOYMENT.md not found")),
            CheckResult::new("Git sync", CheckOutcome::warn("Uncertain git state: ?")),
        ])
    }

    #[test]
    fn success_banner_follows_separator() {
        let report = Report::new(vec![CheckResult::new(
            "DEPLOYMENT.md",
            CheckOutcome::pass("DEPLOYMENT.md found"),
        )]);
        let lines = render_banner_lines(&report, OutputMode::Normal);
        assert_eq!(lines[1], "=".repeat(BANNER_WIDTH));
        assert_eq!(lines[2], "✓ All checks passed. Ready to deploy.");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn failure_banner_sits_under_separator_with_rerun_hint() {
        let lines = render_banner_lines(&failed_report(), OutputMode::Normal);
        assert_eq!(lines[1], "=".repeat(BANNER_WIDTH));
        assert_eq!(lines[2], "✗ Deployment check failed. Fix the errors above.");
        assert!(lines[3].contains("Failed: DEPLOYMENT.md."));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn quiet_failure_banner_omits_rerun_hint() {
        let lines = render_banner_lines(&failed_report(), OutputMode::Quiet);
        assert_eq!(lines.last().unwrap(), "✗ Deployment check failed. Fix the errors above.");
    }

    #[test]
    fn silent_keeps_only_failure_banner() {
        let lines = render_banner_lines(&failed_report(), OutputMode::Silent);
        assert_eq!(lines, vec!["✗ Deployment check failed. Fix the errors above."]);

        let passed = Report::new(vec![CheckResult::new("x", CheckOutcome::pass("ok"))]);
        assert!(render_banner_lines(&passed, OutputMode::Silent).is_empty());
    }

    #[test]
    fn verbose_banner_adds_tally() {
        let lines = render_banner_lines(&failed_report(), OutputMode::Verbose);
        assert_eq!(
            lines.last().unwrap(),
            "  1 of 2 checks passed, 1 with warnings"
        );
    }

    #[test]
    fn spinner_is_noop() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let mut spinner = ui.start_spinner("Checking DEPLOYMENT.md...");
        spinner.set_message("still checking");
        spinner.finish_clear();
    }
}
