//! Check outcomes and the aggregate report.

use serde::Serialize;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The precondition holds.
    Pass { message: String },

    /// The check could not decide but lets the deploy proceed.
    Warn { message: String },

    /// The precondition does not hold.
    Fail {
        message: String,
        /// Remediation guidance.
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
        /// Verbatim tool output backing the failure.
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
}

impl CheckOutcome {
    /// Create a passing outcome.
    pub fn pass(message: impl Into<String>) -> Self {
        Self::Pass {
            message: message.into(),
        }
    }

    /// Create a soft-pass outcome.
    pub fn warn(message: impl Into<String>) -> Self {
        Self::Warn {
            message: message.into(),
        }
    }

    /// Create a failing outcome without hint or detail.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail {
            message: message.into(),
            hint: None,
            detail: None,
        }
    }

    /// Attach a remediation hint. No-op unless this is a failure.
    pub fn with_hint(mut self, text: impl Into<String>) -> Self {
        if let Self::Fail { hint, .. } = &mut self {
            *hint = Some(text.into());
        }
        self
    }

    /// Attach verbatim tool output. No-op unless this is a failure.
    pub fn with_detail(mut self, text: impl Into<String>) -> Self {
        if let Self::Fail { detail, .. } = &mut self {
            let text = text.into();
            if !text.trim().is_empty() {
                *detail = Some(text);
            }
        }
        self
    }

    /// Whether the deploy may proceed as far as this check is concerned.
    pub fn passed(&self) -> bool {
        !matches!(self, Self::Fail { .. })
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::Pass { message } | Self::Warn { message } | Self::Fail { message, .. } => {
                message
            }
        }
    }

    /// Remediation hint, for failures that have one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Fail { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Tool output, for failures that captured some.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Fail { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// A check's label paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// What was checked, e.g. `DEPLOYMENT.md`.
    pub label: String,
    /// How it went.
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

impl CheckResult {
    /// Pair a label with an outcome.
    pub fn new(label: impl Into<String>, outcome: CheckOutcome) -> Self {
        Self {
            label: label.into(),
            outcome,
        }
    }

    /// Whether this check passed (a warning counts as passing).
    pub fn passed(&self) -> bool {
        self.outcome.passed()
    }
}

/// Results of one run, in check declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    passed: bool,
    results: Vec<CheckResult>,
}

impl Report {
    /// Aggregate results: the report passes only if every check passed.
    pub fn new(results: Vec<CheckResult>) -> Self {
        let passed = results.iter().all(CheckResult::passed);
        Self { passed, results }
    }

    /// Logical AND of every check.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Process exit code: 0 when every check passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }

    /// All results in declaration order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Results that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    /// Number of results that passed, warnings included.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Number of soft passes.
    pub fn warning_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, CheckOutcome::Warn { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_and_warn_count_as_passed() {
        assert!(CheckOutcome::pass("ok").passed());
        assert!(CheckOutcome::warn("unsure").passed());
        assert!(!CheckOutcome::fail("nope").passed());
    }

    #[test]
    fn hint_and_detail_only_attach_to_failures() {
        let pass = CheckOutcome::pass("ok").with_hint("h").with_detail("d");
        assert_eq!(pass, CheckOutcome::pass("ok"));

        let fail = CheckOutcome::fail("nope")
            .with_hint("do this")
            .with_detail("fatal: boom");
        assert_eq!(fail.hint(), Some("do this"));
        assert_eq!(fail.detail(), Some("fatal: boom"));
    }

    #[test]
    fn blank_detail_is_dropped() {
        let fail = CheckOutcome::fail("nope").with_detail("  \n");
        assert_eq!(fail.detail(), None);
    }

    #[test]
    fn message_accessor_covers_all_variants() {
        assert_eq!(CheckOutcome::pass("a").message(), "a");
        assert_eq!(CheckOutcome::warn("b").message(), "b");
        assert_eq!(CheckOutcome::fail("c").message(), "c");
    }

    #[test]
    fn report_passes_when_all_pass() {
        let report = Report::new(vec![
            CheckResult::new("a", CheckOutcome::pass("ok")),
            CheckResult::new("b", CheckOutcome::warn("unsure")),
        ]);
        assert!(report.passed());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn single_failure_fails_report() {
        let report = Report::new(vec![
            CheckResult::new("a", CheckOutcome::pass("ok")),
            CheckResult::new("b", CheckOutcome::fail("nope")),
            CheckResult::new("c", CheckOutcome::pass("ok")),
        ]);
        assert!(!report.passed());
        assert_eq!(report.exit_code(), 1);
        let failed: Vec<_> = report.failures().map(|r| r.label.as_str()).collect();
        assert_eq!(failed, vec!["b"]);
    }

    #[test]
    fn results_keep_order() {
        let report = Report::new(vec![
            CheckResult::new("first", CheckOutcome::fail("x")),
            CheckResult::new("second", CheckOutcome::pass("y")),
        ]);
        let labels: Vec<_> = report.results().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[test]
    fn result_serializes_flat() {
        let result = CheckResult::new(
            ".lovable",
            CheckOutcome::fail(".lovable still exists").with_hint("Remove it"),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["label"], ".lovable");
        assert_eq!(json["status"], "fail");
        assert_eq!(json["hint"], "Remove it");
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn report_serializes_aggregate() {
        let report = Report::new(vec![CheckResult::new("a", CheckOutcome::pass("ok"))]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["passed"], true);
        assert_eq!(json["results"][0]["status"], "pass");
    }
}
