//! Sequential check execution.

use tracing::debug;

use crate::ui::UserInterface;

use super::{Check, CheckContext, CheckResult, Report};

/// Run every check in order and report each outcome as it completes.
///
/// A failing check never stops the battery; the report is the logical AND
/// of all outcomes.
pub fn run_checks(
    checks: &[Box<dyn Check>],
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> Report {
    let total = checks.len();
    let mut results = Vec::with_capacity(total);

    for (index, check) in checks.iter().enumerate() {
        let label = check.label();
        let mut spinner = ui.start_spinner(&format!("Checking {}...", label));
        let outcome = check.run(ctx);
        spinner.finish_clear();

        debug!(check = %label, passed = outcome.passed(), "{}", outcome.message());
        let result = CheckResult::new(label, outcome);
        ui.show_check(index + 1, total, &result);
        results.push(result);
    }

    let report = Report::new(results);
    debug!(
        passed = report.passed(),
        failures = report.failures().count(),
        "check run finished"
    );
    report
}
