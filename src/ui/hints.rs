//! Hint text suggesting the next action after a run.

/// Banner text when every check passed.
pub fn after_successful_check() -> &'static str {
    "All checks passed. Ready to deploy."
}

/// Banner text when some checks failed.
pub fn after_failed_check() -> &'static str {
    "Deployment check failed. Fix the errors above."
}

/// Follow-up hint naming the failed checks.
pub fn rerun_after_fixing(failed: &[&str]) -> String {
    if failed.is_empty() {
        return "Re-run `deploy-check` after fixing.".to_string();
    }
    format!(
        "Failed: {}. Re-run `deploy-check` after fixing.",
        failed.join(", ")
    )
}

/// Tally printed under the banner in verbose mode.
pub fn run_summary(total: usize, passed: usize, warnings: usize) -> String {
    format!(
        "{} of {} checks passed, {} with warnings",
        passed, total, warnings
    )
}
