//! CI environment detection.

/// Environment variables set by common CI providers, with a display name.
const CI_PROVIDERS: &[(&str, &str)] = &[
    ("GITHUB_ACTIONS", "GitHub Actions"),
    ("GITLAB_CI", "GitLab CI"),
    ("CIRCLECI", "CircleCI"),
    ("TRAVIS", "Travis CI"),
    ("JENKINS_URL", "Jenkins"),
    ("VERCEL", "Vercel"),
    ("CI", "CI"),
];

/// Check if running in a CI environment.
///
/// Used in `main()` to force the non-interactive UI, which prints one plain
/// line per check instead of animating a spinner.
pub fn is_ci() -> bool {
    ci_provider().is_some()
}

/// Name of the detected CI provider, if any.
pub fn ci_provider() -> Option<&'static str> {
    ci_provider_from(|key| std::env::var(key).ok())
}

fn ci_provider_from<F>(lookup: F) -> Option<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    CI_PROVIDERS
        .iter()
        .find(|(var, _)| lookup(var).is_some())
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_ci_detects_environment() {
        // Just ensure function doesn't panic
        let _ = is_ci();
    }

    #[test]
    fn provider_detected_from_specific_variable() {
        let provider = ci_provider_from(|key| (key == "GITLAB_CI").then(|| "true".to_string()));
        assert_eq!(provider, Some("GitLab CI"));
    }

    #[test]
    fn specific_provider_wins_over_generic_ci() {
        let provider = ci_provider_from(|key| {
            matches!(key, "CI" | "GITHUB_ACTIONS").then(|| "true".to_string())
        });
        assert_eq!(provider, Some("GitHub Actions"));
    }

    #[test]
    fn no_provider_without_variables() {
        assert_eq!(ci_provider_from(|_| None), None);
    }
}
