//! Configuration value check.
//!
//! Reads a build configuration file as plain text and looks for an expected
//! `key: value` entry. A missing file and a file without the entry are
//! reported differently so the fix is obvious.

use std::io::ErrorKind;

use crate::config::ConfigValueSettings;

use super::{Check, CheckContext, CheckOutcome};

/// Passes when the configured file contains `key: value`.
#[derive(Debug, Clone)]
pub struct ConfigValueCheck {
    settings: ConfigValueSettings,
}

impl ConfigValueCheck {
    /// Create the check from its settings.
    pub fn new(settings: ConfigValueSettings) -> Self {
        Self { settings }
    }
}

impl Check for ConfigValueCheck {
    fn label(&self) -> String {
        format!("{} in {}", self.settings.key, self.settings.file.display())
    }

    fn run(&self, ctx: &CheckContext<'_>) -> CheckOutcome {
        let file = &self.settings.file;
        let path = ctx.project_root.join(file);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return CheckOutcome::fail(format!("{} not found", file.display())).with_hint(
                    format!(
                        "Create {} with {}",
                        file.display(),
                        self.settings.display()
                    ),
                );
            }
            Err(e) => {
                return CheckOutcome::fail(format!("Could not read {}: {}", file.display(), e));
            }
        };

        let pattern = match self.settings.pattern() {
            Ok(pattern) => pattern,
            Err(e) => return CheckOutcome::fail(e.to_string()),
        };

        if pattern.is_match(&content) {
            CheckOutcome::pass(format!(
                "{} sets {}",
                file.display(),
                self.settings.display()
            ))
        } else {
            CheckOutcome::fail(format!(
                "{} is misconfigured: expected {}",
                file.display(),
                self.settings.display()
            ))
            .with_hint(format!(
                "Set {} in {}",
                self.settings.display(),
                file.display()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockGit;
    use std::fs;
    use tempfile::TempDir;

    fn run_with(content: Option<&str>) -> CheckOutcome {
        let temp = TempDir::new().unwrap();
        if let Some(content) = content {
            fs::write(temp.path().join("vite.config.ts"), content).unwrap();
        }
        let git = MockGit::new();
        let ctx = CheckContext::new(temp.path(), &git);
        ConfigValueCheck::new(ConfigValueSettings::default()).run(&ctx)
    }

    #[test]
    fn passes_with_expected_port() {
        let outcome = run_with(Some(
            "export default defineConfig({\n  server: {\n    port: 8082,\n  },\n});\n",
        ));
        assert!(outcome.passed());
    }

    #[test]
    fn passes_with_extra_whitespace() {
        assert!(run_with(Some("server: { port:   8082 }")).passed());
    }

    #[test]
    fn fails_with_other_port() {
        let outcome = run_with(Some("server: { port: 9000 }"));
        assert!(!outcome.passed());
        assert!(outcome.message().contains("misconfigured"));
        assert!(outcome.message().contains("port: 8082"));
    }

    #[test]
    fn missing_file_is_distinct_failure() {
        let outcome = run_with(None);
        assert!(!outcome.passed());
        assert!(outcome.message().contains("not found"));
        assert!(!outcome.message().contains("misconfigured"));
    }

    #[test]
    fn empty_file_is_misconfigured() {
        let outcome = run_with(Some(""));
        assert!(!outcome.passed());
        assert!(outcome.message().contains("misconfigured"));
    }

    #[test]
    fn unreadable_path_fails_without_panicking() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("vite.config.ts")).unwrap();
        let git = MockGit::new();
        let ctx = CheckContext::new(temp.path(), &git);

        let outcome = ConfigValueCheck::new(ConfigValueSettings::default()).run(&ctx);

        assert!(!outcome.passed());
    }

    #[test]
    fn custom_key_and_value() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app.yml"), "base_path :  /admin\n").unwrap();
        let git = MockGit::new();
        let ctx = CheckContext::new(temp.path(), &git);
        let settings = ConfigValueSettings {
            file: "app.yml".into(),
            key: "base_path".to_string(),
            value: "/admin".to_string(),
        };

        assert!(ConfigValueCheck::new(settings).run(&ctx).passed());
    }
}
