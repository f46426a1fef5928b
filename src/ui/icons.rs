//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides the canonical status icons (TTY) and bracketed
//! markers (pipes and CI logs) used for every check line.

use super::theme::Theme;
use crate::checks::CheckOutcome;

/// Canonical status kinds used across all output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Check could not decide and let the deploy proceed.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Warning => "[warn]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<&CheckOutcome> for StatusKind {
    fn from(outcome: &CheckOutcome) -> Self {
        match outcome {
            CheckOutcome::Pass { .. } => Self::Success,
            CheckOutcome::Warn { .. } => Self::Warning,
            CheckOutcome::Fail { .. } => Self::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 3] = [StatusKind::Success, StatusKind::Failed, StatusKind::Warning];

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
    }

    #[test]
    fn bracketed_returns_text_labels() {
        assert_eq!(StatusKind::Success.bracketed(), "[ok]");
        assert_eq!(StatusKind::Failed.bracketed(), "[FAIL]");
        assert_eq!(StatusKind::Warning.bracketed(), "[warn]");
    }

    #[test]
    fn styled_returns_string_with_icon() {
        let theme = Theme::plain();
        for kind in ALL {
            let styled = kind.styled(&theme);
            assert!(
                styled.contains(kind.icon()),
                "styled({:?}) missing icon",
                kind
            );
        }
    }

    #[test]
    fn format_plain_uses_brackets() {
        let result = StatusKind::Failed.format_plain(".lovable directory");
        assert_eq!(result, "[FAIL] .lovable directory");
    }

    #[test]
    fn from_check_outcome() {
        assert_eq!(
            StatusKind::from(&CheckOutcome::pass("ok")),
            StatusKind::Success
        );
        assert_eq!(
            StatusKind::from(&CheckOutcome::warn("hmm")),
            StatusKind::Warning
        );
        assert_eq!(
            StatusKind::from(&CheckOutcome::fail("no")),
            StatusKind::Failed
        );
    }

    #[test]
    fn all_variants_have_unique_brackets() {
        let mut brackets: Vec<&str> = ALL.iter().map(|k| k.bracketed()).collect();
        brackets.sort();
        brackets.dedup();
        assert_eq!(brackets.len(), ALL.len(), "All brackets should be unique");
    }
}
