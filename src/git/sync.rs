//! Classification of a branch's position relative to its upstream.
//!
//! The counts from `git rev-list --left-right --count HEAD...@{upstream}`
//! are authoritative. The free-text summary printed by `git status -uno`
//! is only consulted when the counts query fails, and anything it cannot
//! match is reported as [`SyncState::Indeterminate`].

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Where the local branch stands against its upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SyncState {
    /// Local branch and upstream point at the same commit.
    UpToDate,
    /// Local commits not yet pushed.
    Ahead { commits: u32 },
    /// Upstream commits not yet pulled.
    Behind { commits: u32 },
    /// Both sides have commits the other lacks.
    Diverged { ahead: u32, behind: u32 },
    /// Output did not match any known phrasing; holds its first line.
    Indeterminate { summary: String },
}

impl SyncState {
    /// Build a state from ahead/behind commit counts.
    pub fn from_counts(ahead: u32, behind: u32) -> Self {
        match (ahead, behind) {
            (0, 0) => Self::UpToDate,
            (ahead, 0) => Self::Ahead { commits: ahead },
            (0, behind) => Self::Behind { commits: behind },
            (ahead, behind) => Self::Diverged { ahead, behind },
        }
    }
}

/// Parse the output of `git rev-list --left-right --count HEAD...@{upstream}`.
///
/// The left column counts commits only on `HEAD` (ahead), the right column
/// commits only on the upstream (behind). Returns `None` on anything that is
/// not exactly two integers.
pub fn parse_left_right_counts(output: &str) -> Option<SyncState> {
    let mut fields = output.split_whitespace();
    let ahead = fields.next()?.parse::<u32>().ok()?;
    let behind = fields.next()?.parse::<u32>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(SyncState::from_counts(ahead, behind))
}

static AHEAD_BEHIND_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"by (\d+) commits?").unwrap());

static DIVERGED_COUNTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"have (\d+) and (\d+) different commits?").unwrap());

/// Classify the human-readable summary printed by `git status -uno`.
///
/// Matches git's English phrasing ("up to date", "ahead", "behind",
/// "diverged"). Counts missing from the text are reported as 1, which is the
/// least git would print for that state.
pub fn classify_status_summary(output: &str) -> SyncState {
    let count = || {
        AHEAD_BEHIND_COUNT
            .captures(output)
            .and_then(|c| c[1].parse::<u32>().ok())
            .unwrap_or(1)
    };

    if output.contains("Your branch is up to date") || output.contains("Your branch is up-to-date")
    {
        SyncState::UpToDate
    } else if output.contains("Your branch is ahead") {
        SyncState::Ahead { commits: count() }
    } else if output.contains("Your branch is behind") {
        SyncState::Behind { commits: count() }
    } else if output.contains("have diverged") {
        let (ahead, behind) = DIVERGED_COUNTS
            .captures(output)
            .and_then(|c| Some((c[1].parse::<u32>().ok()?, c[2].parse::<u32>().ok()?)))
            .unwrap_or((1, 1));
        SyncState::Diverged { ahead, behind }
    } else {
        let summary = output
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("(no output)")
            .to_string();
        SyncState::Indeterminate { summary }
    }
}
