//! Output verbosity modes.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Normal output plus a pass/warn/fail tally under the banner.
    Verbose,
    /// Show one line per check, the banner and a rerun hint.
    #[default]
    Normal,
    /// Show failures and the banner only.
    Quiet,
    /// Show nothing except errors and the failure banner.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows passing and warning checks.
    pub fn shows_passing_checks(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode prints the result tally after the banner.
    pub fn shows_summary(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
