//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything in Normal, plus the command line of each tool invocation.
    Verbose,
    /// Show headers, status and the final report.
    #[default]
    Normal,
    /// Show the final report and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows step progress counters.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode echoes each external command before it runs.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
