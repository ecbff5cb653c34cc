//! Scan command implementation.

use crate::error::Result;
use crate::shell::ProcessRunner;
use crate::tools::Action;
use crate::ui::UserInterface;

use super::context::TaskContext;
use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
///
/// Runs tfsec once over the whole infrastructure directory.
pub struct ScanCommand<'a> {
    ctx: &'a TaskContext,
    runner: &'a dyn ProcessRunner,
}

impl<'a> ScanCommand<'a> {
    /// Create a new scan command.
    pub fn new(ctx: &'a TaskContext, runner: &'a dyn ProcessRunner) -> Self {
        Self { ctx, runner }
    }
}

impl Command for ScanCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.runner.require(&self.ctx.config.tools.tfsec)?;

        ui.show_header("scan");
        let invocation = self.ctx.command_builder().build(
            Action::SecurityScan,
            &self.ctx.config.directories.infrastructure,
        );
        self.ctx.run_once(self.runner, &invocation, ui)
    }
}
