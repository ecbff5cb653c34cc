//! Lint command implementation.

use std::path::PathBuf;

use crate::error::Result;
use crate::report::Report;
use crate::runner::{fan_out, run_step};
use crate::shell::ProcessRunner;
use crate::tools::Action;
use crate::ui::UserInterface;

use super::context::TaskContext;
use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
///
/// Runs `terraform fmt` over every configured lint path. In automation the
/// files are only checked; interactively they are rewritten in place.
pub struct LintCommand<'a> {
    ctx: &'a TaskContext,
    runner: &'a dyn ProcessRunner,
}

impl<'a> LintCommand<'a> {
    /// Create a new lint command.
    pub fn new(ctx: &'a TaskContext, runner: &'a dyn ProcessRunner) -> Self {
        Self { ctx, runner }
    }
}

impl Command for LintCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.runner.require(&self.ctx.config.tools.terraform)?;

        let builder = self.ctx.command_builder();
        let paths: Vec<PathBuf> = self.ctx.config.lint_paths();

        let mut report = Report::new("lint");
        fan_out(
            &mut report,
            ui,
            &paths,
            |path| path.display().to_string(),
            |path, ui| {
                let fmt = Action::FormatCheck;
                run_step(self.runner, ui, fmt.label(), &builder.build(fmt, path)).map(|_| ())
            },
        );

        self.ctx.finish(&report, ui)
    }
}
