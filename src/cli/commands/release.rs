//! Release command implementation.

use crate::cli::args::ReleaseArgs;
use crate::environment::Environment;
use crate::error::Result;
use crate::report::Report;
use crate::runner::{fan_out, run_step, StepResult};
use crate::shell::ProcessRunner;
use crate::tools::Action;
use crate::ui::UserInterface;

use super::context::TaskContext;
use super::dispatcher::{Command, CommandResult};

/// The release command implementation.
///
/// Applies each selected environment in turn. Outside automation Terraform
/// asks for confirmation itself; stdin is inherited for that.
pub struct ReleaseCommand<'a> {
    ctx: &'a TaskContext,
    runner: &'a dyn ProcessRunner,
    args: ReleaseArgs,
}

impl<'a> ReleaseCommand<'a> {
    /// Create a new release command.
    pub fn new(ctx: &'a TaskContext, runner: &'a dyn ProcessRunner, args: ReleaseArgs) -> Self {
        Self { ctx, runner, args }
    }

    fn release_environment(&self, env: &Environment, ui: &mut dyn UserInterface) -> StepResult {
        let builder = self.ctx.command_builder();
        let dir = env.working_dir(&self.ctx.config.directories.infrastructure);

        for action in [Action::Init, Action::Apply] {
            run_step(self.runner, ui, action.label(), &builder.build(action, &dir))?;
        }
        Ok(())
    }
}

impl Command for ReleaseCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let environments = self.ctx.registry().select(&self.args.environment)?;
        self.runner.require(&self.ctx.config.tools.terraform)?;

        if !self.ctx.automated {
            tracing::debug!("Interactive release, terraform will prompt for approval");
        }

        let mut report = Report::new("release");
        fan_out(
            &mut report,
            ui,
            &environments,
            |env| env.name().to_string(),
            |env, ui| self.release_environment(env, ui),
        );

        self.ctx.finish(&report, ui)
    }
}
