//! Build command implementation.
//!
//! `tfrun build <env|all>` plans every selected environment: init, plan
//! (saved to the build directory), the plan rendered as JSON, and an
//! infracost breakdown of that JSON.

use std::fs;

use crate::cli::args::BuildArgs;
use crate::environment::Environment;
use crate::error::Result;
use crate::report::Report;
use crate::runner::{fan_out, run_step, StepFailure, StepResult};
use crate::shell::ProcessRunner;
use crate::tools::Action;
use crate::ui::UserInterface;

use super::context::TaskContext;
use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand<'a> {
    ctx: &'a TaskContext,
    runner: &'a dyn ProcessRunner,
    args: BuildArgs,
}

impl<'a> BuildCommand<'a> {
    /// Create a new build command.
    pub fn new(ctx: &'a TaskContext, runner: &'a dyn ProcessRunner, args: BuildArgs) -> Self {
        Self { ctx, runner, args }
    }

    /// Whether the cost step should run, warning when it cannot.
    fn cost_enabled(&self, ui: &mut dyn UserInterface) -> bool {
        if self.args.no_cost || !self.ctx.config.cost.enabled {
            return false;
        }
        let infracost = &self.ctx.config.tools.infracost;
        if self.runner.locate(infracost).is_none() {
            ui.warning(&format!(
                "{} not found on PATH, skipping cost breakdown",
                infracost
            ));
            return false;
        }
        true
    }

    fn build_environment(
        &self,
        env: &Environment,
        with_cost: bool,
        ui: &mut dyn UserInterface,
    ) -> StepResult {
        let builder = self.ctx.command_builder();
        let dir = env.working_dir(&self.ctx.config.directories.infrastructure);
        let plan_file = builder.plan_file(env);
        let plan_json = builder.plan_json_file(env);

        let init = Action::Init;
        run_step(self.runner, ui, init.label(), &builder.build(init, &dir))?;

        let plan = Action::Plan {
            plan_file: &plan_file,
        };
        run_step(self.runner, ui, plan.label(), &builder.build(plan, &dir))?;

        let show = Action::ShowPlanAsJson {
            plan_file: &plan_file,
        };
        let rendered = run_step(self.runner, ui, show.label(), &builder.build(show, &dir))?;
        fs::write(&plan_json, rendered.stdout)
            .map_err(|e| StepFailure::new(show.label(), format!("writing {}: {}", plan_json.display(), e)))?;
        ui.message(&format!("Saved plan to {}", plan_json.display()));

        if with_cost {
            let cost = Action::CostBreakdown;
            run_step(self.runner, ui, cost.label(), &builder.build(cost, &plan_json))?;
        }

        Ok(())
    }
}

impl Command for BuildCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let environments = self.ctx.registry().select(&self.args.environment)?;
        self.runner.require(&self.ctx.config.tools.terraform)?;

        let with_cost = self.cost_enabled(ui);
        fs::create_dir_all(&self.ctx.config.directories.build)?;

        let mut report = Report::new("build");
        fan_out(
            &mut report,
            ui,
            &environments,
            |env| env.name().to_string(),
            |env, ui| self.build_environment(env, with_cost, ui),
        );

        self.ctx.finish(&report, ui)
    }
}
