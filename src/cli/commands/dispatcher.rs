//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::shell::{is_ci, ProcessRunner, SystemRunner};
use crate::ui::UserInterface;

use super::build::BuildCommand;
use super::clean::CleanCommand;
use super::completions::CompletionsCommand;
use super::config::{ConfigCommand, CREDENTIALS_VAR};
use super::context::TaskContext;
use super::lint::LintCommand;
use super::release::ReleaseCommand;
use super::reset::ResetCommand;
use super::scan::ScanCommand;
use super::test::TestCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Build the task context from CLI flags, config and environment.
    ///
    /// The project root is made absolute first: terraform runs with
    /// `-chdir`, so relative plan paths would resolve inside the
    /// environment directory.
    pub fn context(&self, cli: &Cli) -> Result<TaskContext> {
        let project_root = std::path::absolute(&self.project_root)?;
        let config = load_config(&project_root, cli.config.as_deref())?;
        let automated = cli.ci || is_ci();
        tracing::debug!(
            "Project {} with environments {:?} (automated: {})",
            project_root.display(),
            config.environments,
            automated
        );

        Ok(TaskContext::new(&project_root, config)
            .with_automated(automated)
            .with_report_json(cli.report_json.clone())
            .with_home_dir(dirs::home_dir())
            .with_credentials_token(std::env::var(CREDENTIALS_VAR).ok()))
    }

    /// Dispatch and execute a command against real processes.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.dispatch_with(cli, ui, &SystemRunner::new())
    }

    /// Dispatch with an explicit process runner.
    pub fn dispatch_with(
        &self,
        cli: &Cli,
        ui: &mut dyn UserInterface,
        runner: &dyn ProcessRunner,
    ) -> Result<CommandResult> {
        if let Commands::Completions(args) = &cli.command {
            return CompletionsCommand::new(args.clone()).execute(ui);
        }

        let ctx = self.context(cli)?;

        match &cli.command {
            Commands::Build(args) => BuildCommand::new(&ctx, runner, args.clone()).execute(ui),
            Commands::Release(args) => {
                ReleaseCommand::new(&ctx, runner, args.clone()).execute(ui)
            }
            Commands::Lint => LintCommand::new(&ctx, runner).execute(ui),
            Commands::Scan => ScanCommand::new(&ctx, runner).execute(ui),
            Commands::Test => TestCommand::new(&ctx, runner).execute(ui),
            Commands::Clean => CleanCommand::new(&ctx).execute(ui),
            Commands::Reset => ResetCommand::new(&ctx).execute(ui),
            Commands::Config => ConfigCommand::new(&ctx).execute(ui),
            Commands::Completions(_) => unreachable!("handled above"),
        }
    }
}
