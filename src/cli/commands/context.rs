//! Per-invocation state shared by every command.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::environment::EnvironmentRegistry;
use crate::error::{Result, TfrunError};
use crate::report::Report;
use crate::shell::{Invocation, ProcessRunner};
use crate::tools::CommandBuilder;
use crate::ui::UserInterface;

use super::dispatcher::CommandResult;

/// Everything a command needs besides the UI and the process runner.
///
/// Built once by the dispatcher from the CLI flags, the project config and
/// the process environment. Tests construct it directly.
#[derive(Debug, Clone)]
pub struct TaskContext {
    /// Project root all relative paths were resolved against.
    pub project_root: PathBuf,
    /// Loaded project configuration (paths already absolute).
    pub config: ProjectConfig,
    /// Pass non-interactive flags to external tools.
    pub automated: bool,
    /// Where to write the JSON report, if anywhere.
    pub report_json: Option<PathBuf>,
    /// Home directory the credentials file is written under.
    pub home_dir: Option<PathBuf>,
    /// Remote backend token (from `TF_CREDENTIALS`).
    pub credentials_token: Option<String>,
}

impl TaskContext {
    /// Interactive context with no home directory and no token.
    pub fn new(project_root: &Path, config: ProjectConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            automated: false,
            report_json: None,
            home_dir: None,
            credentials_token: None,
        }
    }

    pub fn with_automated(mut self, automated: bool) -> Self {
        self.automated = automated;
        self
    }

    pub fn with_report_json(mut self, path: Option<PathBuf>) -> Self {
        self.report_json = path;
        self
    }

    pub fn with_home_dir(mut self, home: Option<PathBuf>) -> Self {
        self.home_dir = home;
        self
    }

    pub fn with_credentials_token(mut self, token: Option<String>) -> Self {
        self.credentials_token = token;
        self
    }

    /// Environment registry declared by the config.
    pub fn registry(&self) -> EnvironmentRegistry {
        EnvironmentRegistry::new(self.config.environments.iter().cloned())
    }

    /// Tool invocation builder for this run's mode.
    pub fn command_builder(&self) -> CommandBuilder<'_> {
        CommandBuilder::new(&self.config, self.automated)
    }

    /// Render `report`, write it as JSON when requested, and map it to an
    /// exit status.
    pub fn finish(&self, report: &Report, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_report(report);

        if let Some(path) = &self.report_json {
            let json = report.to_json().map_err(anyhow::Error::from)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            tracing::debug!("Wrote report to {}", path.display());
        }

        if report.overall_succeeded() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }

    /// Run a single-shot target's only invocation.
    ///
    /// A non-zero exit is reported through the UI and mapped to exit code 1;
    /// spawn failures propagate.
    pub fn run_once(
        &self,
        runner: &dyn ProcessRunner,
        invocation: &Invocation,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        tracing::info!("{}", invocation);
        ui.show_command(&invocation.to_string());
        let outcome = runner.execute(invocation)?;
        tracing::debug!("{} finished in {:?}", invocation.program, outcome.duration);
        if outcome.success {
            ui.success(&format!("{} finished", invocation.program));
            return Ok(CommandResult::success());
        }

        let err = TfrunError::CommandFailed {
            command: invocation.to_string(),
            code: outcome.exit_code,
        };
        tracing::warn!("{}", err);
        ui.error(&err.to_string());
        Ok(CommandResult::failure(1))
    }
}
