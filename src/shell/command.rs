//! External command execution.

use crate::error::{Result, TfrunError};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use super::platform::{parse_system_path, resolve_tool_path};

/// A program plus arguments, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable name or path.
    pub program: String,

    /// Arguments, in order.
    pub args: Vec<String>,

    /// Working directory (None = inherit).
    pub cwd: Option<PathBuf>,

    /// Capture stdout instead of streaming it to the terminal.
    pub capture_stdout: bool,
}

impl Invocation {
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
            cwd: None,
            capture_stdout: false,
        }
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn capture_stdout(mut self) -> Self {
        self.capture_stdout = true;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of running an [`Invocation`] to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecOutcome {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the process exited with status 0.
    pub success: bool,

    /// Captured stdout (empty unless capture was requested).
    pub stdout: String,

    /// Wall-clock duration.
    pub duration: Duration,
}

impl ExecOutcome {
    pub fn success(stdout: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            stdout,
            duration,
        }
    }

    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            success: false,
            stdout: String::new(),
            duration,
        }
    }

    /// Human-readable reason for a failed outcome.
    pub fn failure_detail(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exited with code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Capability to run external tools.
///
/// Commands only ever talk to this trait, so tests can swap in
/// [`MockRunner`](super::MockRunner) and never spawn a process.
pub trait ProcessRunner {
    /// Run `invocation` and block until it exits.
    ///
    /// # Errors
    ///
    /// `ToolNotFound` when the program cannot be found, `Io` for any other
    /// spawn failure. A non-zero exit is not an error.
    fn execute(&self, invocation: &Invocation) -> Result<ExecOutcome>;

    /// Find `program` on the search path.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Fail with `ToolNotFound` unless `program` can be located.
    fn require(&self, program: &str) -> Result<PathBuf> {
        self.locate(program).ok_or_else(|| TfrunError::ToolNotFound {
            tool: program.to_string(),
        })
    }
}

/// Runs real processes with the terminal's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn execute(&self, invocation: &Invocation) -> Result<ExecOutcome> {
        let start = Instant::now();
        tracing::debug!("Running {}", invocation);

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);

        if let Some(cwd) = &invocation.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        if invocation.capture_stdout {
            cmd.stdout(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let output = cmd.output().map_err(|e| spawn_error(invocation, e))?;

        let duration = start.elapsed();

        if output.status.success() {
            let stdout = if invocation.capture_stdout {
                String::from_utf8_lossy(&output.stdout).to_string()
            } else {
                String::new()
            };
            Ok(ExecOutcome::success(stdout, duration))
        } else {
            tracing::debug!(
                "{} exited with {:?} after {:?}",
                invocation.program,
                output.status.code(),
                duration
            );
            Ok(ExecOutcome::failure(output.status.code(), duration))
        }
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        let candidate = Path::new(program);
        if candidate.components().count() > 1 {
            return candidate.is_file().then(|| candidate.to_path_buf());
        }
        resolve_tool_path(program, &parse_system_path())
    }
}

/// Classify a spawn failure.
///
/// `NotFound` is also what a missing working directory produces, so it only
/// means the program is missing when the directory is there.
fn spawn_error(invocation: &Invocation, e: std::io::Error) -> TfrunError {
    match (&invocation.cwd, e.kind()) {
        (Some(cwd), ErrorKind::NotFound) if !cwd.is_dir() => TfrunError::Io(std::io::Error::new(
            ErrorKind::NotFound,
            format!("working directory {} does not exist", cwd.display()),
        )),
        (_, ErrorKind::NotFound) => TfrunError::ToolNotFound {
            tool: invocation.program.clone(),
        },
        _ => TfrunError::Io(e),
    }
}
