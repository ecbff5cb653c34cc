//! Scripted process runner for tests.
//!
//! `MockRunner` implements [`ProcessRunner`] without spawning anything. It
//! records every invocation and answers from a small rule list: by default
//! every call to an installed tool succeeds.
//!
//! # Example
//!
//! ```
//! use tfrun::shell::{Invocation, MockRunner, ProcessRunner};
//!
//! let runner = MockRunner::with_tools(&["terraform"]).fail_on(&["plan"], 1);
//!
//! let init = Invocation::new("terraform", vec!["init".into()]);
//! let plan = Invocation::new("terraform", vec!["plan".into()]);
//! assert!(runner.execute(&init).unwrap().success);
//! assert!(!runner.execute(&plan).unwrap().success);
//! assert_eq!(runner.calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TfrunError};

use super::command::{ExecOutcome, Invocation, ProcessRunner};

#[derive(Debug, Clone)]
enum Response {
    Fail(i32),
    Stdout(String),
}

#[derive(Debug, Clone)]
struct Rule {
    needles: Vec<String>,
    response: Response,
}

impl Rule {
    fn matches(&self, command_line: &str) -> bool {
        self.needles.iter().all(|n| command_line.contains(n.as_str()))
    }
}

/// Mock process runner.
#[derive(Debug, Default)]
pub struct MockRunner {
    tools: BTreeSet<String>,
    rules: Vec<Rule>,
    calls: RefCell<Vec<Invocation>>,
}

impl MockRunner {
    /// A runner with no tools installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A runner where `tools` are on the search path.
    pub fn with_tools(tools: &[&str]) -> Self {
        Self {
            tools: tools.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Exit with `code` when the command line contains every needle.
    pub fn fail_on(mut self, needles: &[&str], code: i32) -> Self {
        self.rules.push(Rule {
            needles: needles.iter().map(|n| n.to_string()).collect(),
            response: Response::Fail(code),
        });
        self
    }

    /// Succeed with `stdout` when the command line contains every needle.
    pub fn stdout_on(mut self, needles: &[&str], stdout: &str) -> Self {
        self.rules.push(Rule {
            needles: needles.iter().map(|n| n.to_string()).collect(),
            response: Response::Stdout(stdout.to_string()),
        });
        self
    }

    /// Every invocation seen so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Command lines of every invocation seen so far.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.to_string()).collect()
    }
}

impl ProcessRunner for MockRunner {
    fn execute(&self, invocation: &Invocation) -> Result<ExecOutcome> {
        self.calls.borrow_mut().push(invocation.clone());

        if !self.tools.contains(&invocation.program) {
            return Err(TfrunError::ToolNotFound {
                tool: invocation.program.clone(),
            });
        }

        let line = invocation.to_string();
        let outcome = match self.rules.iter().find(|r| r.matches(&line)) {
            Some(Rule {
                response: Response::Fail(code),
                ..
            }) => ExecOutcome::failure(Some(*code), Duration::ZERO),
            Some(Rule {
                response: Response::Stdout(out),
                ..
            }) => ExecOutcome::success(out.clone(), Duration::ZERO),
            None => ExecOutcome::success(String::new(), Duration::ZERO),
        };
        Ok(outcome)
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.tools
            .contains(program)
            .then(|| PathBuf::from("/mock/bin").join(program))
    }
}
