//! Per-target pass/fail reporting.
//!
//! Fan-out commands record exactly one [`InvocationResult`] for every
//! environment (or lint path) they process. The [`Report`] keeps them in
//! processing order, is rendered once through the UI and decides the exit
//! status: the target succeeds only if every entry did.
//!
//! # Example
//!
//! ```
//! use tfrun::report::{Outcome, Report};
//!
//! let mut report = Report::new("build");
//! report.record("test", Outcome::Succeeded);
//! report.record("live", Outcome::failed("plan", "exited with code 1"));
//!
//! assert!(!report.overall_succeeded());
//! assert_eq!(report.failed(), vec!["live"]);
//! ```

use serde::Serialize;

/// How one subject of a target ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded,
    Failed {
        /// Step that failed (e.g. `plan`).
        step: String,
        /// Why it failed.
        detail: String,
    },
}

impl Outcome {
    pub fn failed(step: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Failed {
            step: step.into(),
            detail: detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Outcome for a single environment or path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Ordered results of one target run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    target: String,
    results: Vec<InvocationResult>,
}

impl Report {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            results: Vec::new(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Append one result.
    pub fn record(&mut self, name: &str, outcome: Outcome) {
        if let Outcome::Failed { step, detail } = &outcome {
            tracing::warn!("{} {}: {} failed ({})", self.target, name, step, detail);
        }
        self.results.push(InvocationResult {
            name: name.to_string(),
            outcome,
        });
    }

    pub fn results(&self) -> &[InvocationResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True iff every recorded outcome succeeded (vacuously true when empty).
    pub fn overall_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_success())
    }

    pub fn passed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }

    /// Names whose outcome failed, in processing order.
    pub fn failed(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.outcome.is_success())
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Plain-text lines of the summary, without styling.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .results
            .iter()
            .map(|r| match &r.outcome {
                Outcome::Succeeded => format!("✓ {}", r.name),
                Outcome::Failed { step, detail } => {
                    format!("✗ {:<12} {}: {}", r.name, step, detail)
                }
            })
            .collect();
        lines.push(self.totals_line());
        lines
    }

    /// `N passed · M failed`.
    pub fn totals_line(&self) -> String {
        let passed = self.passed_count();
        format!("{} passed · {} failed", passed, self.len() - passed)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
