//! Best-effort fan-out across environments.
//!
//! Each subject runs its steps in order. The first failed step ends that
//! subject's run (later steps depend on earlier ones: plan needs init, show
//! needs the saved plan), but never the run of the subjects after it.

use crate::report::{Outcome, Report};
use crate::shell::{ExecOutcome, Invocation, ProcessRunner};
use crate::ui::UserInterface;

/// The step that stopped a subject, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: String,
    pub detail: String,
}

impl StepFailure {
    pub fn new(step: &str, detail: impl Into<String>) -> Self {
        Self {
            step: step.to_string(),
            detail: detail.into(),
        }
    }
}

impl From<StepFailure> for Outcome {
    fn from(failure: StepFailure) -> Self {
        Outcome::Failed {
            step: failure.step,
            detail: failure.detail,
        }
    }
}

/// Result of one subject's step sequence.
pub type StepResult<T = ()> = std::result::Result<T, StepFailure>;

/// Run one tool step, turning a non-zero exit or spawn error into a
/// [`StepFailure`] labelled `step`.
pub fn run_step<R>(
    runner: &R,
    ui: &mut dyn UserInterface,
    step: &str,
    invocation: &Invocation,
) -> StepResult<ExecOutcome>
where
    R: ProcessRunner + ?Sized,
{
    tracing::info!("{}: {}", step, invocation);
    ui.show_command(&invocation.to_string());
    match runner.execute(invocation) {
        Ok(outcome) => {
            tracing::debug!("{} finished in {:?}", step, outcome.duration);
            if outcome.success {
                Ok(outcome)
            } else {
                Err(StepFailure::new(step, outcome.failure_detail()))
            }
        }
        Err(e) => Err(StepFailure::new(step, e.to_string())),
    }
}

/// Process every subject in order, recording exactly one outcome each.
///
/// `run` performs a subject's steps; its `Err` becomes a failed outcome and
/// processing moves on to the next subject.
pub fn fan_out<T, N, F>(
    report: &mut Report,
    ui: &mut dyn UserInterface,
    subjects: &[T],
    name: N,
    mut run: F,
) where
    N: Fn(&T) -> String,
    F: FnMut(&T, &mut dyn UserInterface) -> StepResult,
{
    let total = subjects.len();
    for (index, subject) in subjects.iter().enumerate() {
        let subject_name = name(subject);
        ui.show_progress(index + 1, total);
        ui.show_header(&format!("{} {}", report.target(), subject_name));

        let outcome = match run(subject, ui) {
            Ok(()) => {
                ui.success(&format!("{} {}", report.target(), subject_name));
                Outcome::Succeeded
            }
            Err(failure) => {
                ui.error(&format!(
                    "{} {}: {} {}",
                    report.target(),
                    subject_name,
                    failure.step,
                    failure.detail
                ));
                failure.into()
            }
        };
        report.record(&subject_name, outcome);
    }
}
