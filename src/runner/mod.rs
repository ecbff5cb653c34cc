//! Step sequencing for fan-out commands.

pub mod fanout;

pub use fanout::{fan_out, run_step, StepFailure, StepResult};
