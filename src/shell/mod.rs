//! External process execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{ExecOutcome, Invocation, ProcessRunner, SystemRunner};
pub use mock::MockRunner;
pub use platform::{is_ci, is_ci_with, parse_system_path, resolve_tool_path};
