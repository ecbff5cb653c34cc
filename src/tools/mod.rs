//! External tool invocations.
//!
//! [`CommandBuilder`] turns an [`Action`] plus a target path into a ready
//! [`Invocation`](crate::shell::Invocation). Automated (CI) mode appends the
//! non-interactive and colorless flags each tool understands.

pub mod builder;

pub use builder::{Action, CommandBuilder};
