//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! project config once, builds a [`TaskContext`] and hands it, together with
//! a [`ProcessRunner`](crate::shell::ProcessRunner), to the target.

pub mod build;
pub mod clean;
pub mod completions;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod lint;
pub mod release;
pub mod reset;
pub mod scan;

pub use context::TaskContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
