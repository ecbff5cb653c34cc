//! Command-line interface for tfrun.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - One module per target, routed by [`CommandDispatcher`]

pub mod args;
pub mod commands;

pub use args::{BuildArgs, Cli, Commands, CompletionsArgs, ReleaseArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, TaskContext};
