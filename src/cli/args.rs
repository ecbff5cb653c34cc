//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// tfrun - Build, release, lint and scan Terraform environments.
#[derive(Debug, Parser)]
#[command(name = "tfrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .tfrun.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Force automated (non-interactive) tool flags even outside CI
    #[arg(long, global = true)]
    pub ci: bool,

    /// Write the build/release/lint report as JSON to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub report_json: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan one environment (or all) and estimate its cost
    Build(BuildArgs),

    /// Apply the configuration of one environment (or all)
    Release(ReleaseArgs),

    /// Check Terraform formatting
    Lint,

    /// Search the infrastructure code for known security issues
    Scan,

    /// Run the Go infrastructure tests
    Test,

    /// Remove temporary files created by Terraform
    Clean,

    /// Clean, then empty the vendor directory
    Reset,

    /// Write the Terraform credentials file from TF_CREDENTIALS
    Config,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BuildArgs {
    /// Environment to plan, or `all`
    #[arg(value_name = "ENV")]
    pub environment: String,

    /// Skip the infracost breakdown
    #[arg(long)]
    pub no_cost: bool,
}

/// Arguments for the `release` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ReleaseArgs {
    /// Environment to apply, or `all`
    #[arg(value_name = "ENV")]
    pub environment: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
