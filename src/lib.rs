//! tfrun - Build automation for multi-environment Terraform projects.
//!
//! tfrun wraps `terraform`, `tfsec`, `infracost` and `go test` behind a small
//! set of targets (`build`, `release`, `lint`, `scan`, `test`, `clean`,
//! `reset`, `config`). Build and release fan out over the environments
//! declared in `.tfrun.yml`, keep going when one fails, and finish with a
//! per-environment report.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and one command per target
//! - [`config`] - `.tfrun.yml` loading and credentials templating
//! - [`environment`] - Environment registry and `all` selection
//! - [`error`] - Error types and result aliases
//! - [`report`] - Per-environment outcomes of a fan-out target
//! - [`runner`] - Best-effort fan-out and step execution
//! - [`shell`] - Process execution, tool lookup and CI detection
//! - [`tools`] - Argument assembly for the external tools
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use tfrun::environment::EnvironmentRegistry;
//!
//! let registry = EnvironmentRegistry::new(["test", "live"]);
//! let selected = registry.select("all").unwrap();
//! let names: Vec<_> = selected.iter().map(|e| e.name()).collect();
//! assert_eq!(names, vec!["test", "live"]);
//! assert!(registry.select("staging").is_err());
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod report;
pub mod runner;
pub mod shell;
pub mod tools;
pub mod ui;

pub use error::{Result, TfrunError};
