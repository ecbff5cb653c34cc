//! Environment registry and selection.
//!
//! Commands that fan out (`build`, `release`) take either one environment
//! name or the `all` wildcard. The registry is closed: its names come from
//! the project config, and `all` expands to them in declared order.

pub mod selector;

pub use selector::{Environment, EnvironmentRegistry};

/// Wildcard selecting every registered environment.
pub const ALL: &str = "all";
