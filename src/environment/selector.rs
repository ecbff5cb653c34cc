//! Environment selection.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, TfrunError};

use super::ALL;

/// A registered deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Environment {
    name: String,
}

impl Environment {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Terraform root for this environment under `infrastructure_dir`.
    pub fn working_dir(&self, infrastructure_dir: &Path) -> PathBuf {
        infrastructure_dir.join(&self.name)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The closed, ordered set of known environments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentRegistry {
    environments: Vec<Environment>,
}

impl EnvironmentRegistry {
    /// Build a registry, dropping repeated names (first occurrence wins).
    ///
    /// # Example
    ///
    /// ```
    /// use tfrun::environment::EnvironmentRegistry;
    ///
    /// let registry = EnvironmentRegistry::new(["test", "live", "test"]);
    /// assert_eq!(registry.names(), vec!["test", "live"]);
    /// ```
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut environments: Vec<Environment> = Vec::new();
        for name in names {
            let name = name.into();
            if !environments.iter().any(|e| e.name == name) {
                environments.push(Environment { name });
            }
        }
        Self { environments }
    }

    pub fn names(&self) -> Vec<&str> {
        self.environments.iter().map(Environment::name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.environments.iter().any(|e| e.name == name)
    }

    /// Resolve a user choice to the environments to operate on.
    ///
    /// `all` expands to the whole registry in declared order; any other
    /// choice must match a registered name exactly.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEnvironment` when the choice is unknown.
    pub fn select(&self, choice: &str) -> Result<Vec<Environment>> {
        if choice == ALL {
            return Ok(self.environments.clone());
        }

        self.environments
            .iter()
            .find(|e| e.name == choice)
            .map(|e| vec![e.clone()])
            .ok_or_else(|| TfrunError::InvalidEnvironment {
                name: choice.to_string(),
                known: self.names().into_iter().map(String::from).collect(),
            })
    }
}
