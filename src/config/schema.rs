//! Configuration schema definitions for tfrun.
//!
//! This module contains the struct definitions that map to the optional
//! `.tfrun.yml` file. Every field has a default, so an empty file (or no
//! file at all) yields the stock layout.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for `.tfrun.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Known environments, in the order `all` expands to.
    pub environments: Vec<String>,

    /// Seconds Terraform waits for the state lock.
    pub lock_timeout: u64,

    /// Project directory layout.
    pub directories: Directories,

    /// External executables.
    pub tools: Tools,

    /// Paths handed to `terraform fmt` (defaults to the infrastructure dir).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lint_paths: Vec<PathBuf>,

    /// File and directory names removed by `clean`.
    pub clean_artifacts: Vec<String>,

    /// Cost estimation settings.
    pub cost: CostSettings,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            environments: vec!["test".to_string(), "live".to_string()],
            lock_timeout: default_lock_timeout(),
            directories: Directories::default(),
            tools: Tools::default(),
            lint_paths: Vec::new(),
            clean_artifacts: vec![".terraform".to_string()],
            cost: CostSettings::default(),
        }
    }
}

impl ProjectConfig {
    /// Paths to lint, falling back to the infrastructure directory.
    pub fn lint_paths(&self) -> Vec<PathBuf> {
        if self.lint_paths.is_empty() {
            vec![self.directories.infrastructure.clone()]
        } else {
            self.lint_paths.clone()
        }
    }

    /// Anchor every relative directory at `root`.
    pub fn resolve_paths(mut self, root: &Path) -> Self {
        let anchor = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = root.join(&*p);
            }
        };
        anchor(&mut self.directories.infrastructure);
        anchor(&mut self.directories.build);
        anchor(&mut self.directories.test);
        anchor(&mut self.directories.vendor);
        anchor(&mut self.directories.templates);
        self.lint_paths.iter_mut().for_each(anchor);
        self
    }
}

fn default_lock_timeout() -> u64 {
    5
}

/// Directory layout, relative to the project root unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Directories {
    /// Terraform definitions, one subdirectory per environment.
    pub infrastructure: PathBuf,
    /// Plan artifacts.
    pub build: PathBuf,
    /// Go test package root.
    pub test: PathBuf,
    /// Vendored dependencies.
    pub vendor: PathBuf,
    /// Template sources (credentials template lives here).
    pub templates: PathBuf,
}

impl Default for Directories {
    fn default() -> Self {
        Self {
            infrastructure: PathBuf::from("infrastructure"),
            build: PathBuf::from("build"),
            test: PathBuf::from("test"),
            vendor: PathBuf::from("vendor"),
            templates: PathBuf::from("assets").join("templates"),
        }
    }
}

/// External executable names (or paths).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tools {
    pub terraform: String,
    pub tfsec: String,
    pub infracost: String,
    pub go: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            terraform: "terraform".to_string(),
            tfsec: "tfsec".to_string(),
            infracost: "infracost".to_string(),
            go: "go".to_string(),
        }
    }
}

/// Cost estimation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSettings {
    /// Run `infracost breakdown` after each plan.
    pub enabled: bool,
}

impl Default for CostSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
