//! Configuration file discovery and loading.

use crate::config::schema::ProjectConfig;
use crate::error::{Result, TfrunError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name at the project root.
pub const CONFIG_FILE: &str = ".tfrun.yml";

/// Path of the project config file for `project_root`.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE)
}

/// Load the project configuration.
///
/// An explicit path must exist. Without one, `.tfrun.yml` at the project
/// root is used when present and the built-in defaults otherwise. Relative
/// directories in the result are anchored at `project_root`.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    let config = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(TfrunError::ConfigValidationError {
                    message: format!("config file {} does not exist", path.display()),
                });
            }
            parse_file(path)?
        }
        None => {
            let path = config_path(project_root);
            if path.is_file() {
                parse_file(&path)?
            } else {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                ProjectConfig::default()
            }
        }
    };

    validate(&config)?;
    Ok(config.resolve_paths(project_root))
}

fn parse_file(path: &Path) -> Result<ProjectConfig> {
    tracing::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|e| TfrunError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reject configurations the environment registry cannot be built from.
fn validate(config: &ProjectConfig) -> Result<()> {
    if config.environments.is_empty() {
        return Err(TfrunError::ConfigValidationError {
            message: "at least one environment must be declared".to_string(),
        });
    }
    if let Some(bad) = config
        .environments
        .iter()
        .find(|e| e.trim().is_empty() || e.as_str() == crate::environment::ALL)
    {
        return Err(TfrunError::ConfigValidationError {
            message: format!("'{}' is not a valid environment name", bad),
        });
    }
    Ok(())
}
