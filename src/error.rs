//! Error types for tfrun operations.
//!
//! This module defines [`TfrunError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fan-out targets (`build`, `release`, `lint`) never return an error for a
//!   failed tool run; the failure is recorded in the report instead
//! - Everything here is fatal for the current target and reaches `main`
//! - Use `anyhow::Error` (via `TfrunError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tfrun operations.
#[derive(Debug, Error)]
pub enum TfrunError {
    /// Requested environment is neither `all` nor a registered name.
    #[error("Environment '{name}' not found (known: {})", known.join(", "))]
    InvalidEnvironment { name: String, known: Vec<String> },

    /// A required executable is not on the search path.
    #[error("Required tool '{tool}' not found on PATH")]
    ToolNotFound { tool: String },

    /// External command exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Credentials file is already in place.
    #[error("Terraform credentials file already exists: {path}")]
    CredentialsExist { path: PathBuf },

    /// A required secret is missing from the environment.
    #[error("Terraform remote backend token not found in environment (set {var})")]
    MissingCredential { var: String },

    /// Failed to parse the project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Template could not be rendered.
    #[error("Template error in {name}: {message}")]
    TemplateError { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tfrun operations.
pub type Result<T> = std::result::Result<T, TfrunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_environment_lists_known_names() {
        let err = TfrunError::InvalidEnvironment {
            name: "staging".into(),
            known: vec!["test".into(), "live".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'staging'"));
        assert!(msg.contains("test, live"));
    }

    #[test]
    fn tool_not_found_displays_tool() {
        let err = TfrunError::ToolNotFound {
            tool: "tfsec".into(),
        };
        assert!(err.to_string().contains("tfsec"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = TfrunError::CommandFailed {
            command: "go test ./test/...".into(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("go test ./test/..."));
        assert!(msg.contains("2"));
    }

    #[test]
    fn credentials_exist_displays_path() {
        let err = TfrunError::CredentialsExist {
            path: PathBuf::from("/home/ci/.terraform.d/credentials.tfrc.json"),
        };
        assert!(err.to_string().contains("credentials.tfrc.json"));
    }

    #[test]
    fn missing_credential_names_variable() {
        let err = TfrunError::MissingCredential {
            var: "TF_CREDENTIALS".into(),
        };
        assert!(err.to_string().contains("TF_CREDENTIALS"));
    }

    #[test]
    fn template_error_displays_name_and_message() {
        let err = TfrunError::TemplateError {
            name: "credentials.tfrc.json.tmpl".into(),
            message: "unknown placeholder 'Org'".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("credentials.tfrc.json.tmpl"));
        assert!(msg.contains("Org"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TfrunError = io_err.into();
        assert!(matches!(err, TfrunError::Io(_)));
    }
}
