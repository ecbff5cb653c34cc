//! Config command implementation.
//!
//! Writes `~/.terraform.d/credentials.tfrc.json` from a template so Terraform
//! can reach its remote backend. An existing file is never overwritten.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir};

use crate::config::{render_template, TemplateContext};
use crate::error::{Result, TfrunError};
use crate::ui::UserInterface;

use super::context::TaskContext;
use super::dispatcher::{Command, CommandResult};

/// Environment variable holding the remote backend token.
pub const CREDENTIALS_VAR: &str = "TF_CREDENTIALS";

/// Template file name, looked up in the project's templates directory.
pub const CREDENTIALS_TEMPLATE: &str = "credentials.tfrc.json.tmpl";

/// Bundled fallback templates.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The config command implementation.
pub struct ConfigCommand<'a> {
    ctx: &'a TaskContext,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(ctx: &'a TaskContext) -> Self {
        Self { ctx }
    }

    /// Where the credentials file goes for `home`.
    pub fn credentials_path(home: &Path) -> PathBuf {
        home.join(".terraform.d").join("credentials.tfrc.json")
    }

    fn token(&self) -> Result<&str> {
        match self.ctx.credentials_token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(TfrunError::MissingCredential {
                var: CREDENTIALS_VAR.to_string(),
            }),
        }
    }

    /// Template source: the project's copy if present, else the bundled one.
    fn template_source(&self) -> Result<String> {
        let path = self.ctx.config.directories.templates.join(CREDENTIALS_TEMPLATE);
        match fs::read_to_string(&path) {
            Ok(source) => {
                tracing::debug!("Using credentials template {}", path.display());
                Ok(source)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => bundled_template(),
            Err(e) => Err(e.into()),
        }
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let token = self.token()?;

        let home = self
            .ctx
            .home_dir
            .as_deref()
            .ok_or_else(|| TfrunError::ConfigValidationError {
                message: "cannot determine home directory".to_string(),
            })?;
        let target = Self::credentials_path(home);
        if target.exists() {
            return Err(TfrunError::CredentialsExist { path: target });
        }

        let source = self.template_source()?;
        let rendered = render_template(
            CREDENTIALS_TEMPLATE,
            &source,
            &TemplateContext::new().with("Token", token),
        )?;

        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(TfrunError::CredentialsExist { path: target });
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(rendered.as_bytes())?;

        tracing::info!("Wrote {}", target.display());
        ui.success(&format!("Wrote {}", target.display()));
        Ok(CommandResult::success())
    }
}

fn bundled_template() -> Result<String> {
    TEMPLATES_DIR
        .get_file(CREDENTIALS_TEMPLATE)
        .and_then(|f| f.contents_utf8())
        .map(str::to_string)
        .ok_or_else(|| TfrunError::TemplateError {
            name: CREDENTIALS_TEMPLATE.to_string(),
            message: "bundled template missing".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    struct Fixture {
        project: TempDir,
        home: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                project: TempDir::new().unwrap(),
                home: TempDir::new().unwrap(),
            }
        }

        fn context(&self, token: Option<&str>) -> TaskContext {
            let config = ProjectConfig::default().resolve_paths(self.project.path());
            TaskContext::new(self.project.path(), config)
                .with_home_dir(Some(self.home.path().to_path_buf()))
                .with_credentials_token(token.map(str::to_string))
        }

        fn target(&self) -> PathBuf {
            ConfigCommand::credentials_path(self.home.path())
        }
    }

    #[test]
    fn writes_credentials_from_bundled_template() {
        let fx = Fixture::new();
        let ctx = fx.context(Some("s3cr3t"));
        let mut ui = MockUI::new();

        let result = ConfigCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        let written = fs::read_to_string(fx.target()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            json["credentials"]["app.terraform.io"]["token"],
            serde_json::json!("s3cr3t")
        );
    }

    #[test]
    fn project_template_takes_precedence() {
        let fx = Fixture::new();
        let dir = fx.project.path().join("assets").join("templates");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CREDENTIALS_TEMPLATE), "token={{Token}}").unwrap();
        let ctx = fx.context(Some("abc"));
        let mut ui = MockUI::new();

        ConfigCommand::new(&ctx).execute(&mut ui).unwrap();

        assert_eq!(fs::read_to_string(fx.target()).unwrap(), "token=abc");
    }

    #[test]
    fn missing_token_creates_nothing() {
        let fx = Fixture::new();
        let ctx = fx.context(None);
        let mut ui = MockUI::new();

        let err = ConfigCommand::new(&ctx).execute(&mut ui).unwrap_err();

        assert!(matches!(err, TfrunError::MissingCredential { ref var } if var == "TF_CREDENTIALS"));
        assert!(!fx.home.path().join(".terraform.d").exists());
    }

    #[test]
    fn blank_token_is_missing() {
        let fx = Fixture::new();
        let ctx = fx.context(Some("  "));
        let mut ui = MockUI::new();

        let err = ConfigCommand::new(&ctx).execute(&mut ui).unwrap_err();
        assert!(matches!(err, TfrunError::MissingCredential { .. }));
    }

    #[test]
    fn existing_file_is_not_overwritten() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.target().parent().unwrap()).unwrap();
        fs::write(fx.target(), "original").unwrap();
        let ctx = fx.context(Some("new"));
        let mut ui = MockUI::new();

        let err = ConfigCommand::new(&ctx).execute(&mut ui).unwrap_err();

        assert!(matches!(err, TfrunError::CredentialsExist { .. }));
        assert_eq!(fs::read_to_string(fx.target()).unwrap(), "original");
    }

    #[test]
    fn bad_template_leaves_no_file() {
        let fx = Fixture::new();
        let dir = fx.project.path().join("assets").join("templates");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CREDENTIALS_TEMPLATE), "{{ .Organization }}").unwrap();
        let ctx = fx.context(Some("abc"));
        let mut ui = MockUI::new();

        let err = ConfigCommand::new(&ctx).execute(&mut ui).unwrap_err();

        assert!(matches!(err, TfrunError::TemplateError { .. }));
        assert!(!fx.target().exists());
    }

    #[test]
    fn unknown_home_is_an_error() {
        let fx = Fixture::new();
        let ctx = fx.context(Some("abc")).with_home_dir(None);
        let mut ui = MockUI::new();

        assert!(ConfigCommand::new(&ctx).execute(&mut ui).is_err());
    }

    #[test]
    fn bundled_template_has_token_placeholder() {
        assert!(bundled_template().unwrap().contains("{{ .Token }}"));
    }
}
