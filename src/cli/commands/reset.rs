//! Reset command implementation.

use std::fs;

use crate::error::Result;
use crate::ui::UserInterface;

use super::clean::{clean_project, remove_path};
use super::context::TaskContext;
use super::dispatcher::{Command, CommandResult};

/// The reset command implementation.
///
/// Cleans the project, then leaves an empty vendor directory behind.
pub struct ResetCommand<'a> {
    ctx: &'a TaskContext,
}

impl<'a> ResetCommand<'a> {
    /// Create a new reset command.
    pub fn new(ctx: &'a TaskContext) -> Self {
        Self { ctx }
    }
}

impl Command for ResetCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let removed = clean_project(self.ctx)?;
        tracing::debug!("Clean removed {} item(s)", removed);

        let vendor = &self.ctx.config.directories.vendor;
        if remove_path(vendor, true)? {
            tracing::debug!("Removed {}", vendor.display());
        }
        fs::create_dir_all(vendor)?;

        ui.success(&format!("Reset {}", vendor.display()));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> TaskContext {
        TaskContext::new(
            temp.path(),
            ProjectConfig::default().resolve_paths(temp.path()),
        )
    }

    #[test]
    fn reset_empties_vendor_and_cleans() {
        let temp = TempDir::new().unwrap();
        let vendor = temp.path().join("vendor");
        fs::create_dir_all(vendor.join("modules").join("vpc")).unwrap();
        fs::write(vendor.join("modules").join("vpc").join("main.tf"), "").unwrap();
        let dot = temp.path().join("infrastructure").join("test").join(".terraform");
        fs::create_dir_all(&dot).unwrap();
        let ctx = context(&temp);
        let mut ui = MockUI::new();

        let result = ResetCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(vendor.is_dir());
        assert_eq!(fs::read_dir(&vendor).unwrap().count(), 0);
        assert!(!dot.exists());
    }

    #[test]
    fn reset_creates_missing_vendor() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        let mut ui = MockUI::new();

        ResetCommand::new(&ctx).execute(&mut ui).unwrap();
        ResetCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(temp.path().join("vendor").is_dir());
    }
}
