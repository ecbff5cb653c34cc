//! Clean command implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;
use crate::ui::UserInterface;

use super::context::TaskContext;
use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
///
/// Removes Terraform's working files (`.terraform` by default) anywhere under
/// the project root, plus the build directory.
pub struct CleanCommand<'a> {
    ctx: &'a TaskContext,
}

impl<'a> CleanCommand<'a> {
    /// Create a new clean command.
    pub fn new(ctx: &'a TaskContext) -> Self {
        Self { ctx }
    }
}

impl Command for CleanCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let removed = clean_project(self.ctx)?;
        if removed == 0 {
            ui.message("Nothing to clean");
        } else {
            ui.success(&format!("Removed {} item(s)", removed));
        }
        Ok(CommandResult::success())
    }
}

/// Remove every configured artifact below the project root and the build
/// directory. Returns how many entries were removed.
///
/// Entries that disappear while walking are skipped, so running this twice
/// is the same as running it once.
pub fn clean_project(ctx: &TaskContext) -> Result<usize> {
    let artifacts = &ctx.config.clean_artifacts;
    let mut removed = 0;

    let mut walker = WalkDir::new(&ctx.project_root).min_depth(1).into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_not_found(e.io_error().map(|io| io.kind())) => continue,
            Err(e) => return Err(std::io::Error::from(e).into()),
        };

        let name = entry.file_name().to_string_lossy();
        if !artifacts.iter().any(|a| a.as_str() == name) {
            continue;
        }

        let is_dir = entry.file_type().is_dir();
        if is_dir {
            walker.skip_current_dir();
        }
        if remove_path(entry.path(), is_dir)? {
            tracing::debug!("Removed {}", entry.path().display());
            removed += 1;
        }
    }

    let build = &ctx.config.directories.build;
    if remove_path(build, true)? {
        tracing::debug!("Removed build directory {}", build.display());
        removed += 1;
    }

    Ok(removed)
}

/// Remove a file or directory tree. `false` if it was already gone.
pub(crate) fn remove_path(path: &Path, is_dir: bool) -> Result<bool> {
    let result = if is_dir {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn is_not_found(kind: Option<ErrorKind>) -> bool {
    kind == Some(ErrorKind::NotFound)
}
