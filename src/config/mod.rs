//! Project configuration.
//!
//! Directory layout, environment registry, lock timeout and tool names are
//! read from an optional `.tfrun.yml` and handed to every command as an
//! explicit [`ProjectConfig`].

pub mod loader;
pub mod schema;
pub mod template;

pub use loader::{config_path, load_config, CONFIG_FILE};
pub use schema::{CostSettings, Directories, ProjectConfig, Tools};
pub use template::{render_template, TemplateContext};
