//! Placeholder substitution for configuration templates.
//!
//! Templates use the `{{ .Name }}` field syntax (the leading dot and inner
//! whitespace are optional, so `{{Name}}` works too).
//!
//! # Example
//!
//! ```
//! use tfrun::config::{render_template, TemplateContext};
//!
//! let ctx = TemplateContext::new().with("Token", "abc123");
//! let out = render_template("t.tmpl", r#"{"token": "{{ .Token }}"}"#, &ctx).unwrap();
//! assert_eq!(out, r#"{"token": "abc123"}"#);
//! ```

use crate::error::{Result, TfrunError};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*\.?([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder regex")
    })
}

/// Values available to a template.
#[derive(Debug, Default, Clone)]
pub struct TemplateContext {
    values: HashMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, replacing any previous one with the same name.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Substitute every placeholder in `source`.
///
/// # Errors
///
/// Returns `TemplateError` naming the first placeholder without a value.
/// Nothing is produced in that case.
pub fn render_template(name: &str, source: &str, context: &TemplateContext) -> Result<String> {
    let pattern = placeholder_pattern();

    if let Some(missing) = pattern
        .captures_iter(source)
        .map(|c| c[1].to_string())
        .find(|key| context.get(key).is_none())
    {
        return Err(TfrunError::TemplateError {
            name: name.to_string(),
            message: format!("no value for placeholder '{}'", missing),
        });
    }

    let rendered = pattern.replace_all(source, |caps: &Captures<'_>| {
        context.get(&caps[1]).unwrap_or_default().to_string()
    });
    Ok(rendered.into_owned())
}
