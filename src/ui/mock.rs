//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use tfrun::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("Planning test");
//! ui.success("build test");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("Planning"));
//! assert!(ui.successes().contains(&"build test".to_string()));
//! ```

use crate::report::Report;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    progress: Vec<(usize, usize)>,
    commands: Vec<String>,
    reports: Vec<Report>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured progress updates.
    pub fn progress(&self) -> &[(usize, usize)] {
        &self.progress
    }

    /// Get every command line echoed in Verbose mode.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get every report that was rendered.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// The most recently rendered report.
    pub fn last_report(&self) -> Option<&Report> {
        self.reports.last()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            self.commands.push(command.to_string());
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.progress.push((current, total));
    }

    fn show_report(&mut self, report: &Report) {
        self.reports.push(report.clone());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Outcome;

    #[test]
    fn captures_messages_by_kind() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");
        assert!(ui.has_message("hello"));
        assert!(ui.has_success("done"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
    }

    #[test]
    fn captures_headers_and_progress() {
        let mut ui = MockUI::new();
        ui.show_header("build test");
        ui.show_progress(1, 2);
        assert_eq!(ui.headers(), &["build test".to_string()]);
        assert_eq!(ui.progress(), &[(1, 2)]);
    }

    #[test]
    fn captures_reports() {
        let mut ui = MockUI::new();
        let mut report = Report::new("build");
        report.record("test", Outcome::Succeeded);
        ui.show_report(&report);
        assert_eq!(ui.reports().len(), 1);
        assert_eq!(ui.last_report(), Some(&report));
    }

    #[test]
    fn commands_are_captured_only_when_verbose() {
        let mut verbose = MockUI::with_mode(OutputMode::Verbose);
        let mut normal = MockUI::new();
        verbose.show_command("terraform fmt -recursive");
        normal.show_command("terraform fmt -recursive");
        assert_eq!(verbose.commands(), &["terraform fmt -recursive".to_string()]);
        assert!(normal.commands().is_empty());
        assert_eq!(verbose.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn interactive_flag_is_configurable() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
