//! Non-interactive UI for CI/headless environments.

use crate::report::Report;

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Plain text, no colors, no cursor control: output stays readable in CI
/// logs. Errors go to stderr in every mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n▶ {}\n", title);
        }
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            println!("$ {}", command);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_progress() {
            println!("[{}/{}]", current, total);
        }
    }

    fn show_report(&mut self, report: &Report) {
        println!();
        println!("  ┌─ {} ──────────────────────────────", report.target());
        let lines = report.summary_lines();
        if let Some((totals, entries)) = lines.split_last() {
            for line in entries {
                println!("  │ {}", line);
            }
            println!("  ├────────────────────────────────────");
            println!("  │ {}", totals);
        }
        println!("  └────────────────────────────────────");

        if report.overall_succeeded() {
            println!("  ✓ {} succeeded", report.target());
        } else {
            eprintln!(
                "  ✗ {} failed: {}",
                report.target(),
                report.failed().join(", ")
            );
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Outcome;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn report_rendering_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let mut report = Report::new("lint");
        report.record("infrastructure", Outcome::failed("fmt", "exited with code 3"));
        ui.show_report(&report);
    }

    #[test]
    fn empty_report_rendering_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        ui.show_report(&Report::new("build"));
    }
}
