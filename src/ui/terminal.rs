//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::report::{Outcome, Report};

use super::{should_use_colors, NonInteractiveUI, OutputMode, TfrunTheme, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: TfrunTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            TfrunTheme::new()
        } else {
            TfrunTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            writeln!(self.term, "{}", self.theme.dim.apply_to(format!("$ {}", command))).ok();
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_progress() {
            writeln!(
                self.term,
                "{}",
                self.theme.dim.apply_to(format!("[{}/{}]", current, total))
            )
            .ok();
        }
    }

    fn show_report(&mut self, report: &Report) {
        let b = &self.theme.border;

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {} {}",
            b.apply_to("┌─"),
            self.theme.highlight.apply_to(report.target()),
            b.apply_to("──────────────────────────────")
        )
        .ok();

        for result in report.results() {
            let line = match &result.outcome {
                Outcome::Succeeded => self.theme.format_success(&result.name),
                Outcome::Failed { step, detail } => format!(
                    "{} {}",
                    self.theme.format_error(&format!("{:<12}", result.name)),
                    self.theme.dim.apply_to(format!("{}: {}", step, detail))
                ),
            };
            writeln!(self.term, "  {} {}", b.apply_to("│"), line).ok();
        }

        writeln!(
            self.term,
            "  {}",
            b.apply_to("├────────────────────────────────────")
        )
        .ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("│"),
            report.totals_line()
        )
        .ok();
        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();

        if report.overall_succeeded() {
            writeln!(
                self.term,
                "  {}",
                self.theme
                    .format_success(&format!("{} succeeded", report.target()))
            )
            .ok();
        } else {
            writeln!(
                self.err,
                "  {}",
                self.theme.format_error(&format!(
                    "{} failed: {}",
                    report.target(),
                    report.failed().join(", ")
                ))
            )
            .ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
