//! Progress spinners.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use super::theme::Theme;
use super::SpinnerHandle;

/// An animated spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: Theme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: Theme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: Theme::plain(),
        }
    }

    fn finish(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish(line);
    }
}

/// Spinner stand-in for non-TTY stderr: prints one line per finish.
///
/// Like the animated spinner, it writes to stderr only.
pub struct LineSpinner {
    term: Term,
    theme: Theme,
}

impl LineSpinner {
    /// Create a line spinner and print the starting message.
    pub fn new(message: &str, theme: Theme) -> Self {
        let mut term = Term::stderr();
        writeln!(term, "{}", message).ok();
        Self { term, theme }
    }
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn finish_error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_accepts_updates() {
        let mut spinner = ProgressSpinner::hidden();
        spinner.set_message("working");
        spinner.finish_success("done");
        assert!(spinner.bar.is_finished());
    }
}
