//! Terminal rendering of the ask-flow display state.
//!
//! The loading indicator is an indicatif spinner; settled states print
//! the answer (or the failure message) and the numbered source list to
//! stdout.

use std::time::Duration;

use askline_flow::{AskView, DisplayState};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Terminal view for interactive use.
pub struct TerminalView {
    no_color: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalView {
    /// Create a terminal view.
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            spinner: None,
        }
    }

    fn spinner_style() -> ProgressStyle {
        // Static template, cannot fail
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    fn print_answer(&self, answer: &str, sources: &[String]) {
        println!("{}", answer);

        if !sources.is_empty() {
            println!();
            if self.no_color {
                println!("Sources:");
            } else {
                println!("{}", "Sources:".bold().cyan());
            }
            for (i, source) in sources.iter().enumerate() {
                println!("  {}. {}", i + 1, source);
            }
        }
    }

    fn print_failure(&self, message: &str) {
        if self.no_color {
            println!("{}", message);
        } else {
            println!("{}", message.red());
        }
    }
}

impl AskView for TerminalView {
    fn render(&mut self, state: &DisplayState) {
        // Every transition replaces the previous surface, so the spinner
        // never outlives the Loading state.
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }

        match state {
            DisplayState::Idle => {}
            DisplayState::Loading => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message("Fetching answer...");
                pb.enable_steady_tick(Duration::from_millis(100));
                self.spinner = Some(pb);
            }
            DisplayState::Answered(answer) => {
                self.print_answer(&answer.answer, &answer.sources);
            }
            DisplayState::Failed(message) => {
                self.print_failure(message);
            }
        }
    }
}
