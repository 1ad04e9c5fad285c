//! Output for update check results
//!
//! This module provides:
//! - The `Reporter` trait the checker prints through
//! - Terminal output with colors and a progress spinner
//! - An in-memory reporter for tests and embedding

mod text;

pub use text::TerminalReporter;

use crate::domain::CheckOutcome;
use std::time::Duration;

/// Line printed before the checks start
pub const BEGIN_MESSAGE: &str = "Checking for CPM/Geode dep updates...";

/// Line printed once every check has finished
pub fn elapsed_message(elapsed: Duration) -> String {
    format!("Update check complete in {:.3}s", elapsed.as_secs_f64())
}

/// Sink for the lines produced by an update check
pub trait Reporter: Send {
    /// Called once before any dependency is checked
    fn begin(&mut self, total: usize);

    /// Called once per dependency, in completion order
    fn outcome(&mut self, outcome: &CheckOutcome);

    /// Called once after every dependency has been checked
    fn finish(&mut self, elapsed: Duration);
}

/// Reporter that keeps plain lines and outcomes in memory
#[derive(Debug, Default)]
pub struct BufferedReporter {
    lines: Vec<String>,
    outcomes: Vec<CheckOutcome>,
}

impl BufferedReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// All printed lines, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All outcomes, in completion order
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Find the outcome for a dependency by name
    pub fn outcome_for(&self, name: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.dependency_name == name)
    }
}

impl Reporter for BufferedReporter {
    fn begin(&mut self, _total: usize) {
        self.lines.push(BEGIN_MESSAGE.to_string());
    }

    fn outcome(&mut self, outcome: &CheckOutcome) {
        self.lines.push(outcome.to_string());
        self.outcomes.push(outcome.clone());
    }

    fn finish(&mut self, elapsed: Duration) {
        self.lines.push(elapsed_message(elapsed));
    }
}
