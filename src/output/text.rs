//! Terminal output for human-readable display
//!
//! This module provides:
//! - One colored line per checked dependency on stdout
//! - A progress bar on stderr while checks are running
//! - Quiet mode that only prints updates and failures

use crate::domain::{CheckOutcome, CheckStatus};
use crate::output::{elapsed_message, Reporter, BEGIN_MESSAGE};
use crate::progress::Progress;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// Reporter printing to the terminal
pub struct TerminalReporter {
    /// Progress bar on stderr
    progress: Progress,
    /// Only print updates and failures
    quiet: bool,
    /// Whether to use colors
    color: bool,
}

impl TerminalReporter {
    /// Create a new terminal reporter with color option
    pub fn with_color(quiet: bool, color: bool) -> Self {
        Self {
            progress: Progress::new(!quiet),
            quiet,
            color,
        }
    }

    /// Format an outcome line, or `None` if quiet mode hides it
    pub fn format_outcome(&self, outcome: &CheckOutcome) -> Option<String> {
        let line = outcome.to_string();
        match &outcome.status {
            CheckStatus::UpToDate if self.quiet => None,
            _ if !self.color => Some(line),
            CheckStatus::UpdateAvailable => Some(line.yellow().bold().to_string()),
            CheckStatus::UpToDate => Some(line.green().to_string()),
            CheckStatus::Failed { .. } => Some(line.red().to_string()),
        }
    }

    fn print(&self, line: &str) {
        self.progress.suspend(|| {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{}", line);
            let _ = stdout.flush();
        });
    }
}

impl Reporter for TerminalReporter {
    fn begin(&mut self, total: usize) {
        if !self.quiet {
            self.print(BEGIN_MESSAGE);
        }
        if total > 0 {
            self.progress.start(total as u64, "Checking dependencies");
        }
    }

    fn outcome(&mut self, outcome: &CheckOutcome) {
        if let Some(line) = self.format_outcome(outcome) {
            self.print(&line);
        }
        self.progress.inc();
    }

    fn finish(&mut self, elapsed: Duration) {
        self.progress.finish_and_clear();
        if !self.quiet {
            let line = elapsed_message(elapsed);
            if self.color {
                self.print(&line.dimmed().to_string());
            } else {
                self.print(&line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dependency;

    fn dependency() -> Dependency {
        Dependency::new("glm", "https://github.com/g-truc/glm.git", "v1.0.0")
    }

    #[test]
    fn test_format_outcome_plain() {
        let reporter = TerminalReporter::with_color(false, false);
        let outcome = CheckOutcome::resolved(&dependency(), "v1.0.0", "v1.0.1");
        assert_eq!(
            reporter.format_outcome(&outcome).unwrap(),
            "Update available for glm: v1.0.0 -> v1.0.1"
        );
    }

    #[test]
    fn test_format_outcome_colored_keeps_text() {
        let reporter = TerminalReporter::with_color(false, true);
        let outcome = CheckOutcome::resolved(&dependency(), "v1.0.0", "v1.0.0");
        let line = reporter.format_outcome(&outcome).unwrap();
        assert!(line.contains("glm is up to date (v1.0.0)"));
    }

    #[test]
    fn test_quiet_hides_up_to_date() {
        let reporter = TerminalReporter::with_color(true, false);
        let up_to_date = CheckOutcome::resolved(&dependency(), "v1.0.0", "v1.0.0");
        assert!(reporter.format_outcome(&up_to_date).is_none());

        let update = CheckOutcome::resolved(&dependency(), "v1.0.0", "v1.1.0");
        assert!(reporter.format_outcome(&update).is_some());

        let failed = CheckOutcome::failed(&dependency(), "HTTP 500");
        assert!(reporter.format_outcome(&failed).is_some());
    }

    #[test]
    fn test_reporter_lifecycle_quiet() {
        let mut reporter = TerminalReporter::with_color(true, false);
        reporter.begin(1);
        reporter.outcome(&CheckOutcome::resolved(&dependency(), "v1.0.0", "v1.0.0"));
        reporter.finish(Duration::from_millis(5));
    }
}
