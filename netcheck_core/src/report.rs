//! Console reporting boundary.
//!
//! Color is an explicit configuration value threaded into the reporter.
//! Coloring never alters the logical content of a message: the same text
//! is printed with and without color.

use crate::error::CheckError;
use colored::Colorize;

/// Presentation settings for check results.
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// Whether to colorize pass/fail output
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Accumulates check results and prints them as they arrive.
pub struct Reporter {
    config: ReportConfig,
    passed: usize,
    failed: usize,
}

impl Reporter {
    /// Creates a reporter with the given presentation settings.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            passed: 0,
            failed: 0,
        }
    }

    /// Records and prints a passing check.
    pub fn pass(&mut self, name: &str) {
        self.passed += 1;
        let line = format!("PASS: {}", name);
        if self.config.color {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }

    /// Records and prints a failing check with its diagnostic.
    pub fn fail(&mut self, name: &str, error: &CheckError) {
        self.failed += 1;
        let line = format!("FAIL: {}\n  {}", name, error);
        if self.config.color {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }

    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of checks that failed.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Prints a summary line and returns true if everything passed.
    pub fn summarize(&self) -> bool {
        let total = self.passed + self.failed;
        let text = format!("{}/{} checks passed", self.passed, total);
        let underline = "=".repeat(text.len());
        if self.config.color {
            if self.failed == 0 {
                println!("{}\n{}", text.green().bold(), underline.green());
            } else {
                println!("{}\n{}", text.red().bold(), underline.red());
            }
        } else {
            println!("{}\n{}", text, underline);
        }
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcheck_net::ProcessId;

    #[test]
    fn test_reporter_counts() {
        let mut reporter = Reporter::new(ReportConfig { color: false });
        reporter.pass("consensus");
        reporter.fail(
            "leader_election",
            &CheckError::cardinality("leader", 1, 2),
        );
        reporter.pass("broadcast");

        assert_eq!(reporter.passed(), 2);
        assert_eq!(reporter.failed(), 1);
        assert!(!reporter.summarize());
    }

    #[test]
    fn test_all_pass_summary() {
        let mut reporter = Reporter::new(ReportConfig { color: false });
        reporter.pass("mis");
        assert!(reporter.summarize());
    }

    #[test]
    fn test_message_content_independent_of_color() {
        let err = CheckError::missing(ProcessId::from_index(0), "decision");
        // The diagnostic string is produced before any coloring is applied
        assert!(err.to_string().contains("decision"));
    }
}
