//! The sequential suite pipeline: discover, run, parse, reconcile,
//! aggregate, report.

use std::path::Path;

use crate::config::Config;
use crate::console::{Console, StyleKind};
use crate::core::error::{Error, Result};
use crate::harness::{AggregateReport, Reporter, SuiteReport, reconcile};
use crate::runner::{SuiteRunner, SuiteStatus};
use crate::util::fs::{discover_suites, write_report_artifact};

/// Drives a full run over one directory of suite executables.
///
/// Suites run one at a time; each produces immutable artifacts that are
/// folded into the accumulating [`AggregateReport`]. No per-suite condition
/// ever aborts the run, and there are no retries: a crash or timeout is
/// terminal for that suite.
pub struct Orchestrator {
    config: Config,
}

impl Orchestrator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run every suite in `suite_dir` and render the aggregate report.
    ///
    /// Returns the process exit code: 0 when nothing failed or crashed
    /// (including the no-suites case), 1 otherwise.
    pub fn run(&self, suite_dir: &Path, console: &mut dyn Console) -> Result<i32> {
        let suites = discover_suites(suite_dir, &self.config.report_extension).map_err(|e| {
            Error::discover(format!("cannot list {}: {}", suite_dir.display(), e))
        })?;

        if suites.is_empty() {
            console.emit("No test suites found.", StyleKind::Plain);
            return Ok(0);
        }

        // Blank line to separate the run from preceding build output.
        console.emit("", StyleKind::Plain);

        let runner = SuiteRunner::new(self.config.timeout(), self.config.verbose);
        let mut aggregate = AggregateReport::new();

        for suite in &suites {
            let name = SuiteRunner::suite_name(suite);
            console.emit(&format!("Running test suite {name}..."), StyleKind::Plain);

            let outcome = match runner.run(suite, console) {
                Ok(outcome) => outcome,
                Err(e) => {
                    console.emit(&e.to_string(), StyleKind::Error);
                    aggregate.record_crash(&name);
                    continue;
                }
            };

            match outcome.status {
                SuiteStatus::TimedOut => {
                    console.emit(
                        &format!("Test suite {name} timed-out, test results not reported!"),
                        StyleKind::Error,
                    );
                    aggregate.record_crash(&name);
                }
                SuiteStatus::Crashed => {
                    console.emit(
                        &format!("Test suite {name} crashed, test results not reported!"),
                        StyleKind::Error,
                    );
                    aggregate.record_crash(&name);
                }
                SuiteStatus::Completed {
                    raw_output,
                    exit_code,
                } => {
                    if let Err(e) =
                        write_report_artifact(suite, &self.config.report_extension, &raw_output)
                    {
                        console.emit(
                            &format!("Could not write report for suite {name}: {e}"),
                            StyleKind::Error,
                        );
                    }

                    let report = SuiteReport::extract(&raw_output, console);

                    if let Some(mismatch) = reconcile(&report, exit_code) {
                        console.emit(
                            &format!(
                                "Unity reported {} failed tests, but {} were tracked by the test output.",
                                mismatch.reported, mismatch.parsed
                            ),
                            StyleKind::Warn,
                        );
                        console.emit("Verify test suite output manually!", StyleKind::Warn);
                    }

                    aggregate.record_suite(&name, report);
                }
            }
        }

        Reporter::new(self.config.max_passed_listed).render(&aggregate, console);

        Ok(if aggregate.is_success() { 0 } else { 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    #[test]
    fn test_empty_directory_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let orchestrator = Orchestrator::new(Config::default());
        let mut console = BufferConsole::new();

        let code = orchestrator.run(dir.path(), &mut console).unwrap();
        assert_eq!(code, 0);
        assert_eq!(console.text(), "No test suites found.\n");
    }

    #[test]
    fn test_unreadable_directory_is_error() {
        let orchestrator = Orchestrator::new(Config::default());
        let mut console = BufferConsole::new();

        let result = orchestrator.run(Path::new("/nonexistent/suites"), &mut console);
        assert!(matches!(result, Err(Error::Discover(_))));
    }
}
