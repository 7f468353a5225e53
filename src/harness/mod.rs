//! Parsing, reconciliation, and aggregation of Unity suite output.
//!
//! The harness sits after the runner in the pipeline: the runner captures
//! raw output from one suite executable; the harness turns it into typed
//! records ([`classify`], [`SuiteReport`]), cross-checks the parsed failure
//! count against the suite's exit status ([`reconcile`]), folds everything
//! into the run-wide tally ([`AggregateReport`]), and renders it
//! ([`Reporter`]).

mod aggregate;
mod formatter;
mod parser;
mod report;

pub use aggregate::AggregateReport;
pub use formatter::Reporter;
pub use parser::{Outcome, ParsedLine, ResultRecord, SENTINEL, classify};
pub use report::SuiteReport;

/// Disagreement between the two failure counts of one completed suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    /// Failure count reported by the suite process via its exit status.
    pub reported: i32,
    /// FAIL records actually parsed from the output.
    pub parsed: usize,
}

/// Cross-check the parsed FAIL count against the exit-status count.
///
/// Unity binaries exit with the number of failed tests, giving a second,
/// independently derived failure count for the same run. A mismatch is a
/// sanity signal only: the parsed count stays authoritative for the
/// tallies, and the caller just surfaces a warning.
pub fn reconcile(report: &SuiteReport, exit_code: i32) -> Option<CountMismatch> {
    let parsed = report.fail_count();
    if i64::from(exit_code) != parsed as i64 {
        Some(CountMismatch {
            reported: exit_code,
            parsed,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    fn report_from(output: &str) -> SuiteReport {
        let mut console = BufferConsole::new();
        SuiteReport::extract(output, &mut console)
    }

    #[test]
    fn test_reconcile_matching_counts() {
        let report = report_from("a.c:1:t1:FAIL\na.c:2:t2:PASS\n\n");
        assert_eq!(reconcile(&report, 1), None);
    }

    #[test]
    fn test_reconcile_zero_failures() {
        let report = report_from("a.c:1:t1:PASS\n\n");
        assert_eq!(reconcile(&report, 0), None);
    }

    #[test]
    fn test_reconcile_mismatch() {
        let report = report_from("a.c:1:t1:FAIL\n\n");
        assert_eq!(
            reconcile(&report, 2),
            Some(CountMismatch {
                reported: 2,
                parsed: 1
            })
        );
    }

    #[test]
    fn test_reconcile_negative_exit_code() {
        // A signal-terminated process has no real exit code; that must read
        // as a mismatch, not wrap around.
        let report = report_from("a.c:1:t1:PASS\n\n");
        assert_eq!(
            reconcile(&report, -1),
            Some(CountMismatch {
                reported: -1,
                parsed: 0
            })
        );
    }
}
