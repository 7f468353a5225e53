//! Accumulation of per-suite reports into the run-wide tally.

use std::collections::{BTreeMap, BTreeSet};

use crate::harness::parser::{Outcome, ResultRecord};
use crate::harness::report::SuiteReport;

/// Global accumulation across all suites in one run.
///
/// Records are grouped by suite name so the breakdown can be rendered
/// without reconstructing suite identity from record contents. `BTreeMap`
/// keys iterate sorted, which makes rendering deterministic. A suite that
/// crashed or timed out appears only in `crashed` and contributes no
/// records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    passed: BTreeMap<String, Vec<ResultRecord>>,
    failed: BTreeMap<String, Vec<ResultRecord>>,
    ignored: BTreeMap<String, Vec<ResultRecord>>,
    crashed: BTreeSet<String>,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a suite as crashed or timed out.
    pub fn record_crash(&mut self, suite: &str) {
        self.crashed.insert(suite.to_string());
    }

    /// Fold one completed suite's report into the tally, bucketing each
    /// record by outcome and preserving its position within the suite.
    pub fn record_suite(&mut self, suite: &str, report: SuiteReport) {
        for record in report.records {
            let bucket = match record.outcome {
                Outcome::Pass => &mut self.passed,
                Outcome::Fail => &mut self.failed,
                Outcome::Ignore => &mut self.ignored,
            };
            bucket.entry(suite.to_string()).or_default().push(record);
        }
    }

    pub fn passed(&self) -> &BTreeMap<String, Vec<ResultRecord>> {
        &self.passed
    }

    pub fn failed(&self) -> &BTreeMap<String, Vec<ResultRecord>> {
        &self.failed
    }

    pub fn ignored(&self) -> &BTreeMap<String, Vec<ResultRecord>> {
        &self.ignored
    }

    pub fn crashed(&self) -> &BTreeSet<String> {
        &self.crashed
    }

    pub fn passed_count(&self) -> usize {
        self.passed.values().map(Vec::len).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.values().map(Vec::len).sum()
    }

    pub fn ignored_count(&self) -> usize {
        self.ignored.values().map(Vec::len).sum()
    }

    pub fn crashed_count(&self) -> usize {
        self.crashed.len()
    }

    /// Total number of records across all completed suites.
    pub fn test_count(&self) -> usize {
        self.passed_count() + self.failed_count() + self.ignored_count()
    }

    /// Percentage of passed tests among non-ignored ones. `None` when every
    /// test was ignored or none ran, so the report can omit the line instead
    /// of dividing by zero.
    pub fn success_rate(&self) -> Option<f64> {
        let considered = self.test_count() - self.ignored_count();
        if considered == 0 {
            return None;
        }
        Some(self.passed_count() as f64 / considered as f64 * 100.0)
    }

    /// True when no suite crashed and no test failed. Ignored tests and
    /// empty runs do not count against success.
    pub fn is_success(&self) -> bool {
        self.crashed.is_empty() && self.failed.is_empty()
    }
}
