//! Rendering of the aggregate report into the console sink.

use std::collections::BTreeMap;

use crate::console::{Console, StyleKind};
use crate::harness::aggregate::AggregateReport;
use crate::harness::parser::ResultRecord;

/// Renders an [`AggregateReport`] as the summary-plus-breakdown text report.
///
/// Rendering is a pure function of the aggregate: suites iterate in sorted
/// order and records in suite order, so the same aggregate always produces
/// byte-identical output.
pub struct Reporter {
    /// Maximum number of passed records listed in the breakdown before the
    /// rest are elided. Failed and ignored records are never truncated.
    max_passed_listed: usize,
}

impl Reporter {
    pub fn new(max_passed_listed: usize) -> Self {
        Self { max_passed_listed }
    }

    /// Render the full report.
    pub fn render(&self, aggregate: &AggregateReport, console: &mut dyn Console) {
        self.render_summary(aggregate, console);
        self.render_breakdown(aggregate, console);
        self.render_trailer(aggregate, console);
    }

    fn render_summary(&self, aggregate: &AggregateReport, console: &mut dyn Console) {
        console.emit("", StyleKind::Plain);
        console.emit("", StyleKind::Plain);
        console.emit("============= Summary =============", StyleKind::Plain);

        let crashes = aggregate.crashed_count();
        if crashes != 0 {
            console.emit(
                &format!("Warning! {crashes} test suite(s) crashed. Not all tests were performed!"),
                StyleKind::Error,
            );
        }

        console.emit(
            &format!("Ran {} tests.", aggregate.test_count()),
            StyleKind::Plain,
        );
        console.emit(
            &format!("Failed: {}", aggregate.failed_count()),
            StyleKind::Error,
        );
        console.emit(
            &format!("Passed: {}", aggregate.passed_count()),
            StyleKind::Ok,
        );
        console.emit(
            &format!("Ignore: {}", aggregate.ignored_count()),
            StyleKind::Warn,
        );

        if let Some(rate) = aggregate.success_rate() {
            console.emit(
                &format!("Success rate (without ignored tests): {rate:.2}%"),
                StyleKind::Plain,
            );
        }
    }

    fn render_breakdown(&self, aggregate: &AggregateReport, console: &mut dyn Console) {
        console.emit("", StyleKind::Plain);
        console.emit("============ Breakdown ============", StyleKind::Plain);

        if aggregate.passed_count() != 0 {
            self.render_section(
                "Passed",
                aggregate.passed(),
                StyleKind::Ok,
                Some(self.max_passed_listed),
                console,
            );
        }
        if aggregate.ignored_count() != 0 {
            self.render_section("Ignored", aggregate.ignored(), StyleKind::Warn, None, console);
        }
        if aggregate.failed_count() != 0 {
            self.render_section("Failed", aggregate.failed(), StyleKind::Error, None, console);
        }

        if aggregate.crashed_count() != 0 {
            console.emit(
                &format!("Crashed test suites ({}):", aggregate.crashed_count()),
                StyleKind::Plain,
            );
            for suite in aggregate.crashed() {
                console.emit(&format!("  {suite}"), StyleKind::Error);
            }
            console.emit("", StyleKind::Plain);
        }
    }

    /// Render one outcome section: a per-suite grouping of record lines,
    /// optionally truncated after `limit` records.
    fn render_section(
        &self,
        title: &str,
        groups: &BTreeMap<String, Vec<ResultRecord>>,
        style: StyleKind,
        limit: Option<usize>,
        console: &mut dyn Console,
    ) {
        let total: usize = groups.values().map(Vec::len).sum();
        console.emit(&format!("{title} ({total}):"), StyleKind::Plain);

        let mut listed = 0;
        'suites: for (suite, records) in groups {
            console.emit(&format!("  {suite}:"), style);
            for record in records {
                if limit.is_some_and(|cap| listed >= cap) {
                    console.emit(&format!("   ... and {} more", total - listed), StyleKind::Plain);
                    break 'suites;
                }
                console.emit(&format!("   - {}", record.display()), StyleKind::Plain);
                listed += 1;
            }
        }

        console.emit("", StyleKind::Plain);
    }

    fn render_trailer(&self, aggregate: &AggregateReport, console: &mut dyn Console) {
        console.emit("===================================", StyleKind::Plain);
        if aggregate.is_success() {
            console.emit("All good! :)", StyleKind::Ok);
        } else {
            console.emit("There is some work left to do...", StyleKind::Warn);
        }
        console.emit("", StyleKind::Plain);
        console.emit("", StyleKind::Plain);
    }
}
