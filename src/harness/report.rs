//! Extraction of the ordered result block from a completed suite's output.

use crate::console::{Console, StyleKind};
use crate::harness::parser::{self, Outcome, ParsedLine, ResultRecord};

/// Ordered test records extracted from one completed suite run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    /// Pass/Fail/Ignore records in the order they appeared in the output.
    pub records: Vec<ResultRecord>,
}

impl SuiteReport {
    /// Parse the result block out of raw suite output.
    ///
    /// Iteration stops before the first blank line or sentinel line,
    /// whichever comes first; everything after that is Unity's own summary
    /// footer and is not reparsed. INFO lines and unrecognized lines are
    /// surfaced through `console` the moment they are encountered and are
    /// not recorded.
    pub fn extract(output: &str, console: &mut dyn Console) -> Self {
        let mut records = Vec::new();

        for line in output.split('\n') {
            match parser::classify(line) {
                ParsedLine::Blank | ParsedLine::Sentinel => break,
                ParsedLine::Record(record) => records.push(record),
                ParsedLine::Info(line) => console.emit(&line, StyleKind::Info),
                ParsedLine::Unrecognized(line) => console.emit(
                    &format!(
                        "Error parsing test output '{line}', ignoring line. Did the test crash?"
                    ),
                    StyleKind::Warn,
                ),
            }
        }

        Self { records }
    }

    /// Number of FAIL records in the block.
    pub fn fail_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == Outcome::Fail)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferConsole;

    #[test]
    fn test_extract_stops_at_sentinel() {
        let output = "a.c:10:test_a:PASS\na.c:20:test_b:FAIL\n-----------------------\n2 Tests 1 Failures 0 Ignored\n";
        let mut console = BufferConsole::new();
        let report = SuiteReport::extract(output, &mut console);

        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[0].test_name, "test_a");
        assert_eq!(report.records[1].test_name, "test_b");
        assert_eq!(report.fail_count(), 1);
        // The footer after the sentinel must not produce diagnostics.
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_extract_stops_at_blank_line() {
        let output = "a.c:10:test_a:PASS\n\na.c:20:test_b:FAIL\n";
        let mut console = BufferConsole::new();
        let report = SuiteReport::extract(output, &mut console);

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.fail_count(), 0);
    }

    #[test]
    fn test_extract_preserves_order() {
        let output = "a.c:1:test_z:PASS\na.c:2:test_a:IGNORE\na.c:3:test_m:PASS\n-----------------------\n";
        let mut console = BufferConsole::new();
        let report = SuiteReport::extract(output, &mut console);

        let names: Vec<_> = report.records.iter().map(|r| r.test_name.as_str()).collect();
        assert_eq!(names, ["test_z", "test_a", "test_m"]);
    }

    #[test]
    fn test_extract_echoes_info_without_recording() {
        let output = "a.c:1:test_a:INFO: setup done\na.c:2:test_a:PASS\n-----------------------\n";
        let mut console = BufferConsole::new();
        let report = SuiteReport::extract(output, &mut console);

        assert_eq!(report.records.len(), 1);
        assert_eq!(
            console.lines(),
            [(
                "a.c:1:test_a:INFO: setup done".to_string(),
                StyleKind::Info
            )]
        );
    }

    #[test]
    fn test_extract_warns_once_per_unrecognized_line() {
        let output = "garbage one\na.c:2:test_a:PASS\ngarbage two\n-----------------------\n";
        let mut console = BufferConsole::new();
        let report = SuiteReport::extract(output, &mut console);

        assert_eq!(report.records.len(), 1);
        let warnings: Vec<_> = console
            .lines()
            .iter()
            .filter(|(_, style)| *style == StyleKind::Warn)
            .collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].0.contains("'garbage one'"));
        assert!(warnings[1].0.contains("'garbage two'"));
    }

    #[test]
    fn test_extract_empty_output() {
        let mut console = BufferConsole::new();
        let report = SuiteReport::extract("", &mut console);
        assert!(report.records.is_empty());
        assert_eq!(report.fail_count(), 0);
    }
}
