//! Line classifier for the Unity result protocol.
//!
//! Unity test binaries print one line per test in the form
//! `SOURCE:LINE:TEST_NAME:TAG`, followed by a sentinel line of dashes and
//! their own summary footer. Tags are detected by substring containment
//! rather than strict field splitting: the source path may itself contain
//! the `:` separator (Windows-style drive prefixes), so only the tag marker
//! is reliable.

use std::path::Path;

/// Boundary line emitted by Unity between the result block and its summary
/// footer. Matched exactly; its presence anywhere in the captured output is
/// also what distinguishes a completed suite from a crashed one.
pub const SENTINEL: &str = "-----------------------";

/// Outcome of a single test, as tagged in the result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Ignore,
}

/// One parsed test result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// Text before the first `:`, exactly as parsed. Kept intact for
    /// identity; only the display form strips the directory part.
    pub source_location: String,
    /// Everything after the first `:`, verbatim (line number, test name,
    /// tag, and any trailing message).
    pub remainder: String,
    /// The field immediately preceding the tag marker.
    pub test_name: String,
    pub outcome: Outcome,
}

impl ResultRecord {
    /// Display form of the record: the source location reduced to its file
    /// name, the rest of the line untouched.
    pub fn display(&self) -> String {
        let base = Path::new(&self.source_location)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_location.clone());
        format!("{base}:{}", self.remainder)
    }
}

/// Classification of one line of suite output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A countable Pass/Fail/Ignore result.
    Record(ResultRecord),
    /// An INFO line. Echoed to the live console, never counted.
    Info(String),
    /// The sentinel boundary line.
    Sentinel,
    /// An empty line.
    Blank,
    /// A non-empty line matching no known tag. Surfaced as a diagnostic,
    /// then skipped.
    Unrecognized(String),
}

/// Classify a single line of suite output.
pub fn classify(line: &str) -> ParsedLine {
    if line.is_empty() {
        return ParsedLine::Blank;
    }
    if line == SENTINEL {
        return ParsedLine::Sentinel;
    }

    const TAGS: [(&str, Outcome); 3] = [
        (":PASS", Outcome::Pass),
        (":FAIL", Outcome::Fail),
        (":IGNORE", Outcome::Ignore),
    ];
    for (marker, outcome) in TAGS {
        if let Some(idx) = line.find(marker) {
            return ParsedLine::Record(build_record(line, idx, outcome));
        }
    }

    if line.contains(":INFO") {
        return ParsedLine::Info(line.to_string());
    }

    ParsedLine::Unrecognized(line.to_string())
}

fn build_record(line: &str, tag_idx: usize, outcome: Outcome) -> ResultRecord {
    let (source_location, remainder) = match line.split_once(':') {
        Some((loc, rest)) => (loc.to_string(), rest.to_string()),
        // Unreachable for a line containing a `:TAG` marker, but do not
        // panic on it.
        None => (line.to_string(), String::new()),
    };
    let test_name = line[..tag_idx].rsplit(':').next().unwrap_or("").to_string();

    ResultRecord {
        source_location,
        remainder,
        test_name,
        outcome,
    }
}
