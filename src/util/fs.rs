//! Filesystem glue: suite discovery and report artifacts.

use std::path::{Path, PathBuf};

/// List candidate suite executables directly inside `dir`.
///
/// Every regular file is a candidate except those carrying the report
/// extension, which are this tool's own artifacts from earlier runs. The
/// result is sorted so suites run in a stable order.
pub fn discover_suites(dir: &Path, report_extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let suffix = format!(".{report_extension}");
    let mut suites = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            suites.push(path);
        }
    }

    suites.sort();
    Ok(suites)
}

/// Write the raw captured output of a completed suite next to its
/// executable, with the extension swapped for the report extension.
/// Returns the artifact path.
pub fn write_report_artifact(
    executable: &Path,
    report_extension: &str,
    contents: &str,
) -> std::io::Result<PathBuf> {
    let path = executable.with_extension(report_extension);
    std::fs::write(&path, contents)?;
    Ok(path)
}
