//! Execution of one suite binary with output capture and a bounded timeout.

use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::console::{Console, StyleKind};
use crate::core::error::{Error, Result};
use crate::harness::SENTINEL;

/// Classification of one suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteStatus {
    /// The process finished in time and produced a well-formed report.
    Completed {
        /// Full captured stdout text, verbatim.
        raw_output: String,
        /// Exit status code. By Unity convention this is the number of
        /// failed tests.
        exit_code: i32,
    },
    /// The process finished but its output contains no sentinel line, so it
    /// most likely died before printing its report. The exit code is not
    /// trusted in this state.
    Crashed,
    /// The process exceeded the time budget and was killed. Captured output
    /// is discarded.
    TimedOut,
}

/// Result of running one suite executable. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteOutcome {
    /// Executable file name with its extension stripped.
    pub suite_name: String,
    pub status: SuiteStatus,
}

/// Runs suite executables one at a time under a fixed time budget.
pub struct SuiteRunner {
    timeout: Duration,
    verbose: bool,
}

impl SuiteRunner {
    pub fn new(timeout: Duration, verbose: bool) -> Self {
        Self { timeout, verbose }
    }

    /// Derive the suite name from its executable path.
    pub fn suite_name(executable: &Path) -> String {
        executable
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| executable.to_string_lossy().into_owned())
    }

    /// Execute one suite binary with no arguments, capture its output, and
    /// classify the run.
    ///
    /// Errors are spawn/wait failures only; a timeout or a malformed report
    /// is a classification, not an error, so the caller can keep processing
    /// the remaining suites.
    pub fn run(&self, executable: &Path, console: &mut dyn Console) -> Result<SuiteOutcome> {
        let suite_name = Self::suite_name(executable);

        let mut cmd = Command::new(executable);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        if self.verbose {
            console.emit(&format!("Executing: {cmd:?}"), StyleKind::Plain);
        }

        let child = cmd.spawn().map_err(|e| {
            Error::runner(format!("failed to execute {}: {}", executable.display(), e))
        })?;

        // Watchdog thread: kills the child once the budget elapses, unless
        // the main thread already flipped the flag. Not joined; it checks
        // the flag and returns without killing if the run finished first.
        let timed_out = Arc::new(AtomicBool::new(false));
        let flag = timed_out.clone();
        let child_id = child.id();
        let timeout = self.timeout;
        std::thread::spawn(move || {
            std::thread::sleep(timeout);
            if !flag.swap(true, Ordering::SeqCst) {
                #[cfg(unix)]
                {
                    unsafe {
                        libc::kill(child_id as i32, libc::SIGKILL);
                    }
                }
                #[cfg(not(unix))]
                {
                    let _ = child_id;
                }
            }
        });

        let output = child.wait_with_output().map_err(|e| {
            Error::runner(format!(
                "failed to wait for {}: {}",
                executable.display(),
                e
            ))
        })?;

        let was_timed_out = timed_out.swap(true, Ordering::SeqCst);
        if was_timed_out {
            return Ok(SuiteOutcome {
                suite_name,
                status: SuiteStatus::TimedOut,
            });
        }

        let raw_output = String::from_utf8_lossy(&output.stdout).into_owned();

        // No sentinel anywhere means the suite never reached its own report
        // footer, even if the exit code claims success.
        if !raw_output.contains(SENTINEL) {
            return Ok(SuiteOutcome {
                suite_name,
                status: SuiteStatus::Crashed,
            });
        }

        Ok(SuiteOutcome {
            suite_name,
            status: SuiteStatus::Completed {
                raw_output,
                exit_code: output.status.code().unwrap_or(-1),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_name_strips_extension() {
        assert_eq!(
            SuiteRunner::suite_name(Path::new("build/test_basic.elf")),
            "test_basic"
        );
        assert_eq!(
            SuiteRunner::suite_name(Path::new("build/test_basic")),
            "test_basic"
        );
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use crate::console::BufferConsole;
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        fn write_script(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
            let path = dir.join(name);
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "#!/bin/sh").unwrap();
            file.write_all(body.as_bytes()).unwrap();
            drop(file);
            let mut perms = std::fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).unwrap();
            path
        }

        #[test]
        fn test_run_completed_suite() {
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(
                dir.path(),
                "test_ok",
                "printf 'a.c:1:test_a:PASS\\n-----------------------\\n'\nexit 0\n",
            );

            let runner = SuiteRunner::new(Duration::from_millis(2000), false);
            let mut console = BufferConsole::new();
            let outcome = runner.run(&script, &mut console).unwrap();

            assert_eq!(outcome.suite_name, "test_ok");
            match outcome.status {
                SuiteStatus::Completed {
                    raw_output,
                    exit_code,
                } => {
                    assert!(raw_output.contains("test_a:PASS"));
                    assert_eq!(exit_code, 0);
                }
                other => panic!("expected Completed, got {other:?}"),
            }
        }

        #[test]
        fn test_run_crashed_suite_without_sentinel() {
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(dir.path(), "test_boom", "printf 'partial out'\nexit 0\n");

            let runner = SuiteRunner::new(Duration::from_millis(2000), false);
            let mut console = BufferConsole::new();
            let outcome = runner.run(&script, &mut console).unwrap();

            assert_eq!(outcome.status, SuiteStatus::Crashed);
        }

        #[test]
        fn test_run_times_out() {
            let dir = tempfile::tempdir().unwrap();
            let script = write_script(dir.path(), "test_hang", "exec sleep 10\n");

            let runner = SuiteRunner::new(Duration::from_millis(100), false);
            let mut console = BufferConsole::new();
            let outcome = runner.run(&script, &mut console).unwrap();

            assert_eq!(outcome.status, SuiteStatus::TimedOut);
        }

        #[test]
        fn test_run_missing_executable_is_error() {
            let runner = SuiteRunner::new(Duration::from_millis(100), false);
            let mut console = BufferConsole::new();
            let result = runner.run(Path::new("/nonexistent/test_gone"), &mut console);
            assert!(result.is_err());
        }
    }
}
