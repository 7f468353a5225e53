//! unity-suite-runner: orchestrates compiled Unity test-suite executables.
//!
//! Given a directory of suite binaries, the runner executes each one under a
//! short time budget, captures its stdout, parses the Unity result-line
//! protocol (`SOURCE:LINE:TEST_NAME:TAG`), cross-checks the parsed failure
//! count against the process exit status, and renders one aggregate report.
//! The process exit code summarizes the run: 0 when every suite completed
//! without failures, 1 when anything failed or crashed.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use unity_suite_runner::{Config, Orchestrator};
//! use unity_suite_runner::console::TerminalConsole;
//!
//! # fn main() -> unity_suite_runner::Result<()> {
//! let mut console = TerminalConsole::new(true);
//! let exit_code = Orchestrator::new(Config::default()).run(Path::new("build/tests"), &mut console)?;
//! std::process::exit(exit_code);
//! # }
//! ```
//!
//! # Architecture
//!
//! The pipeline is `discovery → runner → harness → reporter`:
//!
//! - [`runner`]: spawns one suite with no arguments, enforces the timeout,
//!   and classifies the run as completed, crashed, or timed out.
//! - [`harness`]: parses the result block, reconciles the two failure
//!   counts, and accumulates the run-wide [`harness::AggregateReport`].
//! - [`console`]: the injected output sink every component emits through,
//!   which keeps the harness pure and testable without capturing stdout.
//!
//! A suite that crashes, hangs, or emits garbage only ever affects its own
//! results; the run always continues to the next suite.

pub mod config;
pub mod console;
pub mod core;
pub mod harness;
pub mod runner;
pub mod util;

pub use crate::core::{Error, Orchestrator, Result};
pub use config::Config;
