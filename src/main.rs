use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use clap::error::ErrorKind;

use unity_suite_runner::console::TerminalConsole;
use unity_suite_runner::{Config, Orchestrator, Result};

/// Run every Unity test-suite executable in a directory and print an
/// aggregate report.
#[derive(Debug, Parser)]
#[command(name = "unity-suite-runner", version, about)]
struct Cli {
    /// Directory containing the compiled test-suite executables.
    suite_dir: PathBuf,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Per-suite time budget in milliseconds (overrides the config file).
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Echo the command spawned for each suite.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not usage errors; everything
            // else exits 1 before any suite runs.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            exit(code);
        }
    };

    match run(cli) {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };

    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if cli.verbose {
        config.verbose = true;
    }
    config.validate()?;

    let colorize = !cli.no_color && std::io::stdout().is_terminal();
    let mut console = TerminalConsole::new(colorize);

    Orchestrator::new(config).run(&cli.suite_dir, &mut console)
}
