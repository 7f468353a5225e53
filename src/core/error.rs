use std::path::PathBuf;

/// Result type alias for unity-suite-runner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for unity-suite-runner.
///
/// Only setup problems (bad invocation, unreadable config or suite
/// directory) are fatal. Per-suite conditions like timeouts, crashes, and
/// protocol drift are diagnostics surfaced through the console, not errors,
/// so one bad suite never aborts the rest of the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed invocation.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Suite discovery errors.
    #[error("Discovery error: {0}")]
    Discover(String),

    /// Suite process spawn/wait errors.
    #[error("Runner error: {0}")]
    Runner(String),

    /// File not found.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Create a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Error::Usage(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a discovery error.
    pub fn discover(msg: impl Into<String>) -> Self {
        Error::Discover(msg.into())
    }

    /// Create a runner error.
    pub fn runner(msg: impl Into<String>) -> Self {
        Error::Runner(msg.into())
    }
}
