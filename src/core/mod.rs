//! Core pipeline and error types.

pub mod error;
pub mod orchestrator;

pub use error::{Error, Result};
pub use orchestrator::Orchestrator;
