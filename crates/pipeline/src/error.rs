//! Error types for the pipeline crate.

use thiserror::Error;

/// Errors raised by the ranking and view-building stages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Caller asked for something the pipeline cannot produce
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PipelineError>;
