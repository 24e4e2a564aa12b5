//! Error types for the catalog crate.
//!
//! Every variant here is an `InvalidInput` condition from the point of view
//! of the export pipeline: the provider handed us something we cannot rank.

use thiserror::Error;

/// Errors that can occur while decoding and validating provider payloads
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Payload is not valid JSON or does not have the expected envelope
    #[error("Malformed provider payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record lacks one of the fields the pipeline sorts on
    #[error("Record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A field is present but its value is unusable
    #[error("Record {index} has invalid value for {field}: {value}")]
    InvalidValue {
        index: usize,
        field: &'static str,
        value: String,
    },
}

impl CatalogError {
    /// True for per-record validation failures (as opposed to a broken envelope).
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingField { .. } | CatalogError::InvalidValue { .. }
        )
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
