//! Error types for the TMDB client.

use catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur when fetching movies from TMDB
#[derive(Error, Debug)]
pub enum TmdbClientError {
    /// Connection, timeout, or other transport failure. The request URL is
    /// stripped because its query string carries the API key.
    #[error("Request to TMDB failed: {0}")]
    Request(reqwest::Error),

    /// TMDB answered with a non-success status
    #[error("TMDB returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be turned into movie records
    #[error("Invalid response from TMDB: {0}")]
    Decode(#[from] CatalogError),
}

impl From<reqwest::Error> for TmdbClientError {
    fn from(err: reqwest::Error) -> Self {
        TmdbClientError::Request(err.without_url())
    }
}

pub type Result<T> = std::result::Result<T, TmdbClientError>;
