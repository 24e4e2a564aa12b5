//! Fetch collaborator for The Movie Database (TMDB).
//!
//! This crate handles:
//! - Building the discover-by-year request
//! - Sending it with a bounded timeout
//! - Turning the response into validated `MovieRecord`s
//!
//! Only the first result page is requested. Nothing is retried: a failed
//! fetch surfaces to the caller as a `TmdbClientError`.

pub mod client;
pub mod config;
pub mod error;

pub use client::DiscoverClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_SORT_BY, DEFAULT_TIMEOUT, TmdbConfig};
pub use error::{Result, TmdbClientError};
