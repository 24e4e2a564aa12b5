//! Core domain types for provider movie data.
//!
//! A `MovieRecord` is what the rest of the workspace works with: a title and a
//! vote count, plus whatever else the provider sent, carried along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Type Aliases
// =============================================================================

/// Provider-assigned movie identifier
pub type MovieId = u64;

/// Release year used to key a discover query
pub type ReleaseYear = u16;

// =============================================================================
// Movie Record
// =============================================================================

/// A single movie as returned by the metadata provider.
///
/// Constructed once per response and never mutated afterwards. Only `title`
/// and `vote_count` are interpreted; `extra` holds the provider's remaining
/// fields (overview, poster path, ...) exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: Option<MovieId>,
    pub title: String,
    /// Popularity metric used for ranking
    pub vote_count: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieRecord {
    /// Create a record with no id and no passthrough fields.
    pub fn new(title: impl Into<String>, vote_count: u64) -> Self {
        Self {
            id: None,
            title: title.into(),
            vote_count,
            extra: Map::new(),
        }
    }

    /// Attach a provider id (builder style).
    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }
}

// =============================================================================
// Provider envelope
// =============================================================================

/// Wire shape of a single result before validation.
///
/// Everything is optional here so that a missing field turns into a
/// `CatalogError` naming the record instead of an opaque serde message.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawMovie {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub vote_count: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The discover endpoint's response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverPage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<Value>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}
