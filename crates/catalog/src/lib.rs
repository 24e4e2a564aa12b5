//! # Catalog Crate
//!
//! Domain types and payload decoding for movie metadata fetched from the
//! external provider.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and the provider's discover envelope
//! - **parser**: decode JSON payloads into validated records
//! - **error**: error types for decoding and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::parse_discover_page;
//!
//! let records = parse_discover_page(&body)?;
//! println!("{} movies, first is {}", records.len(), records[0].title);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{parse_any, parse_discover_page, parse_records};
pub use types::{DiscoverPage, MovieId, MovieRecord, ReleaseYear};
