//! Ranking and multi-view ordering of movie records.
//!
//! This crate provides:
//! - `select_top` for picking the most-voted movies
//! - `normalize` and `compare_titles` for title ordering
//! - `build_views` for the three output orderings
//! - `ExportPipeline` for running the whole thing
//!
//! ## Architecture
//! Records move through the pipeline in stages:
//! 1. The ranker sorts by vote count and keeps the top N
//! 2. Each `ViewKind` orders the ranked set its own way
//! 3. The views are assembled into an `ExportDocument` with separators
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{ExportPipeline, ViewKind};
//!
//! let document = ExportPipeline::new().run(records)?;
//! for title in document.section(ViewKind::ByTitle).titles() {
//!     println!("{title}");
//! }
//! ```

pub mod collation;
pub mod document;
pub mod error;
pub mod export_pipeline;
pub mod normalizer;
pub mod ranker;
pub mod views;

// Re-export main types
pub use collation::compare_titles;
pub use document::{ExportDocument, ExportRow, SEPARATOR_TITLE, ViewSection};
pub use error::{PipelineError, Result};
pub use export_pipeline::ExportPipeline;
pub use normalizer::normalize;
pub use ranker::{DEFAULT_TOP_N, select_top};
pub use views::{ViewKind, build_views};
