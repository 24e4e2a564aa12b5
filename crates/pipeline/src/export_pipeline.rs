//! The ExportPipeline runs ranking and view building in sequence.
//!
//! Synchronous and self-contained: each call works on its own input and
//! returns its own document, so concurrent callers need no coordination.

use crate::document::ExportDocument;
use crate::error::Result;
use crate::ranker::{DEFAULT_TOP_N, select_top};
use crate::views::build_views;
use catalog::MovieRecord;
use tracing;

/// Raw records in, finished `ExportDocument` out.
///
/// ## Usage
/// ```ignore
/// let pipeline = ExportPipeline::new().with_limit(10);
/// let document = pipeline.run(records)?;
/// ```
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    limit: usize,
}

impl ExportPipeline {
    /// Create a pipeline keeping the top `DEFAULT_TOP_N` movies.
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_TOP_N,
        }
    }

    /// Override how many movies are kept (builder pattern).
    ///
    /// A zero limit is accepted here and rejected by `run`.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rank `records` and build the three views.
    ///
    /// # Returns
    /// * `Ok(ExportDocument)` - all three views, complete
    /// * `Err(InvalidInput)` - limit is zero; nothing partial is returned
    pub fn run(&self, records: Vec<MovieRecord>) -> Result<ExportDocument> {
        tracing::debug!(
            "Ranking records (input count: {}, limit: {})",
            records.len(),
            self.limit
        );
        let ranked = select_top(records, self.limit)?;
        tracing::debug!("Ranking applied (output count: {})", ranked.len());

        let document = build_views(&ranked);
        for section in document.sections() {
            tracing::debug!("Built view {} ({} rows)", section.kind(), section.len());
        }
        Ok(document)
    }
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new()
    }
}
