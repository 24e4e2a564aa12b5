//! Top-N selection by vote count.
//!
//! The provider's own sort order is treated as a hint only: records are
//! always re-sorted here before slicing.

use crate::error::{PipelineError, Result};
use catalog::MovieRecord;
use std::cmp::Reverse;

/// Number of movies kept per export
pub const DEFAULT_TOP_N: usize = 10;

/// Select the `n` records with the highest `vote_count`.
///
/// ## Algorithm
/// 1. Stable sort descending by `vote_count` (equal counts keep input order)
/// 2. Truncate to `n`
///
/// Inputs shorter than `n` are returned whole, just sorted.
///
/// # Errors
/// `InvalidInput` when `n == 0`.
pub fn select_top(mut records: Vec<MovieRecord>, n: usize) -> Result<Vec<MovieRecord>> {
    if n == 0 {
        return Err(PipelineError::InvalidInput(
            "selection count must be positive".to_string(),
        ));
    }

    // sort_by_key is stable
    records.sort_by_key(|record| Reverse(record.vote_count));
    records.truncate(n);
    Ok(records)
}
