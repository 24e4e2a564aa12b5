//! Decoding of provider payloads into validated `MovieRecord`s.
//!
//! Two input shapes are accepted:
//! - the discover envelope: `{"page":1,"results":[...],...}`
//! - a bare JSON array of result objects (handy for saved fixtures)
//!
//! Validation is all-or-nothing: the first bad record aborts the whole parse.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde_json::Value;

/// Parse a discover response body and validate every result.
pub fn parse_discover_page(bytes: &[u8]) -> Result<Vec<MovieRecord>> {
    let page: DiscoverPage = serde_json::from_slice(bytes)?;
    validate_results(page.results)
}

/// Parse a bare JSON array of movie objects.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<MovieRecord>> {
    let results: Vec<Value> = serde_json::from_slice(bytes)?;
    validate_results(results)
}

/// Parse either shape, sniffing the top-level JSON value.
pub fn parse_any(bytes: &[u8]) -> Result<Vec<MovieRecord>> {
    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Array(results) => validate_results(results),
        other => {
            let page: DiscoverPage = serde_json::from_value(other)?;
            validate_results(page.results)
        }
    }
}

fn validate_results(results: Vec<Value>) -> Result<Vec<MovieRecord>> {
    results
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let raw: RawMovie = serde_json::from_value(value)?;
            into_record(index, raw)
        })
        .collect()
}

fn into_record(index: usize, raw: RawMovie) -> Result<MovieRecord> {
    let title = raw
        .title
        .ok_or(CatalogError::MissingField { index, field: "title" })?;

    let vote_count = match raw.vote_count {
        None | Some(Value::Null) => {
            return Err(CatalogError::MissingField {
                index,
                field: "vote_count",
            });
        }
        Some(value) => parse_vote_count(index, &value)?,
    };

    let mut extra = raw.extra;
    let id = match raw.id {
        None | Some(Value::Null) => None,
        Some(value) => value.as_u64().or_else(|| {
            // Not ours to judge; keep it for whoever reads `extra`
            extra.insert("id".to_string(), value);
            None
        }),
    };

    Ok(MovieRecord {
        id,
        title,
        vote_count,
        extra,
    })
}

/// Vote counts must be non-negative integers.
fn parse_vote_count(index: usize, value: &Value) -> Result<u64> {
    value.as_u64().ok_or_else(|| CatalogError::InvalidValue {
        index,
        field: "vote_count",
        value: value.to_string(),
    })
}
