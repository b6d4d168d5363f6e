//! Decoding of raw query-string parameters.
//!
//! Numeric parameters follow one explicit policy: a value that is absent,
//! non-numeric, or negative falls back to its nominal default instead of
//! propagating into the slice arithmetic. The one exception is `count`, where
//! an explicit zero or negative number means "no terms", matching the
//! sampler's contract.

use lexicon_engine::ListQuery;
use std::collections::HashMap;

pub const DEFAULT_LIMIT: usize = 50;
pub const DEFAULT_OFFSET: usize = 0;
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// Decode the `GET /api/terms` parameters.
pub fn list_query_from_raw(raw: &HashMap<String, String>) -> ListQuery {
    ListQuery {
        category: raw.get("category").cloned(),
        difficulty: raw.get("difficulty").cloned(),
        search: raw.get("search").cloned(),
        limit: parse_or_default(raw.get("limit"), DEFAULT_LIMIT),
        offset: parse_or_default(raw.get("offset"), DEFAULT_OFFSET),
    }
}

/// Decode the `GET /api/random` count. Zero and negative values are honored
/// as "no terms"; garbage falls back to the default.
pub fn sample_count_from_raw(raw: &HashMap<String, String>) -> usize {
    match raw.get("count") {
        None => DEFAULT_SAMPLE_COUNT,
        Some(value) => match value.trim().parse::<i64>() {
            Ok(count) if count <= 0 => 0,
            Ok(count) => count as usize,
            Err(_) => DEFAULT_SAMPLE_COUNT,
        },
    }
}

fn parse_or_default(raw: Option<&String>, default: usize) -> usize {
    match raw {
        None => default,
        Some(value) => match value.trim().parse::<i64>() {
            Ok(parsed) if parsed >= 0 => parsed as usize,
            _ => default,
        },
    }
}
