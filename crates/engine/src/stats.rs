use chrono::{DateTime, Utc};
use lexicon_catalog::{Catalog, Difficulty};
use serde::Serialize;
use std::collections::BTreeMap;

/// Point-in-time snapshot of catalog composition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_terms: usize,
    pub category_count: usize,
    /// One bucket per difficulty level, present even when zero. Load-time
    /// validation guarantees every term lands in exactly one bucket, so the
    /// bucket sum always equals `total_terms`.
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub by_category: BTreeMap<String, usize>,
    /// Wall-clock time of this call, not of catalog load.
    pub generated_at: DateTime<Utc>,
}

/// Recount the catalog. Runs fully on every call; the catalog never changes
/// after load, so there is nothing to cache or invalidate.
pub fn snapshot(catalog: &Catalog) -> StatsSnapshot {
    let mut by_difficulty: BTreeMap<Difficulty, usize> =
        Difficulty::ALL.iter().map(|level| (*level, 0)).collect();
    for term in catalog.all_terms() {
        *by_difficulty.entry(term.difficulty).or_insert(0) += 1;
    }

    let by_category: BTreeMap<String, usize> = catalog
        .categories()
        .into_iter()
        .map(|info| (info.id, info.count))
        .collect();

    StatsSnapshot {
        total_terms: catalog.all_terms().len(),
        category_count: catalog.category_count(),
        by_difficulty,
        by_category,
        generated_at: Utc::now(),
    }
}
