//! # Lexicon Protocol
//!
//! The HTTP/JSON contract of the glossary API: response envelopes for every
//! endpoint and the decoding of raw request parameters into engine queries.
//! Everything on the wire is camelCase.

pub mod params;

use lexicon_catalog::{Catalog, CategoryInfo, Difficulty, Term};
use lexicon_engine::{RelatedTerm, StatsSnapshot, TermDetail, TermListPage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `GET /api/terms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermListResponse {
    pub terms: Vec<Term>,
    pub total: usize,
    pub has_more: bool,
    /// Every category id, independent of the applied filters.
    pub categories: Vec<String>,
    pub difficulties: Vec<Difficulty>,
}

impl TermListResponse {
    pub fn new(page: TermListPage, catalog: &Catalog) -> Self {
        Self {
            terms: page.terms,
            total: page.total,
            has_more: page.has_more,
            categories: catalog.category_ids(),
            difficulties: Difficulty::ALL.to_vec(),
        }
    }
}

/// Body of `GET /api/terms/:id`: the full record plus related-term links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDetailResponse {
    #[serde(flatten)]
    pub term: Term,
    pub related_terms: Vec<RelatedTerm>,
}

impl From<TermDetail> for TermDetailResponse {
    fn from(detail: TermDetail) -> Self {
        Self {
            term: detail.term,
            related_terms: detail.related,
        }
    }
}

/// One entry of `GET /api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    pub id: String,
    /// The raw category id; `display_name` carries the resolved label.
    pub name: String,
    pub count: usize,
    pub display_name: String,
}

impl From<CategoryInfo> for CategoryEntry {
    fn from(info: CategoryInfo) -> Self {
        Self {
            name: info.id.clone(),
            id: info.id,
            count: info.count,
            display_name: info.display_name,
        }
    }
}

/// Body of `GET /api/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_terms: usize,
    pub categories: usize,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub last_updated: String,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            total_terms: snapshot.total_terms,
            categories: snapshot.category_count,
            by_difficulty: snapshot.by_difficulty,
            by_category: snapshot.by_category,
            last_updated: snapshot.generated_at.to_rfc3339(),
        }
    }
}

/// Error envelope for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}
