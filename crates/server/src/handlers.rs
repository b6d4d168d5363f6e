use crate::http_api;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::Response,
};
use lexicon_engine::EngineError;
use lexicon_protocol::{
    params, CategoryEntry, ErrorBody, StatsResponse, TermDetailResponse, TermListResponse,
};
use std::collections::HashMap;
use std::sync::Arc;

/// `GET /api/terms` — filtered, paginated listing.
pub(crate) async fn list_terms(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Response {
    let query = params::list_query_from_raw(&raw);
    let page = lexicon_engine::list_terms(&state.catalog, &query);
    http_api::respond(
        &state,
        StatusCode::OK,
        &TermListResponse::new(page, &state.catalog),
    )
}

/// `GET /api/terms/:id` — one term plus computed related terms.
pub(crate) async fn get_term(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match lexicon_engine::resolve(&state.catalog, &id) {
        Ok(detail) => http_api::respond(
            &state,
            StatusCode::OK,
            &TermDetailResponse::from(detail),
        ),
        Err(EngineError::TermNotFound(_)) => http_api::respond(
            &state,
            StatusCode::NOT_FOUND,
            &ErrorBody::new("Term not found"),
        ),
    }
}

/// `GET /api/categories`.
pub(crate) async fn list_categories(State(state): State<Arc<AppState>>) -> Response {
    let entries: Vec<CategoryEntry> = state
        .catalog
        .categories()
        .into_iter()
        .map(CategoryEntry::from)
        .collect();
    http_api::respond(&state, StatusCode::OK, &entries)
}

/// `GET /api/stats` — recomputed on every call.
pub(crate) async fn stats(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = lexicon_engine::snapshot(&state.catalog);
    http_api::respond(&state, StatusCode::OK, &StatsResponse::from(snapshot))
}

/// `GET /api/random` — full records in randomized order.
pub(crate) async fn random_terms(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Response {
    let count = params::sample_count_from_raw(&raw);
    let terms = lexicon_engine::sample(&state.catalog, count);
    http_api::respond(&state, StatusCode::OK, &terms)
}

/// `GET /health` — liveness plus the loaded term count.
pub(crate) async fn health(State(state): State<Arc<AppState>>) -> Response {
    http_api::respond(
        &state,
        StatusCode::OK,
        &serde_json::json!({
            "status": "ok",
            "terms": state.catalog.all_terms().len(),
        }),
    )
}

/// Unmatched routes. API paths get the API envelope; anything else a plain
/// not-found body.
pub(crate) async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let body = if uri.path() == "/api" || uri.path().starts_with("/api/") {
        ErrorBody::new("API endpoint not found")
    } else {
        ErrorBody::new("Not found")
    };
    http_api::respond(&state, StatusCode::NOT_FOUND, &body)
}
