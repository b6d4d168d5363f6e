//! # Lexicon Server
//!
//! The HTTP surface of the glossary: an axum router mapping the `/api/*`
//! endpoints onto the query engine. The catalog is loaded once at startup and
//! shared behind an `Arc`; handlers never mutate it, so requests run
//! concurrently without coordination.

mod handlers;
mod http_api;

use axum::{routing::get, Router};
use lexicon_catalog::Catalog;
use std::sync::Arc;

pub struct AppState {
    pub catalog: Catalog,
    /// When set, 500 bodies include the error detail.
    pub dev_mode: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, dev_mode: bool) -> Self {
        Self { catalog, dev_mode }
    }
}

/// Build the API router over the shared catalog.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/terms", get(handlers::list_terms))
        .route("/api/terms/:id", get(handlers::get_term))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/stats", get(handlers::stats))
        .route("/api/random", get(handlers::random_terms))
        .route("/health", get(handlers::health))
        .fallback(handlers::fallback)
        .with_state(state)
}
