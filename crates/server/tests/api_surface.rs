//! Drives the full router in-process against the embedded catalog.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lexicon_catalog::Catalog;
use lexicon_server::AppState;
use std::collections::BTreeSet;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let catalog = Catalog::load().expect("embedded catalog must load");
    lexicon_server::app(Arc::new(AppState::new(catalog, false)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).expect("every response body is JSON");
    (status, value)
}

#[tokio::test]
async fn terms_listing_has_the_full_envelope() {
    let app = app();
    let (status, body) = get(&app, "/api/terms").await;

    assert_eq!(status, StatusCode::OK);
    let total = body["total"].as_u64().unwrap();
    assert!(total > 0);
    assert_eq!(
        body["terms"].as_array().unwrap().len() as u64,
        total.min(50)
    );
    assert_eq!(body["hasMore"], total > 50);
    assert!(!body["categories"].as_array().unwrap().is_empty());
    assert_eq!(
        body["difficulties"],
        serde_json::json!(["beginner", "intermediate", "advanced"])
    );
}

#[tokio::test]
async fn terms_pagination_windows_the_listing() {
    let app = app();
    let (_, all) = get(&app, "/api/terms").await;
    let (status, page) = get(&app, "/api/terms?limit=2&offset=1").await;

    assert_eq!(status, StatusCode::OK);
    let paged = page["terms"].as_array().unwrap();
    assert_eq!(paged.len(), 2);
    // Same order as the unpaginated listing, shifted by the offset.
    assert_eq!(paged[0]["id"], all["terms"][1]["id"]);
    assert_eq!(paged[1]["id"], all["terms"][2]["id"]);
    assert_eq!(page["total"], all["total"]);
    assert_eq!(page["hasMore"], true);
}

#[tokio::test]
async fn malformed_pagination_numbers_fall_back_to_defaults() {
    let app = app();
    let (_, nominal) = get(&app, "/api/terms").await;
    let (status, body) = get(&app, "/api/terms?limit=abc&offset=-5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["terms"], nominal["terms"]);
}

#[tokio::test]
async fn term_detail_includes_bounded_related_terms() {
    let app = app();
    let (status, body) = get(&app, "/api/terms/js-closure").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "js-closure");
    assert_eq!(body["localizedLabel"], "クロージャ");
    let related = body["relatedTerms"].as_array().unwrap();
    assert!(!related.is_empty());
    assert!(related.len() <= 5);
    for entry in related {
        assert_ne!(entry["id"], "js-closure");
        // Projection: link fields only, nothing else from the record.
        assert_eq!(entry.as_object().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn unknown_term_is_a_404_envelope() {
    let app = app();
    let (status, body) = get(&app, "/api/terms/no-such-term").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"error": "Term not found"}));
}

#[tokio::test]
async fn categories_resolve_display_names() {
    let app = app();
    let (status, body) = get(&app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert!(!entries.is_empty());
    let javascript = entries
        .iter()
        .find(|e| e["id"] == "javascript")
        .expect("javascript category");
    assert_eq!(javascript["name"], "javascript");
    assert_eq!(javascript["displayName"], "JavaScript");
    assert!(javascript["count"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn stats_counts_are_consistent() {
    let app = app();
    let (status, body) = get(&app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    let total = body["totalTerms"].as_u64().unwrap();
    let by_difficulty: u64 = body["byDifficulty"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    let by_category: u64 = body["byCategory"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(by_difficulty, total);
    assert_eq!(by_category, total);
    assert_eq!(
        body["categories"].as_u64().unwrap() as usize,
        body["byCategory"].as_object().unwrap().len()
    );
    assert!(body["lastUpdated"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn random_returns_full_unique_records() {
    let app = app();
    let (status, body) = get(&app, "/api/random?count=3").await;

    assert_eq!(status, StatusCode::OK);
    let terms = body.as_array().unwrap();
    assert_eq!(terms.len(), 3);
    let ids: BTreeSet<&str> = terms.iter().map(|t| t["id"].as_str().unwrap()).collect();
    assert_eq!(ids.len(), 3);
    // Full records, not projections.
    assert!(terms[0].get("description").is_some());
    assert!(terms[0].get("useCases").is_some());
}

#[tokio::test]
async fn random_count_edges() {
    let app = app();

    let (_, body) = get(&app, "/api/random?count=0").await;
    assert_eq!(body, serde_json::json!([]));

    let (_, body) = get(&app, "/api/random?count=-2").await;
    assert_eq!(body, serde_json::json!([]));

    let (_, total_body) = get(&app, "/api/stats").await;
    let total = total_body["totalTerms"].as_u64().unwrap() as usize;
    let (_, body) = get(&app, "/api/random?count=10000").await;
    assert_eq!(body.as_array().unwrap().len(), total);
}

#[tokio::test]
async fn unmatched_api_route_gets_the_api_envelope() {
    let app = app();
    let (status, body) = get(&app, "/api/no-such-endpoint").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"error": "API endpoint not found"}));

    let (status, body) = get(&app, "/somewhere-else").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"error": "Not found"}));
}

#[tokio::test]
async fn health_reports_the_loaded_catalog() {
    let app = app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["terms"].as_u64().unwrap() > 0);
}
