use crate::AppState;
use axum::{
    body::Body,
    http::{Response as HttpResponse, StatusCode},
    response::Response,
};
use lexicon_protocol::ErrorBody;
use serde::Serialize;
use std::fmt;

/// Serialize `value` into an `application/json` response. A serialization
/// failure degrades to the 500 envelope instead of a bare status.
pub(crate) fn respond<T: Serialize>(state: &AppState, status: StatusCode, value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(bytes) => json_bytes(status, bytes),
        Err(err) => internal_error(state.dev_mode, err),
    }
}

/// The 500 envelope. Detail is exposed only in dev mode; production callers
/// get a generic message and the detail goes to the log.
pub(crate) fn internal_error(dev_mode: bool, detail: impl fmt::Display) -> Response {
    log::error!("handler failure: {detail}");
    let body = if dev_mode {
        ErrorBody::with_message("Internal server error", detail.to_string())
    } else {
        ErrorBody::with_message("Internal server error", "An unexpected error occurred")
    };
    let bytes = serde_json::to_vec(&body).unwrap_or_else(|_| b"{}".to_vec());
    json_bytes(StatusCode::INTERNAL_SERVER_ERROR, bytes)
}

fn json_bytes(status: StatusCode, bytes: Vec<u8>) -> Response {
    HttpResponse::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(bytes))
        .expect("valid HTTP response")
}
