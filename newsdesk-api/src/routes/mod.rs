//! API route definitions

mod analysis;
mod articles;
mod export;
mod health;
mod preferences;
mod query;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};

use newsdesk_core::NewsdeskError;

use crate::AppState;

/// All routes nested under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(articles::routes())
        .merge(analysis::routes())
        .merge(export::routes())
        .merge(preferences::routes())
}

/// Map a pipeline error to an HTTP response
pub(crate) fn error_response(e: NewsdeskError) -> Response {
    let status = match &e {
        NewsdeskError::NotFound(_) => StatusCode::NOT_FOUND,
        NewsdeskError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(serde_json::json!({ "error": e.to_string() })),
    )
        .into_response()
}

/// 400 with a reason, for malformed query values
pub(crate) fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message.into() })),
    )
        .into_response()
}
