//! Article listing endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::AppState;

use super::query::ArticlesQuery;
use super::{bad_request, error_response};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/feeds", get(list_feeds))
        .route("/articles", get(get_articles))
}

/// GET /api/feeds - names of the configured feeds
async fn list_feeds(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "feeds": state.service.feed_names() }))
}

/// GET /api/articles - filtered, sorted, capped article page
async fn get_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticlesQuery>,
) -> impl IntoResponse {
    let prefs = state.prefs.load();
    let resolved = match params.resolve(&prefs) {
        Ok(resolved) => resolved,
        Err(reason) => return bad_request(reason),
    };
    debug!(
        "Articles query: feed={} sort={:?} limit={}",
        resolved.feed, resolved.sort, resolved.limit
    );

    match state
        .service
        .query(
            &resolved.feed,
            &resolved.spec,
            resolved.sort,
            resolved.limit,
            &resolved.tz,
        )
        .await
    {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => error_response(e),
    }
}
