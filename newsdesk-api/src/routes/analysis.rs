//! Keyword, entity and summary endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::AppState;

use super::query::ArticlesQuery;
use super::{bad_request, error_response};

/// Default keyword table size
const DEFAULT_TOP_KEYWORDS: usize = 10;
/// Default synopsis length in sentences
const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Query surface shared by the analysis endpoints
///
/// Mirrors the article filters plus the table/synopsis sizing knobs.
/// (Kept flat: serde_urlencoded cannot deserialize numbers through a
/// `#[serde(flatten)]` boundary.)
#[derive(Debug, Default, Deserialize)]
struct AnalysisQuery {
    feed: Option<String>,
    keyword: Option<String>,
    from: Option<String>,
    to: Option<String>,
    category: Option<String>,
    sentiment: Option<String>,
    /// Keyword table size (keywords endpoint)
    top: Option<usize>,
    /// Synopsis length (summary endpoint)
    sentences: Option<usize>,
}

impl AnalysisQuery {
    fn articles(&self) -> ArticlesQuery {
        ArticlesQuery {
            feed: self.feed.clone(),
            keyword: self.keyword.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            category: self.category.clone(),
            sentiment: self.sentiment.clone(),
            sort: None,
            limit: None,
            tz: None,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/keywords", get(get_keywords))
        .route("/entities", get(get_entities))
        .route("/summary", get(get_summary))
}

/// GET /api/keywords - keyword frequency table over the filtered set
async fn get_keywords(
    State(state): State<AppState>,
    Query(params): Query<AnalysisQuery>,
) -> impl IntoResponse {
    let prefs = state.prefs.load();
    let top = params.top.unwrap_or(DEFAULT_TOP_KEYWORDS);
    let resolved = match params.articles().resolve(&prefs) {
        Ok(resolved) => resolved,
        Err(reason) => return bad_request(reason),
    };

    match state
        .service
        .keywords(&resolved.feed, &resolved.spec, top)
        .await
    {
        Ok(keywords) => {
            (StatusCode::OK, Json(serde_json::json!({ "keywords": keywords }))).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/entities - people/places/organizations mention tables
async fn get_entities(
    State(state): State<AppState>,
    Query(params): Query<AnalysisQuery>,
) -> impl IntoResponse {
    let prefs = state.prefs.load();
    let resolved = match params.articles().resolve(&prefs) {
        Ok(resolved) => resolved,
        Err(reason) => return bad_request(reason),
    };

    match state.service.entities(&resolved.feed, &resolved.spec).await {
        Ok(tables) => (StatusCode::OK, Json(tables)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/summary - extractive synopsis of the filtered set
async fn get_summary(
    State(state): State<AppState>,
    Query(params): Query<AnalysisQuery>,
) -> impl IntoResponse {
    let prefs = state.prefs.load();
    let sentences = params.sentences.unwrap_or(DEFAULT_SUMMARY_SENTENCES);
    let resolved = match params.articles().resolve(&prefs) {
        Ok(resolved) => resolved,
        Err(reason) => return bad_request(reason),
    };

    match state
        .service
        .summary(&resolved.feed, &resolved.spec, sentences)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response(e),
    }
}
