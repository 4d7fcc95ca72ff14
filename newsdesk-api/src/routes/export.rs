//! CSV download endpoint

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};

use newsdesk_services::to_csv;

use crate::AppState;

use super::query::ArticlesQuery;
use super::{bad_request, error_response};

pub fn routes() -> Router<AppState> {
    Router::new().route("/export.csv", get(export_csv))
}

/// GET /api/export.csv - the filtered/sorted article set as CSV
///
/// Same query surface as `/articles`; the body is the flat tabular
/// contract (title, link, published, sentiment, polarity).
async fn export_csv(
    State(state): State<AppState>,
    Query(params): Query<ArticlesQuery>,
) -> impl IntoResponse {
    let prefs = state.prefs.load();
    let resolved = match params.resolve(&prefs) {
        Ok(resolved) => resolved,
        Err(reason) => return bad_request(reason),
    };

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
        Ok(page) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"articles.csv\"",
                ),
            ],
            to_csv(&page.items),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
