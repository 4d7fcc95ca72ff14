//! Preferences endpoints
//!
//! The whole snapshot is read and written in one piece. A failed save is
//! reported as a non-blocking notice; the previously persisted state
//! stays untouched.

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::warn;

use newsdesk_core::Preferences;

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/preferences", get(get_preferences))
        .route("/preferences", put(put_preferences))
}

/// GET /api/preferences - saved snapshot, defaults where nothing is saved
async fn get_preferences(State(state): State<AppState>) -> Json<Preferences> {
    Json(state.prefs.load())
}

/// PUT /api/preferences - persist a new snapshot
async fn put_preferences(
    State(state): State<AppState>,
    Json(prefs): Json<Preferences>,
) -> Json<serde_json::Value> {
    match state.prefs.save(&prefs) {
        Ok(()) => Json(serde_json::json!({ "saved": true })),
        Err(e) => {
            warn!("Failed to save preferences: {}", e);
            Json(serde_json::json!({
                "saved": false,
                "notice": format!("Preferences not saved: {}", e),
            }))
        }
    }
}
