//! Newsdesk API server
//!
//! Serves the aggregation pipeline as JSON and CSV endpoints. The
//! rendering surface (whatever draws the dashboard) consumes these; no
//! HTML is produced here.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsdesk_services::{DashboardService, PrefsStore, ServiceConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DashboardService>,
    pub prefs: Arc<PrefsStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,newsdesk_api=debug")),
        )
        .init();

    info!("Starting Newsdesk API");

    let config = ServiceConfig::from_env();
    info!(
        "Configured feeds: {:?}",
        config.feeds.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
    );
    let service = Arc::new(DashboardService::new(config));

    let prefs_path =
        std::env::var("NEWSDESK_PREFS_PATH").unwrap_or_else(|_| "user_prefs.json".to_string());
    info!("Preferences file: {}", prefs_path);
    let prefs = Arc::new(PrefsStore::new(&prefs_path));

    let state = AppState { service, prefs };

    // Configure CORS for the rendering surface
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .nest("/api", routes::api_routes())
        .layer(cors)
        .with_state(state);

    let port = std::env::var("NEWSDESK_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
