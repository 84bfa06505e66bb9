use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{ProjectConfig, ProjectsResponse};
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Cache policy for the projects endpoint: disabled in development,
/// otherwise shared caching for an hour with a day-long
/// stale-while-revalidate window.
pub fn cache_control_value(dev_mode: bool) -> HeaderValue {
    if dev_mode {
        HeaderValue::from_static("no-store")
    } else {
        HeaderValue::from_static("s-maxage=3600, stale-while-revalidate=86400")
    }
}

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<GitHubClient>,
    pub projects: Arc<Vec<ProjectConfig>>,
    pub cache_control: HeaderValue,
    pub start_time: std::time::Instant,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub configured_projects: usize,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check)) // Kubernetes convention
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server, running until ctrl-c.
pub async fn start_server(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Projects server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down server...");
        })
        .await?;

    Ok(())
}

/// `GET /api/projects` — fan out one aggregator call per shown project,
/// keep the successes, drop the failures.
///
/// All fetches run concurrently and settle independently; one repo's
/// failure never blocks or fails the others. The endpoint itself always
/// returns 200.
async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    let shown: Vec<&ProjectConfig> = state.projects.iter().filter(|p| p.shown).collect();

    let results = join_all(
        shown
            .iter()
            .map(|config| state.client.get_project_details(config)),
    )
    .await;

    let mut projects = Vec::with_capacity(results.len());
    for (config, result) in shown.iter().zip(results) {
        match result {
            Ok(details) => projects.push(details),
            Err(e) => warn!("Dropping project {}: {}", config.url, e),
        }
    }

    (
        [(header::CACHE_CONTROL, state.cache_control.clone())],
        Json(ProjectsResponse { projects }),
    )
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        configured_projects: state.projects.len(),
    })
}
