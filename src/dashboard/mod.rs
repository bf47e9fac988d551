//! Predator Control Dashboard
//!
//! HTTP layer serving the dashboard page, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page with the predator control chart
//!
//! ## API
//! - `GET /api/v1/figure` - Chart as plotly JSON
//! - `GET /api/v1/data` - Loaded records
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use predator_dashboard::config::ServerConfig;
//! use predator_dashboard::dashboard::{serve, AppState, PageOptions};
//! use predator_dashboard::data::load_predator_data;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = load_predator_data(Path::new("static/data/Predator_control.csv"))?;
//!     let state = AppState::build(table, &PageOptions::default())?;
//!     serve(state, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod page;
pub mod routes;
pub mod state;

pub use error::{DashboardError, DashboardResult};
pub use page::{render_page, PageOptions, GRAPH_ID};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the dashboard router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/figure", get(routes::figure::get_figure))
        .route("/data", get(routes::data::get_data));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::dashboard_page))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::page::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ServerConfig) -> DashboardResult<()> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DashboardError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
