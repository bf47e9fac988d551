//! Page Routes
//!
//! - GET / - Dashboard page

use axum::{extract::State, http::Uri, response::Html};
use std::sync::Arc;

use crate::dashboard::error::DashboardError;
use crate::dashboard::state::AppState;

/// GET /
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.to_string())
}

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> DashboardError {
    DashboardError::NotFound(uri.path().to_string())
}
