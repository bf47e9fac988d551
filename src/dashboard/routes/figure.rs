//! Figure Routes
//!
//! - GET /api/v1/figure - Chart as plotly JSON

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::chart::Figure;
use crate::dashboard::state::AppState;

/// GET /api/v1/figure
///
/// Returns `{ data, layout }`, ready for `Plotly.newPlot`.
pub async fn get_figure(State(state): State<Arc<AppState>>) -> Json<Figure> {
    Json(state.figure.as_ref().clone())
}
