//! Data Routes
//!
//! - GET /api/v1/data - Loaded predator control records

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::dashboard::dto::DataResponse;
use crate::dashboard::state::AppState;

/// GET /api/v1/data
pub async fn get_data(State(state): State<Arc<AppState>>) -> Json<DataResponse> {
    Json(DataResponse {
        rows: state.table.len(),
        year_span: state.table.year_span().map(|(first, last)| [first, last]),
        records: state.table.records().to_vec(),
    })
}
