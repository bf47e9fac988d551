//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::PredatorRecord;

/// Table contents response
#[derive(Debug, Serialize)]
pub struct DataResponse {
    /// Number of records
    pub rows: usize,
    /// First and last year, in file order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_span: Option<[i32; 2]>,
    /// Records in file order
    pub records: Vec<PredatorRecord>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Number of loaded records
    pub records: usize,
    /// Server start time
    pub started_at: DateTime<Utc>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
