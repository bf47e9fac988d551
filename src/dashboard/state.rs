//! Application State
//!
//! Everything the handlers serve is built once at startup and shared
//! read-only behind `Arc`.

use chrono::{DateTime, Utc};

use crate::chart::{create_predator_control_chart, Figure};
use crate::data::{load_predator_data, prepare_predator_chart_data, PredatorTable};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use super::error::DashboardResult;
use super::page::{render_page, PageOptions};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded predator control table
    pub table: Arc<PredatorTable>,
    /// Chart built from the table
    pub figure: Arc<Figure>,
    /// Pre-rendered dashboard page
    pub page: Arc<str>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by health checks
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Shape the table, build the chart and render the page
    pub fn build(table: PredatorTable, options: &PageOptions) -> DashboardResult<Self> {
        let series = prepare_predator_chart_data(&table);
        let figure = create_predator_control_chart(&series);
        let page = render_page(&figure, options)?;

        Ok(Self {
            table: Arc::new(table),
            figure: Arc::new(figure),
            page: Arc::from(page),
            start_time: Instant::now(),
            started_at: Utc::now(),
        })
    }

    /// Load the CSV at `path`, then build as [`AppState::build`] does
    pub fn load(path: &Path, options: &PageOptions) -> DashboardResult<Self> {
        let table = load_predator_data(path)?;
        Self::build(table, options)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn record_count(&self) -> usize {
        self.table.len()
    }
}
