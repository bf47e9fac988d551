//! # Predator Dashboard
//!
//! Loads a predator control table (year, active traps, pests caught, catch
//! rate) and serves a single dashboard page with a combined bar and line chart.
//!
//! ## Modules
//!
//! - [`data`]: CSV loading and column extraction
//! - [`chart`]: plotly-compatible figure model and the predator chart
//! - [`dashboard`]: page assembly and the HTTP server
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use predator_dashboard::config::ServerConfig;
//! use predator_dashboard::dashboard::{serve, AppState, PageOptions};
//! use predator_dashboard::data::load_predator_data;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = load_predator_data(Path::new("static/data/Predator_control.csv"))?;
//!     println!("Loaded {} years of trap data", table.len());
//!
//!     let state = AppState::build(table, &PageOptions::default())?;
//!     serve(state, &ServerConfig::default()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod data;

// Re-export top-level types for convenience
pub use chart::{create_predator_control_chart, Figure};
pub use config::Config;
pub use dashboard::{build_router, render_page, serve, AppState, PageOptions};
pub use data::{
    load_predator_data, prepare_predator_chart_data, ChartSeries, PredatorRecord, PredatorTable,
};
