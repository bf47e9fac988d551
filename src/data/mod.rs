//! Predator Control Data
//!
//! Loading and shaping of the predator control table.
//!
//! - [`loader`]: CSV file reading and header validation
//! - [`series`]: column extraction for charting
//! - [`types`]: record and table types

pub mod error;
pub mod loader;
pub mod series;
pub mod types;

pub use error::{DataError, DataResult};
pub use loader::{load_predator_data, load_predator_data_from_reader, DEFAULT_DATA_PATH};
pub use series::{prepare_predator_chart_data, ChartSeries};
pub use types::{PredatorRecord, PredatorTable, REQUIRED_COLUMNS};
