//! Core data types for predator control records
//!
//! One CSV row maps to one [`PredatorRecord`]. The table keeps rows in file
//! order; every column derived from it shares that ordering.

use serde::{Deserialize, Serialize};

/// CSV header for the year column
pub const COLUMN_YEAR: &str = "Year";
/// CSV header for the active trap count column
pub const COLUMN_ACTIVE_TRAPS: &str = "Number of Active Traps";
/// CSV header for the pests caught column
pub const COLUMN_PESTS_CAUGHT: &str = "Pests Caught";
/// CSV header for the catch rate column
pub const COLUMN_CATCH_RATE: &str = "Catch Rate";

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COLUMN_YEAR,
    COLUMN_ACTIVE_TRAPS,
    COLUMN_PESTS_CAUGHT,
    COLUMN_CATCH_RATE,
];

/// A single year of predator control activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredatorRecord {
    #[serde(rename(deserialize = "Year"))]
    pub year: i32,

    #[serde(rename(deserialize = "Number of Active Traps"))]
    pub active_traps: u32,

    #[serde(rename(deserialize = "Pests Caught"))]
    pub pests_caught: u32,

    /// Pests caught per active trap per year
    #[serde(rename(deserialize = "Catch Rate"))]
    pub catch_rate: f64,
}

impl PredatorRecord {
    pub fn new(year: i32, active_traps: u32, pests_caught: u32, catch_rate: f64) -> Self {
        Self {
            year,
            active_traps,
            pests_caught,
            catch_rate,
        }
    }
}

/// The full predator control table, read once and never mutated
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PredatorTable {
    records: Vec<PredatorRecord>,
}

impl PredatorTable {
    pub fn new(records: Vec<PredatorRecord>) -> Self {
        Self { records }
    }

    /// Rows in file order
    pub fn records(&self) -> &[PredatorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PredatorRecord> {
        self.records.iter()
    }

    /// First and last year in file order, if any rows exist
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.year, last.year))
    }
}

impl FromIterator<PredatorRecord> for PredatorTable {
    fn from_iter<I: IntoIterator<Item = PredatorRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
