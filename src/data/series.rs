//! Chart series extraction
//!
//! Splits the predator table into the four column sequences the chart plots.

use super::types::PredatorTable;
use serde::Serialize;

/// Column sequences aligned by row: index `i` in every vector is the same year
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub years: Vec<i32>,
    pub active_traps: Vec<u32>,
    pub pests_caught: Vec<u32>,
    pub catch_rate: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Select the year, trap, pest and catch rate columns in table order
pub fn prepare_predator_chart_data(table: &PredatorTable) -> ChartSeries {
    let mut series = ChartSeries {
        years: Vec::with_capacity(table.len()),
        active_traps: Vec::with_capacity(table.len()),
        pests_caught: Vec::with_capacity(table.len()),
        catch_rate: Vec::with_capacity(table.len()),
    };

    for record in table.iter() {
        series.years.push(record.year);
        series.active_traps.push(record.active_traps);
        series.pests_caught.push(record.pests_caught);
        series.catch_rate.push(record.catch_rate);
    }

    series
}
