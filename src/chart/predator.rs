//! Predator control chart
//!
//! Active traps and pests caught are grouped bars on the primary axis; the
//! catch rate is a line on a secondary axis overlaid on the right. Axis
//! ranges are fixed and never adapt to the data.

use super::figure::{
    Anchor, Axis, BarMode, BarTrace, Figure, Layout, Legend, Orientation, ScatterMode,
    ScatterTrace, Side, TickMode,
};
use crate::data::ChartSeries;

/// Bar colour for active traps
pub const TRAPS_COLOR: &str = "#009E73";
/// Bar colour for pests caught
pub const PESTS_COLOR: &str = "#80CFB9";
/// Line colour for catch rate
pub const CATCH_RATE_COLOR: &str = "#FFB44F";
/// Gridline colour for both the x and primary y axis
pub const GRID_COLOR: &str = "#dee2e6";

const TRANSPARENT_WHITE: &str = "rgba(255, 255, 255, 0)";
const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Primary y axis range (counts)
pub const COUNT_AXIS_RANGE: [f64; 2] = [0.0, 8000.0];
pub const COUNT_AXIS_DTICK: f64 = 1000.0;

/// Secondary y axis range (catch rate)
pub const RATE_AXIS_RANGE: [f64; 2] = [0.0, 1.8];
pub const RATE_AXIS_DTICK: f64 = 0.2;

pub const BAR_WIDTH: f64 = 0.4;

const TICK_FONT_SIZE: u32 = 14;
const TITLE_FONT_SIZE: u32 = 16;

/// Build the combined bar and line chart for predator control data
pub fn create_predator_control_chart(series: &ChartSeries) -> Figure {
    let mut figure = Figure::new().with_layout(predator_layout());

    figure.add_trace(
        BarTrace::new(
            "Number of Active Traps",
            series.years.clone(),
            series.active_traps.iter().map(|&v| f64::from(v)).collect(),
        )
        .color(TRAPS_COLOR),
    );

    figure.add_trace(
        BarTrace::new(
            "Pests Caught",
            series.years.clone(),
            series.pests_caught.iter().map(|&v| f64::from(v)).collect(),
        )
        .color(PESTS_COLOR),
    );

    figure.add_trace(
        ScatterTrace::new("Catch Rate", series.years.clone(), series.catch_rate.clone())
            .mode(ScatterMode::LinesMarkers)
            .line_color(CATCH_RATE_COLOR)
            .yaxis("y2"),
    );

    figure.set_bar_width(BAR_WIDTH);

    tracing::debug!(
        traces = figure.data.len(),
        points = series.len(),
        "Built predator control chart"
    );

    figure
}

fn predator_layout() -> Layout {
    Layout {
        xaxis: Axis::new()
            .title("Year")
            .tick_font_size(TICK_FONT_SIZE)
            .show_grid(true)
            .grid_color(GRID_COLOR),
        yaxis: Axis::new()
            .title("Number of traps or pests caught (#)")
            .title_font_size(TITLE_FONT_SIZE)
            .tick_font_size(TICK_FONT_SIZE)
            .range(COUNT_AXIS_RANGE[0], COUNT_AXIS_RANGE[1])
            .dtick(COUNT_AXIS_DTICK)
            .grid_color(GRID_COLOR),
        yaxis2: Some(
            Axis::new()
                .title("Average catch rate (catches/trap/year)")
                .title_font_size(TITLE_FONT_SIZE)
                .tick_font_size(TICK_FONT_SIZE)
                .range(RATE_AXIS_RANGE[0], RATE_AXIS_RANGE[1])
                .tick_mode(TickMode::Linear)
                .tick0(0.0)
                .dtick(RATE_AXIS_DTICK)
                .overlaying("y")
                .side(Side::Right),
        ),
        legend: Some(Legend {
            x: 0.5,
            y: -0.15,
            xanchor: Anchor::Center,
            orientation: Orientation::Horizontal,
            bgcolor: Some(TRANSPARENT_WHITE.to_string()),
            bordercolor: Some(TRANSPARENT_WHITE.to_string()),
        }),
        barmode: Some(BarMode::Group),
        bargap: Some(0.15),
        bargroupgap: Some(0.0),
        plot_bgcolor: Some(TRANSPARENT.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Trace;
    use crate::data::{prepare_predator_chart_data, PredatorRecord, PredatorTable};

    fn sample_series() -> ChartSeries {
        prepare_predator_chart_data(&PredatorTable::new(vec![
            PredatorRecord::new(2019, 3200, 2100, 0.66),
            PredatorRecord::new(2020, 4100, 3300, 0.80),
            PredatorRecord::new(2021, 5200, 4600, 0.88),
        ]))
    }

    #[test]
    fn test_two_bars_one_line() {
        let figure = create_predator_control_chart(&sample_series());

        assert_eq!(figure.data.len(), 3);
        assert_eq!(figure.bar_traces().count(), 2);
        assert_eq!(figure.line_traces().count(), 1);

        let names: Vec<&str> = figure.data.iter().map(Trace::name).collect();
        assert_eq!(names, ["Number of Active Traps", "Pests Caught", "Catch Rate"]);
    }

    #[test]
    fn test_trace_values_follow_series() {
        let figure = create_predator_control_chart(&sample_series());

        let bars: Vec<_> = figure.bar_traces().collect();
        assert_eq!(bars[0].x, vec![2019, 2020, 2021]);
        assert_eq!(bars[0].y, vec![3200.0, 4100.0, 5200.0]);
        assert_eq!(bars[1].y, vec![2100.0, 3300.0, 4600.0]);
        assert!(bars.iter().all(|b| b.width == Some(BAR_WIDTH)));

        let line = figure.line_traces().next().unwrap();
        assert_eq!(line.y, vec![0.66, 0.80, 0.88]);
        assert_eq!(line.yaxis.as_deref(), Some("y2"));
        assert_eq!(line.line.color.as_deref(), Some(CATCH_RATE_COLOR));
    }

    #[test]
    fn test_axis_ranges_are_data_independent() {
        let huge = prepare_predator_chart_data(&PredatorTable::new(vec![
            PredatorRecord::new(2030, 50_000, 90_000, 12.5),
        ]));

        for series in [sample_series(), huge, ChartSeries::default()] {
            let layout = create_predator_control_chart(&series).layout;

            assert_eq!(layout.yaxis.range, Some([0.0, 8000.0]));
            assert_eq!(layout.yaxis.dtick, Some(1000.0));

            let y2 = layout.yaxis2.unwrap();
            assert_eq!(y2.range, Some([0.0, 1.8]));
            assert_eq!(y2.dtick, Some(0.2));
            assert_eq!(y2.overlaying.as_deref(), Some("y"));
            assert_eq!(y2.side, Some(Side::Right));
        }
    }

    #[test]
    fn test_layout_json() {
        let figure = create_predator_control_chart(&sample_series());
        let value = serde_json::to_value(&figure).unwrap();
        let layout = &value["layout"];

        assert_eq!(layout["barmode"], "group");
        assert_eq!(layout["bargap"], 0.15);
        assert_eq!(layout["legend"]["orientation"], "h");
        assert_eq!(layout["legend"]["xanchor"], "center");
        assert_eq!(layout["yaxis2"]["tickmode"], "linear");
        assert_eq!(layout["yaxis2"]["title"]["font"]["size"], 16);
        assert_eq!(layout["xaxis"]["showgrid"], true);
        assert_eq!(value["data"][2]["mode"], "lines+markers");
    }
}
