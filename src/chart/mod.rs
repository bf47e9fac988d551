//! Charting
//!
//! - [`figure`]: plotly-compatible figure model
//! - [`predator`]: the predator control bar and line chart

pub mod figure;
pub mod predator;

pub use figure::{
    Anchor, Axis, AxisTitle, BarMode, BarTrace, Figure, Font, Layout, Legend, Line, Marker,
    Orientation, ScatterMode, ScatterTrace, Side, TickMode, Trace,
};
pub use predator::create_predator_control_chart;
