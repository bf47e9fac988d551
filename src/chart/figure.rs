//! Figure model
//!
//! Declarative trace and layout descriptions. The JSON form of a [`Figure`]
//! is what plotly.js expects: `Plotly.newPlot(div, figure.data, figure.layout)`.
//! Unset options are omitted so plotly applies its own defaults.

use serde::Serialize;

/// A complete chart: traces plus layout
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trace(&mut self, trace: impl Into<Trace>) {
        self.data.push(trace.into());
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the width of every bar trace
    pub fn set_bar_width(&mut self, width: f64) {
        for trace in &mut self.data {
            if let Trace::Bar(bar) = trace {
                bar.width = Some(width);
            }
        }
    }

    pub fn bar_traces(&self) -> impl Iterator<Item = &BarTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::Bar(bar) => Some(bar),
            _ => None,
        })
    }

    /// Scatter traces drawn with connecting lines
    pub fn line_traces(&self) -> impl Iterator<Item = &ScatterTrace> {
        self.data.iter().filter_map(|t| match t {
            Trace::Scatter(s) if s.mode.draws_lines() => Some(s),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A single plotted series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Bar(bar) => &bar.name,
            Trace::Scatter(scatter) => &scatter.name,
        }
    }
}

impl From<BarTrace> for Trace {
    fn from(trace: BarTrace) -> Self {
        Trace::Bar(trace)
    }
}

impl From<ScatterTrace> for Trace {
    fn from(trace: ScatterTrace) -> Self {
        Trace::Scatter(trace)
    }
}

/// Bar series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub name: String,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl BarTrace {
    pub fn new(name: impl Into<String>, x: Vec<i32>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            name: name.into(),
            marker: Marker::default(),
            width: None,
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.marker.color = Some(color.into());
        self
    }
}

/// Scatter series, drawn as lines, markers, or both
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<i32>,
    pub y: Vec<f64>,
    pub name: String,
    pub mode: ScatterMode,
    pub line: Line,
    /// Axis reference, e.g. `y2`; plotly defaults to `y`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

impl ScatterTrace {
    pub fn new(name: impl Into<String>, x: Vec<i32>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            name: name.into(),
            mode: ScatterMode::Lines,
            line: Line::default(),
            yaxis: None,
        }
    }

    pub fn mode(mut self, mode: ScatterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn line_color(mut self, color: impl Into<String>) -> Self {
        self.line.color = Some(color.into());
        self
    }

    pub fn yaxis(mut self, axis: impl Into<String>) -> Self {
        self.yaxis = Some(axis.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScatterMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

impl ScatterMode {
    pub fn draws_lines(&self) -> bool {
        matches!(self, ScatterMode::Lines | ScatterMode::LinesMarkers)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    Auto,
    Linear,
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis configuration shared by x, y and overlaying y axes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<TickMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
    /// Axis this one is drawn on top of, e.g. `y`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(AxisTitle {
            text: text.into(),
            font: self.title.take().and_then(|t| t.font),
        });
        self
    }

    pub fn title_font_size(mut self, size: u32) -> Self {
        let title = self.title.get_or_insert_with(|| AxisTitle {
            text: String::new(),
            font: None,
        });
        title.font = Some(Font { size });
        self
    }

    pub fn tick_font_size(mut self, size: u32) -> Self {
        self.tickfont = Some(Font { size });
        self
    }

    pub fn show_grid(mut self, show: bool) -> Self {
        self.showgrid = Some(show);
        self
    }

    pub fn grid_color(mut self, color: impl Into<String>) -> Self {
        self.gridcolor = Some(color.into());
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }

    pub fn tick_mode(mut self, mode: TickMode) -> Self {
        self.tickmode = Some(mode);
        self
    }

    pub fn tick0(mut self, tick0: f64) -> Self {
        self.tick0 = Some(tick0);
        self
    }

    /// Spacing between ticks (and gridlines)
    pub fn dtick(mut self, dtick: f64) -> Self {
        self.dtick = Some(dtick);
        self
    }

    pub fn overlaying(mut self, axis: impl Into<String>) -> Self {
        self.overlaying = Some(axis.into());
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Auto,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub xanchor: Anchor,
    pub orientation: Orientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bordercolor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Group,
    Stack,
    Overlay,
    Relative,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargroupgap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_type_tag() {
        let bar: Trace = BarTrace::new("bars", vec![2020], vec![1.0]).color("#000").into();
        let value = serde_json::to_value(&bar).unwrap();

        assert_eq!(value["type"], "bar");
        assert_eq!(value["marker"], json!({ "color": "#000" }));
        assert!(value.get("width").is_none());

        let line: Trace = ScatterTrace::new("line", vec![2020], vec![0.5])
            .mode(ScatterMode::LinesMarkers)
            .yaxis("y2")
            .into();
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(value["type"], "scatter");
        assert_eq!(value["mode"], "lines+markers");
        assert_eq!(value["yaxis"], "y2");
    }

    #[test]
    fn test_axis_omits_unset_fields() {
        let axis = Axis::new().title("Year").title_font_size(16).range(0.0, 10.0);
        let value = serde_json::to_value(&axis).unwrap();

        assert_eq!(
            value,
            json!({
                "title": { "text": "Year", "font": { "size": 16 } },
                "range": [0.0, 10.0]
            })
        );
    }

    #[test]
    fn test_set_bar_width_skips_scatter() {
        let mut figure = Figure::new();
        figure.add_trace(BarTrace::new("a", vec![1], vec![1.0]));
        figure.add_trace(ScatterTrace::new("b", vec![1], vec![1.0]));
        figure.set_bar_width(0.4);

        assert!(figure.bar_traces().all(|b| b.width == Some(0.4)));
        let value = serde_json::to_value(&figure).unwrap();
        assert!(value["data"][1].get("width").is_none());
    }

    #[test]
    fn test_markers_only_is_not_a_line() {
        let mut figure = Figure::new();
        figure.add_trace(ScatterTrace::new("dots", vec![1], vec![1.0]).mode(ScatterMode::Markers));
        assert_eq!(figure.line_traces().count(), 0);
    }
}
