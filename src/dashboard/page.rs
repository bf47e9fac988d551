//! Page Assembly
//!
//! Renders the single dashboard page: nested layout divs around the graph
//! div, with plotly.js drawing the serialized figure on load.

use serde::Deserialize;

use super::error::DashboardResult;
use crate::chart::Figure;

/// DOM id of the graph container
pub const GRAPH_ID: &str = "predator-control-chart";

/// plotly.js bundle loaded by the page
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Page-level options
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageOptions {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_plotly_src")]
    pub plotly_src: String,
}

fn default_title() -> String {
    "Predator Control".to_string()
}

fn default_plotly_src() -> String {
    DEFAULT_PLOTLY_SRC.to_string()
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            plotly_src: default_plotly_src(),
        }
    }
}

/// Render the dashboard page with the figure embedded
pub fn render_page(figure: &Figure, options: &PageOptions) -> DashboardResult<String> {
    let figure_json = script_safe_json(&figure.to_json()?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<script src="{plotly_src}" charset="utf-8"></script>
</head>
<body>
<div>
  <div>
    <div id="{graph_id}" class="dash-graph"></div>
  </div>
</div>
<script>
  const figure = {figure_json};
  Plotly.newPlot("{graph_id}", figure.data, figure.layout, {{ responsive: true }});
</script>
</body>
</html>
"#,
        title = escape_html(&options.title),
        plotly_src = escape_html(&options.plotly_src),
        graph_id = GRAPH_ID,
        figure_json = figure_json,
    ))
}

/// Keep JSON from closing the surrounding `<script>` element
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{create_predator_control_chart, BarTrace};
    use crate::data::{prepare_predator_chart_data, PredatorRecord, PredatorTable};

    #[test]
    fn test_page_embeds_graph_and_figure() {
        let table = PredatorTable::new(vec![PredatorRecord::new(2020, 4100, 3300, 0.8)]);
        let figure = create_predator_control_chart(&prepare_predator_chart_data(&table));

        let html = render_page(&figure, &PageOptions::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div id="predator-control-chart""#));
        assert!(html.contains(DEFAULT_PLOTLY_SRC));
        assert!(html.contains("<title>Predator Control</title>"));
        assert!(html.contains(&figure.to_json().unwrap()));
        assert!(html.contains("Plotly.newPlot(\"predator-control-chart\""));
    }

    #[test]
    fn test_script_breakout_is_escaped() {
        let mut figure = Figure::new();
        figure.add_trace(BarTrace::new("</script><b>", vec![1], vec![1.0]));

        let html = render_page(&figure, &PageOptions::default()).unwrap();

        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r"<\/script><b>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let options = PageOptions {
            title: "Traps & <Pests>".to_string(),
            ..Default::default()
        };

        let html = render_page(&Figure::new(), &options).unwrap();
        assert!(html.contains("<title>Traps &amp; &lt;Pests&gt;</title>"));
    }
}
