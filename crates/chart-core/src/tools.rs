// File: crates/chart-core/src/tools.rs
// Summary: Chart tool handlers and their descriptors (line, bar, pie).
// Notes:
// - Handlers never fail: malformed input shrinks the payload, and an empty
//   result is replaced by one fallback series.

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::payload::{encode, ToolResponse};
use crate::resource::RESOURCE_URI;
use crate::sanitize::{
    sanitize_datasets, sanitize_labels, sanitize_pie_series, sanitize_points, sanitize_series,
    sanitize_title, PointOptions,
};
use crate::series::{ChartPayload, SeriesType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartTool {
    Line,
    Bar,
    Pie,
}

impl ChartTool {
    pub const ALL: [ChartTool; 3] = [ChartTool::Line, ChartTool::Bar, ChartTool::Pie];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChartTool::Line => "draw-line-chart",
            ChartTool::Bar => "draw-bar-chart",
            ChartTool::Pie => "draw-pie-chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartTool::Line => "Draw Line Chart",
            ChartTool::Bar => "Draw Bar Chart",
            ChartTool::Pie => "Draw Pie Chart",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChartTool::Line => "Draws a connected line chart from points or multiple series.",
            ChartTool::Bar => "Draws a bar chart from labels and datasets.",
            ChartTool::Pie => "Draws a pie chart from labels and values.",
        }
    }

    pub fn chart_type(&self) -> SeriesType {
        match self {
            ChartTool::Line => SeriesType::Line,
            ChartTool::Bar => SeriesType::Bar,
            ChartTool::Pie => SeriesType::Pie,
        }
    }

    /// JSON schema of the tool's arguments.
    pub fn input_schema(&self) -> Value {
        let title = json!({ "type": "string", "description": "Chart title shown in the UI." });
        match self {
            ChartTool::Line => {
                let point = json!({
                    "type": "object",
                    "properties": {
                        "x": { "type": "number" },
                        "y": { "type": "number" },
                        "label": { "type": "string" }
                    },
                    "required": ["x", "y"]
                });
                json!({
                    "type": "object",
                    "properties": {
                        "title": title,
                        "points": {
                            "type": "array",
                            "items": point,
                            "description": "Array of points with numeric x and y values."
                        },
                        "series": {
                            "type": "array",
                            "description": "Multiple line series with their own points.",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "color": { "type": "string" },
                                    "type": { "type": "string", "enum": ["line", "bar"] },
                                    "points": { "type": "array", "items": point }
                                },
                                "required": ["points"]
                            }
                        }
                    }
                })
            }
            ChartTool::Bar => json!({
                "type": "object",
                "properties": {
                    "title": title,
                    "labels": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Ordered x-axis labels for bar charts."
                    },
                    "datasets": {
                        "type": "array",
                        "description": "Bar datasets aligned to the labels array.",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "color": { "type": "string" },
                                "data": { "type": "array", "items": { "type": "number" } }
                            },
                            "required": ["data"]
                        }
                    },
                    "series": {
                        "type": "array",
                        "description": "Bar series with their own points; used when datasets are absent.",
                        "items": { "type": "object" }
                    },
                    "points": {
                        "type": "array",
                        "description": "Single-series shorthand.",
                        "items": { "type": "object" }
                    }
                }
            }),
            ChartTool::Pie => json!({
                "type": "object",
                "properties": {
                    "title": title,
                    "name": { "type": "string", "description": "Series name for the pie chart." },
                    "color": { "type": "string", "description": "Base color for the pie chart." },
                    "labels": { "type": "array", "items": { "type": "string" }, "description": "Slice labels." },
                    "values": { "type": "array", "items": { "type": "number" }, "description": "Slice values." }
                }
            }),
        }
    }

    /// Descriptor as listed to clients, with the UI resource link.
    pub fn descriptor(&self) -> Value {
        json!({
            "name": self.name(),
            "title": self.title(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
            "_meta": { "ui": { "resourceUri": RESOURCE_URI } }
        })
    }

    pub fn build_payload(&self, args: &Value) -> ChartPayload {
        match self {
            ChartTool::Line => draw_line_chart(args),
            ChartTool::Bar => draw_bar_chart(args),
            ChartTool::Pie => draw_pie_chart(args),
        }
    }

    /// Run the tool and wrap the serialized payload in a text response.
    pub fn call(&self, args: &Value) -> ToolResponse {
        let payload = self.build_payload(args);
        debug!(tool = self.name(), series = payload.series.len(), points = payload.point_count(), "tool payload built");
        let text = encode(&payload).unwrap_or_else(|err| {
            warn!(tool = self.name(), error = %err, "payload encode failed, sending fallback");
            fallback_text(self.chart_type())
        });
        ToolResponse::text(text)
    }
}

/// Dispatch by tool name.
pub fn call_tool(name: &str, args: &Value) -> Result<ToolResponse, ToolError> {
    let tool = ChartTool::from_name(name).ok_or_else(|| ToolError::UnknownTool { name: name.to_string() })?;
    Ok(tool.call(args))
}

/// Descriptors of every chart tool.
pub fn list_tools() -> Vec<Value> {
    ChartTool::ALL.iter().map(ChartTool::descriptor).collect()
}

fn fallback_text(chart_type: SeriesType) -> String {
    let t = chart_type.as_str();
    format!(r#"{{"chartType":"{t}","series":[{{"name":"Series 1","color":null,"points":[],"type":"{t}"}}]}}"#)
}

/// `draw-line-chart`: `series` first, else `points` as the fallback series. Numeric x only.
pub fn draw_line_chart(args: &Value) -> ChartPayload {
    let title = sanitize_title(args.get("title"));
    let series = sanitize_series(args.get("series"), SeriesType::Line, PointOptions::NUMERIC);
    let points = sanitize_points(args.get("points"), PointOptions::NUMERIC);
    ChartPayload::new(SeriesType::Line, series, points).with_title(title)
}

/// `draw-bar-chart`: `labels` + `datasets` first, then `series`, then `points`.
pub fn draw_bar_chart(args: &Value) -> ChartPayload {
    let title = sanitize_title(args.get("title"));
    let labels = sanitize_labels(args.get("labels"));
    let mut series = sanitize_datasets(&labels, args.get("datasets"));
    if series.is_empty() {
        series = sanitize_series(args.get("series"), SeriesType::Bar, PointOptions::ANY);
    }
    let points = sanitize_points(args.get("points"), PointOptions::ANY);
    ChartPayload::new(SeriesType::Bar, series, points).with_title(title)
}

/// `draw-pie-chart`: one series zipped from `labels` and `values`.
pub fn draw_pie_chart(args: &Value) -> ChartPayload {
    let title = sanitize_title(args.get("title"));
    let series = sanitize_pie_series(args);
    ChartPayload::new(SeriesType::Pie, series, Vec::new()).with_title(title)
}
