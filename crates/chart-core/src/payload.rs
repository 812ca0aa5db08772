// File: crates/chart-core/src/payload.rs
// Summary: Payload codec across the protocol boundary (encode on the tool side,
// re-validating decode on the rendering side).

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::PayloadError;
use crate::sanitize::{keep_valid, sanitize_points, sanitize_title, validate_series, PointOptions};
use crate::series::{ChartPayload, Series, SeriesType};

/// One content block of a tool response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

/// Tool response: a single text block carrying the serialized payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolResponse {
    pub content: Vec<TextContent>,
}

impl ToolResponse {
    pub fn text(text: String) -> Self {
        Self { content: vec![TextContent { kind: "text", text }] }
    }

    /// The payload text of the first block.
    pub fn payload_text(&self) -> Option<&str> {
        self.content.first().map(|c| c.text.as_str())
    }
}

pub fn encode(payload: &ChartPayload) -> Result<String, PayloadError> {
    Ok(serde_json::to_string(payload)?)
}

/// Series list and title reconstructed from an untrusted payload.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedChart {
    pub chart_type: SeriesType,
    pub series: Vec<Series>,
    pub title: Option<String>,
}

impl DecodedChart {
    pub fn empty() -> Self {
        Self { chart_type: SeriesType::Line, series: Vec::new(), title: None }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

impl Default for DecodedChart {
    fn default() -> Self { Self::empty() }
}

/// Decode payload text; invalid JSON yields an empty chart.
pub fn decode(text: &str) -> DecodedChart {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => decode_value(&value),
        Err(err) => {
            debug!(error = %err, "payload is not valid JSON");
            DecodedChart::empty()
        }
    }
}

/// Decode an already-parsed payload, re-applying the sanitizer's shape checks.
pub fn decode_value(payload: &Value) -> DecodedChart {
    let Some(obj) = payload.as_object() else {
        return DecodedChart::empty();
    };
    let chart_type = obj
        .get("chartType")
        .and_then(Value::as_str)
        .and_then(SeriesType::parse)
        .unwrap_or(SeriesType::Line);
    let title = sanitize_title(obj.get("title"));

    let series = match obj.get("series").and_then(Value::as_array) {
        Some(items) => keep_valid(
            "series",
            items.iter().enumerate().map(|(i, raw)| {
                validate_series(i, raw, chart_type, PointOptions::ANY).map(|mut s| {
                    // pie is not accepted by the tool-side override, restore it here
                    if raw.get("type").and_then(Value::as_str) == Some("pie") {
                        s.series_type = SeriesType::Pie;
                    }
                    s
                })
            }),
        ),
        None => Vec::new(),
    };

    let series = if series.is_empty() {
        // flat `points` shorthand
        let points = sanitize_points(obj.get("points"), PointOptions::ANY);
        if points.is_empty() {
            Vec::new()
        } else {
            vec![Series::fallback(chart_type, points)]
        }
    } else {
        series
    };

    DecodedChart { chart_type, series, title }
}

/// Decode a full tool result (`{ content: [{ type: "text", text }] }`).
pub fn decode_tool_result(result: &Value) -> DecodedChart {
    let text = result
        .get("content")
        .and_then(Value::as_array)
        .and_then(|blocks| {
            blocks
                .iter()
                .find(|b| b.get("type").and_then(Value::as_str) == Some("text"))
        })
        .and_then(|b| b.get("text"))
        .and_then(Value::as_str);
    match text {
        Some(t) if !t.is_empty() => decode(t),
        _ => {
            debug!("tool result has no text content");
            DecodedChart::empty()
        }
    }
}
