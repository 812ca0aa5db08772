// File: crates/chart-core/src/series.rs
// Summary: Canonical chart model shared by the tool side and the rendering side.
// Notes:
// - Only `Serialize` is derived. Incoming JSON is untrusted and always goes
//   through `sanitize`/`payload::decode` instead of a typed deserializer.

use serde::Serialize;

use crate::grid::format_axis_label;

/// Series kind; also used as the payload-level `chartType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Bar,
    /// Pie slices; laid out as categorical bars by the geometry engine.
    Pie,
}

impl SeriesType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "line" => Some(SeriesType::Line),
            "bar" => Some(SeriesType::Bar),
            "pie" => Some(SeriesType::Pie),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesType::Line => "line",
            SeriesType::Bar => "bar",
            SeriesType::Pie => "pie",
        }
    }

    /// Bar and pie series share the bar layout path.
    pub fn is_bar_like(&self) -> bool {
        matches!(self, SeriesType::Bar | SeriesType::Pie)
    }

    /// Label used in the meta line ("Line", "Bar", "Pie").
    pub fn display_name(&self) -> &'static str {
        match self {
            SeriesType::Line => "Line",
            SeriesType::Bar => "Bar",
            SeriesType::Pie => "Pie",
        }
    }
}

/// X coordinate of a point: continuous number or categorical string.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Category(String),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    /// `None` serializes as `null`: categorical point labelled by `label`.
    pub x: Option<XValue>,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Point {
    pub fn numeric(x: f64, y: f64) -> Self {
        Self { x: Some(XValue::Number(x)), y, label: None }
    }

    pub fn category(x: impl Into<String>, y: f64) -> Self {
        Self { x: Some(XValue::Category(x.into())), y, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Numeric x, if the point lives on the continuous axis.
    pub fn x_number(&self) -> Option<f64> {
        match self.x {
            Some(XValue::Number(v)) => Some(v),
            _ => None,
        }
    }

    /// Bar category label: explicit label, then category string, then formatted numeric x.
    pub fn category_label(&self) -> Option<String> {
        if let Some(label) = &self.label {
            return Some(label.clone());
        }
        match &self.x {
            Some(XValue::Category(s)) => Some(s.clone()),
            Some(XValue::Number(v)) => Some(format_axis_label(*v)),
            None => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    /// Caller-supplied color; `None` means "pick from the palette at render time".
    pub color: Option<String>,
    pub points: Vec<Point>,
    #[serde(rename = "type")]
    pub series_type: SeriesType,
}

impl Series {
    pub fn new(name: impl Into<String>, series_type: SeriesType) -> Self {
        Self { name: name.into(), color: None, points: Vec::new(), series_type }
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Default name for the series at `index` (0-based).
    pub fn default_name(index: usize) -> String {
        format!("Series {}", index + 1)
    }

    /// The substitute used when sanitization yields no series at all.
    pub fn fallback(series_type: SeriesType, points: Vec<Point>) -> Self {
        Self::new(Self::default_name(0), series_type).with_points(points)
    }
}

/// Tool response body. `series` is non-empty when built via `ChartPayload::new`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPayload {
    #[serde(rename = "chartType")]
    pub chart_type: SeriesType,
    pub series: Vec<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ChartPayload {
    /// Build a payload, substituting `fallback` when `series` is empty.
    pub fn new(chart_type: SeriesType, series: Vec<Series>, fallback: Vec<Point>) -> Self {
        let series = if series.is_empty() {
            vec![Series::fallback(chart_type, fallback)]
        } else {
            series
        };
        Self { chart_type, series, title: None }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
