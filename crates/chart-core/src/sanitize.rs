// File: crates/chart-core/src/sanitize.rs
// Summary: Sanitizer turning untrusted tool arguments into canonical series.
// Notes:
// - Every element is validated into `Result<T, ValidationIssue>`; `keep_valid`
//   applies the "drop invalid, keep valid" policy and logs what it dropped.
// - Nothing here fails. The worst outcome is an emptier result than the input implied.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationIssue;
use crate::series::{Point, Series, SeriesType, XValue};

/// Which kinds of `x` a point may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointOptions {
    pub allow_number_x: bool,
    pub allow_string_x: bool,
}

impl PointOptions {
    /// Continuous axis only (line charts).
    pub const NUMERIC: Self = Self { allow_number_x: true, allow_string_x: false };
    /// Either kind (bar series, decoded payloads).
    pub const ANY: Self = Self { allow_number_x: true, allow_string_x: true };
}

/// Numeric coercion for untrusted values: numbers, and strings holding a decimal number.
/// Returns `None` for anything non-finite or non-numeric. Strings must be plain
/// decimals, so hex (`"0x10"`), `"Infinity"` and blank text are rejected.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_decimal(s)?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Parse user-typed numeric text (tool strings, axis inputs). Blank text is `None`, not zero.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !looks_decimal(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

// Rejects alphabetic input such as "inf" or "0x10" before f64 parsing.
fn looks_decimal(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

/// Trimmed, non-empty string or `None`.
fn trimmed_string(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn as_array(raw: &Value) -> Result<&Vec<Value>, ValidationIssue> {
    raw.as_array().ok_or(ValidationIssue::NotAnArray)
}

fn as_object(raw: &Value, index: usize) -> Result<&Map<String, Value>, ValidationIssue> {
    raw.as_object().ok_or(ValidationIssue::ElementNotAnObject { index })
}

/// Keep the `Ok` elements, log the rest.
pub fn keep_valid<T>(what: &str, results: impl IntoIterator<Item = Result<T, ValidationIssue>>) -> Vec<T> {
    results
        .into_iter()
        .filter_map(|r| match r {
            Ok(item) => Some(item),
            Err(issue) => {
                debug!(kind = what, %issue, "dropping malformed element");
                None
            }
        })
        .collect()
}

/// Validate one raw point at `index`.
pub fn validate_point(index: usize, raw: &Value, options: PointOptions) -> Result<Point, ValidationIssue> {
    let obj = as_object(raw, index)?;
    let y = coerce_number(obj.get("y")).ok_or(ValidationIssue::NonFiniteY { index })?;
    let label = trimmed_string(obj.get("label"));

    match obj.get("x") {
        Some(Value::Number(n)) if options.allow_number_x => {
            let x = n.as_f64().filter(|v| v.is_finite()).ok_or(ValidationIssue::InvalidX { index })?;
            Ok(Point { x: Some(XValue::Number(x)), y, label })
        }
        Some(Value::String(s)) if options.allow_string_x => {
            let x = s.trim();
            if x.is_empty() {
                return Err(ValidationIssue::InvalidX { index });
            }
            Ok(Point { x: Some(XValue::Category(x.to_string())), y, label })
        }
        // Categorical point whose display label travels separately.
        Some(Value::Null) | None if options.allow_string_x && label.is_some() => {
            Ok(Point { x: None, y, label })
        }
        _ => Err(ValidationIssue::InvalidX { index }),
    }
}

pub fn validate_points(raw: &Value, options: PointOptions) -> Result<Vec<Result<Point, ValidationIssue>>, ValidationIssue> {
    let items = as_array(raw)?;
    Ok(items.iter().enumerate().map(|(i, p)| validate_point(i, p, options)).collect())
}

/// Sanitize a raw point list. Non-arrays produce an empty list.
pub fn sanitize_points(raw: Option<&Value>, options: PointOptions) -> Vec<Point> {
    match raw.map(|r| validate_points(r, options)) {
        Some(Ok(results)) => keep_valid("point", results),
        Some(Err(issue)) => {
            debug!(%issue, "points ignored");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Validate one raw series object. `type` may override the implied type with "line" or "bar".
pub fn validate_series(
    index: usize,
    raw: &Value,
    implied: SeriesType,
    options: PointOptions,
) -> Result<Series, ValidationIssue> {
    let obj = as_object(raw, index)?;
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| Series::default_name(index));
    let color = obj.get("color").and_then(Value::as_str).map(str::to_string);
    let series_type = obj
        .get("type")
        .and_then(Value::as_str)
        .and_then(SeriesType::parse)
        .filter(|t| matches!(t, SeriesType::Line | SeriesType::Bar))
        .unwrap_or(implied);
    let points = sanitize_points(obj.get("points"), options);
    Ok(Series { name, color, points, series_type })
}

/// Sanitize a raw series list. Never returns more series than the input holds.
pub fn sanitize_series(raw: Option<&Value>, implied: SeriesType, options: PointOptions) -> Vec<Series> {
    let Some(items) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };
    keep_valid(
        "series",
        items.iter().enumerate().map(|(i, s)| validate_series(i, s, implied, options)),
    )
}

/// Trim labels and drop empties. The output may be shorter than the input, so
/// positions do not survive.
pub fn sanitize_labels(raw: Option<&Value>) -> Vec<String> {
    let Some(items) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };
    items.iter().filter_map(|label| trimmed_string(Some(label))).collect()
}

/// Pair `values[i]` with the already-filtered `labels[i]`, skipping non-finite values.
/// Pairing is positional: after a blank label is dropped, later values pair with the shifted labels.
fn zip_labels(labels: &[String], values: &[Value]) -> Vec<Point> {
    let results = labels.iter().enumerate().map(|(i, label)| {
        coerce_number(values.get(i))
            .map(|y| Point::category(label.clone(), y))
            .ok_or(ValidationIssue::NonFiniteValue { index: i })
    });
    keep_valid("value", results)
}

pub fn validate_dataset(index: usize, labels: &[String], raw: &Value) -> Result<Series, ValidationIssue> {
    let obj = as_object(raw, index)?;
    let data = obj
        .get("data")
        .and_then(Value::as_array)
        .ok_or(ValidationIssue::MissingData { index })?;
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| Series::default_name(index));
    let color = obj.get("color").and_then(Value::as_str).map(str::to_string);
    Ok(Series { name, color, points: zip_labels(labels, data), series_type: SeriesType::Bar })
}

/// Bar datasets aligned to `labels` by index. Requires at least one label.
pub fn sanitize_datasets(labels: &[String], raw: Option<&Value>) -> Vec<Series> {
    if labels.is_empty() {
        return Vec::new();
    }
    let Some(items) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };
    keep_valid(
        "dataset",
        items.iter().enumerate().map(|(i, d)| validate_dataset(i, labels, d)),
    )
}

pub fn validate_pie(raw: &Value) -> Result<Series, ValidationIssue> {
    let obj = raw.as_object().ok_or(ValidationIssue::NotAnObject)?;
    let labels = sanitize_labels(obj.get("labels"));
    if labels.is_empty() {
        return Err(ValidationIssue::NoLabels);
    }
    let values = obj.get("values").and_then(Value::as_array).ok_or(ValidationIssue::NotAnArray)?;
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| Series::default_name(0));
    let color = obj.get("color").and_then(Value::as_str).map(str::to_string);
    Ok(Series { name, color, points: zip_labels(&labels, values), series_type: SeriesType::Pie })
}

/// At most one pie series from `{ name?, color?, labels, values }`.
pub fn sanitize_pie_series(raw: &Value) -> Vec<Series> {
    keep_valid("pie", [validate_pie(raw)])
}

/// Trimmed title, or `None` when absent, non-string or blank.
pub fn sanitize_title(raw: Option<&Value>) -> Option<String> {
    trimmed_string(raw)
}
