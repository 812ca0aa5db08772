// File: crates/chart-cli/src/csv_import.rs
// Summary: Turns a CSV table into chart tool arguments.
// Layout: first column holds labels (or numeric x for line charts), each further
// column is one dataset named by its header.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chart_core::sanitize::parse_decimal;
use chart_core::ChartTool;
use clap::ValueEnum;
use serde_json::{json, Map, Value};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub fn tool(&self) -> ChartTool {
        match self {
            ChartKind::Line => ChartTool::Line,
            ChartKind::Bar => ChartTool::Bar,
            ChartKind::Pie => ChartTool::Pie,
        }
    }
}

/// Column-major view of a CSV file.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    /// Header of every column after the first.
    pub names: Vec<String>,
    /// First-column cell of every row, trimmed.
    pub keys: Vec<String>,
    /// `columns[c][r]`: cell `r` of dataset column `c`, trimmed. Short rows yield "".
    pub columns: Vec<Vec<String>>,
}

/// Load a CSV table from `path`.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_table(file).with_context(|| format!("reading CSV '{}'", path.display()))
}

pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    if headers.len() < 2 {
        bail!("expected a label column and at least one value column, found {} column(s)", headers.len());
    }
    debug!(?headers, "CSV headers");

    let names = headers[1..].to_vec();
    let mut keys = Vec::new();
    let mut columns = vec![Vec::new(); names.len()];
    for rec in rdr.records() {
        let rec = rec?;
        keys.push(rec.get(0).unwrap_or_default().to_string());
        for (c, column) in columns.iter_mut().enumerate() {
            column.push(rec.get(c + 1).unwrap_or_default().to_string());
        }
    }
    debug!(rows = keys.len(), datasets = names.len(), "CSV loaded");
    Ok(Table { names, keys, columns })
}

/// Cells go out as strings; the sanitizer coerces numeric text and drops the rest.
fn cell(text: &str) -> Value {
    Value::String(text.to_string())
}

/// Build the arguments of `kind`'s tool from `table`.
pub fn tool_args(table: &Table, kind: ChartKind, title: Option<&str>) -> Value {
    let mut args = match kind {
        ChartKind::Line => line_args(table),
        ChartKind::Bar => json!({
            "labels": table.keys,
            "datasets": table
                .names
                .iter()
                .zip(&table.columns)
                .map(|(name, column)| json!({ "name": name, "data": column.iter().map(|c| cell(c)).collect::<Vec<_>>() }))
                .collect::<Vec<_>>(),
        }),
        ChartKind::Pie => json!({
            "name": table.names.first(),
            "labels": table.keys,
            "values": table.columns.first().map(|column| column.iter().map(|c| cell(c)).collect::<Vec<_>>()),
        }),
    };
    if let (Some(title), Some(obj)) = (title, args.as_object_mut()) {
        obj.insert("title".to_string(), Value::String(title.to_string()));
    }
    args
}

/// Numeric keys become x; otherwise the row index is x and the key rides along as the label.
fn line_args(table: &Table) -> Value {
    let series = table
        .names
        .iter()
        .zip(&table.columns)
        .map(|(name, column)| {
            let points = table
                .keys
                .iter()
                .zip(column)
                .enumerate()
                .map(|(row, (key, value))| {
                    let mut point = Map::new();
                    match parse_decimal(key) {
                        Some(x) => {
                            point.insert("x".into(), json!(x));
                        }
                        None => {
                            point.insert("x".into(), json!(row));
                            point.insert("label".into(), Value::String(key.clone()));
                        }
                    }
                    point.insert("y".into(), cell(value));
                    Value::Object(point)
                })
                .collect::<Vec<_>>();
            json!({ "name": name, "points": points })
        })
        .collect::<Vec<_>>();
    json!({ "series": series })
}
