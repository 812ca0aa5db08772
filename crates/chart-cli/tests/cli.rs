// File: crates/chart-cli/tests/cli.rs
// Purpose: Command implementations: tool calls, CSV import, rendering and the UI resource.

use std::io::Write;

use chart_cli::csv_import::{read_table, tool_args};
use chart_cli::{call_json, csv_json, render_input, render_to_file, resolve_options, resource_json, tools_json, ChartKind};
use chart_core::{AxisRange, RenderOptions};
use serde_json::{json, Value};

fn payload_of(response_json: &str) -> Value {
    let response: Value = serde_json::from_str(response_json).expect("response JSON");
    let text = response["content"][0]["text"].as_str().expect("text block");
    serde_json::from_str(text).expect("payload JSON")
}

#[test]
fn tools_lists_three_descriptors() {
    let tools: Value = serde_json::from_str(&tools_json().expect("tools")).expect("JSON");
    assert_eq!(tools.as_array().map(Vec::len), Some(3));
}

#[test]
fn call_defaults_to_empty_arguments() {
    let payload = payload_of(&call_json("draw-line-chart", "").expect("call"));
    assert_eq!(payload["series"][0]["name"], json!("Series 1"));
    assert!(call_json("draw-line-chart", "{oops").is_err());
    assert!(call_json("no-such-tool", "{}").is_err());
}

#[test]
fn csv_table_becomes_bar_datasets() {
    let csv = "quarter, north, south\nQ1, 1, 4\nQ2, 2, n/a\nQ3, 3\n";
    let table = read_table(csv.as_bytes()).expect("table");
    assert_eq!(table.names, vec!["north".to_string(), "south".to_string()]);
    assert_eq!(table.keys, vec!["Q1".to_string(), "Q2".to_string(), "Q3".to_string()]);

    let args = tool_args(&table, ChartKind::Bar, Some("Sales"));
    assert_eq!(args["title"], json!("Sales"));
    assert_eq!(args["labels"], json!(["Q1", "Q2", "Q3"]));

    let payload = chart_core::tools::draw_bar_chart(&args);
    assert_eq!(payload.series.len(), 2);
    assert_eq!(payload.series[0].points.len(), 3);
    // "n/a" and the missing cell are dropped
    assert_eq!(payload.series[1].points.len(), 1);
}

#[test]
fn csv_line_uses_numeric_keys_or_row_index() {
    let numeric = read_table("x,y\n0,1\n2.5,3\n".as_bytes()).expect("table");
    let payload = chart_core::tools::draw_line_chart(&tool_args(&numeric, ChartKind::Line, None));
    assert_eq!(payload.series[0].name, "y");
    assert_eq!(payload.series[0].points[1].x_number(), Some(2.5));

    let labelled = read_table("month,y\nJan,1\nFeb,3\n".as_bytes()).expect("table");
    let payload = chart_core::tools::draw_line_chart(&tool_args(&labelled, ChartKind::Line, None));
    assert_eq!(payload.series[0].points[1].x_number(), Some(1.0));
    assert_eq!(payload.series[0].points[1].label.as_deref(), Some("Feb"));
}

#[test]
fn csv_needs_a_value_column() {
    assert!(read_table("only\na\n".as_bytes()).is_err());
}

#[test]
fn csv_file_to_pie_response() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "fruit,share\napple,3\npear,bad\nplum,1").expect("write");
    let payload = payload_of(&csv_json(file.path(), ChartKind::Pie, None).expect("csv"));
    assert_eq!(payload["chartType"], json!("pie"));
    assert_eq!(payload["series"][0]["name"], json!("share"));
    let points = payload["series"][0]["points"].as_array().expect("points");
    assert_eq!(points.len(), 2);
    assert_eq!(points[1]["x"], json!("plum"));
}

#[test]
fn render_accepts_payload_text_or_tool_result() {
    let response = call_json("draw-bar-chart", r#"{"labels":["a","b"],"datasets":[{"data":[3,7]}]}"#).expect("call");
    let from_result = render_input(&response, RenderOptions::default(), "", "");
    assert_eq!(from_result.status, "Rendering 1 series");
    assert_eq!(from_result.layout.as_ref().expect("layout").y_axis.range, AxisRange::new(0.0, 7.0));

    let text = serde_json::from_str::<Value>(&response).expect("JSON")["content"][0]["text"]
        .as_str()
        .expect("text")
        .to_string();
    let from_text = render_input(&text, RenderOptions::default(), "", "20");
    assert_eq!(from_text.layout.as_ref().expect("layout").y_axis.range, AxisRange::new(0.0, 20.0));

    let nothing = render_input("garbage", RenderOptions::default(), "", "");
    assert_eq!(nothing.status, "No points provided");
}

#[test]
fn render_writes_svg_with_config_and_size() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("chart.toml");
    std::fs::write(&config, "theme = \"dark\"\nwidth = 300").expect("write");
    let opts = resolve_options(Some(config.as_path()), None, Some(200)).expect("options");
    assert_eq!((opts.width, opts.height), (300, 200));

    let response = call_json("draw-line-chart", r#"{"points":[{"x":0,"y":1},{"x":1,"y":2}]}"#).expect("call");
    let out = dir.path().join("out/chart.svg");
    let frame = render_to_file(&response, &out, opts, "", "").expect("render");
    assert!(frame.has_data());
    let svg = std::fs::read_to_string(&out).expect("svg");
    assert!(svg.contains("width=\"300\" height=\"200\""));
    assert!(svg.contains("#121214"));
}

#[test]
fn resource_prints_contents() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "<p>chart</p>").expect("write");
    let contents: Value = serde_json::from_str(&resource_json(Some(file.path())).expect("resource")).expect("JSON");
    assert_eq!(contents["uri"], json!("ui://line-chart/mcp-app.html"));
    assert_eq!(contents["mimeType"], json!("text/html;profile=mcp-app"));
    assert_eq!(contents["text"], json!("<p>chart</p>"));

    let dir = tempfile::tempdir().expect("temp dir");
    assert!(resource_json(Some(dir.path().join("missing.html").as_path())).is_err());
}
