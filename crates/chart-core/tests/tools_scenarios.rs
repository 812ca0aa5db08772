// File: crates/chart-core/tests/tools_scenarios.rs
// Purpose: End-to-end tool calls: argument JSON in, exact payload JSON out.

use chart_core::resource::RESOURCE_URI;
use chart_core::{call_tool, list_tools, ChartTool, ToolError};
use serde_json::{json, Value};

fn payload(tool: &str, args: Value) -> Value {
    let response = call_tool(tool, &args).expect("known tool");
    assert_eq!(response.content.len(), 1);
    assert_eq!(response.content[0].kind, "text");
    serde_json::from_str(response.payload_text().expect("text block")).expect("payload is JSON")
}

#[test]
fn bar_chart_from_labels_and_datasets() {
    let out = payload(
        "draw-bar-chart",
        json!({ "labels": ["a", "b", "c"], "datasets": [{ "name": "S1", "data": [1, 2, 3] }] }),
    );
    assert_eq!(
        out,
        json!({
            "chartType": "bar",
            "series": [{
                "name": "S1",
                "color": null,
                "points": [{ "x": "a", "y": 1.0 }, { "x": "b", "y": 2.0 }, { "x": "c", "y": 3.0 }],
                "type": "bar"
            }]
        })
    );
}

#[test]
fn pie_chart_drops_bad_values() {
    let out = payload("draw-pie-chart", json!({ "labels": ["x", "y"], "values": [1, "bad"] }));
    assert_eq!(
        out,
        json!({
            "chartType": "pie",
            "series": [{ "name": "Series 1", "color": null, "points": [{ "x": "x", "y": 1.0 }], "type": "pie" }]
        })
    );
}

#[test]
fn empty_line_chart_yields_fallback_series() {
    let response = call_tool("draw-line-chart", &json!({})).expect("known tool");
    assert_eq!(
        response.payload_text(),
        Some(r#"{"chartType":"line","series":[{"name":"Series 1","color":null,"points":[],"type":"line"}]}"#)
    );
}

#[test]
fn line_chart_prefers_series_over_points() {
    let out = payload(
        "draw-line-chart",
        json!({
            "title": " Sales ",
            "points": [{ "x": 9, "y": 9 }],
            "series": [{ "name": "A", "points": [{ "x": 0, "y": 1 }, { "x": 1, "y": 2 }] }]
        }),
    );
    assert_eq!(out["title"], json!("Sales"));
    assert_eq!(out["series"].as_array().map(Vec::len), Some(1));
    assert_eq!(out["series"][0]["name"], json!("A"));
    assert_eq!(out["series"][0]["points"][1]["x"], json!(1.0));
}

#[test]
fn line_chart_points_become_the_fallback_series() {
    let out = payload("draw-line-chart", json!({ "points": [{ "x": 0, "y": 1 }, { "x": "bad", "y": 2 }] }));
    assert_eq!(out["series"][0]["name"], json!("Series 1"));
    assert_eq!(out["series"][0]["type"], json!("line"));
    assert_eq!(out["series"][0]["points"].as_array().map(Vec::len), Some(1));
    assert!(out.get("title").is_none());
}

#[test]
fn bar_chart_falls_back_to_series_then_points() {
    let from_series = payload(
        "draw-bar-chart",
        json!({ "series": [{ "name": "Q", "points": [{ "x": "Q1", "y": 4 }, { "x": 2, "y": 5 }] }] }),
    );
    assert_eq!(from_series["series"][0]["name"], json!("Q"));
    assert_eq!(from_series["series"][0]["type"], json!("bar"));
    assert_eq!(from_series["series"][0]["points"].as_array().map(Vec::len), Some(2));

    // labels without datasets are ignored
    let from_points = payload("draw-bar-chart", json!({ "labels": ["a"], "points": [{ "x": "a", "y": 1 }] }));
    assert_eq!(from_points["series"][0]["name"], json!("Series 1"));
    assert_eq!(from_points["series"][0]["points"][0]["x"], json!("a"));
}

#[test]
fn unknown_tool_is_an_error() {
    match call_tool("draw-radar-chart", &json!({})) {
        Err(ToolError::UnknownTool { name }) => assert_eq!(name, "draw-radar-chart"),
        other => panic!("expected UnknownTool, got {other:?}"),
    }
}

#[test]
fn descriptors_link_the_ui_resource() {
    let tools = list_tools();
    assert_eq!(tools.len(), 3);
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names, vec!["draw-line-chart", "draw-bar-chart", "draw-pie-chart"]);
    for tool in &tools {
        assert_eq!(tool["_meta"]["ui"]["resourceUri"], json!(RESOURCE_URI));
        assert_eq!(tool["inputSchema"]["type"], json!("object"));
    }
    assert_eq!(ChartTool::from_name("draw-pie-chart"), Some(ChartTool::Pie));
}
