// File: crates/chart-core/tests/payload_roundtrip.rs
// Purpose: Decoding re-validates payloads and tolerates garbage.

use chart_core::payload::decode_value;
use chart_core::{decode, decode_tool_result, encode, ChartPayload, Point, Series, SeriesType, XValue};
use serde_json::json;

#[test]
fn encoded_payload_decodes_to_the_same_series() {
    let series = vec![
        Series::new("Revenue", SeriesType::Line)
            .with_color("#ff0000")
            .with_points(vec![Point::numeric(0.0, 1.5), Point::numeric(1.0, -2.0)]),
        Series::new("Units", SeriesType::Bar).with_points(vec![Point::category("Q1", 3.0).with_label("Quarter 1")]),
    ];
    let payload = ChartPayload::new(SeriesType::Line, series.clone(), Vec::new()).with_title(Some("Mixed".into()));
    let text = encode(&payload).expect("encode");

    let decoded = decode(&text);
    assert_eq!(decoded.chart_type, SeriesType::Line);
    assert_eq!(decoded.title.as_deref(), Some("Mixed"));
    assert_eq!(decoded.series, series);
    assert_eq!(decoded.point_count(), 3);
}

#[test]
fn invalid_json_decodes_to_empty() {
    let decoded = decode("{not json");
    assert!(decoded.series.is_empty());
    assert_eq!(decoded.chart_type, SeriesType::Line);
    assert!(decode("[1, 2, 3]").series.is_empty());
    assert!(decode("").series.is_empty());
}

#[test]
fn decode_drops_invalid_points_again() {
    let decoded = decode_value(&json!({
        "chartType": "bar",
        "series": [
            { "name": "S", "points": [{ "x": "a", "y": 1 }, { "x": "b", "y": "NaN" }, { "x": true, "y": 2 }] },
            "garbage"
        ]
    }));
    assert_eq!(decoded.chart_type, SeriesType::Bar);
    assert_eq!(decoded.series.len(), 1);
    assert_eq!(decoded.series[0].series_type, SeriesType::Bar);
    assert_eq!(decoded.series[0].points.len(), 1);
}

#[test]
fn decode_keeps_per_series_types() {
    let decoded = decode_value(&json!({
        "chartType": "line",
        "series": [
            { "name": "L", "type": "line", "points": [{ "x": 0, "y": 1 }] },
            { "name": "B", "type": "bar", "points": [{ "x": 0, "y": 1 }] },
            { "name": "P", "type": "pie", "points": [{ "x": "a", "y": 1 }] },
            { "name": "D", "points": [{ "x": 0, "y": 1 }] }
        ]
    }));
    let types: Vec<SeriesType> = decoded.series.iter().map(|s| s.series_type).collect();
    assert_eq!(types, vec![SeriesType::Line, SeriesType::Bar, SeriesType::Pie, SeriesType::Line]);
}

#[test]
fn flat_points_shorthand_becomes_one_series() {
    let decoded = decode_value(&json!({ "chartType": "pie", "points": [{ "x": "a", "y": 4 }] }));
    assert_eq!(decoded.series.len(), 1);
    assert_eq!(decoded.series[0].name, "Series 1");
    assert_eq!(decoded.series[0].series_type, SeriesType::Pie);
    assert_eq!(decoded.series[0].points[0].x, Some(XValue::Category("a".into())));

    let unknown_type = decode_value(&json!({ "chartType": "radar", "points": [] }));
    assert_eq!(unknown_type.chart_type, SeriesType::Line);
    assert!(unknown_type.series.is_empty());
}

#[test]
fn tool_result_uses_first_text_block() {
    let result = json!({
        "content": [
            { "type": "image", "data": "..." },
            { "type": "text", "text": "{\"chartType\":\"line\",\"series\":[{\"name\":\"A\",\"points\":[{\"x\":1,\"y\":2}]}]}" }
        ]
    });
    let decoded = decode_tool_result(&result);
    assert_eq!(decoded.series.len(), 1);
    assert_eq!(decoded.series[0].name, "A");

    assert!(decode_tool_result(&json!({ "content": [] })).series.is_empty());
    assert!(decode_tool_result(&json!({})).series.is_empty());
}
