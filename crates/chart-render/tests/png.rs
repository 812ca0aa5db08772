// File: crates/chart-render/tests/png.rs
// Purpose: Skia raster output decodes as a PNG of the scene size with the expected pixels.
#![cfg(feature = "skia")]

use chart_core::{call_tool, render_frame, AxisOverrides, ChartApp, RenderOptions};
use chart_render::{write_scene, SkiaRenderer};
use serde_json::json;

#[test]
fn png_matches_scene_size_and_background() {
    let opts = RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() };
    let frame = render_frame(&[], None, AxisOverrides::none(), &opts);
    let bytes = SkiaRenderer::new().render_png(&frame.scene).expect("png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (320, 200));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn bars_are_filled_with_series_colors() {
    let mut app = ChartApp::new(RenderOptions { draw_labels: false, ..RenderOptions::default() });
    let response = call_tool(
        "draw-bar-chart",
        &json!({ "labels": ["a"], "datasets": [{ "name": "S", "color": "#00ff00", "data": [10] }] }),
    )
    .expect("known tool");
    let frame = app.on_tool_text(response.payload_text().expect("text"));
    let bar = frame.layout.as_ref().expect("layout").bars[0].rect;

    let bytes = SkiaRenderer::new().render_png(&frame.scene).expect("png");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    let cx = (bar.x + bar.width / 2.0) as u32;
    let cy = (bar.y + bar.height / 2.0) as u32;
    assert_eq!(img.get_pixel(cx, cy).0, [0, 255, 0, 255]);
}

#[test]
fn write_scene_emits_png_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let frame = render_frame(&[], None, AxisOverrides::none(), &RenderOptions::default());
    let out = dir.path().join("chart.png");
    write_scene(&frame.scene, &out).expect("png written");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}
