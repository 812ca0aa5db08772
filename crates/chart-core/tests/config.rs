// File: crates/chart-core/tests/config.rs
// Purpose: TOML render configuration: defaults, overrides and load errors.

use std::io::Write;

use chart_core::state::MAX_VIEWPORT;
use chart_core::types::Insets;
use chart_core::{load_config, ConfigError, RenderConfig, RenderOptions};

#[test]
fn empty_config_matches_default_options() {
    let cfg = RenderConfig::from_toml_str("").expect("empty toml is valid");
    assert_eq!(cfg, RenderConfig::default());
    assert_eq!(cfg.into_options(), RenderOptions::default());
}

#[test]
fn config_overrides_flow_into_options() {
    let cfg = RenderConfig::from_toml_str(
        r##"
width = 800
height = 400
padding = 20
theme = "dark"
palette = ["#000000", "#ffffff"]
draw_labels = false
max_category_labels = 6
"##,
    )
    .expect("parse");
    let opts = cfg.into_options();
    assert_eq!(opts.width, 800);
    assert_eq!(opts.height, 400);
    assert_eq!(opts.insets, Insets::uniform(20));
    assert_eq!(opts.theme.name, "dark");
    assert_eq!(opts.theme.palette, vec!["#000000".to_string(), "#ffffff".to_string()]);
    assert!(!opts.draw_labels);
    assert_eq!(opts.max_category_labels, 6);
    assert_eq!(opts.tick_count, 5);
}

#[test]
fn empty_palette_keeps_the_theme_colors() {
    let opts = RenderConfig::from_toml_str("palette = []").expect("parse").into_options();
    assert_eq!(opts.theme.palette.len(), 5);
}

#[test]
fn oversized_padding_is_clamped() {
    let opts = RenderConfig::from_toml_str("padding = 3000000000").expect("parse").into_options();
    assert_eq!(opts.insets, Insets::uniform(MAX_VIEWPORT / 2));
    let response = chart_core::call_tool("draw-line-chart", &serde_json::json!({ "points": [{ "x": 0, "y": 1 }] }))
        .expect("known tool");
    let mut app = chart_core::ChartApp::new(opts);
    let frame = app.on_tool_text(response.payload_text().expect("text"));
    assert!(frame.has_data());
    assert_eq!(frame.layout.as_ref().expect("layout").scale.plot_width(), 0.0);

    assert_eq!(Insets::uniform(u32::MAX).hsum(), u32::MAX);
    assert_eq!(Insets::uniform(u32::MAX).vsum(), u32::MAX);
}

#[test]
fn load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "width = 640\ntheme = \"light\"").expect("write");
    let cfg = load_config(file.path()).expect("load");
    assert_eq!(cfg.width, 640);
    assert_eq!(cfg.height, 640);
}

#[test]
fn load_config_reports_missing_and_invalid_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("chart.toml");
    assert!(matches!(load_config(&missing), Err(ConfigError::NotFound { .. })));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "width = \"wide\"").expect("write");
    assert!(matches!(load_config(&bad), Err(ConfigError::Parse { .. })));

    let unknown = dir.path().join("unknown.toml");
    std::fs::write(&unknown, "colour = \"red\"").expect("write");
    assert!(matches!(load_config(&unknown), Err(ConfigError::Parse { .. })));
}
