// File: crates/chart-cli/src/lib.rs
// Summary: Command implementations behind the `chart-tool` binary.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{call_tool, list_tools, load_config, ChartApp, Frame, RenderConfig, RenderOptions, UiResource};
use serde_json::Value;
use tracing::{debug, info};

pub mod csv_import;

pub use csv_import::ChartKind;

/// Read a file, or stdin when `source` is `-`.
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(source).with_context(|| format!("reading {source}"))
}

/// `tools`: every tool descriptor as a pretty JSON array.
pub fn tools_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&list_tools())?)
}

/// `call`: run `tool` on the JSON in `args_text` (blank means `{}`).
pub fn call_json(tool: &str, args_text: &str) -> Result<String> {
    let args: Value = if args_text.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(args_text).context("tool arguments are not valid JSON")?
    };
    let response = call_tool(tool, &args)?;
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Render options from an optional config file, with size overrides on top.
pub fn resolve_options(config: Option<&Path>, width: Option<u32>, height: Option<u32>) -> Result<RenderOptions> {
    let cfg = match config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };
    let mut opts = cfg.into_options();
    if let Some(w) = width {
        opts.width = w;
    }
    if let Some(h) = height {
        opts.height = h;
    }
    Ok(opts)
}

/// Feed `input` (payload text or a full tool-result object) through a fresh `ChartApp`.
pub fn render_input(input: &str, options: RenderOptions, y_min: &str, y_max: &str) -> Frame {
    let (width, height) = (options.width, options.height);
    let mut app = ChartApp::new(options);
    app.resize(width, height);

    let envelope = serde_json::from_str::<Value>(input)
        .ok()
        .filter(|v| v.get("content").is_some());
    match envelope {
        Some(result) => {
            debug!("input is a tool result");
            app.on_tool_result(&result);
        }
        None => {
            app.on_tool_text(input);
        }
    }
    let frame = app.set_y_axis_input(y_min, y_max).clone();
    frame
}

/// `render`: decode, lay out and write the scene to `out`.
pub fn render_to_file(input: &str, out: &Path, options: RenderOptions, y_min: &str, y_max: &str) -> Result<Frame> {
    let frame = render_input(input, options, y_min, y_max);
    chart_render::write_scene(&frame.scene, out)?;
    info!(path = %out.display(), status = %frame.status, "chart rendered");
    Ok(frame)
}

/// `csv`: import a table and run the matching tool.
pub fn csv_json(path: &Path, kind: ChartKind, title: Option<&str>) -> Result<String> {
    let table = csv_import::load_table(path)?;
    let args = csv_import::tool_args(&table, kind, title);
    let response = kind.tool().call(&args);
    Ok(serde_json::to_string_pretty(&response)?)
}

/// `resource`: the UI document wrapped with its URI and MIME type.
pub fn resource_json(asset: Option<&Path>) -> Result<String> {
    let resource = asset.map(UiResource::at).unwrap_or_default();
    let contents = resource.read()?;
    Ok(serde_json::to_string_pretty(&contents)?)
}
