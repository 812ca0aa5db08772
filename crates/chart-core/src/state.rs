// File: crates/chart-core/src/state.rs
// Summary: Rendering-surface state: last decoded chart, Y overrides, viewport.
// Every event replaces state and returns a freshly computed frame.

use serde_json::Value;
use tracing::debug;

use crate::axis::AxisOverrides;
use crate::chart::{Chart, Frame, RenderOptions};
use crate::geometry::clamp;
use crate::payload::{decode, decode_tool_result, DecodedChart};
use crate::scale::ScaleTransform;
use crate::series::Series;

/// Largest accepted viewport edge, in pixels.
pub const MAX_VIEWPORT: u32 = 16_384;

/// Pure redraw: the frame for `series` under `overrides` and `opts`.
pub fn render_frame(series: &[Series], title: Option<&str>, overrides: AxisOverrides, opts: &RenderOptions) -> Frame {
    Chart::from_series(series.to_vec())
        .with_title(title.map(str::to_string))
        .render(opts, overrides)
}

#[derive(Clone, Debug)]
pub struct ChartApp {
    last: DecodedChart,
    y_overrides: AxisOverrides,
    options: RenderOptions,
    frame: Frame,
}

impl ChartApp {
    /// Start in the "no data" state.
    pub fn new(options: RenderOptions) -> Self {
        let last = DecodedChart::empty();
        let frame = render_frame(&last.series, None, AxisOverrides::none(), &options);
        Self { last, y_overrides: AxisOverrides::none(), options, frame }
    }

    pub fn chart(&self) -> &DecodedChart {
        &self.last
    }

    pub fn y_overrides(&self) -> AxisOverrides {
        self.y_overrides
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The most recently computed frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// New tool result (`{ content: [...] }`): replaces the chart wholesale.
    pub fn on_tool_result(&mut self, result: &Value) -> &Frame {
        self.replace_chart(decode_tool_result(result))
    }

    /// New payload text: replaces the chart wholesale.
    pub fn on_tool_text(&mut self, text: &str) -> &Frame {
        self.replace_chart(decode(text))
    }

    /// Y axis inputs edited; blank or non-numeric text clears that side.
    pub fn set_y_axis_input(&mut self, min_text: &str, max_text: &str) -> &Frame {
        self.y_overrides = AxisOverrides::from_inputs(min_text, max_text);
        self.redraw()
    }

    pub fn set_y_overrides(&mut self, overrides: AxisOverrides) -> &Frame {
        self.y_overrides = overrides;
        self.redraw()
    }

    pub fn reset_y_axis(&mut self) -> &Frame {
        self.y_overrides = AxisOverrides::none();
        self.redraw()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> &Frame {
        self.options.width = clamp(width, 1, MAX_VIEWPORT);
        self.options.height = clamp(height, 1, MAX_VIEWPORT);
        self.redraw()
    }

    /// Data coordinates under a screen position, when something is plotted.
    pub fn data_at(&self, px: f64, py: f64) -> Option<(f64, f64)> {
        let scale = &self.frame.layout.as_ref()?.scale;
        Some((scale.from_screen_x(px), scale.from_screen_y(py)))
    }

    fn replace_chart(&mut self, chart: DecodedChart) -> &Frame {
        debug!(series = chart.series.len(), points = chart.point_count(), "chart replaced");
        self.last = chart;
        self.redraw()
    }

    fn redraw(&mut self) -> &Frame {
        self.frame = render_frame(&self.last.series, self.last.title.as_deref(), self.y_overrides, &self.options);
        &self.frame
    }
}

impl Default for ChartApp {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
