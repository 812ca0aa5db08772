// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the sanitizer, tool handlers, payload codec
// and chart geometry API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod category;
pub mod scene;
pub mod sanitize;
pub mod payload;
pub mod tools;
pub mod state;
pub mod config;
pub mod resource;
pub mod error;

pub use chart::{BarMode, BarRect, Chart, Frame, Layout, LinePath, RenderOptions};
pub use series::{ChartPayload, Point, Series, SeriesType, XValue};
pub use axis::{AxisOverrides, AxisRange};
pub use view::DataBounds;
pub use theme::Theme;
pub use scene::{DrawCommand, Scene, TextAnchor, TextBaseline};
pub use payload::{decode, decode_tool_result, encode, DecodedChart, ToolResponse};
pub use tools::{call_tool, list_tools, ChartTool};
pub use state::{render_frame, ChartApp};
pub use config::{load_config, RenderConfig};
pub use resource::{ResourceContents, UiResource};
pub use error::{ConfigError, PayloadError, ResourceError, ToolError, ValidationIssue};
