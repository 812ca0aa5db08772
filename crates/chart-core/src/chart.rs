// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the layout pipeline: bounds, axes, ticks, bars, lines, scene.

use tracing::trace;

use crate::axis::{resolve_y_axis, AxisOverrides, ResolvedYAxis};
use crate::category::Categories;
use crate::geometry::{bar_offset, bar_rect, bar_width, min_positive_gap, Rect};
use crate::grid::{format_axis_label, label_stride, numeric_ticks, Tick};
use crate::scale::PlotScale;
use crate::scene::{DrawCommand, Scene, TextAnchor, TextBaseline};
use crate::series::{Series, SeriesType};
use crate::theme::Theme;
use crate::types::{
    Insets, BAR_FILL_RATIO, HEIGHT, MAX_BAR_WIDTH, MAX_CATEGORY_LABELS, TICK_COUNT, WIDTH,
};
use crate::view::DataBounds;

/// Status line when nothing can be plotted.
pub const NO_POINTS_STATUS: &str = "No points provided";
/// Meta line paired with `NO_POINTS_STATUS`.
pub const NO_POINTS_META: &str = "Provide at least two points";
/// Appended to the meta line when conflicting Y overrides were discarded.
pub const INVALID_RANGE_NOTE: &str = "Invalid Y range, using auto";

const AXIS_STROKE: f64 = 1.4;
const LINE_STROKE: f64 = 2.4;
const TICK_LEN: f64 = 6.0;
const TICK_LABEL_GAP: f64 = 10.0;
const FIRST_MARKER_RADIUS: f64 = 5.0;
const MARKER_RADIUS: f64 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    pub tick_count: usize,
    pub max_bar_width: f64,
    pub bar_fill_ratio: f64,
    pub max_category_labels: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            tick_count: TICK_COUNT,
            max_bar_width: MAX_BAR_WIDTH,
            bar_fill_ratio: BAR_FILL_RATIO,
            max_category_labels: MAX_CATEGORY_LABELS,
        }
    }
}

/// How bar series are positioned along X.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarMode {
    /// No bar series.
    None,
    /// Bars only: one slot per category label.
    Categorical,
    /// Bars mixed with lines: bars sit at their numeric x.
    Numeric,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinePath {
    /// Index into the chart's series list.
    pub series_index: usize,
    pub color: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub series_index: usize,
    pub label: String,
    pub value: f64,
    pub color: String,
    pub rect: Rect,
}

/// Screen-space layout for one redraw.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub scale: PlotScale,
    pub y_axis: ResolvedYAxis,
    pub bar_mode: BarMode,
    pub categories: Categories,
    pub bar_width: Option<f64>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub lines: Vec<LinePath>,
    pub bars: Vec<BarRect>,
}

/// Result of a redraw: status/meta text for the surface plus the drawing itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub status: String,
    pub meta: String,
    pub title: Option<String>,
    /// `None` in the "no data" state.
    pub layout: Option<Layout>,
    pub scene: Scene,
}

impl Frame {
    pub fn has_data(&self) -> bool {
        self.layout.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    pub series: Vec<Series>,
    pub title: Option<String>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_series(series: Vec<Series>) -> Self {
        Self { series, title: None }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Compute the layout, or `None` when there is not a single point.
    pub fn layout(&self, opts: &RenderOptions, overrides: AxisOverrides) -> Option<Layout> {
        let bounds = DataBounds::from_series(&self.series)?;

        let lines: Vec<(usize, &Series)> = self
            .series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.series_type == SeriesType::Line)
            .collect();
        let bars: Vec<(usize, &Series)> = self
            .series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.series_type.is_bar_like())
            .collect();
        let bar_mode = match (bars.is_empty(), lines.is_empty()) {
            (true, _) => BarMode::None,
            (false, true) => BarMode::Categorical,
            (false, false) => BarMode::Numeric,
        };

        let y_axis = resolve_y_axis(bounds.y_range(), overrides, !bars.is_empty());
        let x_range = bounds.x_range().expand_degenerate();
        let scale = PlotScale::new(opts.width as f64, opts.height as f64, opts.insets, x_range, y_axis.range);
        let categories = Categories::collect(bars.iter().map(|(_, s)| *s));
        trace!(?bounds, x = ?x_range, y = ?y_axis.range, ?bar_mode, categories = categories.len(), "layout bounds");

        let y_ticks = numeric_ticks(y_axis.range.min, y_axis.range.max, opts.tick_count, |v| scale.map_y(v));
        let x_ticks = x_ticks(&self.series, &scale, &categories, bar_mode, opts);

        let line_paths = lines
            .iter()
            .enumerate()
            .map(|(group_index, (series_index, s))| LinePath {
                series_index: *series_index,
                color: opts.theme.series_color(s.color.as_deref(), group_index),
                points: s
                    .points
                    .iter()
                    .filter_map(|p| p.x_number().map(|x| (scale.map_x(x), scale.map_y(p.y))))
                    .collect(),
            })
            .collect();

        let (bar_width, bar_rects) = match bar_mode {
            BarMode::None => (None, Vec::new()),
            BarMode::Categorical => layout_category_bars(&bars, &categories, &scale, opts),
            BarMode::Numeric => layout_numeric_bars(&bars, &scale, opts),
        };

        Some(Layout {
            scale,
            y_axis,
            bar_mode,
            categories,
            bar_width,
            x_ticks,
            y_ticks,
            lines: line_paths,
            bars: bar_rects,
        })
    }

    /// Full redraw: layout, status/meta text and the draw commands.
    pub fn render(&self, opts: &RenderOptions, overrides: AxisOverrides) -> Frame {
        let theme = &opts.theme;
        let mut scene = Scene::new(opts.width as f64, opts.height as f64, &theme.background, &theme.font_family);

        let Some(layout) = self.layout(opts, overrides) else {
            return Frame {
                status: NO_POINTS_STATUS.to_string(),
                meta: NO_POINTS_META.to_string(),
                title: self.title.clone(),
                layout: None,
                scene,
            };
        };

        let status = format!("Rendering {} series", self.series.len());
        let mut meta = self.meta_text();
        if layout.y_axis.invalid_override {
            meta.push_str(" · ");
            meta.push_str(INVALID_RANGE_NOTE);
        }

        draw_axes(&mut scene, &layout, opts);
        for path in &layout.lines {
            draw_line_path(&mut scene, path);
        }
        for bar in &layout.bars {
            scene.push(DrawCommand::Rect { rect: bar.rect, fill: bar.color.clone() });
        }
        if opts.draw_labels {
            if let Some(title) = &self.title {
                scene.push(DrawCommand::Text {
                    pos: (opts.width as f64 / 2.0, layout.scale.top() / 2.0),
                    text: title.clone(),
                    color: theme.title.clone(),
                    size: theme.font_size * 1.4,
                    anchor: TextAnchor::Middle,
                    baseline: TextBaseline::Middle,
                });
            }
        }

        Frame { status, meta, title: self.title.clone(), layout: Some(layout), scene }
    }

    fn meta_text(&self) -> String {
        let names = self.series.iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(", ");
        let mut kinds: Vec<SeriesType> = Vec::new();
        for s in &self.series {
            if !kinds.contains(&s.series_type) {
                kinds.push(s.series_type);
            }
        }
        let kind = match kinds.as_slice() {
            [only] => only.display_name(),
            _ => "Mixed",
        };
        format!("Total points: {} · {} · {}", self.point_count(), names, kind)
    }
}

// ---- helpers ----------------------------------------------------------------

fn x_ticks(
    series: &[Series],
    scale: &PlotScale,
    categories: &Categories,
    bar_mode: BarMode,
    opts: &RenderOptions,
) -> Vec<Tick> {
    let regular = || numeric_ticks(scale.x.min, scale.x.max, opts.tick_count, |v| scale.map_x(v));
    match bar_mode {
        BarMode::Categorical if !categories.is_empty() => categories
            .strided(opts.max_category_labels)
            .map(|(i, label)| Tick {
                value: i as f64,
                px: scale.map_category_x(i, categories.len()),
                label: label.to_string(),
            })
            .collect(),
        BarMode::Numeric if !categories.is_empty() => {
            let xs = distinct_numeric_x(series.iter());
            if xs.is_empty() {
                return regular();
            }
            let stride = label_stride(xs.len(), opts.max_category_labels);
            xs.iter()
                .enumerate()
                .filter(|(i, _)| i % stride == 0)
                .map(|(_, &v)| Tick { value: v, px: scale.map_x(v), label: format_axis_label(v) })
                .collect()
        }
        _ => regular(),
    }
}

/// Sorted, deduplicated numeric x values.
fn distinct_numeric_x<'a>(series: impl Iterator<Item = &'a Series>) -> Vec<f64> {
    let mut xs: Vec<f64> = series.flat_map(|s| s.points.iter().filter_map(|p| p.x_number())).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    xs
}

fn layout_category_bars(
    bars: &[(usize, &Series)],
    categories: &Categories,
    scale: &PlotScale,
    opts: &RenderOptions,
) -> (Option<f64>, Vec<BarRect>) {
    if categories.is_empty() {
        return (None, Vec::new());
    }
    let count = categories.len();
    let band = scale.plot_width() / count as f64;
    let width = bar_width(band, bars.len(), opts.bar_fill_ratio, opts.max_bar_width);
    let baseline = scale.baseline_y();

    let mut out = Vec::new();
    for (k, (series_index, s)) in bars.iter().enumerate() {
        let color = opts.theme.series_color(s.color.as_deref(), k);
        for p in &s.points {
            let Some(label) = p.category_label() else { continue };
            let Some(ci) = categories.index_of(&label) else { continue };
            let cx = scale.map_category_x(ci, count) + bar_offset(k, bars.len(), width);
            out.push(BarRect {
                series_index: *series_index,
                label,
                value: p.y,
                color: color.clone(),
                rect: bar_rect(cx, scale.map_y(p.y), baseline, width),
            });
        }
    }
    (Some(width), out)
}

fn layout_numeric_bars(
    bars: &[(usize, &Series)],
    scale: &PlotScale,
    opts: &RenderOptions,
) -> (Option<f64>, Vec<BarRect>) {
    let xs = distinct_numeric_x(bars.iter().map(|(_, s)| *s));
    if xs.is_empty() {
        return (None, Vec::new());
    }
    let band = min_positive_gap(&xs)
        .map(|gap| gap / 2.0 / scale.x.half_span() * scale.plot_width())
        .unwrap_or_else(|| scale.plot_width());
    let width = bar_width(band, bars.len(), opts.bar_fill_ratio, opts.max_bar_width);
    let baseline = scale.baseline_y();

    let mut out = Vec::new();
    for (k, (series_index, s)) in bars.iter().enumerate() {
        let color = opts.theme.series_color(s.color.as_deref(), k);
        for &xv in &xs {
            let Some(p) = s.points.iter().find(|p| p.x_number() == Some(xv)) else { continue };
            let cx = scale.map_x(xv) + bar_offset(k, bars.len(), width);
            out.push(BarRect {
                series_index: *series_index,
                label: format_axis_label(xv),
                value: p.y,
                color: color.clone(),
                rect: bar_rect(cx, scale.map_y(p.y), baseline, width),
            });
        }
    }
    (Some(width), out)
}

fn draw_axes(scene: &mut Scene, layout: &Layout, opts: &RenderOptions) {
    let theme = &opts.theme;
    let s = &layout.scale;
    let (l, t, r, b) = (s.left(), s.top(), s.right(), s.bottom());

    // Y axis then X axis, one L-shaped stroke
    scene.push(DrawCommand::Polyline {
        points: vec![(l, t), (l, b), (r, b)],
        color: theme.axis_line.clone(),
        width: AXIS_STROKE,
    });

    for tick in &layout.y_ticks {
        scene.push(DrawCommand::Line {
            from: (l - TICK_LEN, tick.px),
            to: (l, tick.px),
            color: theme.axis_line.clone(),
            width: AXIS_STROKE,
        });
        if opts.draw_labels {
            scene.push(DrawCommand::Text {
                pos: (l - TICK_LABEL_GAP, tick.px),
                text: tick.label.clone(),
                color: theme.tick_label.clone(),
                size: theme.font_size,
                anchor: TextAnchor::End,
                baseline: TextBaseline::Middle,
            });
        }
    }

    for tick in &layout.x_ticks {
        scene.push(DrawCommand::Line {
            from: (tick.px, b),
            to: (tick.px, b + TICK_LEN),
            color: theme.axis_line.clone(),
            width: AXIS_STROKE,
        });
        if opts.draw_labels {
            scene.push(DrawCommand::Text {
                pos: (tick.px, b + TICK_LABEL_GAP),
                text: tick.label.clone(),
                color: theme.tick_label.clone(),
                size: theme.font_size,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Top,
            });
        }
    }
}

fn draw_line_path(scene: &mut Scene, path: &LinePath) {
    if path.points.len() >= 2 {
        scene.push(DrawCommand::Polyline { points: path.points.clone(), color: path.color.clone(), width: LINE_STROKE });
    }
    for (i, &center) in path.points.iter().enumerate() {
        let radius = if i == 0 { FIRST_MARKER_RADIUS } else { MARKER_RADIUS };
        scene.push(DrawCommand::Circle { center, radius, fill: path.color.clone() });
    }
}
