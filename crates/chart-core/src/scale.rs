// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-screen transforms for the plot area.

use crate::axis::AxisRange;
use crate::types::Insets;

/// General scale transform operations for X/Y axes.
pub trait ScaleTransform {
    fn to_screen_x(&self, x: f64) -> f64;
    fn to_screen_y(&self, y: f64) -> f64;
    fn from_screen_x(&self, px: f64) -> f64;
    fn from_screen_y(&self, py: f64) -> f64;
}

/// Maps data space into the padded plot rectangle of a `width` x `height` surface.
/// Y is inverted: larger values sit higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotScale {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    pub x: AxisRange,
    pub y: AxisRange,
}

impl PlotScale {
    /// Both ranges must have non-zero span (see `AxisRange::expand_degenerate`).
    pub fn new(width: f64, height: f64, insets: Insets, x: AxisRange, y: AxisRange) -> Self {
        Self { width, height, insets, x, y }
    }

    #[inline]
    pub fn left(&self) -> f64 { self.insets.left as f64 }
    #[inline]
    pub fn right(&self) -> f64 { self.width - self.insets.right as f64 }
    #[inline]
    pub fn top(&self) -> f64 { self.insets.top as f64 }
    #[inline]
    pub fn bottom(&self) -> f64 { self.height - self.insets.bottom as f64 }

    /// Zero when the insets eat the whole surface.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.insets.hsum() as f64).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.insets.vsum() as f64).max(0.0)
    }

    #[inline]
    pub fn map_x(&self, v: f64) -> f64 {
        self.left() + self.x.fraction(v) * self.plot_width()
    }

    #[inline]
    pub fn map_y(&self, v: f64) -> f64 {
        self.bottom() - self.y.fraction(v) * self.plot_height()
    }

    /// Center of category slot `index` out of `count` equal slots.
    #[inline]
    pub fn map_category_x(&self, index: usize, count: usize) -> f64 {
        self.left() + (index as f64 + 0.5) / count.max(1) as f64 * self.plot_width()
    }

    /// Screen Y of value zero, the bar baseline.
    pub fn baseline_y(&self) -> f64 {
        self.map_y(0.0)
    }
}

impl ScaleTransform for PlotScale {
    fn to_screen_x(&self, x: f64) -> f64 { self.map_x(x) }
    fn to_screen_y(&self, y: f64) -> f64 { self.map_y(y) }
    fn from_screen_x(&self, px: f64) -> f64 {
        self.x.lerp((px - self.left()) / self.plot_width().max(1.0))
    }
    fn from_screen_y(&self, py: f64) -> f64 {
        self.y.lerp((self.bottom() - py) / self.plot_height().max(1.0))
    }
}
