// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, layout limits).

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;
/// Margin reserved for axis chrome on every side.
pub const PADDING: u32 = 44;
/// Intervals between numeric ticks (six tick marks).
pub const TICK_COUNT: usize = 5;
/// Upper bound on a single bar's width.
pub const MAX_BAR_WIDTH: f64 = 42.0;
/// Share of a category band covered by its bars.
pub const BAR_FILL_RATIO: f64 = 0.7;
/// Category labels drawn on the x axis before striding kicks in.
pub const MAX_CATEGORY_LABELS: usize = 12;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on all four sides.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
    /// Total horizontal inset (left + right), saturating.
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom), saturating.
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(PADDING)
    }
}
