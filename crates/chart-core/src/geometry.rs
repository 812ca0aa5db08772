// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and bar layout.

/// Axis-aligned rectangle in screen pixels; `width`/`height` are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn bottom(&self) -> f64 { self.y + self.height }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Width of one bar when `series_count` bars share a band of `band_width` pixels. Never negative.
pub fn bar_width(band_width: f64, series_count: usize, fill_ratio: f64, max_width: f64) -> f64 {
    (band_width * fill_ratio / series_count.max(1) as f64).min(max_width).max(0.0)
}

/// Offset of bar `series_index` from the band center so the group stays centered.
pub fn bar_offset(series_index: usize, series_count: usize, bar_width: f64) -> f64 {
    (series_index as f64 - (series_count as f64 - 1.0) / 2.0) * bar_width
}

/// Rectangle from the baseline to `value_y`, centered on `center_x`.
/// Works for values on either side of the baseline.
pub fn bar_rect(center_x: f64, value_y: f64, baseline_y: f64, width: f64) -> Rect {
    let h = baseline_y - value_y;
    let top = if h >= 0.0 { value_y } else { baseline_y };
    Rect::from_xywh(center_x - width / 2.0, top, width, h.abs())
}

/// Smallest positive gap between consecutive sorted values.
pub fn min_positive_gap(sorted: &[f64]) -> Option<f64> {
    sorted
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > 0.0 && d.is_finite())
        .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.min(d))))
}
