// File: crates/chart-core/src/view.rs
// Data bounds over a series list: numeric X extent and full Y extent.

use crate::axis::AxisRange;
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    /// Bounds over every point. Categorical points do not count toward X;
    /// with no numeric X at all the X domain is `[0, 1]`.
    /// Returns `None` when there are no points.
    pub fn from_series(series: &[Series]) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut any = false;
        for s in series {
            for p in &s.points {
                any = true;
                y_min = y_min.min(p.y);
                y_max = y_max.max(p.y);
                if let Some(x) = p.x_number() {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                }
            }
        }
        if !any {
            return None;
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
        }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    pub fn x_range(&self) -> AxisRange {
        AxisRange::new(self.x_min, self.x_max)
    }

    pub fn y_range(&self) -> AxisRange {
        AxisRange::new(self.y_min, self.y_max)
    }
}
