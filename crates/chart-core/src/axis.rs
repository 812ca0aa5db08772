// File: crates/chart-core/src/axis.rs
// Summary: Axis ranges, user Y overrides and their resolution against data bounds.

use tracing::warn;

use crate::sanitize::parse_decimal;

/// Closed value range of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// May overflow to infinity for ranges wider than `f64::MAX`; see `half_span`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Half the span, finite for any finite bounds.
    pub fn half_span(&self) -> f64 {
        self.max / 2.0 - self.min / 2.0
    }

    /// Position of `v` in the range: 0 at `min`, 1 at `max`.
    pub fn fraction(&self, v: f64) -> f64 {
        (v / 2.0 - self.min / 2.0) / self.half_span()
    }

    /// Inverse of `fraction`.
    pub fn lerp(&self, t: f64) -> f64 {
        let span = self.span();
        if span.is_finite() {
            self.min + t * span
        } else {
            let h = self.half_span() * t;
            self.min + h + h
        }
    }

    /// Widen a zero-width range on each side by one unit, or by a few ulps when
    /// the values are too large for one unit to register.
    pub fn expand_degenerate(mut self) -> Self {
        if self.min == self.max {
            let pad = (self.min.abs() * f64::EPSILON * 4.0).max(1.0);
            self.min = (self.min - pad).max(f64::MIN);
            self.max = (self.max + pad).min(f64::MAX);
        }
        self
    }
}

/// User-typed Y bounds; each side independently optional.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisOverrides {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisOverrides {
    pub const fn none() -> Self {
        Self { min: None, max: None }
    }

    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Build from raw input text; blank or non-numeric text means "no override".
    pub fn from_inputs(min_text: &str, max_text: &str) -> Self {
        Self { min: parse_axis_input(min_text), max: parse_axis_input(max_text) }
    }

    /// Both sides set with `min >= max`.
    pub fn is_conflicting(&self) -> bool {
        matches!((self.min, self.max), (Some(lo), Some(hi)) if lo >= hi)
    }
}

pub fn parse_axis_input(text: &str) -> Option<f64> {
    parse_decimal(text)
}

/// Final Y range plus which bounds came from the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedYAxis {
    pub range: AxisRange,
    pub min_overridden: bool,
    pub max_overridden: bool,
    /// Overrides were present but conflicting and got discarded.
    pub invalid_override: bool,
}

/// Apply overrides to the data range, pull unset bounds to zero when bars are
/// present, then guard against a zero-width range.
pub fn resolve_y_axis(data: AxisRange, overrides: AxisOverrides, include_zero: bool) -> ResolvedYAxis {
    let invalid_override = overrides.is_conflicting();
    let applied = if invalid_override {
        warn!(min = ?overrides.min, max = ?overrides.max, "invalid Y range, using auto bounds");
        AxisOverrides::none()
    } else {
        overrides
    };

    let mut range = AxisRange::new(applied.min.unwrap_or(data.min), applied.max.unwrap_or(data.max));
    if include_zero {
        if applied.min.is_none() {
            range.min = range.min.min(0.0);
        }
        if applied.max.is_none() {
            range.max = range.max.max(0.0);
        }
    }

    ResolvedYAxis {
        range: range.expand_degenerate(),
        min_overridden: applied.min.is_some(),
        max_overridden: applied.max.is_some(),
        invalid_override,
    }
}
