// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers and axis label formatting.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    if step.is_finite() {
        return (0..steps).map(|i| start + step * i as f64).collect();
    }
    // end - start overflowed; step in halves
    let half = (end / 2.0 - start / 2.0) / (steps as f64 - 1.0);
    (0..steps)
        .map(|i| {
            let h = half * i as f64;
            start + h + h
        })
        .collect()
}

/// One tick: data value, screen position along its axis, and label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f64,
    pub label: String,
}

/// Integers print unadorned, everything else with two decimals.
pub fn format_axis_label(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        // normalize -0
        let v = if value == 0.0 { 0.0 } else { value };
        format!("{v}")
    } else {
        format!("{value:.2}")
    }
}

/// `intervals + 1` evenly spaced ticks over `[min, max]`, mapped through `to_px`.
pub fn numeric_ticks(min: f64, max: f64, intervals: usize, to_px: impl Fn(f64) -> f64) -> Vec<Tick> {
    linspace(min, max, intervals.max(1) + 1)
        .into_iter()
        .map(|value| Tick { value, px: to_px(value), label: format_axis_label(value) })
        .collect()
}

/// Stride that keeps at most `max_labels` of `count` labels.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    count.div_ceil(max_labels.max(1)).max(1)
}
