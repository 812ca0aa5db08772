// File: crates/chart-core/src/category.rs
// Summary: Category binning for bar series (first-seen order, unique labels).

use std::collections::{HashMap, HashSet};

use crate::series::Series;

/// Ordered unique category labels with a reverse index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Categories {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl Categories {
    /// Collect labels across `series` in first-seen order. Points without any
    /// label (no `label`, no category, no numeric x) are skipped.
    pub fn collect<'a>(series: impl IntoIterator<Item = &'a Series>) -> Self {
        let mut labels = Vec::new();
        let mut seen = HashSet::new();
        for s in series {
            for p in &s.points {
                let Some(label) = p.category_label() else { continue };
                if seen.insert(label.clone()) {
                    labels.push(label);
                }
            }
        }
        let index = labels.iter().enumerate().map(|(i, l)| (l.clone(), i)).collect();
        Self { labels, index }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// `(index, label)` pairs kept after striding down to `max_labels`.
    pub fn strided(&self, max_labels: usize) -> impl Iterator<Item = (usize, &str)> {
        let stride = crate::grid::label_stride(self.labels.len(), max_labels);
        self.labels
            .iter()
            .enumerate()
            .filter(move |(i, _)| i % stride == 0)
            .map(|(i, l)| (i, l.as_str()))
    }
}
