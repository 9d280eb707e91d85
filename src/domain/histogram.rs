//! Histogram values as aggregated by the analytics service.

use serde::Serialize;

/// Bucketed distribution: `bins` holds the bucket edges, `counts` one entry
/// per consecutive edge pair.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct Histogram {
    pub bins: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn new(bins: Vec<f64>, counts: Vec<u64>) -> Self {
        Self { bins, counts }
    }

    /// Number of buckets that have both an edge pair and a count.
    pub fn len(&self) -> usize {
        self.counts.len().min(self.bins.len().saturating_sub(1))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One label per bucket built from its lower and upper edge, e.g.
    /// `0-20 km/h`.
    pub fn bucket_labels(&self, unit: &str) -> Vec<String> {
        self.bins
            .windows(2)
            .take(self.len())
            .map(|edges| format!("{}-{} {unit}", fmt_edge(edges[0]), fmt_edge(edges[1])))
            .collect()
    }

    /// Counts trimmed to the labeled buckets.
    pub fn bucket_counts(&self) -> &[u64] {
        &self.counts[..self.len()]
    }
}

fn fmt_edge(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
