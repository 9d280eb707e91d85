use serde::Serialize;

use crate::domain::histogram::Histogram;

/// Aggregated safety figures for the whole data set.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SafetySummary {
    pub total_trips: u64,
    /// Average speed across all track points, km/h.
    pub avg_speed: f64,
    /// Share of track points above the high-speed threshold, percent.
    pub high_speed_points: f64,
    pub unusual_routes: u64,
    pub sharp_declines: u64,
    pub sharp_turns: u64,
    pub speed_distribution: Histogram,
}
