use serde::Serialize;

use crate::domain::types::TripId;

/// Per-trip metrics shown as one row of the trip-details table.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TripMetrics {
    pub trip_id: TripId,
    pub avg_speed: f64,
    pub max_speed: f64,
    pub avg_azimuth_change: f64,
    pub sharp_turns: u64,
    /// Approximate trip length, km.
    pub distance: f64,
}
