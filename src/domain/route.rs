use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::domain::histogram::Histogram;

/// Rounded start or end coordinate of an observed trip.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
}

impl Display for RoutePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

/// Start and end coordinates of an observed route.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct RouteLeg {
    pub start: RoutePoint,
    pub end: RoutePoint,
}

impl Display for RouteLeg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Route popularity aggregates, each list ordered most frequent first.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RouteSummary {
    pub popular_starts: Vec<(RoutePoint, u64)>,
    pub popular_ends: Vec<(RoutePoint, u64)>,
    pub popular_pairs: Vec<(RouteLeg, u64)>,
    pub total_routes: u64,
    pub length_histogram: Histogram,
}
