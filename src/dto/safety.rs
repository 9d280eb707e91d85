//! Wire and view data for the safety overview.

use serde::Deserialize;

use crate::domain::histogram::Histogram;
use crate::domain::safety::SafetySummary;
use crate::dto::charts::{ChartSpec, Stat};

/// Wire shape of a histogram payload.
#[derive(Debug, Deserialize)]
pub struct HistogramDto {
    pub bins: Vec<f64>,
    pub counts: Vec<u64>,
}

impl From<HistogramDto> for Histogram {
    fn from(dto: HistogramDto) -> Self {
        Histogram::new(dto.bins, dto.counts)
    }
}

/// Wire shape of the `GET /api/safety-metrics` body.
#[derive(Debug, Deserialize)]
pub struct SafetyMetricsDto {
    pub total_trips: u64,
    pub avg_speed: f64,
    pub high_speed_points: f64,
    pub unusual_routes: u64,
    pub sharp_declines: u64,
    pub sharp_turns: u64,
    pub speed_distribution: HistogramDto,
}

impl From<SafetyMetricsDto> for SafetySummary {
    fn from(dto: SafetyMetricsDto) -> Self {
        Self {
            total_trips: dto.total_trips,
            avg_speed: dto.avg_speed,
            high_speed_points: dto.high_speed_points,
            unusual_routes: dto.unusual_routes,
            sharp_declines: dto.sharp_declines,
            sharp_turns: dto.sharp_turns,
            speed_distribution: dto.speed_distribution.into(),
        }
    }
}

/// Data required to render the safety view.
pub struct SafetyViewData {
    /// Headline figures shown above the charts.
    pub stats: Vec<Stat>,
    /// Safety events bar chart (unusual routes, sharp declines, sharp turns).
    pub events: ChartSpec,
    /// Speed distribution bar chart.
    pub speeds: ChartSpec,
}
