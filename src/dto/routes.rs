//! Wire and view data for the popular-routes overview.

use serde::Deserialize;

use crate::domain::route::{RouteLeg, RoutePoint, RouteSummary};
use crate::dto::charts::{ChartSpec, Stat};
use crate::dto::safety::HistogramDto;

/// Lat/lng pair as serialized by the analytics service.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PointDto(pub f64, pub f64);

impl From<PointDto> for RoutePoint {
    fn from(PointDto(lat, lng): PointDto) -> Self {
        Self { lat, lng }
    }
}

/// Wire shape of the `GET /api/popular-routes` body.
#[derive(Debug, Deserialize)]
pub struct PopularRoutesDto {
    pub popular_starts: Vec<(PointDto, u64)>,
    pub popular_ends: Vec<(PointDto, u64)>,
    pub popular_pairs: Vec<((PointDto, PointDto), u64)>,
    pub total_routes: u64,
    pub length_histogram: HistogramDto,
}

impl From<PopularRoutesDto> for RouteSummary {
    fn from(dto: PopularRoutesDto) -> Self {
        Self {
            popular_starts: counted_points(dto.popular_starts),
            popular_ends: counted_points(dto.popular_ends),
            popular_pairs: dto
                .popular_pairs
                .into_iter()
                .map(|((start, end), count)| {
                    (
                        RouteLeg {
                            start: start.into(),
                            end: end.into(),
                        },
                        count,
                    )
                })
                .collect(),
            total_routes: dto.total_routes,
            length_histogram: dto.length_histogram.into(),
        }
    }
}

fn counted_points(points: Vec<(PointDto, u64)>) -> Vec<(RoutePoint, u64)> {
    points
        .into_iter()
        .map(|(point, count)| (point.into(), count))
        .collect()
}

/// Data required to render the popular-routes view.
pub struct RoutesViewData {
    /// Headline figures shown above the charts.
    pub stats: Vec<Stat>,
    /// Popular start locations bar chart.
    pub starts: ChartSpec,
    /// Trip length distribution bar chart.
    pub lengths: ChartSpec,
}
