//! Wire and view data for the trip-details table.

use serde::Deserialize;

use crate::domain::trip::TripMetrics;
use crate::domain::types::{TripId, TypeConstraintError};
use crate::pagination::Paginated;

/// Wire shape of one row of the `GET /api/trip-details` body.
#[derive(Debug, Deserialize)]
pub struct TripDto {
    pub trip_id: String,
    pub avg_speed: f64,
    pub max_speed: f64,
    pub avg_azimuth_change: f64,
    pub sharp_turns: u64,
    pub distance: f64,
}

/// Wire shape of the `GET /api/trip-details` body.
#[derive(Debug, Deserialize)]
pub struct TripDetailsDto {
    pub trips: Vec<TripDto>,
    pub total: u64,
}

impl TryFrom<TripDto> for TripMetrics {
    type Error = TypeConstraintError;

    fn try_from(dto: TripDto) -> Result<Self, Self::Error> {
        Ok(Self {
            trip_id: TripId::new(dto.trip_id)?,
            avg_speed: dto.avg_speed,
            max_speed: dto.max_speed,
            avg_azimuth_change: dto.avg_azimuth_change,
            sharp_turns: dto.sharp_turns,
            distance: dto.distance,
        })
    }
}

/// Data required to render the trip-details view.
pub struct TripTableData {
    /// Total number of rows in the result set.
    pub total: usize,
    /// Page of trips together with its pagination controls.
    pub trips: Paginated<TripMetrics>,
}
