use std::sync::Mutex;

use async_trait::async_trait;
use tripsight::client::{ClientError, ClientResult, MetricsApi, TripDetailsQuery};
use tripsight::domain::route::RouteSummary;
use tripsight::domain::safety::SafetySummary;
use tripsight::domain::trip::TripMetrics;
use tripsight::domain::types::TripId;

/// Stub metrics client serving a canned trip list one page at a time and
/// recording every query it answers.
pub struct StubApi {
    total: usize,
    pub requests: Mutex<Vec<TripDetailsQuery>>,
}

impl StubApi {
    pub fn with_total(total: usize) -> Self {
        Self {
            total,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MetricsApi for StubApi {
    async fn safety_metrics(&self) -> ClientResult<SafetySummary> {
        Err(ClientError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }

    async fn trip_details(
        &self,
        query: TripDetailsQuery,
    ) -> ClientResult<(usize, Vec<TripMetrics>)> {
        self.requests.lock().unwrap().push(query);

        let start = (query.page - 1) * query.per_page;
        let rows = (start..self.total.min(start + query.per_page))
            .map(|n| TripMetrics {
                trip_id: TripId::new(format!("trip-{n}")).unwrap(),
                avg_speed: 32.0,
                max_speed: 58.5,
                avg_azimuth_change: 10.0,
                sharp_turns: 2,
                distance: 5.6,
            })
            .collect();

        Ok((self.total, rows))
    }

    async fn popular_routes(&self) -> ClientResult<RouteSummary> {
        Err(ClientError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }
}
