//! Access to the aggregated-metrics endpoints of the analytics service.

use async_trait::async_trait;

use crate::domain::route::RouteSummary;
use crate::domain::safety::SafetySummary;
use crate::domain::trip::TripMetrics;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use self::errors::{ClientError, ClientResult};
pub use self::http::HttpMetricsClient;

/// Query parameters for the trip-details endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDetailsQuery {
    pub page: usize,
    pub per_page: usize,
}

impl TripDetailsQuery {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }
}

/// Read access to the aggregated metrics endpoints.
#[async_trait]
pub trait MetricsApi {
    /// Fetches the aggregated safety figures.
    async fn safety_metrics(&self) -> ClientResult<SafetySummary>;
    /// Fetches one page of the trip-details result set, returning the total
    /// row count alongside the page.
    async fn trip_details(&self, query: TripDetailsQuery)
    -> ClientResult<(usize, Vec<TripMetrics>)>;
    /// Fetches the route popularity aggregates.
    async fn popular_routes(&self) -> ClientResult<RouteSummary>;
}
