//! Mock metrics client for isolating the view layer in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::client::errors::ClientResult;
use crate::client::{MetricsApi, TripDetailsQuery};
use crate::domain::route::RouteSummary;
use crate::domain::safety::SafetySummary;
use crate::domain::trip::TripMetrics;

mock! {
    pub MetricsClient {}

    #[async_trait]
    impl MetricsApi for MetricsClient {
        async fn safety_metrics(&self) -> ClientResult<SafetySummary>;
        async fn trip_details(
            &self,
            query: TripDetailsQuery,
        ) -> ClientResult<(usize, Vec<TripMetrics>)>;
        async fn popular_routes(&self) -> ClientResult<RouteSummary>;
    }
}
