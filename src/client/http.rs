//! `reqwest`-backed implementation of [`MetricsApi`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::errors::{ClientError, ClientResult};
use crate::client::{MetricsApi, TripDetailsQuery};
use crate::domain::route::RouteSummary;
use crate::domain::safety::SafetySummary;
use crate::domain::trip::TripMetrics;
use crate::domain::types::BaseUrl;
use crate::dto::routes::PopularRoutesDto;
use crate::dto::safety::SafetyMetricsDto;
use crate::dto::trips::TripDetailsDto;

/// Metrics client talking to the analytics service over HTTP.
///
/// No request timeout is configured; a request runs until the server
/// answers or the connection drops.
#[derive(Clone)]
pub struct HttpMetricsClient {
    http: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpMetricsClient {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.base_url.endpoint(path);
        log::debug!("GET {url}");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MetricsApi for HttpMetricsClient {
    async fn safety_metrics(&self) -> ClientResult<SafetySummary> {
        let dto: SafetyMetricsDto = self.get_json("/api/safety-metrics", &[]).await?;
        Ok(dto.into())
    }

    async fn trip_details(
        &self,
        query: TripDetailsQuery,
    ) -> ClientResult<(usize, Vec<TripMetrics>)> {
        let dto: TripDetailsDto = self
            .get_json(
                "/api/trip-details",
                &[
                    ("page", query.page.to_string()),
                    ("per_page", query.per_page.to_string()),
                ],
            )
            .await?;

        let trips = dto
            .trips
            .into_iter()
            .map(TripMetrics::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((dto.total as usize, trips))
    }

    async fn popular_routes(&self) -> ClientResult<RouteSummary> {
        let dto: PopularRoutesDto = self.get_json("/api/popular-routes", &[]).await?;
        Ok(dto.into())
    }
}
