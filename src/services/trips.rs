use crate::client::{MetricsApi, TripDetailsQuery};
use crate::dto::trips::TripTableData;
use crate::pagination::{self, Paginated};
use crate::services::ServiceResult;

/// Loads one page of the trip-details table together with its pagination
/// controls.
pub async fn load_trip_page<A>(api: &A, query: TripDetailsQuery) -> ServiceResult<TripTableData>
where
    A: MetricsApi + ?Sized,
{
    let page = if query.page == 0 { 1 } else { query.page };

    let (total, trips) = api
        .trip_details(TripDetailsQuery::new(page, query.per_page))
        .await?;

    let total_pages = pagination::total_pages(total, query.per_page);
    let trips = Paginated::new(trips, page, total_pages);

    Ok(TripTableData { total, trips })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::client::ClientResult;
    use crate::domain::route::RouteSummary;
    use crate::domain::safety::SafetySummary;
    use crate::domain::trip::TripMetrics;
    use crate::domain::types::TripId;
    use crate::pagination::PageControl;

    struct StubApi {
        total: usize,
        requests: Mutex<Vec<TripDetailsQuery>>,
    }

    impl StubApi {
        fn with_total(total: usize) -> Self {
            Self {
                total,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MetricsApi for StubApi {
        async fn safety_metrics(&self) -> ClientResult<SafetySummary> {
            unimplemented!("not used by the trip table")
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
                    avg_speed: 30.0,
                    max_speed: 60.0,
                    avg_azimuth_change: 12.5,
                    sharp_turns: 1,
                    distance: 4.2,
                })
                .collect();

            Ok((self.total, rows))
        }

        async fn popular_routes(&self) -> ClientResult<RouteSummary> {
            unimplemented!("not used by the trip table")
        }
    }

    #[tokio::test]
    async fn builds_the_page_envelope() {
        let api = StubApi::with_total(95);

        let data = load_trip_page(&api, TripDetailsQuery::new(2, 10))
            .await
            .unwrap();

        assert_eq!(data.total, 95);
        assert_eq!(data.trips.page, 2);
        assert_eq!(data.trips.items.len(), 10);
        // 95 rows make 10 pages, one more than the 9 visible buttons, so
        // the set ends with an ellipsis and a last-page button.
        assert_eq!(data.trips.controls.len(), 11);
        assert_eq!(data.trips.controls[9], PageControl::Ellipsis);

        let requests = api.requests.lock().unwrap();
        assert_eq!(requests.as_slice(), &[TripDetailsQuery::new(2, 10)]);
    }

    #[tokio::test]
    async fn zero_page_is_clamped_to_first() {
        let api = StubApi::with_total(23);

        let data = load_trip_page(&api, TripDetailsQuery::new(0, 10))
            .await
            .unwrap();

        assert_eq!(data.trips.page, 1);
        assert_eq!(
            api.requests.lock().unwrap().as_slice(),
            &[TripDetailsQuery::new(1, 10)]
        );
    }

    #[tokio::test]
    async fn small_result_sets_render_one_button_per_page() {
        let api = StubApi::with_total(23);

        let data = load_trip_page(&api, TripDetailsQuery::new(1, 10))
            .await
            .unwrap();

        let numbers: Vec<_> = data.trips.controls.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);
    }
}
