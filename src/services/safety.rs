use crate::client::MetricsApi;
use crate::domain::safety::SafetySummary;
use crate::dto::charts::{ChartSpec, Stat};
use crate::dto::safety::SafetyViewData;
use crate::services::ServiceResult;

/// Loads and shapes the data behind the safety view.
pub async fn load_safety_view<A>(api: &A) -> ServiceResult<SafetyViewData>
where
    A: MetricsApi + ?Sized,
{
    let summary = api.safety_metrics().await?;

    Ok(SafetyViewData {
        stats: summary_stats(&summary),
        events: events_chart(&summary),
        speeds: speed_chart(&summary),
    })
}

fn summary_stats(summary: &SafetySummary) -> Vec<Stat> {
    vec![
        Stat::new("Total trips", summary.total_trips),
        Stat::new("Average speed", format!("{:.2} km/h", summary.avg_speed)),
        Stat::new(
            "High-speed points",
            format!("{:.2} %", summary.high_speed_points),
        ),
        Stat::new("Unusual routes", summary.unusual_routes),
        Stat::new("Sharp declines", summary.sharp_declines),
    ]
}

fn events_chart(summary: &SafetySummary) -> ChartSpec {
    ChartSpec::new(
        "Safety events",
        vec![
            "Unusual routes".to_string(),
            "Sharp declines".to_string(),
            "Sharp turns".to_string(),
        ],
        vec![
            summary.unusual_routes as f64,
            summary.sharp_declines as f64,
            summary.sharp_turns as f64,
        ],
    )
}

fn speed_chart(summary: &SafetySummary) -> ChartSpec {
    let histogram = &summary.speed_distribution;

    ChartSpec::new(
        "Speed distribution",
        histogram.bucket_labels("km/h"),
        histogram.bucket_counts().iter().map(|&c| c as f64).collect(),
    )
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::client::{ClientError, ClientResult, TripDetailsQuery};
    use crate::domain::histogram::Histogram;
    use crate::domain::route::RouteSummary;
    use crate::domain::trip::TripMetrics;

    struct StubApi {
        summary: Option<SafetySummary>,
    }

    #[async_trait]
    impl MetricsApi for StubApi {
        async fn safety_metrics(&self) -> ClientResult<SafetySummary> {
            self.summary
                .clone()
                .ok_or(ClientError::Status(reqwest::StatusCode::BAD_GATEWAY))
        }

        async fn trip_details(
            &self,
            _query: TripDetailsQuery,
        ) -> ClientResult<(usize, Vec<TripMetrics>)> {
            unimplemented!("not used by the safety view")
        }

        async fn popular_routes(&self) -> ClientResult<RouteSummary> {
            unimplemented!("not used by the safety view")
        }
    }

    fn sample_summary() -> SafetySummary {
        SafetySummary {
            total_trips: 120,
            avg_speed: 37.456,
            high_speed_points: 4.2,
            unusual_routes: 3,
            sharp_declines: 5,
            sharp_turns: 9,
            speed_distribution: Histogram::new(vec![0.0, 20.0, 40.0], vec![11, 7]),
        }
    }

    #[tokio::test]
    async fn shapes_stats_and_charts() {
        let api = StubApi {
            summary: Some(sample_summary()),
        };

        let data = load_safety_view(&api).await.unwrap();

        assert_eq!(data.stats[0].value, "120");
        assert_eq!(data.stats[1].value, "37.46 km/h");
        assert_eq!(data.events.values, vec![3.0, 5.0, 9.0]);
        assert_eq!(data.speeds.labels, vec!["0-20 km/h", "20-40 km/h"]);
        assert_eq!(data.speeds.values, vec![11.0, 7.0]);
    }

    #[tokio::test]
    async fn client_errors_propagate() {
        let api = StubApi { summary: None };

        let result = load_safety_view(&api).await;

        assert!(matches!(result, Err(crate::services::ServiceError::Client(_))));
    }
}
