use std::fmt::Display;

use crate::client::MetricsApi;
use crate::domain::route::RouteSummary;
use crate::dto::charts::{ChartSpec, Stat};
use crate::dto::routes::RoutesViewData;
use crate::services::ServiceResult;

/// Loads and shapes the data behind the popular-routes view.
pub async fn load_routes_view<A>(api: &A) -> ServiceResult<RoutesViewData>
where
    A: MetricsApi + ?Sized,
{
    let summary = api.popular_routes().await?;

    Ok(RoutesViewData {
        stats: summary_stats(&summary),
        starts: starts_chart(&summary),
        lengths: length_chart(&summary),
    })
}

fn summary_stats(summary: &RouteSummary) -> Vec<Stat> {
    vec![
        Stat::new("Popular start areas", join_counted(&summary.popular_starts)),
        Stat::new("Popular end areas", join_counted(&summary.popular_ends)),
        Stat::new("Popular routes", join_counted(&summary.popular_pairs)),
        Stat::new("Total routes", summary.total_routes),
    ]
}

fn join_counted<T: Display>(entries: &[(T, u64)]) -> String {
    entries
        .iter()
        .map(|(entry, count)| format!("{entry} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn starts_chart(summary: &RouteSummary) -> ChartSpec {
    ChartSpec::new(
        "Popular start locations",
        summary
            .popular_starts
            .iter()
            .map(|(point, _)| point.to_string())
            .collect(),
        summary
            .popular_starts
            .iter()
            .map(|(_, count)| *count as f64)
            .collect(),
    )
}

fn length_chart(summary: &RouteSummary) -> ChartSpec {
    let histogram = &summary.length_histogram;

    ChartSpec::new(
        "Trip length distribution",
        histogram.bucket_labels("km"),
        histogram.bucket_counts().iter().map(|&c| c as f64).collect(),
    )
}
