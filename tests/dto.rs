use serde_json::json;
use tripsight::domain::route::RouteSummary;
use tripsight::domain::safety::SafetySummary;
use tripsight::domain::trip::TripMetrics;
use tripsight::dto::routes::PopularRoutesDto;
use tripsight::dto::safety::SafetyMetricsDto;
use tripsight::dto::trips::{TripDetailsDto, TripDto};

#[test]
fn parses_the_safety_metrics_body() {
    let body = json!({
        "total_trips": 214,
        "avg_speed": 36.7,
        "max_speed": 128.4,
        "high_speed_points": 2.1,
        "unusual_routes": 17,
        "sharp_declines": 40,
        "sharp_turns": 65,
        "speed_distribution": {
            "bins": [0, 20, 40, 60, 80, 100, 120],
            "counts": [5, 10, 30, 40, 8, 2]
        }
    });

    let dto: SafetyMetricsDto = serde_json::from_value(body).unwrap();
    let summary: SafetySummary = dto.into();

    assert_eq!(summary.total_trips, 214);
    assert_eq!(summary.sharp_turns, 65);
    assert_eq!(
        summary.speed_distribution.bucket_labels("km/h")[0],
        "0-20 km/h"
    );
    assert_eq!(summary.speed_distribution.bucket_counts().len(), 6);
}

#[test]
fn parses_the_trip_details_body() {
    let body = json!({
        "trips": [{
            "trip_id": "8401",
            "avg_speed": 34.2,
            "max_speed": 71.9,
            "avg_azimuth_change": 12.4,
            "sharp_turns": 3,
            "distance": 8.25
        }],
        "total": 95,
        "page": 1,
        "per_page": 10
    });

    let dto: TripDetailsDto = serde_json::from_value(body).unwrap();
    assert_eq!(dto.total, 95);

    let trip = TripMetrics::try_from(dto.trips.into_iter().next().unwrap()).unwrap();
    assert_eq!(trip.trip_id.as_str(), "8401");
    assert_eq!(trip.sharp_turns, 3);
}

#[test]
fn blank_trip_ids_are_rejected() {
    let dto = TripDto {
        trip_id: "   ".to_string(),
        avg_speed: 30.0,
        max_speed: 50.0,
        avg_azimuth_change: 9.0,
        sharp_turns: 0,
        distance: 1.0,
    };

    assert!(TripMetrics::try_from(dto).is_err());
}

#[test]
fn parses_the_popular_routes_body() {
    let body = json!({
        "popular_starts": [[[49.8023, 73.0876], 12], [[49.81, 73.11], 7]],
        "popular_ends": [[[49.9, 73.2], 4]],
        "popular_pairs": [[[[49.8023, 73.0876], [49.9, 73.2]], 3]],
        "total_routes": 26,
        "length_histogram": {
            "bins": [0, 1, 2, 5, 10, 20],
            "counts": [9, 8, 4, 3, 2]
        }
    });

    let dto: PopularRoutesDto = serde_json::from_value(body).unwrap();
    let summary: RouteSummary = dto.into();

    assert_eq!(summary.popular_starts.len(), 2);
    assert_eq!(summary.popular_starts[0].1, 12);
    assert_eq!(summary.popular_starts[0].0.to_string(), "(49.8023, 73.0876)");
    assert_eq!(
        summary.popular_pairs[0].0.to_string(),
        "(49.8023, 73.0876) -> (49.9000, 73.2000)"
    );
    assert_eq!(summary.total_routes, 26);
    assert_eq!(summary.length_histogram.bucket_labels("km")[1], "1-2 km");
}
