//! Temperature statistics route tests.
//!
//! Tests verify:
//! - `[min, max, avg]` for open-ended and bounded ranges
//! - Inclusive bounds and empty selections
//! - 400 responses naming the malformed start or end value

use axum::http::StatusCode;

use super::test_utils::{get_json, get_stats, router_for, seeded_database};

// =============================================================================
// Open-ended Range
// =============================================================================

#[tokio::test]
async fn test_stats_from_start() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let [min, max, avg] = get_stats(&router, "/api/v1.0/01012017").await;
    assert_eq!(min, Some(62.0));
    assert_eq!(max, Some(81.0));
    assert_eq!(avg, Some(73.0));
}

#[tokio::test]
async fn test_stats_min_avg_max_ordering() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    for start in ["01012010", "08222016", "08232016", "01012017", "08232017"] {
        let stats = get_stats(&router, &format!("/api/v1.0/{start}")).await;
        let [min, max, avg] = stats.map(|v| v.expect("non-empty selection"));
        assert!(min <= avg && avg <= max, "{start}: {stats:?}");
    }
}

#[tokio::test]
async fn test_stats_after_last_measurement_are_null() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let stats = get_stats(&router, "/api/v1.0/01012020").await;
    assert_eq!(stats, [None, None, None]);
}

// =============================================================================
// Bounded Range
// =============================================================================

#[tokio::test]
async fn test_stats_between_dates_inclusive() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let [min, max, avg] = get_stats(&router, "/api/v1.0/08232016/08242016").await;
    assert_eq!(min, Some(76.0));
    assert_eq!(max, Some(81.0));
    assert_eq!(avg, Some(77.75));
}

#[tokio::test]
async fn test_stats_single_day() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let [min, max, avg] = get_stats(&router, "/api/v1.0/01012010/01012010").await;
    assert_eq!(min, Some(65.0));
    assert_eq!(max, Some(68.0));
    assert_eq!(avg, Some(66.5));
}

#[tokio::test]
async fn test_stats_start_after_end_are_null() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let stats = get_stats(&router, "/api/v1.0/08232017/08232016").await;
    assert_eq!(stats, [None, None, None]);
}

#[tokio::test]
async fn test_stats_null_body_shape() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let (status, json) = get_json(&router, "/api/v1.0/02022017/01022017").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([null, null, null]));
}

// =============================================================================
// Malformed Dates
// =============================================================================

#[tokio::test]
async fn test_malformed_start() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let (status, json) = get_json(&router, "/api/v1.0/13452020").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        serde_json::json!({ "error": "Invalid start date format: 13452020. Use mmddyyyy." })
    );
}

#[tokio::test]
async fn test_malformed_start_with_end() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let (status, json) = get_json(&router, "/api/v1.0/2017-01-01/01312017").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("start"));
    assert!(message.contains("2017-01-01"));
}

#[tokio::test]
async fn test_malformed_end() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let (status, json) = get_json(&router, "/api/v1.0/01012017/02302017").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Invalid end date format: 02302017. Use mmddyyyy."
    );
}

#[tokio::test]
async fn test_both_malformed_reports_start() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let (status, json) = get_json(&router, "/api/v1.0/abc/xyz").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("start"));
    assert!(message.contains("abc"));
    assert!(!message.contains("xyz"));
}

#[tokio::test]
async fn test_short_date_rejected() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let (status, _) = get_json(&router, "/api/v1.0/1012017").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_utf8_start_is_json_error() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let (status, json) = get_json(&router, "/api/v1.0/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid start date format:"), "{message}");
    assert!(message.ends_with("Use mmddyyyy."));
}

#[tokio::test]
async fn test_invalid_utf8_end_is_json_error() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let (status, json) = get_json(&router, "/api/v1.0/01012017/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid end date format:"), "{message}");
    assert!(!message.contains("01012017"));
}

#[tokio::test]
async fn test_invalid_utf8_both_reports_start() {
    let db = seeded_database().await;
    let router = router_for(db.store);

    let (status, json) = get_json(&router, "/api/v1.0/%FF/%FE").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid start date format:"), "{message}");
}
