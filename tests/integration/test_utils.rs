//! Test utilities for integration tests.
//!
//! Builds a small Hawaii-shaped SQLite database in a temporary directory and
//! opens it through the production read-only store.

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;

use surfs_up::{create_router, ClimateService, RouterConfig, SqliteStore};

// =============================================================================
// Seed Data
// =============================================================================

const SCHEMA: &[&str] = &[
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )",
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )",
];

const STATIONS: &[&str] = &[
    "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
        ('USC00519397', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
        ('USC00513117', 'KANEOHE 838.1, HI US', 21.4234, -157.8015, 14.6),
        ('USC00519281', 'WAIHEE 837.5, HI US', 21.45167, -157.84889, 32.9)",
];

/// Measurements, in insertion (rowid) order.
///
/// Trailing year with the default parameters is 2016-08-23 through 2017-08-23.
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519281", "2010-01-01", Some(0.08), 65.0),
    ("USC00513117", "2010-01-01", Some(0.28), 68.0),
    ("USC00519397", "2016-08-22", Some(0.10), 70.0),
    ("USC00519397", "2016-08-23", Some(0.00), 81.0),
    ("USC00519281", "2016-08-23", Some(1.79), 77.0),
    ("USC00513117", "2016-08-24", None, 76.0),
    ("USC00519281", "2016-08-24", Some(2.15), 77.0),
    ("USC00519281", "2017-01-01", Some(0.00), 62.0),
    ("USC00513117", "2017-02-01", None, 70.0),
    ("USC00519281", "2017-08-18", Some(0.06), 79.0),
    ("USC00519397", "2017-08-23", Some(0.00), 81.0),
];

/// Temporary database kept alive for the duration of a test.
pub struct TestDatabase {
    _dir: TempDir,
    pub store: SqliteStore,
}

/// Create the seeded database, run `extra` statements, and open it read-only.
pub async fn seeded_database_with(extra: &[&str]) -> TestDatabase {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hawaii.sqlite");

    let mut statements: Vec<String> = SCHEMA.iter().map(|s| s.to_string()).collect();
    statements.extend(STATIONS.iter().map(|s| s.to_string()));
    statements.extend(MEASUREMENTS.iter().map(|(station, date, prcp, tobs)| {
        let prcp = prcp.map_or("NULL".to_string(), |p| p.to_string());
        format!(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES ('{}', '{}', {}, {})",
            station, date, prcp, tobs
        )
    }));
    statements.extend(extra.iter().map(|s| s.to_string()));

    write_database(&path, &statements).await;

    let store = SqliteStore::connect(&path, 2).await.unwrap();
    TestDatabase { _dir: dir, store }
}

/// Create the default seeded database.
pub async fn seeded_database() -> TestDatabase {
    seeded_database_with(&[]).await
}

/// Create a database that has none of the expected tables.
pub async fn empty_database() -> TestDatabase {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.sqlite");

    write_database(&path, &["CREATE TABLE unrelated (id INTEGER)".to_string()]).await;

    let store = SqliteStore::connect(&path, 1).await.unwrap();
    TestDatabase { _dir: dir, store }
}

async fn write_database(path: &Path, statements: &[String]) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    for statement in statements {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }

    pool.close().await;
}

// =============================================================================
// HTTP Helpers
// =============================================================================

/// Build a router over the store with the default trailing-year parameters.
pub fn router_for(store: SqliteStore) -> Router {
    create_router(
        ClimateService::new(store),
        RouterConfig::new().with_tracing(false),
    )
}

/// Issue a GET and return the status and raw body.
pub async fn get_raw(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body.to_vec())
}

/// Issue a GET and parse the body as JSON.
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get_raw(router, uri).await;
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("{uri} returned non-JSON body: {e}"));
    (status, json)
}

/// Issue a statistics request and return `[min, max, avg]`.
pub async fn get_stats(router: &Router, uri: &str) -> [Option<f64>; 3] {
    let (status, json) = get_json(router, uri).await;
    assert_eq!(status, StatusCode::OK, "{uri} failed: {json}");

    let values = json.as_array().expect("stats body should be an array");
    assert_eq!(values.len(), 3, "stats body should have three values");
    [values[0].as_f64(), values[1].as_f64(), values[2].as_f64()]
}
