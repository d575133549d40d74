//! SQLite-backed implementation of `ClimateStore`.

use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use tracing::debug;

use crate::climate::{
    DatasetSummary, DateRange, PrecipitationReading, StationActivity, TemperatureReading,
    TemperatureStats,
};
use crate::error::StoreError;

use super::ClimateStore;

/// Default size of the read connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Read-only store over the Hawaii climate SQLite file.
///
/// Every query borrows a connection from the pool for its own duration; the
/// connection goes back to the pool when the query future completes or is
/// dropped.
///
/// # Example
///
/// ```ignore
/// use surfs_up::store::{ClimateStore, SqliteStore};
///
/// let store = SqliteStore::connect("Resources/hawaii.sqlite", 5).await?;
/// let stations = store.station_ids().await?;
/// ```
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database at `path` read-only.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if the file does not exist,
    /// `StoreError::Connection` if SQLite refuses to open it.
    pub async fn connect(path: impl AsRef<Path>, max_connections: u32) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Connection(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), max_connections, "Opened climate database");

        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ClimateStore for SqliteStore {
    async fn precipitation_since(
        &self,
        since: NaiveDate,
    ) -> Result<Vec<PrecipitationReading>, StoreError> {
        let rows = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, CAST(prcp AS REAL) AS prcp FROM measurement WHERE date >= ?",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        debug!(%since, rows = rows.len(), "Fetched precipitation");
        Ok(rows)
    }

    async fn station_ids(&self) -> Result<Vec<String>, StoreError> {
        let stations = sqlx::query_scalar::<_, String>("SELECT station FROM station")
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = stations.len(), "Fetched stations");
        Ok(stations)
    }

    async fn temperature_observations_since(
        &self,
        station: &str,
        since: NaiveDate,
    ) -> Result<Vec<TemperatureReading>, StoreError> {
        let rows = sqlx::query_as::<_, TemperatureReading>(
            "SELECT date, CAST(tobs AS REAL) AS tobs FROM measurement \
             WHERE station = ? AND date >= ?",
        )
        .bind(station)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        debug!(station, %since, rows = rows.len(), "Fetched temperature observations");
        Ok(rows)
    }

    async fn temperature_stats(&self, range: DateRange) -> Result<TemperatureStats, StoreError> {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT CAST(MIN(tobs) AS REAL) AS min, \
             CAST(MAX(tobs) AS REAL) AS max, \
             CAST(AVG(tobs) AS REAL) AS avg \
             FROM measurement WHERE date >= ",
        );
        query.push_bind(range.start);
        if let Some(end) = range.end {
            query.push(" AND date <= ").push_bind(end);
        }

        let stats = query
            .build_query_as::<TemperatureStats>()
            .fetch_one(&self.pool)
            .await?;

        debug!(start = %range.start, end = ?range.end, ?stats, "Computed temperature stats");
        Ok(stats)
    }

    async fn dataset_summary(&self) -> Result<DatasetSummary, StoreError> {
        let summary = sqlx::query_as::<_, DatasetSummary>(
            "SELECT (SELECT COUNT(*) FROM measurement) AS measurements, \
             (SELECT COUNT(*) FROM station) AS stations, \
             (SELECT MIN(date) FROM measurement) AS first_date, \
             (SELECT MAX(date) FROM measurement) AS last_date",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(summary)
    }

    async fn most_active_station(&self) -> Result<Option<StationActivity>, StoreError> {
        let activity = sqlx::query_as::<_, StationActivity>(
            "SELECT station, COUNT(*) AS observations FROM measurement \
             GROUP BY station ORDER BY observations DESC, station ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(activity)
    }
}
