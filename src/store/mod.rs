//! Read-only access to the climate database.
//!
//! The [`ClimateStore`] trait is the seam between the query service and the
//! backing relational store. [`SqliteStore`] is the production implementation;
//! tests can substitute their own.

mod sqlite;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::climate::{
    DatasetSummary, DateRange, PrecipitationReading, StationActivity, TemperatureReading,
    TemperatureStats,
};
use crate::error::StoreError;

pub use sqlite::{SqliteStore, DEFAULT_MAX_CONNECTIONS};

/// Queries the service issues against the measurement and station tables.
///
/// Every method is a single read. Implementations must not hold a connection
/// past the end of the call.
#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// All `(date, prcp)` rows with `date >= since`, in store order.
    async fn precipitation_since(
        &self,
        since: NaiveDate,
    ) -> Result<Vec<PrecipitationReading>, StoreError>;

    /// Every station identifier, in store order, duplicates included.
    async fn station_ids(&self) -> Result<Vec<String>, StoreError>;

    /// `(date, tobs)` rows for one station with `date >= since`, in store order.
    async fn temperature_observations_since(
        &self,
        station: &str,
        since: NaiveDate,
    ) -> Result<Vec<TemperatureReading>, StoreError>;

    /// Min, max and mean `tobs` over the rows inside `range`.
    async fn temperature_stats(&self, range: DateRange) -> Result<TemperatureStats, StoreError>;

    /// Row counts and the span of observation dates.
    async fn dataset_summary(&self) -> Result<DatasetSummary, StoreError>;

    /// Station with the most measurements, `None` for an empty table.
    async fn most_active_station(&self) -> Result<Option<StationActivity>, StoreError>;
}
