//! Query service shaping store rows into API results.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::StoreError;
use crate::store::ClimateStore;

use super::dates::{default_reference_date, one_year_cutoff, DateRange, DEFAULT_LOOKBACK_DAYS};
use super::models::{DatasetSummary, TemperatureStats};

/// Station with the most measurements in the Hawaii dataset.
pub const DEFAULT_ACTIVE_STATION: &str = "USC00519281";

/// Answers the API queries against a [`ClimateStore`].
///
/// The service carries the fixed parameters of the trailing-year routes: the
/// reference date the window ends on, the window length, and the station
/// reported by the temperature-observation route.
pub struct ClimateService<S: ClimateStore> {
    store: S,
    reference_date: NaiveDate,
    lookback_days: u32,
    active_station: String,
}

impl<S: ClimateStore> ClimateService<S> {
    /// Create a service with the dataset defaults (2017-08-23, 365 days,
    /// `USC00519281`).
    pub fn new(store: S) -> Self {
        Self {
            store,
            reference_date: default_reference_date(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            active_station: DEFAULT_ACTIVE_STATION.to_string(),
        }
    }

    /// Set the last day of the trailing window.
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Set the trailing window length in days.
    pub fn with_lookback_days(mut self, lookback_days: u32) -> Self {
        self.lookback_days = lookback_days;
        self
    }

    /// Set the station reported by the temperature-observation route.
    pub fn with_active_station(mut self, station: impl Into<String>) -> Self {
        self.active_station = station.into();
        self
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn active_station(&self) -> &str {
        &self.active_station
    }

    /// First date included by the trailing-year routes.
    pub fn cutoff(&self) -> NaiveDate {
        one_year_cutoff(self.reference_date, self.lookback_days)
    }

    /// Precipitation per day over the trailing window.
    ///
    /// When several stations report the same day, the row yielded last by the
    /// store wins.
    pub async fn precipitation(&self) -> Result<BTreeMap<String, Option<f64>>, StoreError> {
        let rows = self.store.precipitation_since(self.cutoff()).await?;
        Ok(rows
            .into_iter()
            .map(|row| (row.date.to_string(), row.prcp))
            .collect())
    }

    /// Every station identifier in store order.
    pub async fn stations(&self) -> Result<Vec<String>, StoreError> {
        self.store.station_ids().await
    }

    /// Temperature per day for the active station over the trailing window.
    pub async fn temperature_observations(&self) -> Result<BTreeMap<String, f64>, StoreError> {
        let rows = self
            .store
            .temperature_observations_since(&self.active_station, self.cutoff())
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| (row.date.to_string(), row.tobs))
            .collect())
    }

    /// Min, max and mean temperature inside `range`.
    pub async fn temperature_stats(&self, range: DateRange) -> Result<TemperatureStats, StoreError> {
        if range.is_empty() {
            debug!(start = %range.start, end = ?range.end, "Start is after end, no rows can match");
        }
        self.store.temperature_stats(range).await
    }

    pub async fn dataset_summary(&self) -> Result<DatasetSummary, StoreError> {
        self.store.dataset_summary().await
    }
}
