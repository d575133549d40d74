//! Row types read from the climate database.

use chrono::NaiveDate;
use sqlx::FromRow;

/// One `(date, prcp)` pair from the `measurement` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationReading {
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

/// One `(date, tobs)` pair from the `measurement` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureReading {
    pub date: NaiveDate,
    pub tobs: f64,
}

/// Aggregate temperature over a filtered set of measurements.
///
/// All three values are `None` when no row matched the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

impl TemperatureStats {
    /// Flat `[min, max, avg]` form returned by the API.
    pub fn to_array(self) -> [Option<f64>; 3] {
        [self.min, self.max, self.avg]
    }
}

/// Row counts and observed date span, reported by `surfs-up check`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DatasetSummary {
    pub measurements: i64,
    pub stations: i64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Number of measurements recorded by a station.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}
