//! Climate query layer.
//!
//! This module turns the handful of API questions into store queries and
//! shapes the rows that come back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              HTTP Handlers              │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │            ClimateService               │
//! │  (trailing-year cutoff, date -> value   │
//! │   maps, [min, max, avg] statistics)     │
//! └────────────────────┬────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │         ClimateStore trait              │
//! │        (SqliteStore, read-only)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`ClimateService`]: entry point for every API query
//! - [`DateRange`]: inclusive filter for the statistics routes
//! - [`parse_date`]: strict `mmddyyyy` grammar for path segments
//! - Row models: [`PrecipitationReading`], [`TemperatureReading`],
//!   [`TemperatureStats`], [`DatasetSummary`], [`StationActivity`]

mod dates;
mod models;
mod service;

pub use dates::{
    default_reference_date, one_year_cutoff, parse_date, DateRange, DEFAULT_LOOKBACK_DAYS,
    DEFAULT_REFERENCE_DATE, PATH_DATE_FORMAT,
};
pub use models::{
    DatasetSummary, PrecipitationReading, StationActivity, TemperatureReading, TemperatureStats,
};
pub use service::{ClimateService, DEFAULT_ACTIVE_STATION};
