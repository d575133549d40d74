//! # SurfsUp
//!
//! A read-only JSON API over the Hawaii climate dataset.
//!
//! The dataset is a SQLite file with two tables, `measurement` (daily
//! precipitation and temperature per station) and `station`. This library
//! opens it read-only and answers five questions over HTTP:
//!
//! - **Precipitation**: daily precipitation over the trailing year
//! - **Stations**: every station identifier
//! - **Temperature observations**: the most active station's daily
//!   temperature over the trailing year
//! - **Temperature statistics**: `[min, max, avg]` from a start date, or
//!   between a start and end date (`mmddyyyy` path segments)
//!
//! ## Architecture
//!
//! - [`store`] - `ClimateStore` trait and the read-only SQLite implementation
//! - [`climate`] - Query service, date grammar and row models
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//! - [`error`] - Store and API errors
//!
//! ## Example
//!
//! ```rust,no_run
//! use surfs_up::{create_router, ClimateService, RouterConfig, SqliteStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = SqliteStore::connect("Resources/hawaii.sqlite", 5)
//!         .await
//!         .expect("database should open");
//!     let router = create_router(ClimateService::new(store), RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod climate;
pub mod config;
pub mod error;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use climate::{
    default_reference_date, one_year_cutoff, parse_date, ClimateService, DatasetSummary,
    DateRange, PrecipitationReading, StationActivity, TemperatureReading, TemperatureStats,
    DEFAULT_ACTIVE_STATION, DEFAULT_LOOKBACK_DAYS, DEFAULT_REFERENCE_DATE,
};
pub use config::{CheckConfig, Cli, Command, ServeConfig};
pub use error::{ApiError, DateBound, StoreError};
pub use server::{create_router, AppState, ErrorResponse, HealthResponse, RouterConfig};
pub use store::{ClimateStore, SqliteStore, DEFAULT_MAX_CONNECTIONS};
