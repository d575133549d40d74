//! HTTP server layer for the climate API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │        GET /api/v1.0/{precipitation|stations|tobs}              │
//! │        GET /api/v1.0/{start}[/{end}]                            │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │    home     │  │        routes           │  │
//! │  │ (requests)  │  │ (HTML page) │  │  (router config)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod home;
pub mod routes;

pub use handlers::{
    health_handler, home_handler, precipitation_handler, range_stats_handler,
    start_stats_handler, stations_handler, tobs_handler, AppState, ErrorResponse, HealthResponse,
    StatsResponse,
};
pub use routes::{create_router, RouterConfig};
