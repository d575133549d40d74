//! Router configuration for the climate API.
//!
//! This module defines the HTTP routes and applies the CORS and tracing
//! middleware.
//!
//! # Route Structure
//!
//! ```text
//! /                                  - Home page (HTML)
//! /health                            - Health check
//! /api/v1.0/precipitation            - Trailing-year precipitation
//! /api/v1.0/stations                 - Station identifiers
//! /api/v1.0/tobs                     - Trailing-year temperatures, active station
//! /api/v1.0/{start}                  - [min, max, avg] from start
//! /api/v1.0/{start}/{end}            - [min, max, avg] from start through end
//! ```
//!
//! The literal segments `precipitation`, `stations` and `tobs` take priority
//! over the `{start}` capture.
//!
//! # Example
//!
//! ```ignore
//! use surfs_up::climate::ClimateService;
//! use surfs_up::server::{create_router, RouterConfig};
//! use surfs_up::store::SqliteStore;
//!
//! let store = SqliteStore::connect("Resources/hawaii.sqlite", 5).await?;
//! let service = ClimateService::new(store);
//!
//! let config = RouterConfig::new()
//!     .with_cors_origins(vec!["https://example.com".to_string()]);
//!
//! let router = create_router(service, config);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{routing::get, Router};
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    health_handler, home_handler, precipitation_handler, range_stats_handler,
    start_stats_handler, stations_handler, tobs_handler, AppState,
};
use crate::climate::ClimateService;
use crate::store::ClimateStore;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration with the defaults: any CORS origin,
    /// tracing enabled.
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    /// Pass None (or don't call this method) to allow any origin.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// # Arguments
///
/// * `service` - The climate service answering every query
/// * `config` - Router configuration
///
/// # Returns
///
/// A configured Axum router ready to be served.
pub fn create_router<S>(service: ClimateService<S>, config: RouterConfig) -> Router
where
    S: ClimateStore + 'static,
{
    let app_state = AppState::new(service);
    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/", get(home_handler::<S>))
        .route("/health", get(health_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler::<S>))
        .route("/api/v1.0/stations", get(stations_handler::<S>))
        .route("/api/v1.0/tobs", get(tobs_handler::<S>))
        .route("/api/v1.0/{start}", get(start_stats_handler::<S>))
        .route("/api/v1.0/{start}/{end}", get(range_stats_handler::<S>))
        .with_state(app_state)
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
