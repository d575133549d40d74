//! HTTP request handlers for the climate API.
//!
//! # Endpoints
//!
//! - `GET /` - Home page listing the routes
//! - `GET /api/v1.0/precipitation` - Trailing-year precipitation by date
//! - `GET /api/v1.0/stations` - Station identifiers
//! - `GET /api/v1.0/tobs` - Trailing-year temperatures for the active station
//! - `GET /api/v1.0/{start}` - `[min, max, avg]` from `start` onward
//! - `GET /api/v1.0/{start}/{end}` - `[min, max, avg]` between two dates
//! - `GET /health` - Health check endpoint

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::climate::{ClimateService, DateRange};
use crate::error::ApiError;
use crate::store::ClimateStore;

use super::home::generate_home_html;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the climate service.
///
/// This is passed to all handlers via Axum's State extractor.
pub struct AppState<S: ClimateStore> {
    /// The service answering every API query
    pub service: Arc<ClimateService<S>>,
}

impl<S: ClimateStore> AppState<S> {
    /// Create a new application state with the given service.
    pub fn new(service: ClimateService<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl<S: ClimateStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message naming the offending value
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Body of the statistics routes: `[min, max, avg]`, each `null` for an
/// empty selection.
pub type StatsResponse = [Option<f64>; 3];

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ApiError to HTTP response.
///
/// Malformed dates are client errors (400, logged at WARN); store failures are
/// server errors (500, logged at ERROR).
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::InvalidDate { .. } => (StatusCode::BAD_REQUEST, "invalid_date"),
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_error"),
        };
        let message = self.to_string();

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                message
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle home page requests.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// `200 OK` with an HTML page listing the available routes.
pub async fn home_handler<S: ClimateStore>(State(state): State<AppState<S>>) -> Html<String> {
    let service = &state.service;
    Html(generate_home_html(
        service.cutoff(),
        service.reference_date(),
        service.active_station(),
    ))
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle precipitation requests.
///
/// # Endpoint
///
/// `GET /api/v1.0/precipitation`
///
/// # Response
///
/// `200 OK` with a JSON object mapping `YYYY-MM-DD` to precipitation:
/// ```json
/// { "2016-08-23": 0.0, "2016-08-24": 0.08, "2016-08-25": null }
/// ```
///
/// Days reported by several stations keep only one value.
pub async fn precipitation_handler<S: ClimateStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    Ok(Json(state.service.precipitation().await?))
}

/// Handle station list requests.
///
/// # Endpoint
///
/// `GET /api/v1.0/stations`
///
/// # Response
///
/// `200 OK` with a JSON array of every station identifier in store order:
/// ```json
/// ["USC00519397", "USC00513117", "USC00514830"]
/// ```
pub async fn stations_handler<S: ClimateStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.service.stations().await?))
}

/// Handle temperature observation requests.
///
/// # Endpoint
///
/// `GET /api/v1.0/tobs`
///
/// # Response
///
/// `200 OK` with a JSON object mapping `YYYY-MM-DD` to the active station's
/// temperature over the trailing year.
pub async fn tobs_handler<S: ClimateStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<BTreeMap<String, f64>>, ApiError> {
    Ok(Json(state.service.temperature_observations().await?))
}

/// Handle open-ended temperature statistics requests.
///
/// # Endpoint
///
/// `GET /api/v1.0/{start}`
///
/// # Path Parameters
///
/// - `start`: first date, `mmddyyyy`
///
/// # Response
///
/// - `200 OK`: `[min, max, avg]` over every measurement on or after `start`
/// - `400 Bad Request`: `{"error": "Invalid start date format: <start>. Use mmddyyyy."}`
pub async fn start_stats_handler<S: ClimateStore>(
    State(state): State<AppState<S>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StatsResponse>, ApiError> {
    let start = match path {
        Ok(Path(start)) => start,
        Err(rejection) => {
            debug!(uri = %uri, "Undecodable date segment: {}", rejection);
            lossy_path_segments(&uri, 1).remove(0)
        }
    };
    let range = DateRange::from_path(&start, None)?;
    let stats = state.service.temperature_stats(range).await?;
    Ok(Json(stats.to_array()))
}

/// Handle bounded temperature statistics requests.
///
/// # Endpoint
///
/// `GET /api/v1.0/{start}/{end}`
///
/// # Path Parameters
///
/// - `start`: first date, `mmddyyyy`
/// - `end`: last date, `mmddyyyy`
///
/// # Response
///
/// - `200 OK`: `[min, max, avg]` over measurements between both dates
///   inclusive; `[null, null, null]` when nothing matches
/// - `400 Bad Request`: error naming the malformed value; `start` is checked
///   first
pub async fn range_stats_handler<S: ClimateStore>(
    State(state): State<AppState<S>>,
    uri: Uri,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<StatsResponse>, ApiError> {
    let (start, end) = match path {
        Ok(Path(segments)) => segments,
        Err(rejection) => {
            debug!(uri = %uri, "Undecodable date segment: {}", rejection);
            let mut segments = lossy_path_segments(&uri, 2).into_iter();
            (
                segments.next().unwrap_or_default(),
                segments.next().unwrap_or_default(),
            )
        }
    };
    let range = DateRange::from_path(&start, Some(&end))?;
    let stats = state.service.temperature_stats(range).await?;
    Ok(Json(stats.to_array()))
}

/// Last `count` segments of the request path, percent-decoded with invalid
/// UTF-8 replaced by U+FFFD.
///
/// Used when axum cannot decode the captures, so the malformed value still
/// reaches the date grammar and is reported with its bound.
fn lossy_path_segments(uri: &Uri, count: usize) -> Vec<String> {
    let mut segments: Vec<String> = uri
        .path()
        .rsplit('/')
        .take(count)
        .map(|segment| {
            String::from_utf8_lossy(&urlencoding::decode_binary(segment.as_bytes())).into_owned()
        })
        .collect();
    segments.resize(count, String::new());
    segments.reverse();
    segments
}

// =============================================================================
// Tests
// =============================================================================
