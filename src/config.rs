//! Configuration management for SurfsUp.
//!
//! This module provides a configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `SURFSUP_` prefix
//! - Defaults matching the Hawaii dataset
//!
//! # Commands
//!
//! - `surfs-up serve` (the default when no command is given) runs the API
//! - `surfs-up check` opens the database and reports what it contains
//!
//! # Environment Variables
//!
//! - `SURFSUP_HOST` - Server bind address (default: 0.0.0.0)
//! - `SURFSUP_PORT` - Server port (default: 5000)
//! - `SURFSUP_DATABASE` - Path to the SQLite file (default: Resources/hawaii.sqlite)
//! - `SURFSUP_MAX_CONNECTIONS` - Read connection pool size (default: 5)
//! - `SURFSUP_REFERENCE_DATE` - Last day of the trailing year (default: 2017-08-23)
//! - `SURFSUP_LOOKBACK_DAYS` - Length of the trailing window (default: 365)
//! - `SURFSUP_ACTIVE_STATION` - Station served by /api/v1.0/tobs (default: USC00519281)
//! - `SURFSUP_CORS_ORIGINS` - Allowed CORS origins, comma-separated (default: any)

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::climate::{DEFAULT_ACTIVE_STATION, DEFAULT_LOOKBACK_DAYS, DEFAULT_REFERENCE_DATE};
use crate::store::DEFAULT_MAX_CONNECTIONS;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default location of the climate database.
pub const DEFAULT_DATABASE: &str = "Resources/hawaii.sqlite";

// =============================================================================
// CLI Arguments
// =============================================================================

/// SurfsUp - A JSON API over the Hawaii climate dataset.
///
/// Serves trailing-year precipitation, the station list, temperature
/// observations and date-range temperature statistics from a read-only
/// SQLite database.
#[derive(Parser, Debug, Clone)]
#[command(name = "surfs-up")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Serve options, used when no command is given.
    #[command(flatten)]
    pub serve: ServeConfig,
}

impl Cli {
    /// Resolve the command to run; bare invocation means `serve`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP API.
    Serve(ServeConfig),

    /// Open the database and report row counts, date span and most active station.
    Check(CheckConfig),
}

/// Options for `surfs-up serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "SURFSUP_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "SURFSUP_PORT")]
    pub port: u16,

    // =========================================================================
    // Database Configuration
    // =========================================================================
    /// Path to the SQLite climate database (opened read-only).
    #[arg(long, default_value = DEFAULT_DATABASE, env = "SURFSUP_DATABASE")]
    pub database: String,

    /// Maximum number of pooled read connections.
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS, env = "SURFSUP_MAX_CONNECTIONS")]
    pub max_connections: u32,

    // =========================================================================
    // Query Configuration
    // =========================================================================
    /// Last day of the trailing year served by /precipitation and /tobs (YYYY-MM-DD).
    #[arg(long, default_value = DEFAULT_REFERENCE_DATE, env = "SURFSUP_REFERENCE_DATE")]
    pub reference_date: NaiveDate,

    /// Length of the trailing window in days.
    #[arg(long, default_value_t = DEFAULT_LOOKBACK_DAYS, env = "SURFSUP_LOOKBACK_DAYS")]
    pub lookback_days: u32,

    /// Station whose observations /tobs returns.
    #[arg(long, default_value = DEFAULT_ACTIVE_STATION, env = "SURFSUP_ACTIVE_STATION")]
    pub active_station: String,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "SURFSUP_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.database.trim().is_empty() {
            return Err(
                "Database path is required. Set --database or SURFSUP_DATABASE".to_string(),
            );
        }

        if self.max_connections == 0 {
            return Err("max_connections must be greater than 0".to_string());
        }

        if self.lookback_days == 0 {
            return Err("lookback_days must be greater than 0".to_string());
        }

        if self.active_station.trim().is_empty() {
            return Err(
                "Active station is required. Set --active-station or SURFSUP_ACTIVE_STATION"
                    .to_string(),
            );
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Options for `surfs-up check`.
#[derive(Args, Debug, Clone)]
pub struct CheckConfig {
    /// Path to the SQLite climate database.
    #[arg(long, default_value = DEFAULT_DATABASE, env = "SURFSUP_DATABASE")]
    pub database: String,

    /// Station expected to be the most active one.
    #[arg(long, default_value = DEFAULT_ACTIVE_STATION, env = "SURFSUP_ACTIVE_STATION")]
    pub active_station: String,

    /// Enable verbose logging.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

// =============================================================================
// Tests
// =============================================================================
