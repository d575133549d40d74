//! SurfsUp - A JSON API over the Hawaii climate dataset.
//!
//! This binary starts the HTTP server or checks the database.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use surfs_up::{
    config::{CheckConfig, Cli, Command, ServeConfig},
    create_router, ClimateService, ClimateStore, RouterConfig, SqliteStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Serve(config) => run_serve(config).await,
        Command::Check(config) => run_check(config).await,
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    print_banner();

    info!("Configuration:");
    info!("  Database: {}", config.database);
    info!("  Pool size: {} read connection(s)", config.max_connections);
    info!(
        "  Trailing window: {} days ending {}",
        config.lookback_days, config.reference_date
    );
    info!("  Active station: {}", config.active_station);
    match config.cors_origins {
        Some(ref origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS origins: any"),
    }

    info!("");
    info!("Opening database...");
    let store = match SqliteStore::connect(&config.database, config.max_connections).await {
        Ok(store) => store,
        Err(e) => {
            error!("  Failed to open database: {}", e);
            error!("");
            error!("  Please check:");
            error!("    - The file '{}' exists and is readable", config.database);
            error!("    - It is a SQLite database with measurement and station tables");
            return ExitCode::FAILURE;
        }
    };

    let service = ClimateService::new(store)
        .with_reference_date(config.reference_date)
        .with_lookback_days(config.lookback_days)
        .with_active_station(config.active_station.clone());

    match service.dataset_summary().await {
        Ok(summary) => {
            info!(
                "  Found {} measurement(s) from {} station(s)",
                summary.measurements, summary.stations
            );
            if let Some(last) = summary.last_date {
                if last != config.reference_date {
                    warn!(
                        "  Latest measurement is {} but the reference date is {}",
                        last, config.reference_date
                    );
                }
            }
        }
        Err(e) => {
            error!("  Database is not readable: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let router = create_router(service, build_router_config(&config));

    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/api/v1.0/precipitation", addr);
    info!("    curl http://{}/api/v1.0/stations", addr);
    info!("    curl http://{}/api/v1.0/tobs", addr);
    info!("    curl http://{}/api/v1.0/08012016/08312016", addr);
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Print the startup banner.
fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    info!("");
    info!("███████╗██╗   ██╗██████╗ ███████╗███████╗    ██╗   ██╗██████╗ ");
    info!("██╔════╝██║   ██║██╔══██╗██╔════╝██╔════╝    ██║   ██║██╔══██╗");
    info!("███████╗██║   ██║██████╔╝█████╗  ███████╗    ██║   ██║██████╔╝");
    info!("╚════██║██║   ██║██╔══██╗██╔══╝  ╚════██║    ██║   ██║██╔═══╝ ");
    info!("███████║╚██████╔╝██║  ██║██║     ███████║    ╚██████╔╝██║     ");
    info!("╚══════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝     ╚══════╝     ╚═════╝ ╚═╝     ");
    info!("");
    info!("                    Honolulu climate API v{}", version);
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "surfs_up=debug,tower_http=debug"
    } else {
        "surfs_up=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application ServeConfig.
fn build_router_config(config: &ServeConfig) -> RouterConfig {
    let mut router_config = RouterConfig::new();

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config.with_tracing(!config.no_tracing)
}

// =============================================================================
// Check Command
// =============================================================================

async fn run_check(config: CheckConfig) -> ExitCode {
    if config.verbose {
        init_logging(true);
    }

    println!("SurfsUp Database Check");
    println!("══════════════════════");
    println!();

    print!("Opening {}... ", config.database);
    let store = match SqliteStore::connect(&config.database, 1).await {
        Ok(store) => {
            println!("✓ opened read-only");
            store
        }
        Err(e) => {
            println!("✗ failed");
            println!();
            println!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let summary = match store.dataset_summary().await {
        Ok(summary) => summary,
        Err(e) => {
            println!();
            println!("✗ Could not read measurement/station tables: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!();
    println!("✓ Measurements: {}", summary.measurements);
    println!("✓ Stations: {}", summary.stations);
    match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => println!("✓ Date span: {} to {}", first, last),
        _ => println!("  Date span: (no measurements)"),
    }

    match store.most_active_station().await {
        Ok(Some(activity)) => {
            println!(
                "✓ Most active station: {} ({} observations)",
                activity.station, activity.observations
            );
            if activity.station != config.active_station {
                println!(
                    "  Note: configured active station is {}",
                    config.active_station
                );
            }
        }
        Ok(None) => println!("  Most active station: (no measurements)"),
        Err(e) => {
            println!("✗ Could not rank stations: {}", e);
            return ExitCode::FAILURE;
        }
    }

    store.close().await;

    println!();
    println!("══════════════════════");
    println!("✓ All checks passed!");

    ExitCode::SUCCESS
}
