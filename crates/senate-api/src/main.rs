//! # senate-api: Binary Entry Point
//!
//! Loads the roster and starts the Axum HTTP server.
//! Binds to configurable port (default 8080).

use std::path::PathBuf;

use senate_api::state::{AppConfig, AppState};
use senate_source::SourceConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // Optional YAML overlay on top of SENATE_* environment variables.
    let config_path = std::env::var("SENATE_CONFIG").ok().map(PathBuf::from);
    let sources = SourceConfig::load(config_path.as_deref()).map_err(|e| {
        tracing::error!("Invalid source configuration: {e}");
        e
    })?;
    let seating = sources.seating;

    let today = chrono::Local::now().date_naive();
    let loaded = senate_source::load_roster(sources, today).await;
    if let Err(e) = &loaded {
        tracing::error!("Roster unavailable, data routes will return 503: {e}");
    }
    let state = AppState::from_load(config.clone(), loaded, seating);

    let app = senate_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("senate API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
