// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Surf Buddy API Server
//!
//! Serves the surf log frontend: session and spot storage, analytics,
//! marine forecasts and photo uploads.

use std::sync::Arc;
use surf_buddy::{
    config::Config,
    services::{PhotoService, StorageClient, WeatherService},
    store::{FavoriteRepository, LocalStore, SessionRepository},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Surf Buddy API");

    // Open the local store
    let store = LocalStore::open(&config.data_dir).expect("Failed to open local store");
    tracing::info!(data_dir = %config.data_dir, "Local store opened");

    let sessions = SessionRepository::new(store.clone());
    let favorites = FavoriteRepository::new(store);

    // Initialize external provider services
    let weather = WeatherService::new(
        config.stormglass_url.clone(),
        config.stormglass_api_key.clone(),
    );
    let photos = PhotoService::new(StorageClient::new(
        config.storage_url.clone(),
        config.storage_bucket.clone(),
        config.storage_api_key.clone(),
    ));

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        sessions,
        favorites,
        weather,
        photos,
    });

    // Build router
    let app = surf_buddy::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("surf_buddy=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
