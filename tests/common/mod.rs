// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use surf_buddy::config::Config;
use surf_buddy::models::{Board, Conditions, Crowd, NewSession};
use surf_buddy::routes::create_router;
use surf_buddy::services::{PhotoService, StorageClient, WeatherService};
use surf_buddy::store::{FavoriteRepository, LocalStore, SessionRepository};
use surf_buddy::AppState;

/// Create a test app on an in-memory store, with provider clients
/// pointed at an unreachable address so every external call fails fast.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let store = LocalStore::in_memory();

    let sessions = SessionRepository::new(store.clone());
    let favorites = FavoriteRepository::new(store);

    let weather = WeatherService::new(
        config.stormglass_url.clone(),
        config.stormglass_api_key.clone(),
    );
    let photos = PhotoService::new(StorageClient::new(
        config.storage_url.clone(),
        config.storage_bucket.clone(),
        config.storage_api_key.clone(),
    ));

    let state = Arc::new(AppState {
        config,
        sessions,
        favorites,
        weather,
        photos,
    });

    (create_router(state.clone()), state)
}

/// A valid session input with the given outing date.
#[allow(dead_code)]
pub fn new_session(date: &str) -> NewSession {
    NewSession {
        date: date.to_string(),
        location: "Ocean Beach".to_string(),
        wave_height: 4.0,
        duration: 1.5,
        board: Board::Shortboard,
        rating: 4,
        conditions: Conditions::Good,
        crowd: Crowd::Moderate,
        notes: None,
        photos: Vec::new(),
    }
}
