// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorite spot routes.

use crate::error::{AppError, Result};
use crate::models::{FavoriteSpot, NewSpot};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/spots", get(list_spots).post(add_spot))
        .route("/api/spots/{id}", delete(remove_spot))
}

/// List saved spots.
async fn list_spots(State(state): State<Arc<AppState>>) -> Json<Vec<FavoriteSpot>> {
    Json(state.favorites.list())
}

/// Save a spot. Adding an already-saved coordinate pair returns the
/// stored record unchanged.
async fn add_spot(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewSpot>,
) -> Result<Json<FavoriteSpot>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let spot = state.favorites.add(input)?;
    Ok(Json(spot))
}

/// Response for spot removal.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RemoveSpotResponse {
    pub removed: bool,
}

/// Remove a saved spot by id. Idempotent.
async fn remove_spot(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RemoveSpotResponse>> {
    let removed = state.favorites.remove(&id)?;
    Ok(Json(RemoveSpotResponse { removed }))
}
