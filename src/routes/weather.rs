// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Marine weather and tide routes.

use crate::error::{AppError, Result};
use crate::models::{Forecast, TideTable};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/weather", get(get_weather))
        .route("/api/tides", get(get_tides))
}

#[derive(Deserialize)]
struct CoordQuery {
    lat: f64,
    lng: f64,
}

impl CoordQuery {
    fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lng) {
            return Err(AppError::BadRequest(
                "Coordinates out of range".to_string(),
            ));
        }
        Ok(())
    }
}

/// Hourly forecast for a coordinate.
///
/// Never fails on provider errors: the response carries
/// `source: "placeholder"` when the provider was unreachable.
async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CoordQuery>,
) -> Result<Json<Forecast>> {
    params.validate()?;
    Ok(Json(state.weather.forecast(params.lat, params.lng).await))
}

/// Tide extremes for a coordinate, with the same fallback contract.
async fn get_tides(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CoordQuery>,
) -> Result<Json<TideTable>> {
    params.validate()?;
    Ok(Json(state.weather.tides(params.lat, params.lng).await))
}
