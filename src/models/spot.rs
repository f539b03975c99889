// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Favorite surf spot model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Saved map location.
///
/// The id is derived from the coordinates, so the same pin is never
/// stored twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoriteSpot {
    /// `"{lat}-{lng}"`, the dedup key
    pub id: String,
    /// Reverse-geocoded address or formatted coordinates
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// RFC3339, assigned when the spot was saved
    pub created_at: String,
}

/// Input for saving a spot; id and timestamp are assigned on add.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSpot {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

/// Deterministic spot id from a coordinate pair.
pub fn spot_id(lat: f64, lng: f64) -> String {
    format!("{}-{}", lat, lng)
}
