// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorites repository: owns the `favoriteSpots` collection.

use crate::error::AppError;
use crate::models::{spot_id, FavoriteSpot, NewSpot};
use crate::store::{keys, LocalStore};
use crate::time_utils::format_utc_rfc3339;
use chrono::Utc;

/// Add/remove/list for favorite surf spots, deduplicated by the
/// coordinate-derived id.
#[derive(Clone)]
pub struct FavoriteRepository {
    store: LocalStore,
}

impl FavoriteRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Save a spot. Idempotent: adding a pin with coordinates that are
    /// already saved returns the stored record unchanged.
    pub fn add(&self, spot: NewSpot) -> Result<FavoriteSpot, AppError> {
        let mut spots = self.store.read::<FavoriteSpot>(keys::FAVORITE_SPOTS);
        let id = spot_id(spot.lat, spot.lng);

        if let Some(existing) = spots.iter().find(|s| s.id == id) {
            return Ok(existing.clone());
        }

        let record = FavoriteSpot {
            id,
            name: spot.name,
            lat: spot.lat,
            lng: spot.lng,
            created_at: format_utc_rfc3339(Utc::now()),
        };

        spots.push(record.clone());
        self.store.write(keys::FAVORITE_SPOTS, &spots)?;

        tracing::debug!(id = %record.id, name = %record.name, "Favorite spot saved");
        Ok(record)
    }

    /// The full collection.
    pub fn list(&self) -> Vec<FavoriteSpot> {
        self.store.read(keys::FAVORITE_SPOTS)
    }

    /// Remove a spot by id. Idempotent; returns whether a record was
    /// removed.
    pub fn remove(&self, id: &str) -> Result<bool, AppError> {
        let mut spots = self.store.read::<FavoriteSpot>(keys::FAVORITE_SPOTS);
        let before = spots.len();
        spots.retain(|s| s.id != id);

        if spots.len() == before {
            return Ok(false);
        }

        self.store.write(keys::FAVORITE_SPOTS, &spots)?;
        Ok(true)
    }
}
