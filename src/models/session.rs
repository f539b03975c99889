// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Surf session model for storage and API.

use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Board type vocabulary from the logging form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Board {
    Shortboard,
    Longboard,
    Fish,
    Funboard,
    Gun,
    #[serde(rename = "SUP")]
    Sup,
    Bodyboard,
    Other,
}

impl Board {
    /// Stored string form, used as the category key in distributions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Board::Shortboard => "Shortboard",
            Board::Longboard => "Longboard",
            Board::Fish => "Fish",
            Board::Funboard => "Funboard",
            Board::Gun => "Gun",
            Board::Sup => "SUP",
            Board::Bodyboard => "Bodyboard",
            Board::Other => "Other",
        }
    }
}

/// Surf conditions rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Conditions {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Conditions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conditions::Poor => "poor",
            Conditions::Fair => "fair",
            Conditions::Good => "good",
            Conditions::Excellent => "excellent",
        }
    }
}

/// Crowd level at the spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Crowd {
    Empty,
    Light,
    Moderate,
    Crowded,
    Packed,
}

/// Stored session record in the local store.
///
/// Field names match the persisted JSON layout of the `sessions` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Session {
    /// Unique id assigned at creation (millisecond timestamp)
    pub id: String,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// User-supplied outing date (`YYYY-MM-DD`)
    pub date: String,
    /// Free-text spot description
    pub location: String,
    /// Wave height in feet
    #[serde(default, deserialize_with = "lenient_f64")]
    pub wave_height: f64,
    /// Session length in hours
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: f64,
    pub board: Board,
    /// 1-5 stars
    #[serde(default, deserialize_with = "lenient_u8")]
    pub rating: u8,
    pub conditions: Conditions,
    pub crowd: Crowd,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Reference URLs of uploaded photos (at most 5)
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Input for creating a session. Id and creation timestamp are assigned
/// by the repository.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[validate(length(min = 1, max = 200, message = "Location is required"))]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(range(min = 0.0, max = 50.0))]
    pub wave_height: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(range(min = 0.5, max = 12.0, message = "Minimum 0.5 hours"))]
    pub duration: f64,
    pub board: Board,
    #[serde(default, deserialize_with = "lenient_u8")]
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    pub conditions: Conditions,
    pub crowd: Crowd,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    #[validate(length(max = 5, message = "Maximum 5 photos allowed"))]
    pub photos: Vec<String>,
}

/// Partial update: only the provided fields are merged over the stored
/// record; `id` and `createdAt` are immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SessionPatch {
    pub date: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    #[validate(range(min = 0.0, max = 50.0))]
    pub wave_height: Option<f64>,
    #[validate(range(min = 0.5, max = 12.0))]
    pub duration: Option<f64>,
    pub board: Option<Board>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
    pub conditions: Option<Conditions>,
    pub crowd: Option<Crowd>,
    pub notes: Option<String>,
    #[validate(length(max = 5))]
    pub photos: Option<Vec<String>>,
}

impl Session {
    /// Shallow-merge a patch over this record.
    pub fn apply(&mut self, patch: SessionPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(wave_height) = patch.wave_height {
            self.wave_height = wave_height;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(board) = patch.board {
            self.board = board;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(conditions) = patch.conditions {
            self.conditions = conditions;
        }
        if let Some(crowd) = patch.crowd {
            self.crowd = crowd;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(photos) = patch.photos {
            self.photos = photos;
        }
    }
}

/// Total numeric coercion for values the logging form persisted as
/// strings. Numbers pass through, numeric strings parse, anything else
/// is 0.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Same coercion for the star rating.
fn lenient_u8<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0) as u8,
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
