// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Normalized marine forecast view-models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Where forecast data came from.
///
/// When the weather provider is unreachable a locally generated
/// placeholder is substituted; clients must be able to tell the two
/// apart, so the flag travels with the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ForecastSource {
    Live,
    Placeholder,
}

/// Hourly marine forecast for a coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Forecast {
    pub source: ForecastSource,
    pub hours: Vec<ForecastHour>,
}

/// One hourly forecast record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ForecastHour {
    /// RFC3339
    pub time: String,
    /// Meters
    pub wave_height: f64,
    /// Seconds
    pub wave_period: f64,
    /// Degrees
    pub wave_direction: f64,
    /// Meters per second
    pub wind_speed: f64,
    /// Degrees
    pub wind_direction: f64,
    /// Celsius
    pub air_temperature: f64,
    /// Celsius
    pub water_temperature: f64,
}

/// Tide extremes for a coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TideTable {
    pub source: ForecastSource,
    pub extremes: Vec<TideExtreme>,
}

/// A single high or low tide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TideExtreme {
    /// RFC3339
    pub time: String,
    /// Meters relative to mean sea level
    pub height: f64,
    /// `"high"` or `"low"`
    #[serde(rename = "type")]
    pub kind: String,
}
