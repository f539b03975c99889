// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stormglass marine weather client and forecast service.
//!
//! The service never fails: when the provider is unreachable it serves
//! a locally generated placeholder forecast, flagged as such so the
//! widget (and tests) can tell it apart from a genuinely flat swell.

use crate::error::AppError;
use crate::models::{Forecast, ForecastHour, ForecastSource, TideExtreme, TideTable};
use crate::time_utils::format_utc_rfc3339;
use chrono::{Duration, Utc};
use rand::Rng;
use serde::Deserialize;

/// Hourly parameters requested from the provider.
const HOURLY_PARAMS: &str =
    "waveHeight,wavePeriod,waveDirection,windSpeed,windDirection,airTemperature,waterTemperature";

/// Forecast span in days.
const FORECAST_DAYS: i64 = 7;

/// Stormglass API client.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch the hourly point forecast for a coordinate.
    pub async fn point_forecast(&self, lat: f64, lng: f64) -> Result<Forecast, AppError> {
        let url = format!("{}/weather/point", self.base_url);
        let (start, end) = forecast_span();

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .query(&[
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
                ("params", HOURLY_PARAMS.to_string()),
                ("start", start.to_string()),
                ("end", end.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherApi(e.to_string()))?;

        let payload: PointResponse = check_response_json(response).await?;

        Ok(Forecast {
            source: ForecastSource::Live,
            hours: payload.hours.into_iter().map(ForecastHour::from).collect(),
        })
    }

    /// Fetch tide extremes for a coordinate.
    pub async fn tide_extremes(&self, lat: f64, lng: f64) -> Result<Vec<TideExtreme>, AppError> {
        let url = format!("{}/tide/extremes/point", self.base_url);
        let (start, end) = forecast_span();

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .query(&[
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
                ("start", start.to_string()),
                ("end", end.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherApi(e.to_string()))?;

        let payload: TideResponse = check_response_json(response).await?;

        Ok(payload
            .data
            .into_iter()
            .map(|record| TideExtreme {
                time: record.time,
                height: record.height,
                kind: record.kind,
            })
            .collect())
    }
}

/// Unix-second window from now through the forecast horizon.
fn forecast_span() -> (i64, i64) {
    let start = Utc::now().timestamp();
    (start, start + FORECAST_DAYS * 24 * 60 * 60)
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::WeatherApi(format!("HTTP {}: {}", status, body)));
    }

    response
        .json()
        .await
        .map_err(|e| AppError::WeatherApi(format!("JSON parse error: {}", e)))
}

// ─── Stormglass wire types ───────────────────────────────────────────

/// `/weather/point` response.
#[derive(Debug, Deserialize)]
struct PointResponse {
    hours: Vec<HourRecord>,
}

/// Per-source value wrapper; only the `sg` blend is consumed.
#[derive(Debug, Default, Deserialize)]
struct SourceValue {
    #[serde(default)]
    sg: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HourRecord {
    time: String,
    #[serde(default)]
    wave_height: SourceValue,
    #[serde(default)]
    wave_period: SourceValue,
    #[serde(default)]
    wave_direction: SourceValue,
    #[serde(default)]
    wind_speed: SourceValue,
    #[serde(default)]
    wind_direction: SourceValue,
    #[serde(default)]
    air_temperature: SourceValue,
    #[serde(default)]
    water_temperature: SourceValue,
}

impl From<HourRecord> for ForecastHour {
    fn from(record: HourRecord) -> Self {
        ForecastHour {
            time: record.time,
            wave_height: record.wave_height.sg.unwrap_or(0.0),
            wave_period: record.wave_period.sg.unwrap_or(0.0),
            wave_direction: record.wave_direction.sg.unwrap_or(0.0),
            wind_speed: record.wind_speed.sg.unwrap_or(0.0),
            wind_direction: record.wind_direction.sg.unwrap_or(0.0),
            air_temperature: record.air_temperature.sg.unwrap_or(0.0),
            water_temperature: record.water_temperature.sg.unwrap_or(0.0),
        }
    }
}

/// `/tide/extremes/point` response.
#[derive(Debug, Deserialize)]
struct TideResponse {
    data: Vec<TideRecord>,
}

#[derive(Debug, Deserialize)]
struct TideRecord {
    time: String,
    height: f64,
    #[serde(rename = "type")]
    kind: String,
}

// ─── WeatherService - fetch with placeholder fallback ────────────────

/// High-level forecast service with the development fallback.
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: WeatherClient::new(base_url, api_key),
        }
    }

    /// Forecast for a coordinate; substitutes a placeholder on any
    /// provider failure.
    pub async fn forecast(&self, lat: f64, lng: f64) -> Forecast {
        match self.client.point_forecast(lat, lng).await {
            Ok(forecast) => forecast,
            Err(e) => {
                tracing::warn!(error = %e, lat, lng, "Weather fetch failed, serving placeholder");
                placeholder_forecast()
            }
        }
    }

    /// Tide extremes for a coordinate; an empty placeholder table on
    /// provider failure.
    pub async fn tides(&self, lat: f64, lng: f64) -> TideTable {
        match self.client.tide_extremes(lat, lng).await {
            Ok(extremes) => TideTable {
                source: ForecastSource::Live,
                extremes,
            },
            Err(e) => {
                tracing::warn!(error = %e, lat, lng, "Tide fetch failed, serving empty table");
                TideTable {
                    source: ForecastSource::Placeholder,
                    extremes: Vec::new(),
                }
            }
        }
    }
}

/// 24 hours of randomized-but-plausible surf conditions, used when the
/// provider is unreachable. Always flagged `Placeholder`.
pub fn placeholder_forecast() -> Forecast {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let hours = (0..24)
        .map(|i| ForecastHour {
            time: format_utc_rfc3339(now + Duration::hours(i)),
            wave_height: rng.gen_range(0.5..3.5),
            wave_period: rng.gen_range(8.0..13.0),
            wave_direction: rng.gen_range(0.0..360.0),
            wind_speed: rng.gen_range(5.0..25.0),
            wind_direction: rng.gen_range(0.0..360.0),
            air_temperature: rng.gen_range(20.0..30.0),
            water_temperature: rng.gen_range(18.0..23.0),
        })
        .collect();

    Forecast {
        source: ForecastSource::Placeholder,
        hours,
    }
}
