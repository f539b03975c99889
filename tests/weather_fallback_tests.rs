// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Placeholder fallback when the weather provider is unreachable.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use surf_buddy::models::ForecastSource;
use surf_buddy::services::WeatherService;
use tower::ServiceExt;

mod common;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_forecast_falls_back_to_placeholder() {
    // Nothing listens on the discard port, so the fetch fails fast.
    let service = WeatherService::new("http://127.0.0.1:9".to_string(), "key".to_string());

    let forecast = service.forecast(37.5, -122.5).await;

    assert_eq!(forecast.source, ForecastSource::Placeholder);
    assert_eq!(forecast.hours.len(), 24);
}

#[tokio::test]
async fn test_tides_fall_back_to_empty_table() {
    let service = WeatherService::new("http://127.0.0.1:9".to_string(), "key".to_string());

    let tides = service.tides(37.5, -122.5).await;

    assert_eq!(tides.source, ForecastSource::Placeholder);
    assert!(tides.extremes.is_empty());
}

#[tokio::test]
async fn test_weather_endpoint_flags_placeholder() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/weather?lat=37.5&lng=-122.5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let forecast = body_json(response).await;
    // The client must be able to tell a placeholder from a flat swell.
    assert_eq!(forecast["source"], json!("placeholder"));
    assert_eq!(forecast["hours"].as_array().unwrap().len(), 24);
}

#[tokio::test]
async fn test_weather_endpoint_rejects_bad_coordinates() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/weather?lat=999&lng=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
