// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorite spot routes.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn add_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/spots")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_add_derives_id_from_coordinates() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(add_request(json!({
            "name": "Mavericks",
            "lat": 37.4956,
            "lng": -122.4967
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let spot = body_json(response).await;
    assert_eq!(spot["id"], json!("37.4956--122.4967"));
    assert!(spot["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn test_add_same_coordinates_twice_stores_one() {
    let (app, state) = common::create_test_app();

    let body = json!({"name": "Mavericks", "lat": 37.4956, "lng": -122.4967});
    for _ in 0..2 {
        let response = app.clone().oneshot(add_request(body.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(state.favorites.list().len(), 1);
}

#[tokio::test]
async fn test_list_and_remove() {
    let (app, state) = common::create_test_app();

    app.clone()
        .oneshot(add_request(json!({
            "name": "Steamer Lane",
            "lat": 36.9553,
            "lng": -122.0247
        })))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/spots")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let spots = body_json(response).await;
    assert_eq!(spots.as_array().unwrap().len(), 1);
    let id = spots[0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/spots/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["removed"], json!(true));
    assert!(state.favorites.list().is_empty());

    // Removing again is a no-op.
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/spots/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["removed"], json!(false));
}

#[tokio::test]
async fn test_out_of_range_coordinates_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(add_request(json!({
            "name": "Nowhere",
            "lat": 123.0,
            "lng": 0.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
