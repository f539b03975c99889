// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session CRUD over the HTTP API.

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

fn create_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/sessions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn session_body(date: &str) -> Value {
    json!({
        "date": date,
        "location": "Ocean Beach",
        "waveHeight": 4.0,
        "duration": 1.5,
        "board": "Shortboard",
        "rating": 4,
        "conditions": "good",
        "crowd": "moderate"
    })
}

#[tokio::test]
async fn test_create_and_list_sorted_by_date_descending() {
    let (app, _state) = common::create_test_app();

    for date in ["2024-01-10", "2024-03-05", "2024-02-20"] {
        let response = app
            .clone()
            .oneshot(create_request(session_body(date)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let sessions = body_json(response).await;
    let dates: Vec<&str> = sessions
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-03-05", "2024-02-20", "2024-01-10"]);
}

#[tokio::test]
async fn test_create_assigns_id_and_created_at() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(create_request(session_body("2024-01-15")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let session = body_json(response).await;
    assert!(session["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(session["createdAt"]
        .as_str()
        .is_some_and(|ts| ts.ends_with('Z')));
}

#[tokio::test]
async fn test_create_accepts_string_typed_numbers() {
    // The logging form submits numeric inputs as strings.
    let (app, _state) = common::create_test_app();

    let mut body = session_body("2024-01-15");
    body["waveHeight"] = json!("6.5");
    body["duration"] = json!("2");
    body["rating"] = json!("5");

    let response = app.oneshot(create_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let session = body_json(response).await;
    assert_eq!(session["waveHeight"], json!(6.5));
    assert_eq!(session["duration"], json!(2.0));
    assert_eq!(session["rating"], json!(5));
}

#[tokio::test]
async fn test_update_merges_fields() {
    let (app, state) = common::create_test_app();
    let created = state.sessions.create(common::new_session("2024-01-15")).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/sessions/{}", created.id))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"rating": 5, "notes": "firing"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let session = body_json(response).await;
    assert_eq!(session["rating"], json!(5));
    assert_eq!(session["notes"], json!("firing"));
    assert_eq!(session["location"], json!("Ocean Beach"));
}

#[tokio::test]
async fn test_update_missing_id_is_404() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/sessions/nope")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"rating": 5}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("not_found"));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (app, state) = common::create_test_app();
    let created = state.sessions.create(common::new_session("2024-01-15")).unwrap();

    let delete = |uri: String| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let response = app
        .clone()
        .oneshot(delete(format!("/api/sessions/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted"], json!(true));

    let response = app
        .oneshot(delete(format!("/api/sessions/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted"], json!(false));

    assert!(state.sessions.list().is_empty());
}
