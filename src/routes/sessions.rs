// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session CRUD routes.

use crate::error::{AppError, Result};
use crate::models::{NewSession, Session, SessionPatch};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/sessions", get(list_sessions).post(create_session))
        .route(
            "/api/sessions/{id}",
            put(update_session).delete(delete_session),
        )
}

/// List all sessions, newest outing first.
async fn list_sessions(State(state): State<Arc<AppState>>) -> Json<Vec<Session>> {
    let mut sessions = state.sessions.list();
    // The collection is insertion-ordered; display wants date descending.
    sessions.sort_by(|a, b| b.date.cmp(&a.date));
    Json(sessions)
}

/// Log a new session.
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewSession>,
) -> Result<Json<Session>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let session = state.sessions.create(input)?;
    Ok(Json(session))
}

/// Update named fields of an existing session.
async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<SessionPatch>,
) -> Result<Json<Session>> {
    patch
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    match state.sessions.update(&id, patch)? {
        Some(session) => Ok(Json(session)),
        None => Err(AppError::NotFound(format!("Session {}", id))),
    }
}

/// Response for session deletion.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteSessionResponse {
    pub deleted: bool,
}

/// Delete a session. Idempotent: deleting an absent id reports
/// `deleted: false` rather than an error.
///
/// Photos already uploaded for the session are not removed from remote
/// storage.
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteSessionResponse>> {
    let deleted = state.sessions.delete(&id)?;
    Ok(Json(DeleteSessionResponse { deleted }))
}
