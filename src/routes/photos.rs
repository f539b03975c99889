// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Photo upload and deletion routes.

use crate::error::{AppError, Result};
use crate::models::SessionPatch;
use crate::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    routing::{delete, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Photo slots per session.
const MAX_PHOTOS: usize = 5;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/sessions/{id}/photos", post(upload_photos))
        .route("/api/photos", delete(delete_photo))
}

/// Response for photo uploads.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PhotoUploadResponse {
    /// The session's full photo list after the upload
    pub photos: Vec<String>,
    /// Reference URLs stored by this request
    pub uploaded: Vec<String>,
    /// Photos that failed to transfer
    pub failed: u32,
}

/// Upload photos for a session (multipart, one part per photo).
///
/// Each photo is compressed and uploaded in turn; a failed transfer is
/// reported per photo and does not abort the remaining ones or the
/// session update. Only when every photo fails does the request error.
async fn upload_photos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<PhotoUploadResponse>> {
    let session = state
        .sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session {}", id)))?;

    let mut uploaded: Vec<String> = Vec::new();
    let mut failed: u32 = 0;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?;
        if data.is_empty() {
            continue;
        }

        if session.photos.len() + uploaded.len() >= MAX_PHOTOS {
            return Err(AppError::BadRequest(
                "Maximum 5 photos allowed".to_string(),
            ));
        }

        // One photo's upload completes before the next begins.
        match state.photos.upload(data.to_vec(), &id).await {
            Ok(url) => uploaded.push(url),
            Err(e) => {
                tracing::warn!(error = %e, session_id = %id, "Photo upload failed");
                failed += 1;
            }
        }
    }

    if uploaded.is_empty() && failed > 0 {
        return Err(AppError::Upload("All photo uploads failed".to_string()));
    }
    if uploaded.is_empty() {
        return Err(AppError::BadRequest("No photo provided".to_string()));
    }

    let mut photos = session.photos;
    photos.extend(uploaded.iter().cloned());

    let updated = state
        .sessions
        .update(
            &id,
            SessionPatch {
                photos: Some(photos),
                ..Default::default()
            },
        )?
        .ok_or_else(|| AppError::NotFound(format!("Session {}", id)))?;

    Ok(Json(PhotoUploadResponse {
        photos: updated.photos,
        uploaded,
        failed,
    }))
}

#[derive(Deserialize)]
struct DeletePhotoQuery {
    /// Reference URL returned by the upload
    url: String,
}

/// Response for photo deletion.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeletePhotoResponse {
    pub success: bool,
}

/// Best-effort remote deletion by reference URL. Always succeeds;
/// transfer failures are logged server-side.
async fn delete_photo(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeletePhotoQuery>,
) -> Json<DeletePhotoResponse> {
    state.photos.delete(&params.url).await;
    Json(DeletePhotoResponse { success: true })
}
