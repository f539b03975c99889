// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Photo pipeline: downscale in memory, then upload to object storage.
//!
//! Uploads are the only data-layer operation that surfaces an error to
//! the caller; deletion is best-effort and never fails, since photos
//! detached from a deleted session are not otherwise tracked.

use crate::error::AppError;
use chrono::Utc;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::io::Cursor;

/// Longest edge of an uploaded photo, in pixels.
const PHOTO_MAX_WIDTH: u32 = 800;
/// JPEG re-encode quality (1-100).
const PHOTO_JPEG_QUALITY: u8 = 80;

/// Object storage HTTP client (Supabase-style storage API).
#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    bucket: String,
    api_key: String,
}

impl StorageClient {
    pub fn new(base_url: String, bucket: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            bucket,
            api_key,
        }
    }

    /// Upload an object and return its public URL.
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, path);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upload(format!("HTTP {}: {}", status, body)));
        }

        Ok(self.public_url(path))
    }

    /// Stable retrievable URL for an object path.
    pub fn public_url(&self, path: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, path)
    }

    /// Recover the object path from a public URL, if it points into
    /// this bucket.
    pub fn object_path(&self, reference_url: &str) -> Option<String> {
        let prefix = format!("{}/object/public/{}/", self.base_url, self.bucket);
        reference_url
            .strip_prefix(&prefix)
            .map(|path| path.to_string())
    }

    /// Delete an object.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, path);

        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Upload(format!("HTTP {}", response.status())));
        }
        Ok(())
    }
}

/// High-level photo service: compress, namespace, upload.
#[derive(Clone)]
pub struct PhotoService {
    storage: StorageClient,
}

impl PhotoService {
    pub fn new(storage: StorageClient) -> Self {
        Self { storage }
    }

    /// Downscale and upload a photo for a session, returning its
    /// reference URL.
    ///
    /// The object path is namespaced by session id and timestamp to
    /// avoid collisions.
    pub async fn upload(&self, bytes: Vec<u8>, session_id: &str) -> Result<String, AppError> {
        let compressed = compress(bytes, PHOTO_MAX_WIDTH, PHOTO_JPEG_QUALITY).await?;

        let path = format!(
            "sessions/{}/{}_photo.jpg",
            urlencoding::encode(session_id),
            Utc::now().timestamp_millis()
        );

        let url = self.storage.upload(&path, compressed, "image/jpeg").await?;
        tracing::info!(session_id, path = %path, "Photo uploaded");
        Ok(url)
    }

    /// Best-effort remote deletion by reference URL. Failures are
    /// logged and ignored.
    pub async fn delete(&self, reference_url: &str) {
        let path = match self.storage.object_path(reference_url) {
            Some(path) => path,
            None => {
                tracing::warn!(url = %reference_url, "Unrecognized photo URL, skipping deletion");
                return;
            }
        };

        if let Err(e) = self.storage.delete(&path).await {
            tracing::warn!(error = %e, path = %path, "Photo deletion failed");
        }
    }
}

/// Re-encode an image as JPEG with neither dimension exceeding
/// `max_width` (aspect ratio preserved, never upscaled).
///
/// Decoding and re-encoding are CPU-bound, so the work runs off the
/// async executor.
pub async fn compress(bytes: Vec<u8>, max_width: u32, quality: u8) -> Result<Vec<u8>, AppError> {
    tokio::task::spawn_blocking(move || compress_blocking(&bytes, max_width, quality))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Compression task failed: {}", e)))?
}

fn compress_blocking(bytes: &[u8], max_width: u32, quality: u8) -> Result<Vec<u8>, AppError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| AppError::Upload(format!("Unreadable image: {}", e)))?;

    let img = if img.width() > max_width || img.height() > max_width {
        img.resize(max_width, max_width, FilterType::Triangle)
    } else {
        img
    };

    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, quality);
    img.into_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| AppError::Upload(format!("JPEG encode failed: {}", e)))?;

    Ok(out.into_inner())
}
