// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value store persisting JSON collections, one document per key.
//!
//! This is the only module that touches the underlying storage. Higher
//! layers always read the full collection, modify it in memory, and
//! write the full collection back; there are no partial writes and no
//! locking (a single logical writer is assumed).

use crate::error::AppError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Local JSON store with a file-backed production backend and an
/// in-memory backend for tests.
#[derive(Clone)]
pub struct LocalStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    /// One `<key>.json` file per key under the data directory.
    Dir(PathBuf),
    /// Test substitute, shared across clones.
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl LocalStore {
    /// Open a file-backed store, creating the data directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            AppError::Store(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self {
            backend: Backend::Dir(dir),
        })
    }

    /// Create an in-memory store for testing.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(Mutex::new(HashMap::new()))),
        }
    }

    /// Read the collection stored under `key`.
    ///
    /// An absent key or a value that fails to deserialize yields an
    /// empty collection. Read failures are logged, never raised.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match &self.backend {
            Backend::Dir(dir) => match std::fs::read_to_string(dir.join(format!("{}.json", key)))
            {
                Ok(raw) => raw,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Failed to read store key");
                    return Vec::new();
                }
            },
            Backend::Memory(map) => {
                let map = map.lock().unwrap_or_else(PoisonError::into_inner);
                match map.get(key) {
                    Some(raw) => raw.clone(),
                    None => return Vec::new(),
                }
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "Corrupt store value, substituting empty collection");
                Vec::new()
            }
        }
    }

    /// Serialize and store the full collection under `key`, replacing
    /// any prior value.
    pub fn write<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_string(items)
            .map_err(|e| AppError::Store(format!("Failed to serialize {}: {}", key, e)))?;

        match &self.backend {
            Backend::Dir(dir) => {
                std::fs::write(dir.join(format!("{}.json", key)), raw).map_err(|e| {
                    AppError::Store(format!("Failed to persist {}: {}", key, e))
                })
            }
            Backend::Memory(map) => {
                map.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(key.to_string(), raw);
                Ok(())
            }
        }
    }
}
