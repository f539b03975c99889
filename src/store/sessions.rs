// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session repository: owns the `sessions` collection.

use crate::error::AppError;
use crate::models::{NewSession, Session, SessionPatch};
use crate::store::{keys, LocalStore};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};

/// Create/read/update/delete for logged surf sessions.
#[derive(Clone)]
pub struct SessionRepository {
    store: LocalStore,
}

impl SessionRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Store a new session, assigning its id and creation timestamp.
    pub fn create(&self, input: NewSession) -> Result<Session, AppError> {
        let mut sessions = self.store.read::<Session>(keys::SESSIONS);
        let now = Utc::now();

        let session = Session {
            id: next_id(&sessions, now),
            created_at: format_utc_rfc3339(now),
            date: input.date,
            location: input.location,
            wave_height: input.wave_height,
            duration: input.duration,
            board: input.board,
            rating: input.rating,
            conditions: input.conditions,
            crowd: input.crowd,
            notes: input.notes,
            photos: input.photos,
        };

        sessions.push(session.clone());
        self.store.write(keys::SESSIONS, &sessions)?;

        tracing::debug!(id = %session.id, date = %session.date, "Session created");
        Ok(session)
    }

    /// The full collection in insertion order. Display ordering is a
    /// presentation concern.
    pub fn list(&self) -> Vec<Session> {
        self.store.read(keys::SESSIONS)
    }

    /// Look up a single session by id.
    pub fn get(&self, id: &str) -> Option<Session> {
        self.list().into_iter().find(|s| s.id == id)
    }

    /// Shallow-merge `patch` over the record with the given id.
    ///
    /// Returns the updated record, or `None` when the id is absent (the
    /// collection is left untouched).
    pub fn update(&self, id: &str, patch: SessionPatch) -> Result<Option<Session>, AppError> {
        let mut sessions = self.store.read::<Session>(keys::SESSIONS);

        let updated = match sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => {
                session.apply(patch);
                session.clone()
            }
            None => return Ok(None),
        };

        self.store.write(keys::SESSIONS, &sessions)?;
        Ok(Some(updated))
    }

    /// Remove the record with the given id. Idempotent; returns whether
    /// a record was removed.
    pub fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut sessions = self.store.read::<Session>(keys::SESSIONS);
        let before = sessions.len();
        sessions.retain(|s| s.id != id);

        if sessions.len() == before {
            return Ok(false);
        }

        self.store.write(keys::SESSIONS, &sessions)?;
        tracing::debug!(id, "Session deleted");
        Ok(true)
    }
}

/// Millisecond-timestamp id, bumped past any collision in the current
/// collection so rapid creates stay unique.
fn next_id(existing: &[Session], now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    while existing.iter().any(|s| s.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
