// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Repository behavior over the in-memory store.

use surf_buddy::models::{NewSpot, SessionPatch};
use surf_buddy::store::{FavoriteRepository, LocalStore, SessionRepository};

mod common;

#[test]
fn test_create_assigns_unique_ids() {
    let repo = SessionRepository::new(LocalStore::in_memory());

    let mut ids = Vec::new();
    for i in 0..20 {
        let session = repo
            .create(common::new_session(&format!("2024-01-{:02}", i + 1)))
            .unwrap();
        assert!(!session.id.is_empty());
        assert!(!session.created_at.is_empty());
        ids.push(session.id);
    }

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len(), "ids must be unique");

    // list() contains exactly the created records.
    let listed: Vec<String> = repo.list().into_iter().map(|s| s.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_update_changes_only_named_fields() {
    let repo = SessionRepository::new(LocalStore::in_memory());
    let created = repo.create(common::new_session("2024-01-15")).unwrap();

    let updated = repo
        .update(
            &created.id,
            SessionPatch {
                rating: Some(5),
                ..Default::default()
            },
        )
        .unwrap()
        .expect("record exists");

    assert_eq!(updated.rating, 5);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.date, created.date);
    assert_eq!(updated.location, created.location);
    assert_eq!(updated.wave_height, created.wave_height);
    assert_eq!(updated.duration, created.duration);
}

#[test]
fn test_update_missing_id_leaves_collection_unchanged() {
    let repo = SessionRepository::new(LocalStore::in_memory());
    let created = repo.create(common::new_session("2024-01-15")).unwrap();

    let outcome = repo
        .update(
            "no-such-id",
            SessionPatch {
                rating: Some(1),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(outcome.is_none());
    let listed = repo.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].rating, created.rating);
}

#[test]
fn test_delete_removes_exactly_one_and_is_idempotent() {
    let repo = SessionRepository::new(LocalStore::in_memory());
    let first = repo.create(common::new_session("2024-01-15")).unwrap();
    let second = repo.create(common::new_session("2024-01-16")).unwrap();

    assert!(repo.delete(&first.id).unwrap());
    let listed = repo.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, second.id);

    // Second delete of the same id is a no-op.
    assert!(!repo.delete(&first.id).unwrap());
    assert_eq!(repo.list().len(), 1);
}

#[test]
fn test_favorite_add_is_idempotent() {
    let repo = FavoriteRepository::new(LocalStore::in_memory());

    let spot = NewSpot {
        name: "Mavericks".to_string(),
        lat: 37.4956,
        lng: -122.4967,
    };

    let first = repo.add(spot.clone()).unwrap();
    let second = repo.add(spot).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(repo.list().len(), 1);
}

#[test]
fn test_favorite_remove_is_idempotent() {
    let repo = FavoriteRepository::new(LocalStore::in_memory());

    let spot = repo
        .add(NewSpot {
            name: "Steamer Lane".to_string(),
            lat: 36.9553,
            lng: -122.0247,
        })
        .unwrap();

    assert!(repo.remove(&spot.id).unwrap());
    assert!(!repo.remove(&spot.id).unwrap());
    assert!(repo.list().is_empty());
}
