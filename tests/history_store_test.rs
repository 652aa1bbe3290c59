// ABOUTME: Integration tests for the in-memory history store
// ABOUTME: Verifies oldest-first ordering, latest lookup, and per-user isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! History store integration tests

mod common;

use chrono::Utc;
use common::healthy_record;
use earlyrisk::history::{HistoryStore, InMemoryHistoryStore};
use earlyrisk_core::models::StoredAssessment;
use earlyrisk_intelligence::compute_risk_assessment;
use uuid::Uuid;

fn stored(user_id: &str) -> StoredAssessment {
    let record = healthy_record();
    let assessment = compute_risk_assessment(&record);
    StoredAssessment {
        record_id: Uuid::new_v4(),
        user_id: user_id.to_owned(),
        timestamp: Utc::now(),
        record,
        assessment,
    }
}

#[tokio::test]
async fn test_history_returns_oldest_first() {
    let store = InMemoryHistoryStore::new();

    let first = stored("u1");
    let second = stored("u1");
    store.save(first.clone()).await.unwrap();
    store.save(second.clone()).await.unwrap();

    let history = store.history("u1").await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].record_id, first.record_id);
    assert_eq!(history[1].record_id, second.record_id);
}

#[tokio::test]
async fn test_latest_returns_newest_entry() {
    let store = InMemoryHistoryStore::new();
    assert!(store.latest("u1").await.unwrap().is_none());

    let first = stored("u1");
    let second = stored("u1");
    store.save(first).await.unwrap();
    store.save(second.clone()).await.unwrap();

    let latest = store.latest("u1").await.unwrap().unwrap();
    assert_eq!(latest.record_id, second.record_id);
}

#[tokio::test]
async fn test_users_are_isolated() {
    let store = InMemoryHistoryStore::new();
    store.save(stored("u1")).await.unwrap();

    assert!(store.history("u2").await.unwrap().is_empty());
    assert!(store.latest("u2").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unknown_user_has_empty_history() {
    let store = InMemoryHistoryStore::new();
    let history = store.history("nobody").await.unwrap();
    assert!(history.is_empty());
}
