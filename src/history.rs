// ABOUTME: Assessment history storage seam and guest quota tracking
// ABOUTME: HistoryStore trait with an in-memory DashMap implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! History store and guest quota
//!
//! Persistence is an injected dependency with an explicit interface, not an
//! ambient global. The external persistence collaborator is out of scope,
//! so the default implementation keeps history in process memory; anything
//! that satisfies [`HistoryStore`] can replace it.

use async_trait::async_trait;
use dashmap::DashMap;
use earlyrisk_core::errors::{AppError, AppResult};
use earlyrisk_core::models::StoredAssessment;
use tracing::debug;

/// Storage seam for persisted record/assessment pairs
///
/// Implementations must return history oldest first; trend building and
/// delta computation rely on that order.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist one assessment
    async fn save(&self, assessment: StoredAssessment) -> AppResult<()>;

    /// Full history for a user, oldest first
    async fn history(&self, user_id: &str) -> AppResult<Vec<StoredAssessment>>;

    /// Most recent assessment for a user, if any
    async fn latest(&self, user_id: &str) -> AppResult<Option<StoredAssessment>>;
}

/// In-process history store backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    entries: DashMap<String, Vec<StoredAssessment>>,
}

impl InMemoryHistoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn save(&self, assessment: StoredAssessment) -> AppResult<()> {
        debug!(
            user_id = %assessment.user_id,
            record_id = %assessment.record_id,
            "persisting assessment"
        );
        self.entries
            .entry(assessment.user_id.clone())
            .or_default()
            .push(assessment);
        Ok(())
    }

    async fn history(&self, user_id: &str) -> AppResult<Vec<StoredAssessment>> {
        Ok(self
            .entries
            .get(user_id)
            .map(|entries| entries.clone())
            .unwrap_or_default())
    }

    async fn latest(&self, user_id: &str) -> AppResult<Option<StoredAssessment>> {
        Ok(self
            .entries
            .get(user_id)
            .and_then(|entries| entries.last().cloned()))
    }
}

/// Per-guest analysis counter with a hard cap
///
/// Guests are keyed by an opaque id the client supplies; once the cap is
/// reached further analyses are refused until an account is created.
#[derive(Debug)]
pub struct GuestQuota {
    limit: u32,
    counts: DashMap<String, u32>,
}

impl GuestQuota {
    /// Create a quota with the given per-guest cap
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            counts: DashMap::new(),
        }
    }

    /// The configured cap
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Consume one analysis for a guest, returning the remaining allowance
    ///
    /// # Errors
    ///
    /// Returns `QUOTA_EXCEEDED` once the guest has used up the cap.
    pub fn try_consume(&self, guest_id: &str) -> AppResult<u32> {
        let mut used = self.counts.entry(guest_id.to_owned()).or_insert(0);
        if *used >= self.limit {
            return Err(AppError::quota_exceeded(self.limit));
        }
        *used += 1;
        Ok(self.limit - *used)
    }

    /// Remaining allowance for a guest without consuming
    #[must_use]
    pub fn remaining(&self, guest_id: &str) -> u32 {
        let used = self.counts.get(guest_id).map_or(0, |entry| *entry);
        self.limit.saturating_sub(used)
    }
}
