// ABOUTME: Analysis orchestration: normalize, score, advise, persist, rebuild trends
// ABOUTME: Serves both authenticated users (persisted) and quota-capped guests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Analysis service
//!
//! The pipeline is pure except at its edges: normalization and scoring are
//! stateless functions from `earlyrisk-intelligence`; this service supplies
//! the prior record, persists the result for authenticated users, and
//! rebuilds trend data from stored history on every request.

use crate::resources::ServerResources;
use chrono::{DateTime, Utc};
use earlyrisk_core::errors::{AppError, AppResult};
use earlyrisk_core::models::{
    Alert, Contributor, HealthRecord, RiskAssessment, StoredAssessment, TrendData,
};
use earlyrisk_intelligence::{
    build_trend_data, build_trend_series, compute_risk_assessment, derive_alerts, generate_advice,
    normalize, rank_contributors, EntryPath, RawHealthInput,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// One analysis result as returned over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Record id (stable across re-analyses of the same stored record)
    pub record_id: Uuid,
    /// When the record was captured
    pub timestamp: DateTime<Utc>,
    /// The normalized input snapshot
    pub record: HealthRecord,
    /// Risk percentages, advice, and optional trend data
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    /// Analyses left for this guest; absent for authenticated users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_guest_analyses: Option<u32>,
}

/// Stored history plus chart payload for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    /// The user the history belongs to
    pub user_id: String,
    /// All stored assessments, oldest first
    pub history: Vec<StoredAssessment>,
    /// Chart payload built from the history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_data: Option<TrendData>,
}

/// Alerts and contributors derived from the latest assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    /// The user the insights belong to
    pub user_id: String,
    /// Prioritized alerts, at most five
    pub alerts: Vec<Alert>,
    /// Per-factor contributions, most impactful first
    pub contributors: Vec<Contributor>,
}

/// Analysis pipeline service
pub struct AnalysisService {
    resources: Arc<ServerResources>,
}

impl AnalysisService {
    /// Create the service over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Analyze a form submission for an authenticated user and persist it
    ///
    /// The user's previous record fills any missing fields; trend data is
    /// rebuilt from the full history including the new assessment.
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for out-of-bounds form values and
    /// storage errors from the history store.
    pub async fn analyze_for_user(
        &self,
        user_id: &str,
        raw: &RawHealthInput,
    ) -> AppResult<AnalysisResponse> {
        let prior = self.resources.history.latest(user_id).await?;
        let record = normalize(raw, prior.as_ref().map(|s| &s.record), EntryPath::Form)?;

        let mut assessment = compute_risk_assessment(&record);
        assessment.advice = generate_advice(&assessment, &record);

        let stored = StoredAssessment {
            record_id: Uuid::new_v4(),
            user_id: user_id.to_owned(),
            timestamp: Utc::now(),
            record: record.clone(),
            assessment: assessment.clone(),
        };
        let record_id = stored.record_id;
        let timestamp = stored.timestamp;
        self.resources.history.save(stored).await?;

        let history = self.resources.history.history(user_id).await?;
        assessment.trend_data = build_trend_data(&history);

        info!(user_id, %record_id, "analysis persisted");
        Ok(AnalysisResponse {
            record_id,
            timestamp,
            record,
            assessment,
            remaining_guest_analyses: None,
        })
    }

    /// Analyze a form submission for a guest without persisting
    ///
    /// Nothing is stored, so the returned trend data covers just this
    /// submission.
    ///
    /// # Errors
    ///
    /// Returns `QUOTA_EXCEEDED` once the guest cap is reached, and
    /// `VALUE_OUT_OF_RANGE` for out-of-bounds form values.
    pub fn analyze_guest(
        &self,
        guest_id: &str,
        raw: &RawHealthInput,
    ) -> AppResult<AnalysisResponse> {
        // Validate before the quota: a rejected submission performed no
        // analysis and must not shrink the guest's allowance.
        let record = normalize(raw, None, EntryPath::Form)?;
        let remaining = self.resources.guest_quota.try_consume(guest_id)?;

        let mut assessment = compute_risk_assessment(&record);
        assessment.advice = generate_advice(&assessment, &record);

        let record_id = Uuid::new_v4();
        let timestamp = Utc::now();
        assessment.trend_data = build_trend_data(&[StoredAssessment {
            record_id,
            user_id: guest_id.to_owned(),
            timestamp,
            record: record.clone(),
            assessment: assessment.clone(),
        }]);

        info!(guest_id, remaining, "guest analysis served");
        Ok(AnalysisResponse {
            record_id,
            timestamp,
            record,
            assessment,
            remaining_guest_analyses: Some(remaining),
        })
    }

    /// Stored history plus trend data for a user
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the user has no stored history.
    pub async fn patient_history(&self, user_id: &str) -> AppResult<HistoryResponse> {
        let history = self.resources.history.history(user_id).await?;
        if history.is_empty() {
            return Err(AppError::not_found(format!(
                "history for user {user_id}"
            )));
        }

        let trend_data = build_trend_data(&history);
        Ok(HistoryResponse {
            user_id: user_id.to_owned(),
            history,
            trend_data,
        })
    }

    /// Re-analyze the latest stored record without persisting
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the user has no stored history.
    pub async fn patient_latest(&self, user_id: &str) -> AppResult<AnalysisResponse> {
        let latest = self
            .resources
            .history
            .latest(user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "latest assessment for user {user_id}"
                ))
            })?;

        let mut assessment = compute_risk_assessment(&latest.record);
        assessment.advice = generate_advice(&assessment, &latest.record);
        let history = self.resources.history.history(user_id).await?;
        assessment.trend_data = build_trend_data(&history);

        Ok(AnalysisResponse {
            record_id: latest.record_id,
            timestamp: latest.timestamp,
            record: latest.record,
            assessment,
            remaining_guest_analyses: None,
        })
    }

    /// Alerts and contributors for the latest assessment
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the user has no stored history.
    pub async fn insights(&self, user_id: &str) -> AppResult<InsightsResponse> {
        let latest = self
            .resources
            .history
            .latest(user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "assessments for user {user_id}"
                ))
            })?;

        let history = self.resources.history.history(user_id).await?;
        let trend_series = build_trend_series(&history);

        let alerts = derive_alerts(&latest.assessment, Some(&trend_series));
        let contributors = rank_contributors(&latest.record);

        Ok(InsightsResponse {
            user_id: user_id.to_owned(),
            alerts,
            contributors,
        })
    }
}
