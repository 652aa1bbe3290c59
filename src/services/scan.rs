// ABOUTME: Document scan orchestration: fetch, extract, merge, analyze, persist
// ABOUTME: Treats extracted values exactly like a partial form submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Document scan service
//!
//! Fetching is the only genuinely blocking step in the system; a failed
//! fetch surfaces as a single terminal error with no partial results and no
//! retry. Extracted values override the caller's baseline fields and then
//! flow through the normal analysis pipeline on the document entry path,
//! where out-of-bounds values are clamped instead of rejected.

use crate::resources::ServerResources;
use crate::services::analysis::AnalysisResponse;
use chrono::Utc;
use earlyrisk_core::errors::{AppError, AppResult};
use earlyrisk_core::models::{ExtractedMetrics, StoredAssessment};
use earlyrisk_intelligence::{
    build_trend_data, compute_risk_assessment, extract_from_csv, extract_from_text,
    generate_advice, normalize, EntryPath, MetricValue, RawHealthInput,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Request to scan a remotely stored document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDocumentRequest {
    /// Where the object store placed the document
    pub file_url: String,
    /// "csv" or "text"; inferred from the URL when absent
    #[serde(default)]
    pub file_type: Option<String>,
    /// Opaque user id; when present the result is persisted
    #[serde(default)]
    pub user_id: Option<String>,
    /// Baseline fields the extracted values are merged over
    #[serde(default)]
    pub baseline: RawHealthInput,
}

/// Request to scan inline text (already fetched or pasted)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTextRequest {
    /// The document content
    pub text: String,
    /// "csv" or "text"; defaults to free text
    #[serde(default)]
    pub file_type: Option<String>,
    /// Opaque user id; when present the result is persisted
    #[serde(default)]
    pub user_id: Option<String>,
    /// Baseline fields the extracted values are merged over
    #[serde(default)]
    pub baseline: RawHealthInput,
}

/// Scan result: what was extracted plus the resulting analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Values detected in the document, with confidence and warnings
    pub extracted: ExtractedMetrics,
    /// The analysis of baseline merged with extracted values
    #[serde(flatten)]
    pub analysis: AnalysisResponse,
}

/// Document scan pipeline service
pub struct ScanService {
    resources: Arc<ServerResources>,
}

impl ScanService {
    /// Create the service over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Fetch a remote document, extract values, and analyze
    ///
    /// # Errors
    ///
    /// Returns `EXTERNAL_SERVICE_ERROR` when the fetch fails or returns a
    /// non-success status, and `INVALID_INPUT` when the document exceeds the
    /// configured size cap or is empty.
    pub async fn scan_document(&self, request: &ScanDocumentRequest) -> AppResult<ScanResponse> {
        let response = self
            .resources
            .http_client
            .get(&request.file_url)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service("document fetch", e.to_string()).with_source(e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "document fetch",
                format!("upstream returned status {}", response.status()),
            ));
        }

        let cap = self.resources.config.scan.max_document_bytes;
        // Reject on the declared length before buffering; chunked responses
        // have none and are capped after buffering instead.
        if let Some(declared) = response.content_length() {
            check_document_size(declared, cap)?;
        }

        let bytes = response.bytes().await.map_err(|e| {
            AppError::external_service("document fetch", e.to_string()).with_source(e)
        })?;
        check_document_size(bytes.len() as u64, cap)?;

        let text = String::from_utf8_lossy(&bytes).into_owned();
        let is_csv = request
            .file_type
            .as_deref()
            .map_or_else(|| request.file_url.ends_with(".csv"), |t| t == "csv");

        self.scan_content(&text, is_csv, request.user_id.as_deref(), &request.baseline)
            .await
    }

    /// Extract values from inline text and analyze
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for empty text.
    pub async fn scan_text(&self, request: &ScanTextRequest) -> AppResult<ScanResponse> {
        let is_csv = request.file_type.as_deref() == Some("csv");
        self.scan_content(
            &request.text,
            is_csv,
            request.user_id.as_deref(),
            &request.baseline,
        )
        .await
    }

    async fn scan_content(
        &self,
        text: &str,
        is_csv: bool,
        user_id: Option<&str>,
        baseline: &RawHealthInput,
    ) -> AppResult<ScanResponse> {
        if text.trim().is_empty() {
            return Err(AppError::invalid_input("document contains no text"));
        }

        let mut extracted = if is_csv {
            extract_from_csv(text)
        } else {
            extract_from_text(text)
        };
        if extracted.confidence <= 0.0 {
            warn!("no target metrics detected in document");
            extracted
                .warnings
                .push("No recognizable lab values were found in the document".to_owned());
        }

        let raw = merge_extracted(baseline, &extracted);
        let prior = match user_id {
            Some(user_id) => self.resources.history.latest(user_id).await?,
            None => None,
        };
        let record = normalize(&raw, prior.as_ref().map(|s| &s.record), EntryPath::Document)?;

        let mut assessment = compute_risk_assessment(&record);
        assessment.advice = generate_advice(&assessment, &record);

        let record_id = Uuid::new_v4();
        let timestamp = Utc::now();

        if let Some(user_id) = user_id {
            self.resources
                .history
                .save(StoredAssessment {
                    record_id,
                    user_id: user_id.to_owned(),
                    timestamp,
                    record: record.clone(),
                    assessment: assessment.clone(),
                })
                .await?;
            let history = self.resources.history.history(user_id).await?;
            assessment.trend_data = build_trend_data(&history);
            info!(user_id, %record_id, confidence = extracted.confidence, "scan persisted");
        } else {
            info!(%record_id, confidence = extracted.confidence, "anonymous scan served");
        }

        Ok(ScanResponse {
            extracted,
            analysis: AnalysisResponse {
                record_id,
                timestamp,
                record,
                assessment,
                remaining_guest_analyses: None,
            },
        })
    }
}

/// Reject documents larger than the configured cap
fn check_document_size(size: u64, cap: usize) -> AppResult<()> {
    if size > cap as u64 {
        return Err(AppError::invalid_input(format!(
            "document exceeds the {cap} byte limit"
        )));
    }
    Ok(())
}

/// Overlay extracted values on the caller's baseline fields
fn merge_extracted(baseline: &RawHealthInput, extracted: &ExtractedMetrics) -> RawHealthInput {
    let mut raw = baseline.clone();
    let overlay = |slot: &mut Option<MetricValue>, value: Option<f64>| {
        if let Some(value) = value {
            *slot = Some(MetricValue::Number(value));
        }
    };

    overlay(&mut raw.sugar_mgdl, extracted.sugar_mgdl);
    overlay(&mut raw.hba1c_pct, extracted.hba1c_pct);
    overlay(&mut raw.cholesterol_mgdl, extracted.cholesterol_mgdl);
    overlay(&mut raw.bp_systolic, extracted.bp_systolic);
    overlay(&mut raw.bp_diastolic, extracted.bp_diastolic);
    raw
}
