// ABOUTME: Analysis route handlers: analyze, patient history, latest, insights
// ABOUTME: Resolves caller identity from opaque x-user-id / x-guest-id headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Analysis routes
//!
//! Identity is external: the identity provider authenticates the caller and
//! the frontend forwards an opaque `x-user-id`. The server never inspects
//! credentials. Requests without a user id run in guest mode, keyed by
//! `x-guest-id` and capped by the configured quota.

use crate::resources::ServerResources;
use crate::services::AnalysisService;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use earlyrisk_core::errors::AppError;
use earlyrisk_intelligence::RawHealthInput;
use std::sync::Arc;

/// Analysis routes
pub struct AnalysisRoutes;

impl AnalysisRoutes {
    /// Create all analysis routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/analyze", post(Self::handle_analyze))
            .route(
                "/api/patient-history/:user_id",
                get(Self::handle_patient_history),
            )
            .route(
                "/api/patient-latest/:user_id",
                get(Self::handle_patient_latest),
            )
            .route("/api/insights/:user_id", get(Self::handle_insights))
            .with_state(resources)
    }

    /// Opaque identity headers; neither is a credential
    fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
    }

    /// Handle an analysis request for a user or a guest
    async fn handle_analyze(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(raw): Json<RawHealthInput>,
    ) -> Result<Response, AppError> {
        let service = AnalysisService::new(resources);

        let response = if let Some(user_id) = Self::header_value(&headers, "x-user-id") {
            service.analyze_for_user(&user_id, &raw).await?
        } else {
            let guest_id = Self::header_value(&headers, "x-guest-id")
                .ok_or_else(|| AppError::invalid_input("missing x-user-id or x-guest-id header"))?;
            service.analyze_guest(&guest_id, &raw)?
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle a stored-history request
    async fn handle_patient_history(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let service = AnalysisService::new(resources);
        let response = service.patient_history(&user_id).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle a latest-assessment request
    async fn handle_patient_latest(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let service = AnalysisService::new(resources);
        let response = service.patient_latest(&user_id).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle an insights request (alerts + contributors)
    async fn handle_insights(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let service = AnalysisService::new(resources);
        let response = service.insights(&user_id).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
