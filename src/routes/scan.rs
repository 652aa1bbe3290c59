// ABOUTME: Document scan route handlers for remote files and inline text
// ABOUTME: Thin wrappers over ScanService with unified AppError responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Document scan routes

use crate::resources::ServerResources;
use crate::services::scan::{ScanDocumentRequest, ScanTextRequest};
use crate::services::ScanService;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use earlyrisk_core::errors::AppError;
use std::sync::Arc;

/// Scan routes
pub struct ScanRoutes;

impl ScanRoutes {
    /// Create all scan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/scan-document", post(Self::handle_scan_document))
            .route("/api/scan-text", post(Self::handle_scan_text))
            .with_state(resources)
    }

    /// Handle a remote document scan
    async fn handle_scan_document(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ScanDocumentRequest>,
    ) -> Result<Response, AppError> {
        let service = ScanService::new(resources);
        let response = service.scan_document(&request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle an inline text scan
    async fn handle_scan_text(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ScanTextRequest>,
    ) -> Result<Response, AppError> {
        let service = ScanService::new(resources);
        let response = service.scan_text(&request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
