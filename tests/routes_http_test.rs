// ABOUTME: HTTP integration tests for the Earlyrisk API routes
// ABOUTME: Exercises the full router via oneshot requests without a running server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for the Earlyrisk API

mod common;
mod helpers;

use common::{healthy_raw_input, risky_raw_input, server_resources_with_guest_limit};
use earlyrisk::resources::ServerResources;
use earlyrisk::server::HttpServer;
use helpers::axum_test::AxumTestRequest;
use std::sync::Arc;

fn app(resources: Arc<ServerResources>) -> axum::Router {
    HttpServer::new(resources).router()
}

fn test_app() -> axum::Router {
    app(server_resources_with_guest_limit(3))
}

// ============================================================================
// Health endpoints
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(test_app()).await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_success() {
    let response = AxumTestRequest::get("/ready").send(test_app()).await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// POST /api/analyze
// ============================================================================

#[tokio::test]
async fn test_analyze_requires_an_identity_header() {
    let response = AxumTestRequest::post("/api/analyze")
        .json(&healthy_raw_input())
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_analyze_as_guest_returns_risks_and_remaining() {
    let response = AxumTestRequest::post("/api/analyze")
        .header("x-guest-id", "guest-1")
        .json(&healthy_raw_input())
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert!(body["diabetesRisk"].is_number());
    assert!(body["heartRisk"].is_number());
    assert!(body["liverRisk"].is_number());
    assert!(body["depressionRisk"].is_number());
    assert_eq!(body["remainingGuestAnalyses"], 2);
    // Healthy record: no advice, and the caller renders "no action needed"
    assert_eq!(body["advice"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_guest_quota_returns_429_when_exhausted() {
    let resources = server_resources_with_guest_limit(1);

    let ok = AxumTestRequest::post("/api/analyze")
        .header("x-guest-id", "guest-1")
        .json(&healthy_raw_input())
        .send(app(resources.clone()))
        .await;
    assert_eq!(ok.status(), 200);

    let refused = AxumTestRequest::post("/api/analyze")
        .header("x-guest-id", "guest-1")
        .json(&healthy_raw_input())
        .send(app(resources))
        .await;
    assert_eq!(refused.status(), 429);

    let body: serde_json::Value = refused.json();
    assert_eq!(body["error"]["code"], "QUOTA_EXCEEDED");
}

#[tokio::test]
async fn test_analyze_as_user_persists_and_returns_trends() {
    let resources = server_resources_with_guest_limit(3);

    let first = AxumTestRequest::post("/api/analyze")
        .header("x-user-id", "user-1")
        .json(&healthy_raw_input())
        .send(app(resources.clone()))
        .await;
    assert_eq!(first.status(), 200);

    let second = AxumTestRequest::post("/api/analyze")
        .header("x-user-id", "user-1")
        .json(&risky_raw_input())
        .send(app(resources))
        .await;
    assert_eq!(second.status(), 200);

    let body: serde_json::Value = second.json();
    assert_eq!(body["trendData"]["timestamps"].as_array().map(Vec::len), Some(2));
    assert!(body["advice"].as_array().is_some_and(|a| !a.is_empty()));
}

#[tokio::test]
async fn test_analyze_rejects_out_of_bounds_form_values() {
    let mut raw = healthy_raw_input();
    raw.age = Some(earlyrisk_intelligence::MetricValue::Number(500.0));

    let response = AxumTestRequest::post("/api/analyze")
        .header("x-guest-id", "guest-1")
        .json(&raw)
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(body["error"]["details"]["field"], "age");
}

// ============================================================================
// GET /api/patient-history, /api/patient-latest, /api/insights
// ============================================================================

#[tokio::test]
async fn test_patient_history_unknown_user_returns_404() {
    let response = AxumTestRequest::get("/api/patient-history/ghost")
        .send(test_app())
        .await;
    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_patient_history_after_analysis() {
    let resources = server_resources_with_guest_limit(3);

    AxumTestRequest::post("/api/analyze")
        .header("x-user-id", "user-1")
        .json(&risky_raw_input())
        .send(app(resources.clone()))
        .await;

    let response = AxumTestRequest::get("/api/patient-history/user-1")
        .send(app(resources))
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["userId"], "user-1");
    assert_eq!(body["history"].as_array().map(Vec::len), Some(1));
    assert!(body["trendData"]["riskEvolution"].is_object());
}

#[tokio::test]
async fn test_patient_latest_after_analysis() {
    let resources = server_resources_with_guest_limit(3);

    AxumTestRequest::post("/api/analyze")
        .header("x-user-id", "user-1")
        .json(&healthy_raw_input())
        .send(app(resources.clone()))
        .await;

    let response = AxumTestRequest::get("/api/patient-latest/user-1")
        .send(app(resources))
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert!(body["recordId"].is_string());
    assert!(body["record"]["sugar_mgdl"].is_number());
}

#[tokio::test]
async fn test_insights_returns_alerts_and_contributors() {
    let resources = server_resources_with_guest_limit(3);

    AxumTestRequest::post("/api/analyze")
        .header("x-user-id", "user-1")
        .json(&risky_raw_input())
        .send(app(resources.clone()))
        .await;

    let response = AxumTestRequest::get("/api/insights/user-1")
        .send(app(resources))
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    let alerts = body["alerts"].as_array().unwrap();
    assert!(!alerts.is_empty());
    assert!(alerts.len() <= 5);
    assert_eq!(body["contributors"].as_array().map(Vec::len), Some(5));
}

// ============================================================================
// POST /api/scan-text
// ============================================================================

#[tokio::test]
async fn test_scan_text_end_to_end() {
    let request = serde_json::json!({
        "text": "Lab report\nFasting glucose: 132 mg/dl\nTotal cholesterol: 245 mg/dl\n",
        "userId": "user-1",
    });

    let response = AxumTestRequest::post("/api/scan-text")
        .json(&request)
        .send(test_app())
        .await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["extracted"]["sugar_mgdl"], 132.0);
    assert_eq!(body["extracted"]["confidence"], 0.5);
    assert!(body["diabetesRisk"].is_number());
}

#[tokio::test]
async fn test_scan_text_rejects_empty_documents() {
    let request = serde_json::json!({ "text": "" });

    let response = AxumTestRequest::post("/api/scan-text")
        .json(&request)
        .send(test_app())
        .await;
    assert_eq!(response.status(), 400);
}
