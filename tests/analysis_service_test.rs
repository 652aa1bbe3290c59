// ABOUTME: Integration tests for the analysis orchestration service
// ABOUTME: Covers persistence, trend rebuilding, guest quota, and insight derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Analysis service integration tests

mod common;

use common::{
    healthy_raw_input, risky_raw_input, server_resources, server_resources_with_guest_limit,
};
use earlyrisk::services::AnalysisService;
use earlyrisk_core::errors::ErrorCode;
use earlyrisk_core::models::Disease;

#[tokio::test]
async fn test_user_analysis_is_persisted_and_builds_trends() {
    let resources = server_resources();
    let service = AnalysisService::new(resources);

    let first = service
        .analyze_for_user("u1", &healthy_raw_input())
        .await
        .unwrap();
    // A single stored point still yields chart data, just without deltas
    let trend = first.assessment.trend_data.as_ref().unwrap();
    assert_eq!(trend.timestamps.len(), 1);

    let second = service
        .analyze_for_user("u1", &risky_raw_input())
        .await
        .unwrap();
    let trend = second.assessment.trend_data.as_ref().unwrap();
    assert_eq!(trend.timestamps.len(), 2);
    assert_eq!(trend.risk_evolution[&Disease::Diabetes].len(), 2);
    assert_ne!(first.record_id, second.record_id);
}

#[tokio::test]
async fn test_prior_record_fills_partial_followup() {
    let resources = server_resources();
    let service = AnalysisService::new(resources);

    service
        .analyze_for_user("u1", &risky_raw_input())
        .await
        .unwrap();

    // Follow-up with only one field: everything else comes from the prior
    let partial = earlyrisk_intelligence::RawHealthInput {
        sugar_mgdl: Some(earlyrisk_intelligence::MetricValue::Number(98.0)),
        ..earlyrisk_intelligence::RawHealthInput::default()
    };
    let response = service.analyze_for_user("u1", &partial).await.unwrap();

    assert!((response.record.sugar_mgdl - 98.0).abs() < f64::EPSILON);
    assert!((response.record.weight_kg - 95.0).abs() < f64::EPSILON);
    assert!(response.record.family_history);
}

#[tokio::test]
async fn test_guest_analysis_has_no_persistence_and_counts_down() {
    let resources = server_resources_with_guest_limit(2);
    let service = AnalysisService::new(resources);

    let first = service.analyze_guest("g1", &healthy_raw_input()).unwrap();
    assert_eq!(first.remaining_guest_analyses, Some(1));

    let second = service.analyze_guest("g1", &healthy_raw_input()).unwrap();
    assert_eq!(second.remaining_guest_analyses, Some(0));

    let refused = service
        .analyze_guest("g1", &healthy_raw_input())
        .unwrap_err();
    assert_eq!(refused.code, ErrorCode::QuotaExceeded);

    // Guests never touch the history store
    let history_err = service.patient_history("g1").await.unwrap_err();
    assert_eq!(history_err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_guest_analysis_carries_single_point_trend_data() {
    let resources = server_resources_with_guest_limit(3);
    let service = AnalysisService::new(resources);

    let response = service.analyze_guest("g1", &risky_raw_input()).unwrap();

    // One submission, one chart point; nothing was persisted to build more
    let trend = response.assessment.trend_data.as_ref().unwrap();
    assert_eq!(trend.timestamps.len(), 1);
    assert_eq!(trend.risk_evolution[&Disease::Diabetes].len(), 1);
    assert!((trend.metrics.sugar[0] - 160.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_rejected_guest_submission_does_not_consume_quota() {
    let resources = server_resources_with_guest_limit(1);
    let service = AnalysisService::new(resources);

    let out_of_range = earlyrisk_intelligence::RawHealthInput {
        age: Some(earlyrisk_intelligence::MetricValue::Number(500.0)),
        ..healthy_raw_input()
    };
    let rejected = service.analyze_guest("g1", &out_of_range).unwrap_err();
    assert_eq!(rejected.code, ErrorCode::ValueOutOfRange);

    // The failed submission left the allowance untouched
    let response = service.analyze_guest("g1", &healthy_raw_input()).unwrap();
    assert_eq!(response.remaining_guest_analyses, Some(0));
}

#[tokio::test]
async fn test_patient_history_unknown_user_is_not_found() {
    let resources = server_resources();
    let service = AnalysisService::new(resources);
    let err = service.patient_history("ghost").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_patient_latest_recomputes_without_persisting() {
    let resources = server_resources();
    let service = AnalysisService::new(resources);

    let analyzed = service
        .analyze_for_user("u1", &risky_raw_input())
        .await
        .unwrap();
    let latest = service.patient_latest("u1").await.unwrap();

    assert_eq!(latest.record_id, analyzed.record_id);
    assert!(
        (latest.assessment.diabetes_risk - analyzed.assessment.diabetes_risk).abs() < f64::EPSILON
    );

    // Re-reading did not append to history
    let history = service.patient_history("u1").await.unwrap();
    assert_eq!(history.history.len(), 1);
}

#[tokio::test]
async fn test_insights_combine_alerts_and_contributors() {
    let resources = server_resources();
    let service = AnalysisService::new(resources);

    service
        .analyze_for_user("u1", &healthy_raw_input())
        .await
        .unwrap();
    service
        .analyze_for_user("u1", &risky_raw_input())
        .await
        .unwrap();

    let insights = service.insights("u1").await.unwrap();
    assert!(!insights.alerts.is_empty());
    assert!(insights.alerts.len() <= 5);
    assert_eq!(insights.contributors.len(), 5);

    // Severe sleep deficit outranks a neutral factor
    let sleep_pos = insights
        .contributors
        .iter()
        .position(|c| c.id == "sleep")
        .unwrap();
    assert_eq!(sleep_pos, 0);
}

#[tokio::test]
async fn test_insights_for_unknown_user_is_not_found() {
    let resources = server_resources();
    let service = AnalysisService::new(resources);
    let err = service.insights("ghost").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
