// ABOUTME: Integration tests for the document scan pipeline
// ABOUTME: Covers text/CSV extraction, merging, clamping, and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Scan service integration tests

mod common;

use common::{healthy_raw_input, server_resources};
use earlyrisk::services::scan::ScanTextRequest;
use earlyrisk::services::{AnalysisService, ScanService};
use earlyrisk_core::errors::ErrorCode;

const LAB_REPORT: &str = "\
    City Diagnostics Laboratory\n\
    Patient report\n\
    Fasting glucose: 132 mg/dl\n\
    HbA1c: 6.8 %\n\
    Total cholesterol: 245 mg/dl\n\
    BP: 142/92 mmHg\n";

fn text_request(user_id: Option<&str>, text: &str) -> ScanTextRequest {
    ScanTextRequest {
        text: text.to_owned(),
        file_type: None,
        user_id: user_id.map(str::to_owned),
        baseline: healthy_raw_input(),
    }
}

#[tokio::test]
async fn test_lab_report_values_flow_into_the_analysis() {
    let resources = server_resources();
    let service = ScanService::new(resources);

    let response = service.scan_text(&text_request(None, LAB_REPORT)).await.unwrap();

    assert!((response.extracted.confidence - 1.0).abs() < f64::EPSILON);
    assert_eq!(response.extracted.sugar_mgdl, Some(132.0));
    assert_eq!(response.extracted.hba1c_pct, Some(6.8));

    // Extracted values override the healthy baseline
    assert!((response.analysis.record.sugar_mgdl - 132.0).abs() < f64::EPSILON);
    assert!((response.analysis.record.bp_systolic - 142.0).abs() < f64::EPSILON);
    // Fields the report never mentioned keep the baseline
    assert!((response.analysis.record.sleep_hours - 8.0).abs() < f64::EPSILON);

    // Diabetic glucose plus elevated HbA1c pushes diabetes risk up
    assert!(response.analysis.assessment.diabetes_risk >= 40.0);
    assert!(!response.analysis.assessment.advice.is_empty());
}

#[tokio::test]
async fn test_scan_with_user_persists_into_history() {
    let resources = server_resources();
    let scan = ScanService::new(resources.clone());
    let analysis = AnalysisService::new(resources);

    let response = scan
        .scan_text(&text_request(Some("u1"), LAB_REPORT))
        .await
        .unwrap();
    assert!(response.analysis.assessment.trend_data.is_some());

    let history = analysis.patient_history("u1").await.unwrap();
    assert_eq!(history.history.len(), 1);
    assert_eq!(history.history[0].record_id, response.analysis.record_id);
}

#[tokio::test]
async fn test_csv_export_uses_the_most_recent_row() {
    let resources = server_resources();
    let service = ScanService::new(resources);

    let csv = "date,glucose,hba1c,cholesterol,systolic,diastolic\n\
               2025-06-01,101,5.6,190,122,78\n\
               2025-08-01,118,6.1,210,131,84\n";
    let request = ScanTextRequest {
        file_type: Some("csv".to_owned()),
        ..text_request(None, csv)
    };

    let response = service.scan_text(&request).await.unwrap();
    assert_eq!(response.extracted.source_type, "csv");
    assert_eq!(response.extracted.sugar_mgdl, Some(118.0));
    assert_eq!(response.extracted.bp_systolic, Some(131.0));
}

#[tokio::test]
async fn test_mmol_values_are_converted_with_a_warning() {
    let resources = server_resources();
    let service = ScanService::new(resources);

    let report = "Lab summary\nFasting glucose: 7.5 mmol\nHbA1c: 6.0 %\n";
    let response = service.scan_text(&text_request(None, report)).await.unwrap();

    assert_eq!(response.extracted.sugar_mgdl, Some(135.0));
    assert!(response
        .extracted
        .warnings
        .iter()
        .any(|w| w.contains("mmol/L")));
}

#[tokio::test]
async fn test_extreme_but_plausible_value_is_kept_not_rejected() {
    let resources = server_resources();
    let service = ScanService::new(resources);

    // 590 mg/dL is far above any healthy reading but inside the
    // physiological bounds; the document path keeps it rather than erroring
    let report = "Report\nFasting glucose: 590 mg/dl\n";
    let response = service.scan_text(&text_request(None, report)).await.unwrap();
    assert!((response.analysis.record.sugar_mgdl - 590.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_out_of_bounds_baseline_is_clamped_on_the_document_path() {
    let resources = server_resources();
    let service = ScanService::new(resources);

    // The document never mentions blood pressure, so the noisy baseline
    // value flows through the document entry path and gets clamped
    let mut request = text_request(None, "Report\nFasting glucose: 110 mg/dl\n");
    request.baseline.bp_systolic = Some(earlyrisk_intelligence::MetricValue::Number(400.0));

    let response = service.scan_text(&request).await.unwrap();
    assert!((response.analysis.record.bp_systolic - 250.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_empty_text_is_rejected() {
    let resources = server_resources();
    let service = ScanService::new(resources);

    let err = service
        .scan_text(&text_request(None, "   "))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_unrecognized_text_still_analyzes_the_baseline() {
    let resources = server_resources();
    let service = ScanService::new(resources);

    let response = service
        .scan_text(&text_request(None, "nothing medical in this paragraph at all"))
        .await
        .unwrap();

    assert!(response.extracted.confidence <= 0.0);
    assert!(!response.extracted.warnings.is_empty());
    // Baseline still produces a full analysis
    assert!((response.analysis.record.sugar_mgdl - 90.0).abs() < f64::EPSILON);
}
