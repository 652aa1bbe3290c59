// ABOUTME: Integration tests for the rule-based risk scorer
// ABOUTME: Covers range, determinism, monotonicity, boundaries, and the worked example
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Risk scorer integration tests

mod common;

use common::{healthy_record, risky_record};
use earlyrisk_core::constants::risk_levels;
use earlyrisk_core::models::{Gender, HealthRecord};
use earlyrisk_intelligence::compute_risk_assessment;

fn all_risks(record: &HealthRecord) -> [f64; 4] {
    let a = compute_risk_assessment(record);
    [a.diabetes_risk, a.heart_risk, a.liver_risk, a.depression_risk]
}

#[test]
fn test_all_risks_within_range() {
    for record in [healthy_record(), risky_record()] {
        for risk in all_risks(&record) {
            assert!((0.0..=100.0).contains(&risk), "risk {risk} out of range");
        }
    }
}

#[test]
fn test_extreme_record_saturates_at_100() {
    let mut record = risky_record();
    record.age = 90.0;
    record.weight_kg = 180.0;
    record.sugar_mgdl = 400.0;
    record.hba1c_pct = 14.0;
    for risk in all_risks(&record) {
        assert!(risk <= 100.0);
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let record = risky_record();
    let first = compute_risk_assessment(&record);
    let second = compute_risk_assessment(&record);
    assert_eq!(first, second);
}

#[test]
fn test_diabetes_risk_monotone_in_glucose() {
    let mut record = healthy_record();
    record.sugar_mgdl = 90.0;
    let low = compute_risk_assessment(&record).diabetes_risk;

    record.sugar_mgdl = 200.0;
    let high = compute_risk_assessment(&record).diabetes_risk;

    assert!(
        high >= low,
        "raising glucose from 90 to 200 must not lower diabetes risk ({low} -> {high})"
    );
}

#[test]
fn test_glucose_boundary_belongs_to_lower_band() {
    let mut record = healthy_record();

    // Just under the prediabetic cutoff scores as normal
    record.sugar_mgdl = 99.9;
    let normal = compute_risk_assessment(&record).diabetes_risk;

    record.sugar_mgdl = 100.0;
    let prediabetic = compute_risk_assessment(&record).diabetes_risk;

    record.sugar_mgdl = 126.0;
    let diabetic = compute_risk_assessment(&record).diabetes_risk;

    assert!(prediabetic > normal);
    assert!(diabetic > prediabetic);
}

#[test]
fn test_worked_diabetes_example_exceeds_high_threshold() {
    // age 45, bmi ~27, glucose 105, sleep 4, stress 8, family history
    let record = HealthRecord {
        age: 45.0,
        gender: Gender::Other,
        height_cm: 170.0,
        weight_kg: 78.0,
        bp_systolic: 120.0,
        bp_diastolic: 80.0,
        sugar_mgdl: 105.0,
        hba1c_pct: 5.2,
        cholesterol_mgdl: 180.0,
        sleep_hours: 4.0,
        exercise_mins_per_week: 120.0,
        stress_level: 8.0,
        family_history: true,
    };
    let bmi = record.bmi().unwrap();
    assert!((25.0..30.0).contains(&bmi), "fixture bmi should be ~27, got {bmi}");

    let risk = compute_risk_assessment(&record).diabetes_risk;
    assert!(
        risk > risk_levels::HIGH_THRESHOLD_PCT,
        "worked example should land in the high band, got {risk}"
    );
}

#[test]
fn test_undefined_bmi_scores_neutral() {
    let mut with_bmi = healthy_record();
    with_bmi.weight_kg = 100.0; // obese at 170cm
    let mut without_bmi = with_bmi.clone();
    without_bmi.height_cm = 0.0;

    let scored_with = compute_risk_assessment(&with_bmi).diabetes_risk;
    let scored_without = compute_risk_assessment(&without_bmi).diabetes_risk;
    assert!(
        scored_without < scored_with,
        "undefined BMI must not contribute risk points"
    );
}

#[test]
fn test_healthy_record_scores_low_everywhere() {
    for risk in all_risks(&healthy_record()) {
        assert!(
            risk < risk_levels::MEDIUM_THRESHOLD_PCT,
            "healthy record should stay in the low band, got {risk}"
        );
    }
}
