// ABOUTME: Rule-based risk scoring: threshold bands and additive weights per condition
// ABOUTME: Pure, deterministic HealthRecord -> RiskAssessment computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Threshold-band risk scoring
//!
//! Each condition is scored independently as an additive sum of band
//! contributions, clamped to [0,100]. Band boundaries follow standard
//! clinical cutoffs; a value exactly on a boundary belongs to the lower-risk
//! band. Non-finite inputs contribute zero (neutral) rather than failing
//! the whole computation.

use earlyrisk_core::constants::{
    blood_pressure, bmi as bmi_cutoffs, cholesterol, exercise, glucose, hba1c,
    risk_weights::{depression, diabetes, heart, liver},
    sleep, stress,
};
use earlyrisk_core::models::{HealthRecord, RiskAssessment};
use tracing::debug;

/// Accumulator for one condition's additive score
#[derive(Debug, Default)]
struct Score(f64);

impl Score {
    fn rule(&mut self, matched: bool, points: f64) {
        if matched {
            self.0 += points;
        }
    }

    fn clamped(&self) -> f64 {
        self.0.clamp(0.0, 100.0)
    }
}

/// Band test helper: false for non-finite values, so they score neutral
fn at_least(value: f64, min: f64) -> bool {
    value.is_finite() && value >= min
}

fn within(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value < max
}

fn above(value: f64, min: f64) -> bool {
    value.is_finite() && value > min
}

fn below(value: f64, max: f64) -> bool {
    value.is_finite() && value < max
}

/// Compute the full assessment for one record
///
/// Deterministic: identical records always yield identical assessments.
/// Advice and trend data are attached by the caller; this function scores
/// only.
#[must_use]
pub fn compute_risk_assessment(record: &HealthRecord) -> RiskAssessment {
    let assessment = RiskAssessment {
        diabetes_risk: diabetes_score(record),
        heart_risk: heart_score(record),
        liver_risk: liver_score(record),
        depression_risk: depression_score(record),
        advice: Vec::new(),
        trend_data: None,
    };
    debug!(
        diabetes = assessment.diabetes_risk,
        heart = assessment.heart_risk,
        liver = assessment.liver_risk,
        depression = assessment.depression_risk,
        "scored health record"
    );
    assessment
}

/// BMI as a scoring input: non-finite/undefined stays neutral via `f64::NAN`
fn bmi_of(record: &HealthRecord) -> f64 {
    record.bmi().unwrap_or(f64::NAN)
}

fn diabetes_score(record: &HealthRecord) -> f64 {
    let mut score = Score::default();
    let bmi = bmi_of(record);

    score.rule(above(record.age, 45.0), diabetes::AGE_OVER_45);
    score.rule(
        above(record.age, 35.0) && record.age <= 45.0,
        diabetes::AGE_OVER_35,
    );

    score.rule(at_least(bmi, bmi_cutoffs::OBESE_MIN), diabetes::BMI_OBESE);
    score.rule(
        above(bmi, bmi_cutoffs::OVERWEIGHT_MIN) && bmi < bmi_cutoffs::OBESE_MIN,
        diabetes::BMI_OVERWEIGHT,
    );

    score.rule(
        at_least(record.sugar_mgdl, glucose::DIABETIC_MIN_MGDL),
        diabetes::GLUCOSE_DIABETIC,
    );
    score.rule(
        within(
            record.sugar_mgdl,
            glucose::NORMAL_MAX_MGDL,
            glucose::DIABETIC_MIN_MGDL,
        ),
        diabetes::GLUCOSE_PREDIABETIC,
    );

    score.rule(
        at_least(record.hba1c_pct, hba1c::DIABETIC_MIN_PCT),
        diabetes::HBA1C_DIABETIC,
    );
    score.rule(
        within(
            record.hba1c_pct,
            hba1c::NORMAL_MAX_PCT,
            hba1c::DIABETIC_MIN_PCT,
        ),
        diabetes::HBA1C_PREDIABETIC,
    );

    score.rule(
        below(record.sleep_hours, sleep::SEVERE_DEFICIT_MAX_HOURS),
        diabetes::SLEEP_SEVERE_DEFICIT,
    );
    score.rule(
        within(
            record.sleep_hours,
            sleep::SEVERE_DEFICIT_MAX_HOURS,
            sleep::MILD_DEFICIT_MAX_HOURS,
        ),
        diabetes::SLEEP_MILD_DEFICIT,
    );

    score.rule(at_least(record.stress_level, stress::HIGH_MIN), diabetes::STRESS_HIGH);
    score.rule(
        below(record.exercise_mins_per_week, exercise::SEDENTARY_MAX_MINS),
        diabetes::EXERCISE_SEDENTARY,
    );
    score.rule(record.family_history, diabetes::FAMILY_HISTORY);

    score.clamped()
}

fn heart_score(record: &HealthRecord) -> f64 {
    let mut score = Score::default();
    let bmi = bmi_of(record);

    score.rule(above(record.age, 55.0), heart::AGE_OVER_55);
    score.rule(above(record.age, 45.0) && record.age <= 55.0, heart::AGE_OVER_45);

    let stage2 = at_least(record.bp_systolic, blood_pressure::STAGE2_SYSTOLIC_MIN)
        || at_least(record.bp_diastolic, blood_pressure::STAGE2_DIASTOLIC_MIN);
    let elevated = at_least(record.bp_systolic, blood_pressure::ELEVATED_SYSTOLIC_MIN)
        || at_least(record.bp_diastolic, blood_pressure::ELEVATED_DIASTOLIC_MIN);
    score.rule(stage2, heart::BP_STAGE2);
    score.rule(elevated && !stage2, heart::BP_ELEVATED);
    score.rule(
        !elevated
            && within(
                record.bp_systolic,
                blood_pressure::NORMAL_SYSTOLIC_MAX,
                blood_pressure::ELEVATED_SYSTOLIC_MIN,
            ),
        heart::BP_ABOVE_NORMAL,
    );

    score.rule(
        at_least(record.cholesterol_mgdl, cholesterol::HIGH_MIN_MGDL),
        heart::CHOLESTEROL_HIGH,
    );
    score.rule(
        within(
            record.cholesterol_mgdl,
            cholesterol::DESIRABLE_MAX_MGDL,
            cholesterol::HIGH_MIN_MGDL,
        ),
        heart::CHOLESTEROL_BORDERLINE,
    );

    score.rule(at_least(bmi, bmi_cutoffs::OBESE_MIN), heart::BMI_OBESE);
    score.rule(
        above(bmi, bmi_cutoffs::OVERWEIGHT_MIN) && bmi < bmi_cutoffs::OBESE_MIN,
        heart::BMI_OVERWEIGHT,
    );

    score.rule(
        below(record.exercise_mins_per_week, exercise::SEDENTARY_MAX_MINS),
        heart::EXERCISE_SEDENTARY,
    );
    score.rule(
        within(
            record.exercise_mins_per_week,
            exercise::SEDENTARY_MAX_MINS,
            exercise::RECOMMENDED_MINS,
        ),
        heart::EXERCISE_LOW,
    );

    score.rule(at_least(record.stress_level, stress::HIGH_MIN), heart::STRESS_HIGH);
    score.rule(
        at_least(record.sugar_mgdl, glucose::DIABETIC_MIN_MGDL),
        heart::GLUCOSE_DIABETIC,
    );
    score.rule(record.family_history, heart::FAMILY_HISTORY);

    score.clamped()
}

fn liver_score(record: &HealthRecord) -> f64 {
    let mut score = Score::default();
    let bmi = bmi_of(record);

    score.rule(at_least(bmi, bmi_cutoffs::OBESE_MIN), liver::BMI_OBESE);
    score.rule(
        above(bmi, bmi_cutoffs::OVERWEIGHT_MIN) && bmi < bmi_cutoffs::OBESE_MIN,
        liver::BMI_OVERWEIGHT,
    );

    score.rule(
        at_least(record.cholesterol_mgdl, cholesterol::HIGH_MIN_MGDL),
        liver::CHOLESTEROL_HIGH,
    );
    score.rule(
        within(
            record.cholesterol_mgdl,
            cholesterol::DESIRABLE_MAX_MGDL,
            cholesterol::HIGH_MIN_MGDL,
        ),
        liver::CHOLESTEROL_BORDERLINE,
    );

    score.rule(
        at_least(record.sugar_mgdl, glucose::DIABETIC_MIN_MGDL),
        liver::GLUCOSE_DIABETIC,
    );
    score.rule(
        within(
            record.sugar_mgdl,
            glucose::NORMAL_MAX_MGDL,
            glucose::DIABETIC_MIN_MGDL,
        ),
        liver::GLUCOSE_PREDIABETIC,
    );

    score.rule(
        at_least(record.hba1c_pct, hba1c::DIABETIC_MIN_PCT),
        liver::HBA1C_DIABETIC,
    );
    score.rule(
        below(record.exercise_mins_per_week, exercise::SEDENTARY_MAX_MINS),
        liver::EXERCISE_SEDENTARY,
    );
    score.rule(above(record.age, 50.0), liver::AGE_OVER_50);

    score.clamped()
}

fn depression_score(record: &HealthRecord) -> f64 {
    let mut score = Score::default();

    score.rule(
        below(record.sleep_hours, sleep::SEVERE_DEFICIT_MAX_HOURS),
        depression::SLEEP_SEVERE_DEFICIT,
    );
    score.rule(
        within(
            record.sleep_hours,
            sleep::SEVERE_DEFICIT_MAX_HOURS,
            sleep::MILD_DEFICIT_MAX_HOURS,
        ),
        depression::SLEEP_MILD_DEFICIT,
    );
    score.rule(
        above(record.sleep_hours, sleep::RECOMMENDED_MAX_HOURS),
        depression::SLEEP_EXCESS,
    );

    score.rule(
        at_least(record.stress_level, stress::HIGH_MIN),
        depression::STRESS_HIGH,
    );
    score.rule(
        within(record.stress_level, stress::MODERATE_MIN, stress::HIGH_MIN),
        depression::STRESS_MODERATE,
    );

    score.rule(
        below(record.exercise_mins_per_week, exercise::SEDENTARY_MAX_MINS),
        depression::EXERCISE_SEDENTARY,
    );
    score.rule(
        within(
            record.exercise_mins_per_week,
            exercise::SEDENTARY_MAX_MINS,
            exercise::RECOMMENDED_MINS,
        ),
        depression::EXERCISE_LOW,
    );

    score.rule(record.family_history, depression::FAMILY_HISTORY);

    score.clamped()
}
