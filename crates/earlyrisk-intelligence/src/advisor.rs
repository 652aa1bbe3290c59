// ABOUTME: Advice generation: disease-keyed recommendation rules gated on risk level
// ABOUTME: Emits ordered, deduplicated advice entries for medium/high risks only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Risk-gated advice generation
//!
//! Only conditions whose risk reaches the medium threshold produce advice;
//! each rule additionally checks which metric actually triggered the risk,
//! so a diabetic-range glucose and an elevated cholesterol yield different
//! text. When nothing crosses the threshold the list is empty and callers
//! render a "no action needed" placeholder; that is required behavior, not
//! an omission.

use earlyrisk_core::constants::{
    blood_pressure, bmi as bmi_cutoffs, cholesterol, exercise, glucose, hba1c, sleep, stress,
};
use earlyrisk_core::models::{AdviceEntry, Disease, HealthRecord, RiskAssessment, RiskLevel};

/// One advice rule: fires when its disease is at/above medium risk and the
/// trigger matches the record
struct AdviceRule {
    disease: Disease,
    trigger: fn(&HealthRecord) -> bool,
    advice: &'static str,
}

fn bmi_at_least(record: &HealthRecord, min: f64) -> bool {
    record.bmi().is_some_and(|b| b >= min)
}

/// The advice rule table, evaluated top to bottom so output order is stable
const ADVICE_RULES: &[AdviceRule] = &[
    // Diabetes
    AdviceRule {
        disease: Disease::Diabetes,
        trigger: |r| r.sugar_mgdl >= glucose::DIABETIC_MIN_MGDL,
        advice: "Your fasting glucose is in the diabetic range. Schedule a confirmatory lab test and consult a physician promptly.",
    },
    AdviceRule {
        disease: Disease::Diabetes,
        trigger: |r| {
            r.sugar_mgdl >= glucose::NORMAL_MAX_MGDL && r.sugar_mgdl < glucose::DIABETIC_MIN_MGDL
        },
        advice: "Your fasting glucose is in the prediabetic range. Cut refined sugar, favour whole grains, and re-test within three months.",
    },
    AdviceRule {
        disease: Disease::Diabetes,
        trigger: |r| r.hba1c_pct >= hba1c::NORMAL_MAX_PCT,
        advice: "Your HbA1c is above the normal range, indicating sustained elevated blood sugar. Discuss a glucose management plan with your doctor.",
    },
    AdviceRule {
        disease: Disease::Diabetes,
        trigger: |r| bmi_at_least(r, bmi_cutoffs::OVERWEIGHT_MIN),
        advice: "Weight reduction of even 5-7% measurably lowers diabetes risk. Aim for gradual loss through diet and regular activity.",
    },
    AdviceRule {
        disease: Disease::Diabetes,
        trigger: |r| r.family_history,
        advice: "With a family history of diabetes, annual fasting glucose and HbA1c screening is recommended even while values are normal.",
    },
    // Heart disease
    AdviceRule {
        disease: Disease::Heart,
        trigger: |r| {
            r.bp_systolic >= blood_pressure::STAGE2_SYSTOLIC_MIN
                || r.bp_diastolic >= blood_pressure::STAGE2_DIASTOLIC_MIN
        },
        advice: "Your blood pressure is in the hypertensive range. Reduce sodium, monitor at home, and seek medical review soon.",
    },
    AdviceRule {
        disease: Disease::Heart,
        trigger: |r| {
            r.bp_systolic >= blood_pressure::ELEVATED_SYSTOLIC_MIN
                && r.bp_systolic < blood_pressure::STAGE2_SYSTOLIC_MIN
        },
        advice: "Your blood pressure is elevated. Regular aerobic exercise and a low-sodium diet can bring it back into range.",
    },
    AdviceRule {
        disease: Disease::Heart,
        trigger: |r| r.cholesterol_mgdl >= cholesterol::DESIRABLE_MAX_MGDL,
        advice: "Total cholesterol is above the desirable range. Favour unsaturated fats, add soluble fibre, and consider a lipid panel.",
    },
    AdviceRule {
        disease: Disease::Heart,
        trigger: |r| r.exercise_mins_per_week < exercise::RECOMMENDED_MINS,
        advice: "You are below the recommended 150 minutes of weekly activity. Brisk walking 30 minutes a day covers the gap.",
    },
    AdviceRule {
        disease: Disease::Heart,
        trigger: |r| r.stress_level >= stress::HIGH_MIN,
        advice: "Sustained high stress strains the cardiovascular system. Build in daily wind-down time and consider relaxation techniques.",
    },
    // Fatty liver
    AdviceRule {
        disease: Disease::Liver,
        trigger: |r| bmi_at_least(r, bmi_cutoffs::OBESE_MIN),
        advice: "Obesity is the leading driver of fatty liver. A 7-10% weight reduction can reverse early liver fat accumulation.",
    },
    AdviceRule {
        disease: Disease::Liver,
        trigger: |r| bmi_at_least(r, bmi_cutoffs::OVERWEIGHT_MIN),
        advice: "Carrying extra weight raises fatty liver risk. Limit fructose-heavy drinks and processed food; favour a Mediterranean-style diet.",
    },
    AdviceRule {
        disease: Disease::Liver,
        trigger: |r| r.sugar_mgdl >= glucose::NORMAL_MAX_MGDL,
        advice: "Elevated glucose accelerates liver fat storage. Keeping blood sugar in range protects the liver as well.",
    },
    AdviceRule {
        disease: Disease::Liver,
        trigger: |r| r.exercise_mins_per_week < exercise::SEDENTARY_MAX_MINS,
        advice: "Regular exercise reduces liver fat independent of weight loss. Start with three moderate sessions a week.",
    },
    // Depression
    AdviceRule {
        disease: Disease::Depression,
        trigger: |r| r.sleep_hours < sleep::MILD_DEFICIT_MAX_HOURS,
        advice: "Short sleep strongly affects mood. Target a consistent 7-9 hour window and avoid screens before bed.",
    },
    AdviceRule {
        disease: Disease::Depression,
        trigger: |r| r.stress_level >= stress::MODERATE_MIN,
        advice: "Your reported stress is elevated. Consider talking to someone you trust, and build short daily decompression breaks.",
    },
    AdviceRule {
        disease: Disease::Depression,
        trigger: |r| r.exercise_mins_per_week < exercise::RECOMMENDED_MINS,
        advice: "Physical activity is a proven mood protector. Even light daily movement measurably lowers depression risk.",
    },
];

/// Generate ordered advice entries for an assessment
///
/// Entries appear only for conditions at or above the medium risk threshold,
/// in rule-table order, with duplicate (disease, advice) pairs removed while
/// preserving first occurrence. An empty list means no action needed.
#[must_use]
pub fn generate_advice(assessment: &RiskAssessment, record: &HealthRecord) -> Vec<AdviceEntry> {
    let mut out: Vec<AdviceEntry> = Vec::new();

    for rule in ADVICE_RULES {
        let level = RiskLevel::from_pct(assessment.risk_for(rule.disease));
        if level == RiskLevel::Low {
            continue;
        }
        if !(rule.trigger)(record) {
            continue;
        }

        let entry = AdviceEntry {
            disease: rule.disease,
            advice: rule.advice.to_owned(),
        };
        if !out.contains(&entry) {
            out.push(entry);
        }
    }

    out
}
