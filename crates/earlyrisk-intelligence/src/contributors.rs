// ABOUTME: Contributor ranking: signed lifestyle-factor risk deltas for display
// ABOUTME: Bands five factors, classifies impact, sizes bars, sorts by magnitude
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Contributor ranking
//!
//! Ranks the five modifiable lifestyle factors (sleep, cholesterol, stress,
//! exercise, BMI) by the magnitude of their estimated signed effect on risk.
//! Deltas come from the banding tables in
//! [`earlyrisk_core::constants::contributor_bands`]; negative deltas are
//! protective. Bar widths are a pure display affordance and carry no
//! clinical meaning.

use earlyrisk_core::constants::{
    bmi as bmi_cutoffs, cholesterol, contributor_bands as bands, sleep, stress,
};
use earlyrisk_core::models::{Contributor, HealthRecord, ImpactClass};

/// Threshold at which a positive delta counts as high impact
const HIGH_IMPACT_MIN: f64 = 10.0;

/// Threshold at which a positive delta counts as moderate impact
const MODERATE_IMPACT_MIN: f64 = 5.0;

/// Cholesterol below this is banded as optimal (protective)
const CHOLESTEROL_OPTIMAL_MAX_MGDL: f64 = 180.0;

/// Exercise below this is banded as minimal
const EXERCISE_MINIMAL_MAX_MINS: f64 = 30.0;

/// Exercise at or above this (below recommended) is banded near-target
const EXERCISE_NEAR_TARGET_MIN_MINS: f64 = 90.0;

/// Exercise at or above this is banded recommended (protective)
const EXERCISE_RECOMMENDED_MINS: f64 = 150.0;

const fn classify(delta: f64) -> ImpactClass {
    if delta >= HIGH_IMPACT_MIN {
        ImpactClass::High
    } else if delta >= MODERATE_IMPACT_MIN {
        ImpactClass::Moderate
    } else if delta > 0.0 {
        ImpactClass::Low
    } else if delta < 0.0 {
        ImpactClass::Protective
    } else {
        ImpactClass::Neutral
    }
}

fn bar_width(delta: f64) -> f64 {
    let pct = delta.abs() / bands::BAR_WIDTH_FULL_SCALE * 100.0;
    pct.clamp(bands::BAR_WIDTH_MIN_PCT, 100.0)
}

fn sleep_delta(hours: f64) -> f64 {
    if hours < sleep::SEVERE_DEFICIT_MAX_HOURS {
        bands::SLEEP_SEVERE_DEFICIT
    } else if hours < sleep::MILD_DEFICIT_MAX_HOURS {
        bands::SLEEP_MILD_DEFICIT
    } else if (sleep::RECOMMENDED_MIN_HOURS..=sleep::RECOMMENDED_MAX_HOURS).contains(&hours) {
        bands::SLEEP_RECOMMENDED
    } else {
        0.0
    }
}

fn cholesterol_delta(mgdl: f64) -> f64 {
    if mgdl >= cholesterol::HIGH_MIN_MGDL {
        bands::CHOLESTEROL_HIGH
    } else if mgdl >= cholesterol::DESIRABLE_MAX_MGDL {
        bands::CHOLESTEROL_BORDERLINE
    } else if mgdl < CHOLESTEROL_OPTIMAL_MAX_MGDL && mgdl > 0.0 {
        bands::CHOLESTEROL_OPTIMAL
    } else {
        0.0
    }
}

fn stress_delta(level: f64) -> f64 {
    if level >= stress::HIGH_MIN {
        bands::STRESS_HIGH
    } else if level >= stress::MODERATE_MIN {
        bands::STRESS_MODERATE
    } else if level <= stress::LOW_MAX && level >= 0.0 {
        bands::STRESS_LOW
    } else {
        0.0
    }
}

fn exercise_delta(mins: f64) -> f64 {
    if mins >= EXERCISE_RECOMMENDED_MINS {
        bands::EXERCISE_RECOMMENDED
    } else if mins >= EXERCISE_NEAR_TARGET_MIN_MINS {
        bands::EXERCISE_NEAR_TARGET
    } else if mins >= EXERCISE_MINIMAL_MAX_MINS {
        bands::EXERCISE_LOW
    } else {
        bands::EXERCISE_MINIMAL
    }
}

fn bmi_delta(bmi: Option<f64>) -> f64 {
    let Some(bmi) = bmi else { return 0.0 };
    if bmi >= bmi_cutoffs::OBESE_MIN {
        bands::BMI_OBESE
    } else if bmi >= bmi_cutoffs::OVERWEIGHT_MIN {
        bands::BMI_OVERWEIGHT
    } else if bmi < bmi_cutoffs::UNDERWEIGHT_MAX {
        bands::BMI_UNDERWEIGHT
    } else {
        bands::BMI_NORMAL
    }
}

fn contributor(id: &str, label: &str, current_value: String, delta: f64) -> Contributor {
    Contributor {
        id: id.to_owned(),
        label: label.to_owned(),
        current_value,
        impact: classify(delta),
        risk_delta: delta,
        bar_width_pct: bar_width(delta),
    }
}

/// Rank the lifestyle contributors for one record
///
/// Returns exactly five entries sorted by absolute delta, largest first.
/// The sort is stable, so ties keep the canonical factor order (sleep,
/// cholesterol, stress, exercise, BMI).
#[must_use]
pub fn rank_contributors(record: &HealthRecord) -> Vec<Contributor> {
    let bmi = record.bmi();
    let mut out = vec![
        contributor(
            "sleep",
            "Sleep",
            format!("{:.1} h/night", record.sleep_hours),
            sleep_delta(record.sleep_hours),
        ),
        contributor(
            "cholesterol",
            "Cholesterol",
            format!("{:.0} mg/dL", record.cholesterol_mgdl),
            cholesterol_delta(record.cholesterol_mgdl),
        ),
        contributor(
            "stress",
            "Stress",
            format!("{:.0}/10", record.stress_level),
            stress_delta(record.stress_level),
        ),
        contributor(
            "exercise",
            "Exercise",
            format!("{:.0} min/week", record.exercise_mins_per_week),
            exercise_delta(record.exercise_mins_per_week),
        ),
        contributor(
            "bmi",
            "BMI",
            bmi.map_or_else(|| "n/a".to_owned(), |b| format!("{b:.1}")),
            bmi_delta(bmi),
        ),
    ];

    out.sort_by(|a, b| {
        b.risk_delta
            .abs()
            .partial_cmp(&a.risk_delta.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}
