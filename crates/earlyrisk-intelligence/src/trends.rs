// ABOUTME: Trend construction from persisted assessment history
// ABOUTME: Builds per-disease risk series and chart-friendly metric arrays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Trend builders
//!
//! Both builders take history slices sorted oldest first, which is the order
//! the history store returns. Risk evolution is expressed as fractions in
//! 0..1 so chart clients can scale freely; [`TrendSeries::delta_pct`]
//! converts back to percentage points for alerting.
//!
//! [`TrendSeries::delta_pct`]: earlyrisk_core::models::TrendSeries::delta_pct

use earlyrisk_core::models::{Disease, StoredAssessment, TrendData, TrendSeries};

/// Build the per-disease fractional risk series from stored history
#[must_use]
pub fn build_trend_series(history: &[StoredAssessment]) -> TrendSeries {
    let mut series = TrendSeries::default();
    for stored in history {
        for (disease, risk) in stored.assessment.risks() {
            series.push(disease, risk / 100.0);
        }
    }
    series
}

/// Build the chart payload (timestamps, metric arrays, risk evolution)
///
/// Returns `None` for empty history so the response can omit the field
/// instead of shipping empty arrays.
#[must_use]
pub fn build_trend_data(history: &[StoredAssessment]) -> Option<TrendData> {
    if history.is_empty() {
        return None;
    }

    let mut data = TrendData::default();
    for disease in Disease::ALL {
        data.risk_evolution.insert(disease, Vec::new());
    }

    for stored in history {
        data.timestamps.push(stored.timestamp.to_rfc3339());

        let record = &stored.record;
        data.metrics.sugar.push(record.sugar_mgdl);
        data.metrics.bp_systolic.push(record.bp_systolic);
        data.metrics.bp_diastolic.push(record.bp_diastolic);
        data.metrics.hba1c.push(record.hba1c_pct);
        data.metrics.cholesterol.push(record.cholesterol_mgdl);
        data.metrics.bmi.push(record.bmi().unwrap_or(0.0));

        for (disease, risk) in stored.assessment.risks() {
            if let Some(points) = data.risk_evolution.get_mut(&disease) {
                points.push(risk / 100.0);
            }
        }
    }

    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use earlyrisk_core::models::{Gender, HealthRecord, RiskAssessment};
    use uuid::Uuid;

    fn stored(diabetes: f64, sugar: f64) -> StoredAssessment {
        StoredAssessment {
            record_id: Uuid::new_v4(),
            user_id: "u1".to_owned(),
            timestamp: Utc::now(),
            record: HealthRecord {
                age: 30.0,
                gender: Gender::Other,
                height_cm: 170.0,
                weight_kg: 70.0,
                bp_systolic: 120.0,
                bp_diastolic: 80.0,
                sugar_mgdl: sugar,
                hba1c_pct: 5.2,
                cholesterol_mgdl: 180.0,
                sleep_hours: 7.0,
                exercise_mins_per_week: 120.0,
                stress_level: 5.0,
                family_history: false,
            },
            assessment: RiskAssessment {
                diabetes_risk: diabetes,
                heart_risk: 10.0,
                liver_risk: 5.0,
                depression_risk: 0.0,
                advice: Vec::new(),
                trend_data: None,
            },
        }
    }

    #[test]
    fn test_empty_history_yields_no_trend_data() {
        assert!(build_trend_data(&[]).is_none());
    }

    #[test]
    fn test_series_is_fractional_and_ordered() {
        let history = vec![stored(40.0, 95.0), stored(55.0, 110.0)];
        let series = build_trend_series(&history);
        assert_eq!(series.points(Disease::Diabetes), &[0.40, 0.55]);
        let delta = series.delta_pct(Disease::Diabetes).unwrap_or_default();
        assert!((delta - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_data_arrays_align() {
        let history = vec![stored(40.0, 95.0), stored(55.0, 110.0)];
        let data = build_trend_data(&history).unwrap_or_default();
        assert_eq!(data.timestamps.len(), 2);
        assert_eq!(data.metrics.sugar, vec![95.0, 110.0]);
        assert_eq!(data.metrics.bmi.len(), 2);
        for points in data.risk_evolution.values() {
            assert_eq!(points.len(), 2);
        }
    }
}
