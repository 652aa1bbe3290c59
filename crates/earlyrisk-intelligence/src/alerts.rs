// ABOUTME: Alert derivation from risk scores and trend history
// ABOUTME: Threshold alerts, trend delta alerts, stable severity ordering, cap at five
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Alert derivation
//!
//! Alerts are ephemeral: they are recomputed from the current assessment and
//! the trend series on every request and never persisted. Two families exist:
//! threshold alerts (a risk crossing the medium or high line) and trend
//! alerts (a risk moving by ten or more percentage points between the last
//! two assessments). Trend alerts are suppressed entirely when fewer than
//! two history points exist.

use chrono::Utc;
use earlyrisk_core::constants::risk_levels;
use earlyrisk_core::models::{Alert, AlertSeverity, RiskAssessment, RiskLevel, TrendSeries};
use uuid::Uuid;

fn alert(severity: AlertSeverity, title: String, message: String) -> Alert {
    Alert {
        id: Uuid::new_v4(),
        severity,
        title,
        message,
        timestamp: Utc::now(),
    }
}

/// Derive the alert list for one assessment
///
/// Output is sorted by severity (critical, warning, success) with a stable
/// sort, so within a severity the generation order is preserved:
/// threshold alerts in canonical condition order, then trend alerts. At
/// most [`risk_levels::MAX_ALERTS`] alerts are returned.
#[must_use]
pub fn derive_alerts(assessment: &RiskAssessment, trends: Option<&TrendSeries>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for (disease, risk) in assessment.risks() {
        match RiskLevel::from_pct(risk) {
            RiskLevel::High => alerts.push(alert(
                AlertSeverity::Critical,
                format!("High {} Risk", disease.display_name()),
                format!(
                    "Your {} risk is at {risk:.0}%. Consult a healthcare professional soon.",
                    disease.display_name().to_lowercase()
                ),
            )),
            RiskLevel::Medium => alerts.push(alert(
                AlertSeverity::Warning,
                format!("Elevated {} Risk", disease.display_name()),
                format!(
                    "Your {} risk is at {risk:.0}%. Review the recommendations below.",
                    disease.display_name().to_lowercase()
                ),
            )),
            RiskLevel::Low => {}
        }
    }

    if let Some(trends) = trends {
        for (disease, _) in assessment.risks() {
            let Some(delta) = trends.delta_pct(disease) else {
                continue;
            };
            if delta >= risk_levels::TREND_DELTA_PCT {
                alerts.push(alert(
                    AlertSeverity::Warning,
                    format!("{} Risk Increasing", disease.display_name()),
                    format!(
                        "Your {} risk rose by {delta:.0} points since your last assessment.",
                        disease.display_name().to_lowercase()
                    ),
                ));
            } else if delta <= -risk_levels::TREND_DELTA_PCT {
                alerts.push(alert(
                    AlertSeverity::Success,
                    format!("{} Risk Improving", disease.display_name()),
                    format!(
                        "Your {} risk dropped by {:.0} points since your last assessment. Keep it up.",
                        disease.display_name().to_lowercase(),
                        delta.abs()
                    ),
                ));
            }
        }
    }

    alerts.sort_by_key(|a| a.severity.rank());
    alerts.truncate(risk_levels::MAX_ALERTS);
    alerts
}
