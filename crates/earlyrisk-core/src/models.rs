// ABOUTME: Domain data models for the Earlyrisk screening pipeline
// ABOUTME: HealthRecord, RiskAssessment, alerts, contributors, and trend types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Domain models shared by the intelligence pipeline and the HTTP layer
//!
//! `HealthRecord` and `RiskAssessment` are the persisted pair; alerts and
//! contributors are ephemeral derivations recomputed per request.

use crate::constants::risk_levels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Self-reported gender, used only for record tagging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other / undisclosed
    #[default]
    Other,
}

/// A snapshot of one user's inputs at one point in time
///
/// Immutable once persisted; a newer record supersedes it, it is never
/// mutated in place. All numeric fields are finite and within the bounds in
/// [`crate::constants::bounds`] after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Age in years (0-120)
    pub age: f64,
    /// Self-reported gender
    pub gender: Gender,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Systolic blood pressure (mmHg)
    pub bp_systolic: f64,
    /// Diastolic blood pressure (mmHg)
    pub bp_diastolic: f64,
    /// Fasting glucose (mg/dL)
    pub sugar_mgdl: f64,
    /// Glycated haemoglobin (percent)
    pub hba1c_pct: f64,
    /// Total cholesterol (mg/dL)
    pub cholesterol_mgdl: f64,
    /// Sleep per night (hours)
    pub sleep_hours: f64,
    /// Exercise per week (minutes)
    pub exercise_mins_per_week: f64,
    /// Self-reported stress (0-10)
    pub stress_level: f64,
    /// Family history of the screened conditions
    pub family_history: bool,
}

impl HealthRecord {
    /// Body mass index, undefined when height is non-positive
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm <= 0.0 {
            return None;
        }
        let h_m = self.height_cm / 100.0;
        let bmi = self.weight_kg / (h_m * h_m);
        bmi.is_finite().then_some(bmi)
    }
}

/// The four screened conditions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    /// Type 2 diabetes
    Diabetes,
    /// Cardiovascular disease
    Heart,
    /// Non-alcoholic fatty liver
    Liver,
    /// Depression
    Depression,
}

impl Disease {
    /// All screened conditions, in canonical display order
    pub const ALL: [Self; 4] = [Self::Diabetes, Self::Heart, Self::Liver, Self::Depression];

    /// Human-readable condition name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Heart => "Heart Disease",
            Self::Liver => "Fatty Liver",
            Self::Depression => "Depression",
        }
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Qualitative risk bucket derived from a percentage score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Below the medium threshold
    Low,
    /// Between the medium and high thresholds
    Medium,
    /// At or above the high threshold
    High,
}

impl RiskLevel {
    /// Bucket a 0-100 risk percentage
    #[must_use]
    pub fn from_pct(pct: f64) -> Self {
        if pct >= risk_levels::HIGH_THRESHOLD_PCT {
            Self::High
        } else if pct >= risk_levels::MEDIUM_THRESHOLD_PCT {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One advice entry attached to an assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceEntry {
    /// Condition the advice targets
    pub disease: Disease,
    /// Recommendation text
    pub advice: String,
}

/// Derived risk percentages plus advice for one `HealthRecord`
///
/// Computed synchronously, persisted immutable, superseded but never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Diabetes risk percentage (0-100)
    pub diabetes_risk: f64,
    /// Heart disease risk percentage (0-100)
    pub heart_risk: f64,
    /// Fatty liver risk percentage (0-100)
    pub liver_risk: f64,
    /// Depression risk percentage (0-100)
    pub depression_risk: f64,
    /// Ordered advice entries for medium/high risks
    pub advice: Vec<AdviceEntry>,
    /// Chart-friendly trend data, present when history was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_data: Option<TrendData>,
}

impl RiskAssessment {
    /// Risk percentage for one condition
    #[must_use]
    pub const fn risk_for(&self, disease: Disease) -> f64 {
        match disease {
            Disease::Diabetes => self.diabetes_risk,
            Disease::Heart => self.heart_risk,
            Disease::Liver => self.liver_risk,
            Disease::Depression => self.depression_risk,
        }
    }

    /// Iterate (condition, risk percentage) pairs in canonical order
    pub fn risks(&self) -> impl Iterator<Item = (Disease, f64)> + '_ {
        Disease::ALL.into_iter().map(|d| (d, self.risk_for(d)))
    }
}

/// Alert severity, ordered most to least urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Immediate attention recommended
    Critical,
    /// Worth monitoring
    Warning,
    /// Positive development
    Success,
}

impl AlertSeverity {
    /// Sort rank; lower sorts first
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Warning => 1,
            Self::Success => 2,
        }
    }
}

/// Ephemeral, derived alert; regenerated whenever its inputs change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique id for client-side list keys
    pub id: Uuid,
    /// Severity bucket
    pub severity: AlertSeverity,
    /// Short title
    pub title: String,
    /// Longer message
    pub message: String,
    /// Generation time
    pub timestamp: DateTime<Utc>,
}

/// Impact classification of one lifestyle factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactClass {
    /// Strongly raises risk
    High,
    /// Moderately raises risk
    Moderate,
    /// Slightly raises risk
    Low,
    /// Lowers risk
    Protective,
    /// No measurable effect
    Neutral,
}

/// One factor's estimated weighted effect on a risk score
///
/// Ephemeral; recomputed per render from the latest record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    /// Stable factor id (e.g. "sleep")
    pub id: String,
    /// Display label
    pub label: String,
    /// The factor's current value, formatted for display
    pub current_value: String,
    /// Impact classification
    pub impact: ImpactClass,
    /// Signed risk delta in points; negative is protective
    pub risk_delta: f64,
    /// Display bar width as a percentage of the widest bar
    pub bar_width_pct: f64,
}

/// Per-disease chronological risk history, as fractions in 0..1
///
/// Rebuilt from persisted history on each fetch, oldest first; never cached
/// long-term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Fractional risk points per condition, oldest first
    pub series: BTreeMap<Disease, Vec<f64>>,
}

impl TrendSeries {
    /// Append one fractional risk point for a condition
    pub fn push(&mut self, disease: Disease, fraction: f64) {
        self.series.entry(disease).or_default().push(fraction);
    }

    /// Historical points for a condition, oldest first
    #[must_use]
    pub fn points(&self, disease: Disease) -> &[f64] {
        self.series.get(&disease).map_or(&[], Vec::as_slice)
    }

    /// Delta between the most recent two points, in percentage points
    ///
    /// `None` when fewer than two points exist; trend alerts are entirely
    /// suppressed in that case.
    #[must_use]
    pub fn delta_pct(&self, disease: Disease) -> Option<f64> {
        let points = self.points(disease);
        match points {
            [.., previous, latest] => Some((latest - previous) * 100.0),
            _ => None,
        }
    }
}

/// Per-metric history arrays for charting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendMetrics {
    /// Fasting glucose over time
    pub sugar: Vec<f64>,
    /// Systolic blood pressure over time
    pub bp_systolic: Vec<f64>,
    /// Diastolic blood pressure over time
    pub bp_diastolic: Vec<f64>,
    /// HbA1c over time
    pub hba1c: Vec<f64>,
    /// Total cholesterol over time
    pub cholesterol: Vec<f64>,
    /// BMI over time (0.0 when undefined)
    pub bmi: Vec<f64>,
}

/// Chart-friendly trend payload built from stored history, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendData {
    /// RFC 3339 timestamps, one per history point
    pub timestamps: Vec<String>,
    /// Metric history arrays
    pub metrics: TrendMetrics,
    /// Fractional (0..1) risk evolution per condition
    pub risk_evolution: BTreeMap<Disease, Vec<f64>>,
}

/// The persisted record/assessment pair held by the history store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAssessment {
    /// Unique record id
    pub record_id: Uuid,
    /// Opaque user id supplied by the identity provider
    pub user_id: String,
    /// Persistence time
    pub timestamp: DateTime<Utc>,
    /// The normalized input snapshot
    pub record: HealthRecord,
    /// The derived assessment
    pub assessment: RiskAssessment,
}

/// Partial record produced by document text extraction
///
/// The normalizer treats this exactly like a partial form submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedMetrics {
    /// Fasting glucose (mg/dL), when detected
    pub sugar_mgdl: Option<f64>,
    /// HbA1c (percent), when detected
    pub hba1c_pct: Option<f64>,
    /// Total cholesterol (mg/dL), when detected
    pub cholesterol_mgdl: Option<f64>,
    /// Systolic blood pressure (mmHg), when detected
    pub bp_systolic: Option<f64>,
    /// Diastolic blood pressure (mmHg), when detected
    pub bp_diastolic: Option<f64>,
    /// Fraction of target metrics found (0..1)
    pub confidence: f64,
    /// Where the values came from ("text" or "csv")
    pub source_type: String,
    /// Non-fatal extraction warnings (dropped implausible values, ...)
    pub warnings: Vec<String>,
}
