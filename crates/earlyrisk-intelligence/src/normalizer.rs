// ABOUTME: Input normalization: coerces raw form/document fields into HealthRecords
// ABOUTME: Lenient numeric coercion with documented defaults and per-path bounds policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Input normalization
//!
//! Accepts a partially-filled raw record (any subset of `HealthRecord`
//! fields, as strings or numbers) plus an optional prior record used to fill
//! gaps, and produces a fully-populated `HealthRecord`. Non-numeric or
//! missing values fall back to the prior record and then to documented
//! defaults rather than erroring; document extraction is inherently noisy,
//! so leniency is the policy here.
//!
//! The two entry paths differ only in how out-of-bounds values are handled:
//! form submissions are rejected, document-derived values are clamped.

use earlyrisk_core::constants::{bounds, defaults};
use earlyrisk_core::errors::{AppError, AppResult};
use earlyrisk_core::models::{Gender, HealthRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the raw input reached the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPath {
    /// Interactive form: out-of-bounds values are rejected
    Form,
    /// Document scan: out-of-bounds values are clamped into range
    Document,
}

/// A raw field value as it arrives over the wire: number, string, or flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// JSON number
    Number(f64),
    /// Flag, accepted for family history style fields
    Flag(bool),
    /// Free-form string, parsed leniently
    Text(String),
}

impl MetricValue {
    /// Coerce to a finite f64; `None` for anything unparseable
    #[must_use]
    pub fn as_finite_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Flag(b) => f64::from(u8::from(*b)),
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Coerce to a boolean flag ("1", "true", "yes", nonzero numbers)
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            Self::Number(n) => n.is_finite().then(|| *n != 0.0),
            Self::Text(s) => match s.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "y" => Some(true),
                "0" | "false" | "no" | "n" | "" => Some(false),
                other => other.parse::<f64>().ok().map(|n| n != 0.0),
            },
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// A partially-filled raw record, as strings or numbers
///
/// Every field is optional; document extraction output and form payloads
/// both deserialize into this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHealthInput {
    /// Age in years
    pub age: Option<MetricValue>,
    /// Gender string, parsed leniently
    pub gender: Option<String>,
    /// Height in centimetres
    pub height_cm: Option<MetricValue>,
    /// Weight in kilograms
    pub weight_kg: Option<MetricValue>,
    /// Systolic blood pressure
    pub bp_systolic: Option<MetricValue>,
    /// Diastolic blood pressure
    pub bp_diastolic: Option<MetricValue>,
    /// Fasting glucose
    pub sugar_mgdl: Option<MetricValue>,
    /// HbA1c
    pub hba1c_pct: Option<MetricValue>,
    /// Total cholesterol
    pub cholesterol_mgdl: Option<MetricValue>,
    /// Sleep per night
    pub sleep_hours: Option<MetricValue>,
    /// Exercise per week
    pub exercise_mins_per_week: Option<MetricValue>,
    /// Stress level
    pub stress_level: Option<MetricValue>,
    /// Family history flag
    pub family_history: Option<MetricValue>,
}

impl From<&HealthRecord> for RawHealthInput {
    fn from(record: &HealthRecord) -> Self {
        Self {
            age: Some(record.age.into()),
            gender: Some(gender_str(record.gender).to_owned()),
            height_cm: Some(record.height_cm.into()),
            weight_kg: Some(record.weight_kg.into()),
            bp_systolic: Some(record.bp_systolic.into()),
            bp_diastolic: Some(record.bp_diastolic.into()),
            sugar_mgdl: Some(record.sugar_mgdl.into()),
            hba1c_pct: Some(record.hba1c_pct.into()),
            cholesterol_mgdl: Some(record.cholesterol_mgdl.into()),
            sleep_hours: Some(record.sleep_hours.into()),
            exercise_mins_per_week: Some(record.exercise_mins_per_week.into()),
            stress_level: Some(record.stress_level.into()),
            family_history: Some(MetricValue::Flag(record.family_history)),
        }
    }
}

const fn gender_str(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
        Gender::Other => "other",
    }
}

fn parse_gender(raw: Option<&str>, prior: Option<&HealthRecord>) -> Gender {
    match raw.map(str::trim).map(str::to_lowercase).as_deref() {
        Some("male" | "m") => Gender::Male,
        Some("female" | "f") => Gender::Female,
        Some(_) => Gender::Other,
        None => prior.map_or(Gender::Other, |p| p.gender),
    }
}

/// Resolve one numeric field: provided value, then prior record, then default
///
/// A value that was explicitly provided and parses is still subject to the
/// bounds policy; unparseable values silently fall through, by design.
fn resolve_field(
    name: &'static str,
    raw: Option<&MetricValue>,
    prior: Option<f64>,
    default: f64,
    (min, max): (f64, f64),
    path: EntryPath,
) -> AppResult<f64> {
    let Some(value) = raw.and_then(MetricValue::as_finite_f64) else {
        if raw.is_some() {
            debug!(field = name, "unparseable input, falling back to default");
        }
        return Ok(prior.unwrap_or(default));
    };

    if value < min || value > max {
        return match path {
            EntryPath::Form => Err(AppError::value_out_of_range(name, value, min, max)),
            EntryPath::Document => {
                debug!(field = name, value, "clamping out-of-bounds document value");
                Ok(value.clamp(min, max))
            }
        };
    }

    Ok(value)
}

/// Normalize raw input into a fully-populated `HealthRecord`
///
/// Idempotent: normalizing an already-normalized record changes nothing.
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` only on the form path, and only when a
/// provided value parses but falls outside its physiological bounds.
pub fn normalize(
    raw: &RawHealthInput,
    prior: Option<&HealthRecord>,
    path: EntryPath,
) -> AppResult<HealthRecord> {
    let field = |name, raw_value: &Option<MetricValue>, prior_value, default, bounds| {
        resolve_field(name, raw_value.as_ref(), prior_value, default, bounds, path)
    };

    Ok(HealthRecord {
        age: field(
            "age",
            &raw.age,
            prior.map(|p| p.age),
            defaults::AGE,
            bounds::AGE,
        )?,
        gender: parse_gender(raw.gender.as_deref(), prior),
        height_cm: field(
            "height_cm",
            &raw.height_cm,
            prior.map(|p| p.height_cm),
            defaults::HEIGHT_CM,
            bounds::HEIGHT_CM,
        )?,
        weight_kg: field(
            "weight_kg",
            &raw.weight_kg,
            prior.map(|p| p.weight_kg),
            defaults::WEIGHT_KG,
            bounds::WEIGHT_KG,
        )?,
        bp_systolic: field(
            "bp_systolic",
            &raw.bp_systolic,
            prior.map(|p| p.bp_systolic),
            defaults::BP_SYSTOLIC,
            bounds::BP_SYSTOLIC,
        )?,
        bp_diastolic: field(
            "bp_diastolic",
            &raw.bp_diastolic,
            prior.map(|p| p.bp_diastolic),
            defaults::BP_DIASTOLIC,
            bounds::BP_DIASTOLIC,
        )?,
        sugar_mgdl: field(
            "sugar_mgdl",
            &raw.sugar_mgdl,
            prior.map(|p| p.sugar_mgdl),
            defaults::SUGAR_MGDL,
            bounds::SUGAR_MGDL,
        )?,
        hba1c_pct: field(
            "hba1c_pct",
            &raw.hba1c_pct,
            prior.map(|p| p.hba1c_pct),
            defaults::HBA1C_PCT,
            bounds::HBA1C_PCT,
        )?,
        cholesterol_mgdl: field(
            "cholesterol_mgdl",
            &raw.cholesterol_mgdl,
            prior.map(|p| p.cholesterol_mgdl),
            defaults::CHOLESTEROL_MGDL,
            bounds::CHOLESTEROL_MGDL,
        )?,
        sleep_hours: field(
            "sleep_hours",
            &raw.sleep_hours,
            prior.map(|p| p.sleep_hours),
            defaults::SLEEP_HOURS,
            bounds::SLEEP_HOURS,
        )?,
        exercise_mins_per_week: field(
            "exercise_mins_per_week",
            &raw.exercise_mins_per_week,
            prior.map(|p| p.exercise_mins_per_week),
            defaults::EXERCISE_MINS,
            bounds::EXERCISE_MINS,
        )?,
        stress_level: field(
            "stress_level",
            &raw.stress_level,
            prior.map(|p| p.stress_level),
            defaults::STRESS_LEVEL,
            bounds::STRESS_LEVEL,
        )?,
        family_history: raw
            .family_history
            .as_ref()
            .and_then(MetricValue::as_flag)
            .or_else(|| prior.map(|p| p.family_history))
            .unwrap_or(false),
    })
}
