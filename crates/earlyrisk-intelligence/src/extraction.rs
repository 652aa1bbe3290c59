// ABOUTME: Lab-report value extraction: regex detection of health metrics in text/CSV
// ABOUTME: Handles mmol/L unit normalization and plausibility filtering with warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Document value extraction
//!
//! Pulls fasting glucose, HbA1c, total cholesterol, and blood pressure out
//! of free-form lab report text or a simple CSV export. Detection is
//! case-insensitive and tolerant of common label variants (FBS, A1c, TC).
//! Values that look like mmol/L are converted to mg/dL; values outside the
//! plausibility bounds are dropped with a warning rather than rejected, and
//! confidence is the fraction of target metrics that survived.

use earlyrisk_core::constants::{bounds, extraction};
use earlyrisk_core::models::ExtractedMetrics;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static GLUCOSE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?mi)(?:fasting\s*)?(?:blood\s*)?(?:sugar|glucose)[\s:]+(\d+(?:\.\d+)?)\s*(?:mg/?dl)?",
        r"(?mi)(?:fbs|fbg|rbs|ppbs)[\s:]+(\d+(?:\.\d+)?)",
        r"(?mi)glucose[\s,:\-]+(\d{2,3}(?:\.\d+)?)\s*(?:mg|mg/dl)?",
    ])
});

static HBA1C_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?mi)(?:hba1c|hb\s*a1c|glycated\s*h(?:ae)?moglobin|a1c)[\s:]+(\d+(?:\.\d+)?)\s*%?",
        r"(?mi)(?:hba1c|a1c)[\s:\-]+(\d+(?:\.\d+)?)",
        r"(?mi)glycosylated\s*h(?:ae)?moglobin[\s:]+(\d+(?:\.\d+)?)",
    ])
});

static CHOLESTEROL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?mi)(?:total\s*)?cholesterol[\s:]+(\d+(?:\.\d+)?)\s*(?:mg/?dl)?",
        r"(?mi)(?:tc|t\.?\s*chol)[\s:]+(\d+(?:\.\d+)?)",
        r"(?mi)serum\s*cholesterol[\s:]+(\d+(?:\.\d+)?)",
    ])
});

static BP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?mi)(?:bp|blood\s*pressure)[\s:]+(\d{2,3})\s*/\s*(\d{2,3})",
        r"(?mi)(\d{2,3})\s*/\s*(\d{2,3})\s*(?:mm\s*hg|mmhg)",
        r"(?mi)systolic[\s:]+(\d{2,3}).*?diastolic[\s:]+(\d{2,3})",
    ])
});

static BP_SYSTOLIC_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&[r"(?mi)systolic[\s:]+(\d{2,3})", r"(?mi)sys[\s:]+(\d{2,3})"]));

static BP_DIASTOLIC_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&[r"(?mi)diastolic[\s:]+(\d{2,3})", r"(?mi)dia[\s:]+(\d{2,3})"]));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| Regex::new(p).ok()).collect()
}

/// First numeric capture across a pattern list
fn first_match(text: &str, patterns: &[Regex]) -> Option<f64> {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            if let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) {
                return Some(value);
            }
        }
    }
    None
}

/// Combined systolic/diastolic extraction; falls back to separate labels
fn extract_bp(text: &str) -> (Option<f64>, Option<f64>) {
    for pattern in BP_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let systolic = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok());
            let diastolic = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok());
            if let (Some(sys), Some(dia)) = (systolic, diastolic) {
                let (sys_min, sys_max) = bounds::BP_SYSTOLIC;
                let (dia_min, dia_max) = bounds::BP_DIASTOLIC;
                if (sys_min..=sys_max).contains(&sys) && (dia_min..=dia_max).contains(&dia) {
                    return (Some(sys), Some(dia));
                }
            }
        }
    }
    (
        first_match(text, &BP_SYSTOLIC_PATTERNS),
        first_match(text, &BP_DIASTOLIC_PATTERNS),
    )
}

/// Convert a suspiciously small glucose reading from mmol/L and bounds-check
fn normalize_glucose(raw: f64, warnings: &mut Vec<String>) -> Option<f64> {
    let mut value = raw;
    if value < extraction::GLUCOSE_MMOL_SUSPECT_MAX {
        value *= extraction::GLUCOSE_MMOL_TO_MGDL;
        warnings.push(format!("Glucose {raw} interpreted as mmol/L, converted to {value} mg/dL"));
    }
    let (min, max) = bounds::SUGAR_MGDL;
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        warnings.push(format!("Dropped implausible glucose value {value} mg/dL"));
        None
    }
}

fn normalize_cholesterol(raw: f64, warnings: &mut Vec<String>) -> Option<f64> {
    let mut value = raw;
    if value < extraction::CHOLESTEROL_MMOL_SUSPECT_MAX {
        value *= extraction::CHOLESTEROL_MMOL_TO_MGDL;
        warnings.push(format!(
            "Cholesterol {raw} interpreted as mmol/L, converted to {value:.1} mg/dL"
        ));
    }
    let (min, max) = bounds::CHOLESTEROL_MGDL;
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        warnings.push(format!("Dropped implausible cholesterol value {value:.1} mg/dL"));
        None
    }
}

fn bounded(value: Option<f64>, limits: (f64, f64), label: &str, warnings: &mut Vec<String>) -> Option<f64> {
    let value = value?;
    let (min, max) = limits;
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        warnings.push(format!("Dropped implausible {label} value {value}"));
        None
    }
}

/// Extract health metrics from free-form lab report text
#[must_use]
pub fn extract_from_text(text: &str) -> ExtractedMetrics {
    let mut metrics = ExtractedMetrics {
        source_type: "text".to_owned(),
        ..ExtractedMetrics::default()
    };

    if text.trim().len() < 10 {
        metrics.warnings.push("Text content too short or empty".to_owned());
        return metrics;
    }

    let mut warnings = Vec::new();

    metrics.sugar_mgdl = first_match(text, &GLUCOSE_PATTERNS)
        .and_then(|raw| normalize_glucose(raw, &mut warnings));
    metrics.hba1c_pct = bounded(
        first_match(text, &HBA1C_PATTERNS),
        bounds::HBA1C_PCT,
        "HbA1c",
        &mut warnings,
    );
    metrics.cholesterol_mgdl = first_match(text, &CHOLESTEROL_PATTERNS)
        .and_then(|raw| normalize_cholesterol(raw, &mut warnings));

    let (systolic, diastolic) = extract_bp(text);
    metrics.bp_systolic = bounded(systolic, bounds::BP_SYSTOLIC, "systolic BP", &mut warnings);
    metrics.bp_diastolic = bounded(diastolic, bounds::BP_DIASTOLIC, "diastolic BP", &mut warnings);

    metrics.warnings = warnings;
    metrics.confidence = confidence(&metrics);
    debug!(
        confidence = metrics.confidence,
        warnings = metrics.warnings.len(),
        "extracted metrics from text"
    );
    metrics
}

/// Extract health metrics from a simple CSV export
///
/// The first row is treated as headers; the last data row supplies values,
/// so a longitudinal export yields the most recent reading. Header matching
/// is case-insensitive over common column-name variants.
#[must_use]
pub fn extract_from_csv(content: &str) -> ExtractedMetrics {
    let mut metrics = ExtractedMetrics {
        source_type: "csv".to_owned(),
        ..ExtractedMetrics::default()
    };

    let mut lines = content.lines().filter(|l| !l.trim().is_empty());
    let Some(header_line) = lines.next() else {
        metrics.warnings.push("CSV is empty".to_owned());
        return metrics;
    };
    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_lowercase().replace([' ', '-', '/'], "_"))
        .collect();

    let Some(last_row) = lines.last() else {
        metrics.warnings.push("CSV has no data rows".to_owned());
        return metrics;
    };
    let cells: Vec<&str> = last_row.split(',').map(str::trim).collect();

    let column = |names: &[&str]| -> Option<f64> {
        headers
            .iter()
            .position(|h| names.contains(&h.as_str()))
            .and_then(|idx| cells.get(idx))
            .and_then(|cell| cell.parse::<f64>().ok())
    };

    let mut warnings = Vec::new();

    let sugar = column(&["sugar", "blood_sugar", "glucose", "fbs", "sugar_mgdl", "blood_glucose"]);
    metrics.sugar_mgdl = sugar.and_then(|raw| normalize_glucose(raw, &mut warnings));

    metrics.hba1c_pct = bounded(
        column(&["hba1c", "a1c", "hba1c_pct", "glycated_hemoglobin"]),
        bounds::HBA1C_PCT,
        "HbA1c",
        &mut warnings,
    );

    let cholesterol = column(&["cholesterol", "total_cholesterol", "chol", "tc", "cholesterol_mgdl"]);
    metrics.cholesterol_mgdl = cholesterol.and_then(|raw| normalize_cholesterol(raw, &mut warnings));

    metrics.bp_systolic = bounded(
        column(&["systolic", "bp_systolic", "sys", "sbp"]),
        bounds::BP_SYSTOLIC,
        "systolic BP",
        &mut warnings,
    );
    metrics.bp_diastolic = bounded(
        column(&["diastolic", "bp_diastolic", "dia", "dbp"]),
        bounds::BP_DIASTOLIC,
        "diastolic BP",
        &mut warnings,
    );

    metrics.warnings = warnings;
    metrics.confidence = confidence(&metrics);
    metrics
}

/// Confidence is the fraction of target metrics found (BP counts once)
fn confidence(metrics: &ExtractedMetrics) -> f64 {
    let found = [
        metrics.sugar_mgdl,
        metrics.hba1c_pct,
        metrics.cholesterol_mgdl,
        metrics.bp_systolic,
    ]
    .iter()
    .filter(|v| v.is_some())
    .count();
    (found as f64 / extraction::TARGET_METRIC_COUNT as f64).min(1.0)
}
