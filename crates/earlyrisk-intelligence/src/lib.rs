// ABOUTME: Rule-based health risk intelligence engine for the Earlyrisk platform
// ABOUTME: Pure, deterministic pipeline: normalize, score, advise, alert, rank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![deny(unsafe_code)]

//! # Earlyrisk Intelligence
//!
//! The computational core of the screening service. Every component here is a
//! pure function of its inputs: no shared mutable state, no I/O, no retries.
//! Malformed numeric input degrades to a default or neutral value rather than
//! raising an error; this is a best-effort health estimate, not a
//! transactional system.
//!
//! Data flows one direction:
//! raw input → normalized record → risk scores → {advice, alerts, contributors}

/// Input validation and coercion into canonical `HealthRecord`s
pub mod normalizer;

/// Threshold-band risk scoring per condition
pub mod risk_scorer;

/// Risk-gated recommendation text generation
pub mod advisor;

/// Threshold and trend alert derivation
pub mod alerts;

/// Per-factor contribution ranking for explanatory display
pub mod contributors;

/// Trend series and chart payload construction from stored history
pub mod trends;

/// Best-effort lab value extraction from document text
pub mod extraction;

pub use advisor::generate_advice;
pub use alerts::derive_alerts;
pub use contributors::rank_contributors;
pub use extraction::{extract_from_csv, extract_from_text};
pub use normalizer::{normalize, EntryPath, MetricValue, RawHealthInput};
pub use risk_scorer::compute_risk_assessment;
pub use trends::{build_trend_data, build_trend_series};
