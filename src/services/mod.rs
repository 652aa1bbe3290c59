// ABOUTME: Orchestration services for the Earlyrisk server
// ABOUTME: Analysis pipeline and document-scan pipeline behind the routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Orchestration services
//!
//! Routes stay thin; these services run the pipeline end to end:
//! normalize, score, advise, persist, and rebuild trends.

/// Health analysis pipeline
pub mod analysis;

/// Document scan pipeline
pub mod scan;

pub use analysis::AnalysisService;
pub use scan::ScanService;
