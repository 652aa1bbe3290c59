// ABOUTME: HTTP route organization for the Earlyrisk API
// ABOUTME: Groups handlers by domain: health checks, analysis, document scans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! HTTP routes
//!
//! Each domain exposes a `XRoutes::routes(resources)` constructor returning
//! an Axum router; the server merges them and applies the shared layers.

/// Health check endpoints for monitoring
pub mod health;

/// Analysis, history, and insight endpoints
pub mod analysis;

/// Document scan endpoints
pub mod scan;

pub use analysis::AnalysisRoutes;
pub use health::HealthRoutes;
pub use scan::ScanRoutes;
