// ABOUTME: Core types and constants for the Earlyrisk health screening platform
// ABOUTME: Foundation crate with domain models, error handling, and clinical constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![deny(unsafe_code)]

//! # Earlyrisk Core
//!
//! Foundation crate providing shared types and constants for the Earlyrisk
//! health screening platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Domain types (`HealthRecord`, `RiskAssessment`, `Alert`, ...)
//! - **constants**: Clinical cutoffs, rule weights, and input bounds

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Domain data models shared across the screening pipeline
pub mod models;

/// Clinical constants, rule weights, and physiological input bounds
pub mod constants;
