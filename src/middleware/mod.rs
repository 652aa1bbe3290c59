// ABOUTME: HTTP middleware for the Earlyrisk server
// ABOUTME: CORS configuration shared across all routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! HTTP middleware

/// CORS layer configuration
pub mod cors;

pub use cors::setup_cors;
