// ABOUTME: Earlyrisk HTTP server library: routes, services, history store, config
// ABOUTME: Hosts the screening pipeline from earlyrisk-intelligence behind an Axum API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Earlyrisk Server
//!
//! HTTP layer for the Earlyrisk health screening platform. The computation
//! itself lives in the workspace crates:
//!
//! - `earlyrisk-core`: domain models, error types, clinical constants
//! - `earlyrisk-intelligence`: normalization, scoring, advice, alerts,
//!   contributors, trends, document extraction
//!
//! This crate wires those pure functions to the outside world: environment
//! configuration, structured logging, an injected history store with a guest
//! quota, document fetching, and the Axum routes that expose the pipeline.

/// Environment-driven server configuration
pub mod config;

/// Assessment history storage and guest quota tracking
pub mod history;

/// Structured logging configuration
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Shared server resources injected into every route
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Analysis and document-scan orchestration services
pub mod services;
