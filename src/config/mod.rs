// ABOUTME: Configuration module for the Earlyrisk server
// ABOUTME: Environment-driven settings with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Earlyrisk

//! Server configuration
//!
//! All configuration comes from environment variables with documented
//! defaults; there are no config files.

/// Environment variable loading for `ServerConfig`
pub mod environment;

pub use environment::ServerConfig;
